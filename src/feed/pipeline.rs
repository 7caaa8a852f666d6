use crate::feed::generator::ItemStream;
use crate::feed::types::{FeedItem, Selector};
use futures::future;
use futures::stream::{BoxStream, Stream, StreamExt};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

/// Default suffix appended to every formatted headline.
pub const FRESHNESS_SUFFIX: &str = "Just published!";

/// Render one item for display: `[<selector>] <title> - <suffix>`.
pub fn format_headline(selector: &Selector, item: &FeedItem, suffix: &str) -> String {
    format!("[{}] {} - {}", selector.label(), item.title, suffix)
}

/// Drop every item the selector does not match. Order is preserved.
pub fn filter_items(items: ItemStream, selector: Selector) -> ItemStream {
    items
        .filter(move |item| future::ready(selector.matches(item)))
        .boxed()
}

/// Filter `items` by `selector` and format each survivor as a headline.
pub fn filtered_feed(
    items: ItemStream,
    selector: Selector,
    suffix: Arc<str>,
) -> BoxStream<'static, String> {
    let label = selector.clone();
    filter_items(items, selector)
        .map(move |item| format_headline(&label, &item, &suffix))
        .boxed()
}

/// A live headline subscription for one selector.
///
/// Owns its generator subscription; dropping this value stops emission.
/// To change selector, drop it and subscribe again.
pub struct FeedSubscription {
    selector: Selector,
    inner: BoxStream<'static, String>,
}

impl FeedSubscription {
    pub(crate) fn new(items: ItemStream, selector: Selector, suffix: Arc<str>) -> Self {
        tracing::debug!(selector = %selector, "Opened feed subscription");
        Self {
            inner: filtered_feed(items, selector.clone(), suffix),
            selector,
        }
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }
}

impl Stream for FeedSubscription {
    type Item = String;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<String>> {
        self.inner.as_mut().poll_next(cx)
    }
}

impl Drop for FeedSubscription {
    fn drop(&mut self) {
        tracing::debug!(selector = %self.selector, "Closed feed subscription");
    }
}

impl std::fmt::Debug for FeedSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedSubscription")
            .field("selector", &self.selector)
            .finish_non_exhaustive()
    }
}
