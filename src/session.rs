//! The consumer-facing session.
//!
//! A [`NewsSession`] bundles one category catalog, one item generator, one
//! read counter and the headline suffix. It is an ordinary owned value: the
//! consumer that builds it decides how long it lives, and the read count dies
//! with it.

use crate::config::Config;
use crate::counter::{ReadCountStream, ReadCounter};
use crate::feed::{
    CategoryCatalog, CategoryPicker, FeedError, FeedSubscription, ItemGenerator, ItemStream,
    Selector,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

#[derive(Debug, Clone)]
pub struct NewsSession {
    catalog: CategoryCatalog,
    generator: ItemGenerator,
    counter: ReadCounter,
    suffix: Arc<str>,
}

impl NewsSession {
    /// Build a session from configuration.
    ///
    /// Must be called from within a tokio runtime; delayed read confirmations
    /// are spawned on that runtime.
    pub fn new(config: &Config) -> Result<Self, FeedError> {
        let runtime = Handle::try_current().map_err(|_| FeedError::NoRuntime)?;
        let catalog = CategoryCatalog::new(&config.categories, &config.wildcard)?;

        let mut generator = ItemGenerator::new(catalog.clone(), config.emit_interval());
        if let Some(seed) = config.seed {
            generator = generator.with_seed(seed);
        }

        tracing::debug!(
            categories = ?config.categories,
            wildcard = %config.wildcard,
            interval_ms = config.emit_interval_ms,
            read_delay_ms = config.read_delay_ms,
            seeded = config.seed.is_some(),
            "Created news session"
        );

        Ok(Self {
            catalog,
            generator,
            counter: ReadCounter::new(config.read_delay(), runtime),
            suffix: Arc::from(config.freshness_suffix.as_str()),
        })
    }

    /// Replace the category picker used by future subscriptions.
    pub fn with_picker<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Box<dyn CategoryPicker> + Send + Sync + 'static,
    {
        self.generator = self.generator.with_picker(factory);
        self
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    pub fn emit_interval(&self) -> Duration {
        self.generator.interval()
    }

    pub fn read_delay(&self) -> Duration {
        self.counter.delay()
    }

    /// Parse a selector against this session's catalog.
    pub fn selector(&self, selector: &str) -> Result<Selector, FeedError> {
        self.catalog.parse_selector(selector)
    }

    /// Subscribe to formatted headlines for `selector`.
    ///
    /// Each call gets its own generator subscription numbered from 1. An
    /// unknown selector fails here rather than producing an empty stream.
    pub fn subscribe_feed(&self, selector: &str) -> Result<FeedSubscription, FeedError> {
        let selector = self.selector(selector)?;
        Ok(FeedSubscription::new(
            self.generator.subscribe(),
            selector,
            Arc::clone(&self.suffix),
        ))
    }

    /// Subscribe to raw, unfiltered items.
    pub fn subscribe_items(&self) -> ItemStream {
        self.generator.subscribe()
    }

    /// Current read count now, then every change.
    pub fn observe_read_count(&self) -> ReadCountStream {
        self.counter.observe()
    }

    /// Fire-and-forget: the count goes up by one after the read delay.
    pub fn mark_read(&self) {
        self.counter.mark_read();
    }

    pub fn read_count(&self) -> u64 {
        self.counter.get()
    }

    pub fn pending_reads(&self) -> usize {
        self.counter.pending()
    }
}
