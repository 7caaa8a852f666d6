use crate::feed::types::{Category, CategoryCatalog, FeedItem};
use futures::stream::{self, BoxStream, StreamExt};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Default spacing between two emitted items.
pub const DEFAULT_EMIT_INTERVAL: Duration = Duration::from_millis(2000);

/// A lazy, never-ending sequence of feed items.
pub type ItemStream = BoxStream<'static, FeedItem>;

/// Builds a fresh picker for every subscription.
pub type PickerFactory = Arc<dyn Fn() -> Box<dyn CategoryPicker> + Send + Sync>;

// ============================================================================
// Category Pickers
// ============================================================================

/// Chooses the category of each generated item.
///
/// `categories` comes from a [`CategoryCatalog`] and is never empty.
pub trait CategoryPicker: Send {
    fn pick(&mut self, categories: &[Category]) -> Category;
}

/// Uniform random choice over the category set.
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic picker; the same seed always yields the same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl CategoryPicker for RandomPicker {
    fn pick(&mut self, categories: &[Category]) -> Category {
        let idx = self.rng.gen_range(0..categories.len());
        categories[idx].clone()
    }
}

/// Round-robin over the category set, starting at the first category.
#[derive(Debug, Default)]
pub struct CyclingPicker {
    next: usize,
}

impl CategoryPicker for CyclingPicker {
    fn pick(&mut self, categories: &[Category]) -> Category {
        let category = categories[self.next % categories.len()].clone();
        self.next = self.next.wrapping_add(1);
        category
    }
}

// ============================================================================
// Item Generator
// ============================================================================

/// Source of timed feed items.
///
/// Cold: every [`subscribe`](Self::subscribe) call starts its own counter at
/// id 1 with its own timer and its own picker. Nothing runs while no one is
/// polling, and dropping the stream cancels the pending delay.
#[derive(Clone)]
pub struct ItemGenerator {
    catalog: CategoryCatalog,
    interval: Duration,
    picker: PickerFactory,
}

impl fmt::Debug for ItemGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemGenerator")
            .field("catalog", &self.catalog)
            .field("interval", &self.interval)
            .finish_non_exhaustive()
    }
}

impl ItemGenerator {
    /// Generator with an entropy-seeded random picker.
    pub fn new(catalog: CategoryCatalog, interval: Duration) -> Self {
        Self {
            catalog,
            interval,
            picker: Arc::new(|| Box::new(RandomPicker::from_entropy())),
        }
    }

    /// Replace the picker with a seeded random one.
    ///
    /// Each subscription gets its own picker from the same seed, so every
    /// subscription replays the same category sequence.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.picker = Arc::new(move || Box::new(RandomPicker::seeded(seed)));
        self
    }

    /// Replace the picker factory.
    pub fn with_picker<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Box<dyn CategoryPicker> + Send + Sync + 'static,
    {
        self.picker = Arc::new(factory);
        self
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start a new, independent item sequence.
    ///
    /// The first item is ready immediately; each following item waits one
    /// interval after the previous one was handed out.
    pub fn subscribe(&self) -> ItemStream {
        let emitter = Emitter {
            next_id: 1,
            picker: (self.picker)(),
            catalog: self.catalog.clone(),
            interval: self.interval,
        };

        tracing::debug!(
            interval_ms = self.interval.as_millis() as u64,
            "Starting item generator subscription"
        );

        stream::unfold(emitter, |mut emitter| async move {
            if emitter.next_id > 1 {
                tokio::time::sleep(emitter.interval).await;
            }
            let item = emitter.emit();
            Some((item, emitter))
        })
        .boxed()
    }
}

/// Per-subscription generator state.
struct Emitter {
    next_id: u64,
    picker: Box<dyn CategoryPicker>,
    catalog: CategoryCatalog,
    interval: Duration,
}

impl Emitter {
    fn emit(&mut self) -> FeedItem {
        let category = self.picker.pick(self.catalog.categories());
        let item = FeedItem::new(self.next_id, category);
        self.next_id += 1;
        tracing::trace!(id = item.id, category = %item.category, "Emitted feed item");
        item
    }
}

impl Drop for Emitter {
    fn drop(&mut self) {
        tracing::debug!(
            emitted = self.next_id - 1,
            "Item generator subscription dropped"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tokio::time::Instant;

    fn generator() -> ItemGenerator {
        ItemGenerator::new(CategoryCatalog::default(), DEFAULT_EMIT_INTERVAL)
    }

    async fn take_items(stream: &mut ItemStream, n: usize) -> Vec<FeedItem> {
        let mut items = Vec::with_capacity(n);
        for _ in 0..n {
            items.push(stream.next().await.unwrap());
        }
        items
    }

    #[tokio::test(start_paused = true)]
    async fn test_ids_start_at_one_and_are_contiguous() {
        let mut stream = generator().subscribe();
        let ids: Vec<u64> = take_items(&mut stream, 5)
            .await
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_titles_follow_ids() {
        let mut stream = generator().subscribe();
        let items = take_items(&mut stream, 3).await;
        for item in items {
            assert_eq!(item.title, format!("Item #{}", item.id));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_categories_stay_in_catalog() {
        let catalog = CategoryCatalog::default();
        let mut stream = generator().with_seed(42).subscribe();
        for item in take_items(&mut stream, 50).await {
            assert!(catalog.contains(item.category.as_str()));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_item_is_immediate() {
        let start = Instant::now();
        let mut stream = generator().subscribe();
        let first = stream.next().await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_items_are_spaced_by_interval() {
        let mut stream = generator().subscribe();
        stream.next().await.unwrap();

        let start = Instant::now();
        let early = tokio::time::timeout(Duration::from_millis(1999), stream.next()).await;
        assert!(early.is_err(), "second item arrived before the interval");

        let second = stream.next().await.unwrap();
        assert_eq!(second.id, 2);
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(2000));
        assert!(elapsed < Duration::from_millis(2010));
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscriptions_are_independent() {
        let generator = generator();
        let mut first = generator.subscribe();
        take_items(&mut first, 3).await;

        let mut second = generator.subscribe();
        let item = second.next().await.unwrap();
        assert_eq!(item.id, 1);

        let next_first = first.next().await.unwrap();
        assert_eq!(next_first.id, 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_seeded_generator_replays_categories() {
        let generator = generator().with_seed(7);
        let a = take_items(&mut generator.subscribe(), 10).await;
        let b = take_items(&mut generator.subscribe(), 10).await;
        assert_eq!(a, b);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cycling_picker_is_round_robin() {
        let generator = generator().with_picker(|| Box::new(CyclingPicker::default()));
        let categories: Vec<String> = take_items(&mut generator.subscribe(), 4)
            .await
            .into_iter()
            .map(|i| i.category.to_string())
            .collect();
        assert_eq!(categories, vec!["Tech", "Health", "Sport", "Tech"]);
    }

    #[test]
    fn test_random_picker_single_category() {
        let categories = [Category::new("Only")];
        let mut picker = RandomPicker::seeded(1);
        for _ in 0..10 {
            assert_eq!(picker.pick(&categories), "Only");
        }
    }
}
