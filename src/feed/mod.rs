//! The simulated news feed: item generation, category filtering, formatting.
//!
//! Data flows one way:
//!
//! ```text
//! ItemGenerator::subscribe → filter_items(selector) → format_headline → consumer
//! ```
//!
//! - [`types`] - `FeedItem`, `Category`, `Selector`, `CategoryCatalog`, `FeedError`
//! - [`generator`] - Cold, timer-driven item streams with pluggable category pickers
//! - [`pipeline`] - Filter and format stages, plus the `FeedSubscription` handle
//!
//! # Example
//!
//! ```no_run
//! use feedsim::feed::{filtered_feed, CategoryCatalog, ItemGenerator, DEFAULT_EMIT_INTERVAL};
//! use futures::StreamExt;
//! use std::sync::Arc;
//!
//! # async fn demo() {
//! let catalog = CategoryCatalog::default();
//! let generator = ItemGenerator::new(catalog.clone(), DEFAULT_EMIT_INTERVAL).with_seed(1);
//! let selector = catalog.parse_selector("Sport").unwrap();
//!
//! let mut headlines = filtered_feed(generator.subscribe(), selector, Arc::from("Just published!"));
//! while let Some(line) = headlines.next().await {
//!     println!("{}", line);
//! }
//! # }
//! ```

mod generator;
mod pipeline;
mod types;

pub use generator::{
    CategoryPicker, CyclingPicker, ItemGenerator, ItemStream, PickerFactory, RandomPicker,
    DEFAULT_EMIT_INTERVAL,
};
pub use pipeline::{
    filter_items, filtered_feed, format_headline, FeedSubscription, FRESHNESS_SUFFIX,
};
pub use types::{
    Category, CategoryCatalog, FeedError, FeedItem, Selector, DEFAULT_CATEGORIES,
    DEFAULT_WILDCARD,
};
