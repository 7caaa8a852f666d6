//! feedsim: a reactive news-feed simulator.
//!
//! A timer-driven generator produces numbered news items tagged with a
//! category. Consumers subscribe to a filtered, formatted view of that stream
//! and independently observe a "read" counter whose increments are confirmed
//! after a short delay.
//!
//! - [`feed`] - Item generation, category filtering and headline formatting
//! - [`counter`] - Delayed read counter with observable value
//! - [`session`] - [`NewsSession`](session::NewsSession), the consumer-facing bundle
//! - [`config`] - TOML configuration
//! - [`app`], [`ui`], [`theme`] - Terminal front-end

pub mod app;
pub mod config;
pub mod counter;
pub mod feed;
pub mod session;
pub mod theme;
pub mod ui;
pub mod util;
