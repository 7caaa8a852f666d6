//! Terminal User Interface module.
//!
//! A single screen that consumes a `NewsSession`:
//! - Main event loop (`run`)
//! - Keyboard input handling
//! - Rendering of the header, read counter card, filter chips and headlines
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop, subscriptions and terminal management
//! - `input` - Keyboard input handling
//! - `render` - Layout and the header / read counter card
//! - `filters` - Category filter chips
//! - `headlines` - Latest headline and recent history
//! - `status` - Status bar widget

mod filters;
mod headlines;
mod input;
mod loop_runner;
mod render;
mod status;

// Re-export the public API
pub use loop_runner::{run, Action};
