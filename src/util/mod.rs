//! Utility functions for terminal text.
//!
//! - **Width**: Unicode-aware display width and truncation for headlines
//! - **Sanitizing**: strip control characters from config-supplied labels
//!
//! # Examples
//!
//! ```
//! use feedsim::util::{display_width, truncate_to_width};
//!
//! let width = display_width("[Sport] Item #3");
//! assert_eq!(width, 15);
//!
//! let truncated = truncate_to_width("[Sport] Item #3 - Just published!", 20);
//! assert_eq!(truncated, "[Sport] Item #3 -...");
//! ```

mod text;

pub use text::{display_width, strip_control_chars, truncate_to_width};
