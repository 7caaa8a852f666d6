//! Terminal front-end state.
//!
//! `App` is a consumer of a [`NewsSession`]: it remembers which selector the
//! user picked, the headlines received so far, and the last observed read
//! count. Subscriptions themselves live in the event loop.

use crate::config::Config;
use crate::feed::{FeedError, FeedSubscription};
use crate::session::NewsSession;
use crate::theme::{StyleMap, ThemeVariant};
use crate::util::strip_control_chars;
use ratatui::style::Style;
use std::borrow::Cow;
use std::collections::VecDeque;
use tokio::time::Instant;

/// How long a status message stays visible.
const STATUS_TTL_SECS: u64 = 3;

pub struct App {
    pub session: NewsSession,

    // Theme
    pub theme_variant: ThemeVariant,
    pub theme: StyleMap,

    // Filter selection
    /// Selector labels in chip order: wildcard first, then categories.
    pub options: Vec<String>,
    pub selected: usize,

    // Data
    pub latest: Option<String>,
    /// Most recent first, capped at `history_size`.
    pub history: VecDeque<String>,
    pub history_size: usize,
    pub read_count: u64,

    // UI State
    pub status_message: Option<(Cow<'static, str>, Instant)>,
    pub needs_redraw: bool,
}

impl App {
    /// Build the UI state.
    ///
    /// Fails if `config.initial_category` is not a known selector.
    pub fn new(session: NewsSession, config: &Config) -> Result<Self, FeedError> {
        let initial = session.selector(&config.initial_category)?;
        let options = session.catalog().options();
        let selected = options
            .iter()
            .position(|o| o == initial.label())
            .unwrap_or(0);

        let theme_variant = ThemeVariant::from_str_name(&config.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %config.theme, "Unknown theme, falling back to dark");
            ThemeVariant::Dark
        });

        Ok(Self {
            theme: StyleMap::from_palette(&theme_variant.palette()),
            theme_variant,
            options,
            selected,
            latest: None,
            history: VecDeque::new(),
            history_size: config.history_size,
            read_count: session.read_count(),
            session,
            status_message: None,
            needs_redraw: true,
        })
    }

    pub fn style(&self, role: &str) -> Style {
        self.theme.resolve(role)
    }

    /// Switch to the next theme variant.
    pub fn cycle_theme(&mut self) {
        self.theme_variant = self.theme_variant.next();
        self.theme = StyleMap::from_palette(&self.theme_variant.palette());
        self.set_status(format!("Theme: {}", self.theme_variant.name()));
        self.needs_redraw = true;
    }

    /// Label of the active selector, sanitized for display.
    pub fn selected_label(&self) -> Cow<'_, str> {
        strip_control_chars(&self.options[self.selected])
    }

    /// Open a subscription for the active selector.
    pub fn subscribe_current(&self) -> Result<FeedSubscription, FeedError> {
        self.session.subscribe_feed(&self.options[self.selected])
    }

    /// Make `index` the active selector.
    ///
    /// Returns true if the selection changed, meaning the caller must drop
    /// its subscription and subscribe again. Out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.options.len() || index == self.selected {
            return false;
        }
        self.selected = index;
        self.latest = None;
        self.history.clear();
        self.needs_redraw = true;
        tracing::debug!(selector = %self.options[index], "Selector changed");
        true
    }

    pub fn select_next(&mut self) -> bool {
        let next = (self.selected + 1) % self.options.len();
        self.select(next)
    }

    pub fn select_prev(&mut self) -> bool {
        let len = self.options.len();
        let prev = (self.selected + len - 1) % len;
        self.select(prev)
    }

    /// Record a headline from the active subscription.
    pub fn push_headline(&mut self, line: String) {
        if let Some(previous) = self.latest.replace(line) {
            self.history.push_front(previous);
            self.history.truncate(self.history_size);
        }
        self.needs_redraw = true;
    }

    pub fn mark_read(&mut self) {
        self.session.mark_read();
        self.set_status("Marked as read");
    }

    pub fn set_read_count(&mut self, count: u64) {
        self.read_count = count;
        self.needs_redraw = true;
    }

    pub fn pending_reads(&self) -> usize {
        self.session.pending_reads()
    }

    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear status message if expired.
    /// Returns true if a message was actually cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= STATUS_TTL_SECS {
                self.status_message = None;
                return true;
            }
        }
        false
    }
}
