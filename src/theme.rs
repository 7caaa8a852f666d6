//! Theme system for the TUI.
//!
//! Provides semantic color roles that map to ratatui `Style` values.
//! The `ThemeVariant` enum selects between Dark and Light palettes,
//! and `StyleMap` resolves role names to concrete styles.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Build the `ColorPalette` for this variant.
    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    /// Cycle to the next variant: Dark → Light → Dark.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

// ============================================================================
// Color Palette: semantic roles to Style
// ============================================================================

/// A complete color palette mapping every semantic UI role to a `Style`.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Header --
    pub header_title: Style,
    pub header_subtitle: Style,

    // -- Read counter card --
    pub card_border: Style,
    pub card_label: Style,
    pub card_count: Style,
    pub card_pending: Style,

    // -- Filter chips --
    pub chip_normal: Style,
    pub chip_selected: Style,

    // -- Headlines --
    pub headline_latest: Style,
    pub headline_placeholder: Style,
    pub headline_history: Style,

    // -- Chrome --
    pub panel_border: Style,
    pub status_bar: Style,
}

impl ColorPalette {
    fn dark() -> Self {
        Self {
            header_title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            header_subtitle: Style::default().fg(Color::DarkGray),

            card_border: Style::default().fg(Color::Cyan),
            card_label: Style::default(),
            card_count: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            card_pending: Style::default().fg(Color::DarkGray),

            chip_normal: Style::default().fg(Color::Gray),
            chip_selected: Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),

            headline_latest: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            headline_placeholder: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            headline_history: Style::default().fg(Color::Gray),

            panel_border: Style::default(),
            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
        }
    }

    /// Light palette, adapted for light terminal backgrounds.
    fn light() -> Self {
        Self {
            header_title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            header_subtitle: Style::default().fg(Color::DarkGray),

            card_border: Style::default().fg(Color::Blue),
            card_label: Style::default().fg(Color::Black),
            card_count: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            card_pending: Style::default().fg(Color::DarkGray),

            chip_normal: Style::default().fg(Color::DarkGray),
            chip_selected: Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            headline_latest: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            headline_placeholder: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            headline_history: Style::default().fg(Color::DarkGray),

            panel_border: Style::default().fg(Color::DarkGray),
            status_bar: Style::default().bg(Color::White).fg(Color::Black),
        }
    }
}

// ============================================================================
// Style Map: string-keyed lookup
// ============================================================================

/// String-keyed style lookup, built from a `ColorPalette`.
#[derive(Debug, Clone)]
pub struct StyleMap {
    map: HashMap<&'static str, Style>,
}

const ROLE_NAMES: [&str; 13] = [
    "header_title",
    "header_subtitle",
    "card_border",
    "card_label",
    "card_count",
    "card_pending",
    "chip_normal",
    "chip_selected",
    "headline_latest",
    "headline_placeholder",
    "headline_history",
    "panel_border",
    "status_bar",
];

impl StyleMap {
    pub fn from_palette(p: &ColorPalette) -> Self {
        let styles: [Style; 13] = [
            p.header_title,
            p.header_subtitle,
            p.card_border,
            p.card_label,
            p.card_count,
            p.card_pending,
            p.chip_normal,
            p.chip_selected,
            p.headline_latest,
            p.headline_placeholder,
            p.headline_history,
            p.panel_border,
            p.status_bar,
        ];

        let map = ROLE_NAMES.iter().copied().zip(styles).collect();
        Self { map }
    }

    /// Resolve a role name to its `Style`. Unknown roles get `Style::default()`.
    pub fn resolve(&self, role: &str) -> Style {
        self.map.get(role).copied().unwrap_or_default()
    }
}
