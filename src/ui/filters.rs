use crate::app::App;
use crate::util::strip_control_chars;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the filter chips: the wildcard, then every category.
///
/// Each chip is prefixed with its digit shortcut when it has one.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::with_capacity(app.options.len() * 2);

    for (i, option) in app.options.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let label = strip_control_chars(option);
        let text = if i < 9 {
            format!(" {}:{} ", i + 1, label)
        } else {
            format!(" {} ", label)
        };
        let style = if i == app.selected {
            app.style("chip_selected")
        } else {
            app.style("chip_normal")
        };
        spans.push(Span::styled(text, style));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}
