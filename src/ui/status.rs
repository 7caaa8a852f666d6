use crate::app::App;
use ratatui::{layout::Rect, widgets::Paragraph, Frame};

const KEY_HINTS: &str = "[←/→]filter [1-9]pick [Enter]mark read [t]heme [q]uit";

/// Render the status bar
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let text: &str = match &app.status_message {
        Some((msg, _)) => msg.as_ref(),
        None => KEY_HINTS,
    };

    let paragraph = Paragraph::new(text).style(app.style("status_bar"));
    f.render_widget(paragraph, area);
}
