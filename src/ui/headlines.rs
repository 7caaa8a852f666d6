use crate::app::App;
use crate::util::{strip_control_chars, truncate_to_width};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

const PLACEHOLDER: &str = "Waiting for news...";

/// Render the most recent headline of the active subscription.
pub fn render_latest(f: &mut Frame, app: &App, area: Rect) {
    // Borders take one column on each side
    let inner_width = area.width.saturating_sub(2) as usize;

    let line = match &app.latest {
        Some(headline) => {
            let clean = strip_control_chars(headline);
            Line::from(Span::styled(
                truncate_to_width(&clean, inner_width).into_owned(),
                app.style("headline_latest"),
            ))
        }
        None => Line::from(Span::styled(PLACEHOLDER, app.style("headline_placeholder"))),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.style("panel_border"))
        .title(format!(" Latest [{}] ", app.selected_label()));

    f.render_widget(Paragraph::new(line).block(block), area);
}

/// Render earlier headlines, newest first.
pub fn render_history(f: &mut Frame, app: &App, area: Rect) {
    if area.height < 3 {
        return;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let style = app.style("headline_history");

    let items: Vec<ListItem> = app
        .history
        .iter()
        .map(|headline| {
            let clean = strip_control_chars(headline);
            ListItem::new(Span::styled(
                truncate_to_width(&clean, inner_width).into_owned(),
                style,
            ))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.style("panel_border"))
            .title(" Recent "),
    );

    f.render_widget(list, area);
}
