//! Render functions for the TUI.
//!
//! One screen, top to bottom: header, read counter card, filter chips,
//! latest headline, recent headlines, status bar.

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{filters, headlines, status};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 40;
pub(super) const MIN_HEIGHT: u16 = 14;

const TITLE: &str = "News Feed Simulator";
const SUBTITLE: &str = "reactive streams demo";

pub(super) fn render(f: &mut Frame, app: &App) {
    let area = f.area();

    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header
            Constraint::Length(4), // read counter card
            Constraint::Length(1), // filter chips
            Constraint::Length(3), // latest headline
            Constraint::Min(0),    // history
            Constraint::Length(1), // status bar
        ])
        .split(area);

    render_header(f, app, chunks[0]);
    render_card(f, app, chunks[1]);
    filters::render(f, app, chunks[2]);
    headlines::render_latest(f, app, chunks[3]);
    headlines::render_history(f, app, chunks[4]);
    status::render(f, app, chunks[5]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(TITLE, app.style("header_title"))),
        Line::from(Span::styled(SUBTITLE, app.style("header_subtitle"))),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Read counter card: online status, confirmed reads, and reads still in flight.
fn render_card(f: &mut Frame, app: &App, area: Rect) {
    let mut count_line = vec![
        Span::styled("Read: ", app.style("card_label")),
        Span::styled(app.read_count.to_string(), app.style("card_count")),
    ];
    let pending = app.pending_reads();
    if pending > 0 {
        count_line.push(Span::styled(
            format!("  ({} pending)", pending),
            app.style("card_pending"),
        ));
    }

    let lines = vec![
        Line::from(Span::styled("Status: Online", app.style("card_label"))),
        Line::from(count_line),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.style("card_border"))
        .title(" Status ");

    f.render_widget(Paragraph::new(lines).block(block), area);
}
