//! Input handling for the TUI.

use crate::app::App;
use crossterm::event::{KeyCode, KeyModifiers};

use super::Action;

/// Map a key press to an app mutation and tell the loop what to do next.
///
/// - `←`/`h`, `→`/`l`: previous / next filter
/// - `1`-`9`: pick a filter directly
/// - `Enter`, `Space`, `r`: mark as read
/// - `t`: toggle theme
/// - `q`, `Esc`, `Ctrl+C`: quit
pub(super) fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Action {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Action::Quit,
            _ => Action::Continue,
        };
    }

    match code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Left | KeyCode::Char('h') => resubscribe_if(app.select_prev()),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => resubscribe_if(app.select_next()),
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            resubscribe_if(app.select(index))
        }
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') => {
            app.mark_read();
            Action::Continue
        }
        KeyCode::Char('t') => {
            app.cycle_theme();
            Action::Continue
        }
        _ => Action::Continue,
    }
}

fn resubscribe_if(changed: bool) -> Action {
    if changed {
        Action::Resubscribe
    } else {
        Action::Continue
    }
}
