//! Main event loop for the TUI.
//!
//! This module contains the core event loop that multiplexes terminal input,
//! the headline subscription, the read-count observer, and periodic ticks.

use crate::app::App;
use crate::counter::ReadCountStream;
use crate::feed::FeedSubscription;
use anyhow::{Context, Result};
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;

#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};

use super::input::handle_input;
use super::render::render;

/// Result of handling a key press event.
///
/// Returned by input handlers to tell the event loop what to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Continue the event loop and process more events.
    Continue,
    /// The selector changed: drop the feed subscription and open a new one.
    Resubscribe,
    /// Exit the application and restore the terminal.
    Quit,
}

/// Runs the TUI application event loop.
///
/// Uses `tokio::select!` to multiplex:
/// - **Signals**: SIGTERM / SIGINT for graceful shutdown (Unix only)
/// - **Terminal input**: Key presses from crossterm's async event stream
/// - **Headlines**: the active `FeedSubscription`
/// - **Read count**: the session's read-count observer
/// - **Periodic tick**: 250ms timer for status expiry and the pending indicator
///
/// Changing the selector replaces the feed subscription; dropping the old one
/// cancels its generator.
///
/// # Panic Safety
///
/// Installs a panic hook that restores terminal state before unwinding,
/// ensuring the terminal is not left in raw mode on panic.
pub async fn run(app: &mut App) -> Result<()> {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let feed = app
        .subscribe_current()
        .context("Failed to subscribe to feed")?;
    let read_counts = app.session.observe_read_count();

    let mut terminal = setup_terminal()?;
    let result = event_loop(app, &mut terminal, feed, read_counts).await;
    finish(result, || restore_terminal(terminal))
}

/// Restore the terminal whether or not the loop failed.
///
/// A loop error takes precedence over a restore error.
fn finish<T>(result: Result<T>, restore: impl FnOnce() -> Result<()>) -> Result<T> {
    let restored = restore();
    let value = result?;
    restored?;
    Ok(value)
}

async fn event_loop(
    app: &mut App,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut feed: FeedSubscription,
    mut read_counts: ReadCountStream,
) -> Result<()> {
    let mut event_stream = crossterm::event::EventStream::new();
    let mut tick_interval = tokio::time::interval(Duration::from_millis(250));

    // Signal handlers for graceful shutdown (Unix only)
    // On non-Unix platforms, these become pending futures that never complete
    #[cfg(unix)]
    let mut sigterm = signal(SignalKind::terminate())?;
    #[cfg(unix)]
    let mut sigint = signal(SignalKind::interrupt())?;

    let mut last_pending = app.pending_reads();

    loop {
        // Only render when state has changed
        if app.needs_redraw {
            terminal.draw(|f| render(f, app))?;
            app.needs_redraw = false;
        }

        if app.clear_expired_status() {
            app.needs_redraw = true;
        }

        #[cfg(unix)]
        let sigterm_fut = sigterm.recv();
        #[cfg(not(unix))]
        let sigterm_fut = std::future::pending::<Option<()>>();

        #[cfg(unix)]
        let sigint_fut = sigint.recv();
        #[cfg(not(unix))]
        let sigint_fut = std::future::pending::<Option<()>>();

        let action = tokio::select! {
            biased;

            _ = sigterm_fut => {
                tracing::info!("Received SIGTERM, shutting down gracefully");
                Action::Quit
            }

            _ = sigint_fut => {
                tracing::info!("Received SIGINT, shutting down gracefully");
                Action::Quit
            }

            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) => {
                        app.needs_redraw = true;
                        handle_input(app, key.code, key.modifiers)
                    }
                    Some(Ok(Event::Resize(_, _))) => {
                        app.needs_redraw = true;
                        Action::Continue
                    }
                    Some(Ok(_)) => Action::Continue,
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "Terminal event stream error");
                        Action::Continue
                    }
                    None => Action::Quit,
                }
            }

            Some(line) = feed.next() => {
                app.push_headline(line);
                Action::Continue
            }

            Some(count) = read_counts.next() => {
                app.set_read_count(count);
                Action::Continue
            }

            _ = tick_interval.tick() => {
                let pending = app.pending_reads();
                if pending != last_pending {
                    last_pending = pending;
                    app.needs_redraw = true;
                }
                Action::Continue
            }
        };

        match action {
            Action::Continue => {}
            Action::Resubscribe => {
                feed = app
                    .subscribe_current()
                    .context("Failed to resubscribe to feed")?;
            }
            Action::Quit => break,
        }
    }

    Ok(())
}

/// Set up the terminal for TUI rendering.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state.
fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
