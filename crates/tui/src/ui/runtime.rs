//! Runtime: terminal lifecycle and the event loop.
//!
//! - Own the terminal lifecycle (raw mode, alternate screen, bracketed paste).
//! - A dedicated input thread blocks on `crossterm::event::read()` and
//!   forwards events over a channel.
//! - Every event is handled to completion, field edit included, before the
//!   next one is taken off the channel; the screen is redrawn afterwards.
use std::io::Stdout;
use std::thread;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tokio::{signal, sync::mpsc};

use crate::app::{App, RunOptions};
use crate::ui;

/// Spawn a dedicated input thread that blocks on terminal input and forwards
/// `crossterm` events over a Tokio channel.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(256);
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event) => {
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to read event: {}", e);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste).context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableBracketedPaste)?;
    terminal.show_cursor()?;
    Ok(())
}

fn handle_input_event(app: &mut App, input_event: Event) {
    match input_event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => app.handle_key(key_event),
        Event::Paste(pasted) => app.handle_paste(&pasted),
        _ => {}
    }
}

/// Entry point for the TUI runtime: sets up the terminal, runs the event
/// loop, and performs cleanup on exit. Returns the submitted values.
pub async fn run_app(options: RunOptions) -> Result<Vec<String>> {
    let mut input_receiver = spawn_input_thread();
    let mut app = App::new(options);
    let mut terminal = setup_terminal()?;

    let result = event_loop(&mut terminal, &mut app, &mut input_receiver).await;
    cleanup_terminal(&mut terminal)?;
    result?;
    Ok(app.submitted)
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    input_receiver: &mut mpsc::Receiver<Event>,
) -> Result<()> {
    terminal.draw(|frame| ui::draw(frame, app))?;
    loop {
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    // Input channel closed; shut down cleanly.
                    break;
                };
                handle_input_event(app, event);
            }
            _ = signal::ctrl_c() => { break; }
        }
        if app.should_quit {
            break;
        }
        terminal.draw(|frame| ui::draw(frame, app))?;
    }
    Ok(())
}
