use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    match app.ui_mode {
        UiMode::Timer => handle_timer_mode(app, key),
        UiMode::History => handle_history_mode(app, key),
        UiMode::Finished => handle_finished_mode(app, key),
    }
}

/// Keys on the timer screen. Printable characters go to the form, so
/// commands live on Esc, Tab, Enter, arrows and F-keys.
fn handle_timer_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => Ok(true),

        // Start or interrupt
        KeyCode::Enter => {
            app.primary_action(Local::now(), Instant::now());
            Ok(false)
        }

        // Switch form field
        KeyCode::Tab | KeyCode::BackTab => {
            app.form_toggle_field();
            Ok(false)
        }

        // Step minutes / browse task suggestions
        KeyCode::Up => {
            app.form_arrow(true);
            Ok(false)
        }
        KeyCode::Down => {
            app.form_arrow(false);
            Ok(false)
        }

        KeyCode::F(2) => {
            app.toggle_history();
            Ok(false)
        }

        KeyCode::Backspace => {
            app.form_backspace();
            Ok(false)
        }

        KeyCode::Char(c) => {
            app.form_add_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Keys on the history screen
fn handle_history_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),
        KeyCode::Esc | KeyCode::F(2) | KeyCode::Char('h') => {
            app.toggle_history();
            Ok(false)
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_history_up();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_history_down();
            Ok(false)
        }
        // Interrupt is reachable from history too
        KeyCode::Char('x') => {
            app.interrupt(Local::now());
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Any key dismisses the finished modal
fn handle_finished_mode(app: &mut AppState, _key: KeyEvent) -> Result<bool> {
    app.dismiss_finished();
    Ok(false)
}
