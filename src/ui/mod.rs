pub mod countdown_pane;
pub mod form_pane;
pub mod history_pane;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod styles;

use crate::app::AppState;
use crate::domain::UiMode;
use countdown_pane::render_countdown_pane;
use form_pane::{render_button, render_form_pane};
use history_pane::render_history_pane;
use keybindings::render_keybindings;
use layout::{create_history_layout, create_layout};
use modal::render_finished_modal;
use ratatui::Frame;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let running = app.tracker.has_active_cycle();

    if app.ui_mode == UiMode::History {
        let (bar, body) = create_history_layout(size);
        render_keybindings(f, app.ui_mode, running, bar);
        render_history_pane(f, app, body);
        return;
    }

    let layout = create_layout(size);

    render_keybindings(f, app.ui_mode, running, layout.keybindings_area);
    render_form_pane(f, app, layout.form_area);
    render_countdown_pane(f, app, layout.countdown_area);
    render_button(f, app, layout.button_area);

    // Finished modal sits on top of the timer screen
    render_finished_modal(f, app, size);
}
