use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Countdown digits
pub fn countdown_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Countdown separator (the colon between minutes and seconds)
pub fn separator_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Focused form field
pub fn focused_field_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// Unfocused or locked form field
pub fn field_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Start button
pub fn start_button_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// Start button when no task has been typed
pub fn disabled_button_style() -> Style {
    Style::default().fg(Color::DarkGray).bg(Color::Black)
}

/// Interrupt button
pub fn stop_button_style() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Error message style
pub fn error_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Status badge style for history rows
pub fn status_style(status: crate::domain::CycleStatus) -> Style {
    use crate::domain::CycleStatus;
    match status {
        CycleStatus::Active => Style::default().fg(Color::Yellow),
        CycleStatus::Interrupted => Style::default().fg(Color::Red),
        CycleStatus::Finished => Style::default().fg(Color::Green),
    }
}
