use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Timer screen layout
pub struct TimerLayout {
    pub keybindings_area: Rect,
    pub form_area: Rect,
    pub countdown_area: Rect,
    pub button_area: Rect,
}

/// Create the timer screen layout
/// - Top bar: keybindings (1 row)
/// - Form (task + minutes + field errors)
/// - Countdown (big digits, vertically centered in the remaining space)
/// - Start / interrupt button
pub fn create_layout(area: Rect) -> TimerLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Min(0),    // Main content
        ])
        .split(area);

    let keybindings_area = main_chunks[0];

    // Keep the content in a centered column
    let column = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Percentage(70),
            Constraint::Percentage(15),
        ])
        .split(main_chunks[1])[1];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Form
            Constraint::Min(7),    // Countdown
            Constraint::Length(3), // Button
        ])
        .split(column);

    TimerLayout {
        keybindings_area,
        form_area: rows[0],
        countdown_area: rows[1],
        button_area: rows[2],
    }
}

/// Split an area into the keybindings bar and the rest (history screen)
pub fn create_history_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Create centered modal area
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(9),
            Constraint::Percentage(30),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
