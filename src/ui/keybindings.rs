use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Hint text for the given screen
pub fn keybinding_hints(mode: UiMode, running: bool) -> Line<'static> {
    match mode {
        UiMode::History => Line::from(vec![
            Span::raw(" ↑/↓ scroll   "),
            Span::raw("x interrupt   "),
            Span::raw("Esc/F2 timer   "),
            Span::raw("q quit"),
        ]),
        _ if running => Line::from(vec![
            Span::raw(" Enter interrupt   "),
            Span::raw("F2 history   "),
            Span::raw("Esc quit"),
        ]),
        _ => Line::from(vec![
            Span::raw(" Tab switch field   "),
            Span::raw("↑/↓ suggestions · ±5 min   "),
            Span::raw("Enter start   "),
            Span::raw("F2 history   "),
            Span::raw("Esc quit"),
        ]),
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, mode: UiMode, running: bool, area: Rect) {
    let paragraph = Paragraph::new(keybinding_hints(mode, running)).style(hint_style());
    f.render_widget(paragraph, area);
}
