use crate::app::AppState;
use crate::domain::{big_glyph, format_countdown};
use crate::ui::styles::{countdown_style, separator_style};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Build the five rows of big digits for "MM:SS"
pub fn countdown_lines(remaining_seconds: u32) -> Vec<Line<'static>> {
    let (minutes, seconds) = format_countdown(remaining_seconds);

    (0..5)
        .map(|row| {
            let mut spans = Vec::new();
            for c in minutes.chars() {
                spans.push(Span::styled(big_glyph(c)[row], countdown_style()));
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(big_glyph(':')[row], separator_style()));
            for c in seconds.chars() {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(big_glyph(c)[row], countdown_style()));
            }
            Line::from(spans)
        })
        .collect()
}

/// Render the countdown, vertically centered in its area
pub fn render_countdown_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let digits = countdown_lines(app.tracker.remaining_seconds());
    let padding = (area.height as usize).saturating_sub(digits.len()) / 2;

    let mut lines = vec![Line::raw(""); padding];
    lines.extend(digits);

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
