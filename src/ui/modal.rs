use crate::app::AppState;
use crate::domain::{minutes_label, UiMode};
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the cycle-finished modal
pub fn render_finished_modal(f: &mut Frame, app: &AppState, area: Rect) {
    if app.ui_mode != UiMode::Finished {
        return;
    }
    let Some(cycle) = app.last_finished.and_then(|id| app.tracker.get(id)) else {
        return;
    };

    let modal_area = create_modal_area(area);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let lines = vec![
        Line::raw(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(cycle.task(), modal_title_style()),
        ]),
        Line::raw(format!(
            "  {} completed. Time for a break.",
            minutes_label(cycle.planned_minutes())
        )),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [any key]", modal_title_style()),
            Span::raw(" Continue"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" \u{23F0} Cycle Finished ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
