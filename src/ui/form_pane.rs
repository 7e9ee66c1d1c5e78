use crate::app::AppState;
use crate::domain::{countdown_label, Field, MAX_MINUTES, MIN_MINUTES};
use crate::ui::styles::{
    border_style, disabled_button_style, error_style, field_style, focused_field_style,
    start_button_style, stop_button_style, title_style,
};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// One "label > value" line of the form
fn field_line<'a>(
    app: &'a AppState,
    field: Field,
    value: &'a str,
    placeholder: &'a str,
) -> Line<'a> {
    let focused = app.form.focused == field && !app.form_locked();
    let style = if focused {
        focused_field_style()
    } else {
        field_style()
    };

    let mut spans = vec![
        Span::styled(format!("{:<8}", field.label()), title_style()),
        Span::raw("> "),
    ];
    if value.is_empty() {
        spans.push(Span::styled(placeholder, field_style()));
    } else {
        spans.push(Span::styled(value, style));
    }
    if focused {
        spans.push(Span::styled("█", style)); // Cursor
    }
    if let Some(error) = app.form.errors.as_ref().and_then(|e| e.for_field(field)) {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(error.to_string(), error_style()));
    }
    Line::from(spans)
}

/// Block title: elapsed time while a cycle runs
fn form_title(app: &AppState) -> String {
    if app.form_locked() {
        format!(
            " Working on · {} elapsed ",
            countdown_label(app.tracker.elapsed_seconds())
        )
    } else {
        " New cycle ".to_string()
    }
}

/// Render the new-cycle form (task and minutes)
pub fn render_form_pane(f: &mut Frame, app: &AppState, area: Rect) {
    // While running, show what is being worked on instead of the empty form
    let (task, minutes) = match app.tracker.active_cycle() {
        Some(cycle) => (cycle.task().to_string(), cycle.planned_minutes().to_string()),
        None => (app.form.task.clone(), app.form.minutes.clone()),
    };
    let minutes_placeholder = format!("{}-{}", MIN_MINUTES, MAX_MINUTES);

    let lines = vec![
        field_line(app, Field::Task, &task, "Name your task"),
        Line::raw(""),
        field_line(app, Field::MinutesAmount, &minutes, &minutes_placeholder),
    ];

    let title = form_title(app);

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(paragraph, area);
}

/// Render the start / interrupt button
pub fn render_button(f: &mut Frame, app: &AppState, area: Rect) {
    let (label, style) = if app.tracker.has_active_cycle() {
        ("■ Interrupt  [Enter]", stop_button_style())
    } else if app.can_submit() {
        ("▶ Start  [Enter]", start_button_style())
    } else {
        ("▶ Start", disabled_button_style())
    };

    let paragraph = Paragraph::new(vec![Line::raw(""), Line::from(Span::styled(label, style))])
        .alignment(Alignment::Center)
        .style(style);

    f.render_widget(paragraph, area);
}
