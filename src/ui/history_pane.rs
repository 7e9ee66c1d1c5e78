use crate::app::AppState;
use crate::domain::{countdown_label, minutes_label, relative_time, Cycle};
use crate::ui::styles::{border_style, default_style, hint_style, status_style, title_style};
use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// " · stopped HH:MM" / " · done HH:MM" for terminal cycles
fn ended_label(cycle: &Cycle) -> String {
    match (cycle.interrupted_at(), cycle.finished_at()) {
        (Some(at), _) => format!(" · stopped {}", at.format("%H:%M")),
        (None, Some(at)) => format!(" · done {}", at.format("%H:%M")),
        (None, None) => String::new(),
    }
}

/// Create a line for one cycle in the history list
///
/// `remaining` is set only for the running cycle.
fn create_history_line(cycle: &Cycle, now: DateTime<Local>, remaining: Option<u32>) -> Line<'_> {
    let status = cycle.status();
    let label = match remaining {
        Some(seconds) => format!("{} · {} left", status.label(), countdown_label(seconds)),
        None => status.label().to_string(),
    };

    Line::from(vec![
        Span::styled(format!("{} ", status.marker()), status_style(status)),
        Span::styled(cycle.task(), default_style()),
        Span::raw("  "),
        Span::styled(
            format!(
                "{} · started {}{}",
                minutes_label(cycle.planned_minutes()),
                relative_time(cycle.started_at(), now),
                ended_label(cycle)
            ),
            hint_style(),
        ),
        Span::raw("  "),
        Span::styled(label, status_style(status)),
    ])
}

/// Render the history of this session's cycles, newest first
pub fn render_history_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let now = Local::now();
    let active_id = app.tracker.active_cycle_id();

    let items: Vec<ListItem> = app
        .tracker
        .history()
        .skip(app.history_scroll_offset)
        .map(|cycle| {
            let remaining =
                (active_id == Some(cycle.id())).then(|| app.tracker.remaining_seconds());
            ListItem::new(create_history_line(cycle, now, remaining))
        })
        .collect();

    let count = app.tracker.cycles().len();

    let title = if count == 0 {
        " History (0) - no cycles yet ".to_string()
    } else if app.history_scroll_offset > 0 {
        format!(" History ({}) [scrolled +{}] ", count, app.history_scroll_offset)
    } else {
        format!(" History ({}) ", count)
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}
