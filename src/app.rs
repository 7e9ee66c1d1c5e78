use crate::domain::{
    can_submit, CycleId, CycleTracker, Field, NewCycleForm, TickOutcome, TrackerError, UiMode,
    ValidationErrors, MAX_MINUTES, MIN_MINUTES,
};
use crate::notifications;
use crate::ticker::{TickHandle, Ticker};
use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

/// Minutes added or removed by Up/Down in the minutes field
pub const MINUTES_STEP: i64 = 5;

/// Runtime options taken from the command line
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub tick_interval: Duration,
    pub notify: bool,
    /// Value the minutes field starts with (and returns to after submit)
    pub default_minutes: Option<u32>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            tick_interval: crate::ticker::tick_duration(),
            notify: true,
            default_minutes: None,
        }
    }
}

/// New-cycle form state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleFormState {
    pub task: String,
    pub minutes: String,
    pub focused: Field,
    /// Errors from the last rejected submit, cleared on edit
    pub errors: Option<ValidationErrors>,
    /// Position in the recent-task suggestions while browsing them
    pub suggestion_index: Option<usize>,
}

impl CycleFormState {
    pub fn new(default_minutes: Option<u32>) -> Self {
        Self {
            task: String::new(),
            minutes: default_minutes.map(|m| m.to_string()).unwrap_or_default(),
            focused: Field::Task,
            errors: None,
            suggestion_index: None,
        }
    }

    fn focused_text_mut(&mut self) -> &mut String {
        match self.focused {
            Field::Task => &mut self.task,
            Field::MinutesAmount => &mut self.minutes,
        }
    }
}

/// Main application state
pub struct AppState {
    pub tracker: CycleTracker,
    pub ticker: Ticker,
    pub tick_handle: Option<TickHandle>,
    pub form: CycleFormState,
    pub ui_mode: UiMode,
    /// Cycle announced by the finished modal
    pub last_finished: Option<CycleId>,
    pub history_scroll_offset: usize,
    pub options: AppOptions,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        Self {
            tracker: CycleTracker::new(),
            ticker: Ticker::new(options.tick_interval),
            tick_handle: None,
            form: CycleFormState::new(options.default_minutes),
            ui_mode: UiMode::Timer,
            last_finished: None,
            history_scroll_offset: 0,
            options,
        }
    }

    /// Whether the start control is enabled (pure function of the form)
    pub fn can_submit(&self) -> bool {
        !self.tracker.has_active_cycle() && can_submit(&self.form.task)
    }

    /// The form is read-only while a cycle counts down
    pub fn form_locked(&self) -> bool {
        self.tracker.has_active_cycle()
    }

    /// Toggle between task and minutes fields
    pub fn form_toggle_field(&mut self) {
        self.form.focused = self.form.focused.next();
    }

    /// Add a character to the focused field
    pub fn form_add_char(&mut self, c: char) {
        if self.form_locked() {
            return;
        }
        if self.form.focused == Field::MinutesAmount && !c.is_ascii_digit() {
            return;
        }
        self.form.focused_text_mut().push(c);
        self.form.errors = None;
        self.form.suggestion_index = None;
    }

    /// Backspace in the focused field
    pub fn form_backspace(&mut self) {
        if self.form_locked() {
            return;
        }
        self.form.focused_text_mut().pop();
        self.form.errors = None;
        self.form.suggestion_index = None;
    }

    /// Step the minutes field by `MINUTES_STEP`, staying within the allowed range
    pub fn form_step_minutes(&mut self, up: bool) {
        if self.form_locked() {
            return;
        }
        let next = match self.form.minutes.trim().parse::<i64>() {
            Ok(current) if up => current + MINUTES_STEP,
            Ok(current) => current - MINUTES_STEP,
            Err(_) => MIN_MINUTES,
        };
        self.form.minutes = next.clamp(MIN_MINUTES, MAX_MINUTES).to_string();
        self.form.errors = None;
    }

    /// Fill the task field with the next (or previous) recently used task
    pub fn form_cycle_suggestion(&mut self, older: bool) {
        if self.form_locked() {
            return;
        }
        let suggestions = self.tracker.recent_tasks();
        if suggestions.is_empty() {
            return;
        }
        let last = suggestions.len() - 1;
        let index = match (self.form.suggestion_index, older) {
            (None, _) => 0,
            (Some(i), true) => (i + 1).min(last),
            (Some(i), false) => i.saturating_sub(1),
        };
        self.form.task = suggestions[index].to_string();
        self.form.suggestion_index = Some(index);
        self.form.errors = None;
    }

    /// Up/Down: step minutes or browse task suggestions, depending on focus
    pub fn form_arrow(&mut self, up: bool) {
        match self.form.focused {
            Field::MinutesAmount => self.form_step_minutes(up),
            Field::Task => self.form_cycle_suggestion(up),
        }
    }

    /// Validate the form and start a cycle. Returns true if one was created.
    pub fn submit_form(&mut self, now: DateTime<Local>, instant: Instant) -> bool {
        if !self.can_submit() {
            return false;
        }

        let candidate = NewCycleForm::parse(&self.form.task, &self.form.minutes);
        match candidate.validate() {
            Ok(request) => {
                self.tracker.create(request, now);
                self.tick_handle = Some(self.ticker.arm(instant));
                self.form = CycleFormState::new(self.options.default_minutes);
                true
            }
            Err(errors) => {
                tracing::info!(%errors, "new cycle rejected");
                self.form.errors = Some(errors);
                false
            }
        }
    }

    /// Stop the active cycle before it completes
    pub fn interrupt(&mut self, now: DateTime<Local>) {
        match self.tracker.interrupt(now) {
            Ok(_) => self.disarm_ticker(),
            Err(TrackerError::NoActiveCycle) => {
                tracing::debug!("interrupt ignored, no active cycle");
            }
        }
    }

    /// Enter: start when idle, interrupt when running
    pub fn primary_action(&mut self, now: DateTime<Local>, instant: Instant) {
        if self.tracker.has_active_cycle() {
            self.interrupt(now);
        } else {
            self.submit_form(now, instant);
        }
    }

    /// Called every loop iteration; ticks the tracker when the ticker is due
    pub fn poll_ticker(&mut self, instant: Instant) {
        if self.ticker.fire_if_due(instant) {
            self.tick(Local::now());
        }
    }

    /// Recompute elapsed time for the active cycle
    pub fn tick(&mut self, now: DateTime<Local>) {
        match self.tracker.tick(now) {
            Ok(TickOutcome::Running { elapsed_seconds }) => {
                tracing::trace!(elapsed_seconds, "tick");
            }
            Ok(TickOutcome::Finished(id)) => {
                self.disarm_ticker();
                self.last_finished = Some(id);
                self.ui_mode = UiMode::Finished;
                if self.options.notify {
                    if let Some(cycle) = self.tracker.get(id) {
                        notifications::notify_cycle_finished(cycle.task(), cycle.planned_minutes());
                    }
                }
            }
            Err(TrackerError::NoActiveCycle) => {
                // Stale trigger
                self.disarm_ticker();
            }
        }
    }

    /// Close the finished modal
    pub fn dismiss_finished(&mut self) {
        if self.ui_mode == UiMode::Finished {
            self.ui_mode = UiMode::Timer;
        }
    }

    /// Switch between the timer and history screens
    pub fn toggle_history(&mut self) {
        self.ui_mode = match self.ui_mode {
            UiMode::History => UiMode::Timer,
            _ => UiMode::History,
        };
        self.history_scroll_offset = 0;
    }

    pub fn scroll_history_up(&mut self) {
        self.history_scroll_offset = self.history_scroll_offset.saturating_sub(1);
    }

    pub fn scroll_history_down(&mut self) {
        let max = self.tracker.cycles().len().saturating_sub(1);
        if self.history_scroll_offset < max {
            self.history_scroll_offset += 1;
        }
    }

    /// Tear down: never leave a trigger armed against a dropped tracker
    pub fn shutdown(&mut self) {
        if self.ticker.is_armed() {
            tracing::info!("shutting down with a cycle running");
        }
        self.disarm_ticker();
    }

    /// Session cycles as pretty JSON (printed after exit with --summary)
    pub fn summary_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self.tracker.cycles())
    }

    fn disarm_ticker(&mut self) {
        if let Some(handle) = self.tick_handle.take() {
            self.ticker.cancel(handle);
        }
        self.ticker.disarm();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::ValidationError;
    use crate::domain::CycleStatus;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn t0() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    fn secs(n: i64) -> DateTime<Local> {
        t0() + chrono::Duration::seconds(n)
    }

    fn create_test_app() -> AppState {
        AppState::new(AppOptions {
            notify: false,
            ..AppOptions::default()
        })
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            app.form_add_char(c);
        }
    }

    fn fill_form(app: &mut AppState, task: &str, minutes: &str) {
        app.form.focused = Field::Task;
        type_text(app, task);
        app.form_toggle_field();
        type_text(app, minutes);
        app.form_toggle_field();
    }

    #[test]
    fn test_app_state_new() {
        let app = create_test_app();
        assert_eq!(app.ui_mode, UiMode::Timer);
        assert!(app.tracker.cycles().is_empty());
        assert!(!app.ticker.is_armed());
        assert!(!app.can_submit());
        assert_eq!(app.form.minutes, "");
    }

    #[test]
    fn test_default_minutes_prefills_form() {
        let app = AppState::new(AppOptions {
            default_minutes: Some(25),
            ..AppOptions::default()
        });
        assert_eq!(app.form.minutes, "25");
    }

    #[test]
    fn test_submit_creates_cycle_and_arms_ticker() {
        let mut app = create_test_app();
        fill_form(&mut app, "Write report", "25");
        assert!(app.can_submit());

        assert!(app.submit_form(t0(), Instant::now()));
        assert!(app.tracker.has_active_cycle());
        assert!(app.ticker.is_armed());
        assert!(app.form_locked());
        // Form is reset after a successful submit
        assert_eq!(app.form, CycleFormState::new(None));
    }

    #[test]
    fn test_submit_disabled_without_task() {
        let mut app = create_test_app();
        fill_form(&mut app, "", "25");
        assert!(!app.submit_form(t0(), Instant::now()));
        assert!(app.tracker.cycles().is_empty());
    }

    #[test]
    fn test_rejected_submit_keeps_form_and_reports_field() {
        let mut app = create_test_app();
        fill_form(&mut app, "Read", "90");

        assert!(!app.submit_form(t0(), Instant::now()));
        assert!(!app.ticker.is_armed());
        assert_eq!(app.form.task, "Read");
        let errors = app.form.errors.clone().unwrap();
        assert_eq!(errors.errors(), &[ValidationError::DurationTooLong]);

        // Editing clears the error
        app.form.focused = Field::MinutesAmount;
        app.form_backspace();
        assert!(app.form.errors.is_none());
    }

    #[test]
    fn test_minutes_field_accepts_digits_only() {
        let mut app = create_test_app();
        app.form.focused = Field::MinutesAmount;
        type_text(&mut app, "2a5-");
        assert_eq!(app.form.minutes, "25");
    }

    #[test]
    fn test_step_minutes_clamps_to_range() {
        let mut app = create_test_app();
        app.form.focused = Field::MinutesAmount;

        app.form_arrow(true);
        assert_eq!(app.form.minutes, "5");
        app.form_arrow(false);
        assert_eq!(app.form.minutes, "5");

        app.form.minutes = "58".to_string();
        app.form_arrow(true);
        assert_eq!(app.form.minutes, "60");
        app.form_arrow(true);
        assert_eq!(app.form.minutes, "60");
        app.form_arrow(false);
        assert_eq!(app.form.minutes, "55");
    }

    #[test]
    fn test_primary_action_interrupts_running_cycle() {
        let mut app = create_test_app();
        fill_form(&mut app, "Draft", "25");
        app.primary_action(t0(), Instant::now());
        let id = app.tracker.active_cycle_id().unwrap();

        app.primary_action(secs(10), Instant::now());
        assert!(!app.tracker.has_active_cycle());
        assert!(!app.ticker.is_armed());
        let cycle = app.tracker.get(id).unwrap();
        assert_eq!(cycle.status(), CycleStatus::Interrupted);
        assert_eq!(cycle.interrupted_at(), Some(secs(10)));
    }

    #[test]
    fn test_form_locked_while_running() {
        let mut app = create_test_app();
        fill_form(&mut app, "Draft", "25");
        app.submit_form(t0(), Instant::now());

        type_text(&mut app, "xyz");
        assert_eq!(app.form.task, "");
        assert!(!app.can_submit());
    }

    #[test]
    fn test_tick_finishes_cycle_and_disarms() {
        let mut app = create_test_app();
        fill_form(&mut app, "Write report", "5");
        app.submit_form(t0(), Instant::now());
        let id = app.tracker.active_cycle_id().unwrap();

        app.tick(secs(299));
        assert_eq!(app.tracker.remaining_seconds(), 1);
        assert_eq!(app.ui_mode, UiMode::Timer);

        app.tick(secs(300));
        assert_eq!(app.tracker.remaining_seconds(), 0);
        assert!(!app.ticker.is_armed());
        assert_eq!(app.ui_mode, UiMode::Finished);
        assert_eq!(app.last_finished, Some(id));

        app.dismiss_finished();
        assert_eq!(app.ui_mode, UiMode::Timer);
    }

    #[test]
    fn test_stray_tick_and_interrupt_are_harmless() {
        let mut app = create_test_app();
        app.tick(t0());
        app.interrupt(t0());
        assert!(app.tracker.cycles().is_empty());
        assert_eq!(app.ui_mode, UiMode::Timer);
    }

    #[test]
    fn test_suggestions_browse_recent_tasks() {
        let mut app = create_test_app();
        for (n, task) in ["Read", "Write"].iter().enumerate() {
            fill_form(&mut app, task, "5");
            app.submit_form(secs(n as i64 * 10), Instant::now());
            app.interrupt(secs(n as i64 * 10 + 5));
        }

        app.form.focused = Field::Task;
        app.form_arrow(true);
        assert_eq!(app.form.task, "Write");
        app.form_arrow(true);
        assert_eq!(app.form.task, "Read");
        app.form_arrow(true);
        assert_eq!(app.form.task, "Read");
        app.form_arrow(false);
        assert_eq!(app.form.task, "Write");
    }

    #[test]
    fn test_toggle_history_and_scroll() {
        let mut app = create_test_app();
        app.toggle_history();
        assert_eq!(app.ui_mode, UiMode::History);
        app.scroll_history_down();
        assert_eq!(app.history_scroll_offset, 0);
        app.toggle_history();
        assert_eq!(app.ui_mode, UiMode::Timer);
    }

    #[test]
    fn test_scroll_history_stops_at_last_cycle() {
        let mut app = create_test_app();
        for (i, task) in ["One", "Two", "Three"].iter().enumerate() {
            fill_form(&mut app, task, "25");
            assert!(app.submit_form(secs(i as i64 * 60), Instant::now()));
            app.interrupt(secs(i as i64 * 60 + 30));
        }
        assert_eq!(app.tracker.cycles().len(), 3);

        app.toggle_history();
        for _ in 0..5 {
            app.scroll_history_down();
        }
        assert_eq!(app.history_scroll_offset, 2);

        app.scroll_history_up();
        assert_eq!(app.history_scroll_offset, 1);
        app.toggle_history();
        assert_eq!(app.history_scroll_offset, 0);
    }

    #[test]
    fn test_shutdown_disarms_and_is_idempotent() {
        let mut app = create_test_app();
        fill_form(&mut app, "Draft", "25");
        app.submit_form(t0(), Instant::now());
        assert!(app.ticker.is_armed());

        app.shutdown();
        app.shutdown();
        assert!(!app.ticker.is_armed());
        assert!(app.tick_handle.is_none());
    }

    #[test]
    fn test_summary_json_lists_cycles() {
        let mut app = create_test_app();
        fill_form(&mut app, "Draft", "25");
        app.submit_form(t0(), Instant::now());
        app.interrupt(secs(10));

        let json = app.summary_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["task"], "Draft");
        assert_eq!(value[0]["plannedMinutes"], 25);
        assert!(value[0]["finishedAt"].is_null());
        assert!(value[0]["interruptedAt"].is_string());
    }
}
