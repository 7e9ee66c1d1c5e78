pub mod cycle;
pub mod enums;
pub mod tracker;
pub mod validation;
pub mod views;

pub use cycle::{Cycle, CycleId};
pub use enums::{CycleStatus, Field, UiMode};
pub use tracker::{CycleTracker, TickOutcome, TrackerError};
pub use validation::{NewCycleForm, ValidationErrors, MAX_MINUTES, MIN_MINUTES};
pub use views::{
    big_glyph, can_submit, countdown_label, format_countdown, minutes_label, relative_time,
    window_title, APP_TITLE,
};
