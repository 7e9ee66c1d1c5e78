use super::tracker::CycleTracker;
use chrono::{DateTime, Local};

/// Name shown in the terminal title when no cycle is running
pub const APP_TITLE: &str = "pomo";

/// Split remaining seconds into zero-padded minutes and seconds
pub fn format_countdown(remaining_seconds: u32) -> (String, String) {
    let minutes = remaining_seconds / 60;
    let seconds = remaining_seconds % 60;
    (format!("{:02}", minutes), format!("{:02}", seconds))
}

/// Remaining seconds as "MM:SS"
pub fn countdown_label(remaining_seconds: u32) -> String {
    let (minutes, seconds) = format_countdown(remaining_seconds);
    format!("{}:{}", minutes, seconds)
}

/// Terminal title: the countdown while a cycle runs, otherwise the app name
pub fn window_title(tracker: &CycleTracker) -> String {
    if tracker.has_active_cycle() {
        countdown_label(tracker.remaining_seconds())
    } else {
        APP_TITLE.to_string()
    }
}

/// Start is only offered once a task name has been typed
pub fn can_submit(task: &str) -> bool {
    !task.is_empty()
}

/// Human-readable age of a timestamp ("just now", "3 minutes ago", "about 2 hours ago")
pub fn relative_time(then: DateTime<Local>, now: DateTime<Local>) -> String {
    let seconds = (now - then).num_seconds().max(0);
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if seconds < 60 {
        "just now".to_string()
    } else if minutes == 1 {
        "1 minute ago".to_string()
    } else if minutes < 60 {
        format!("{} minutes ago", minutes)
    } else if hours == 1 {
        "about 1 hour ago".to_string()
    } else if hours < 24 {
        format!("about {} hours ago", hours)
    } else if days == 1 {
        "1 day ago".to_string()
    } else {
        format!("{} days ago", days)
    }
}

/// Planned duration label used in the history list
pub fn minutes_label(minutes: u32) -> String {
    if minutes == 1 {
        "1 minute".to_string()
    } else {
        format!("{} minutes", minutes)
    }
}

/// 3x5 block glyph for a countdown character
pub fn big_glyph(c: char) -> [&'static str; 5] {
    match c {
        '0' => ["███", "█ █", "█ █", "█ █", "███"],
        '1' => ["  █", "  █", "  █", "  █", "  █"],
        '2' => ["███", "  █", "███", "█  ", "███"],
        '3' => ["███", "  █", "███", "  █", "███"],
        '4' => ["█ █", "█ █", "███", "  █", "  █"],
        '5' => ["███", "█  ", "███", "  █", "███"],
        '6' => ["███", "█  ", "███", "█ █", "███"],
        '7' => ["███", "  █", "  █", "  █", "  █"],
        '8' => ["███", "█ █", "███", "█ █", "███"],
        '9' => ["███", "█ █", "███", "  █", "███"],
        ':' => ["   ", " █ ", "   ", " █ ", "   "],
        _ => ["   ", "   ", "   ", "   ", "   "],
    }
}
