/// Desktop notifications
/// Currently only implements macOS notifications

#[cfg(target_os = "macos")]
use std::process::Command;

/// Message body for a finished cycle
pub fn finished_message(task: &str, planned_minutes: u32) -> String {
    format!("{} ({} min) is done. Take a break.", task, planned_minutes)
}

/// Send a notification when a cycle runs to completion
pub fn notify_cycle_finished(task: &str, planned_minutes: u32) {
    let message = finished_message(task, planned_minutes);

    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{}" with title "pomo - Cycle Finished""#,
            message.replace('"', "\\\"")
        );

        if let Err(e) = Command::new("osascript").arg("-e").arg(&script).output() {
            tracing::warn!(error = %e, "failed to send notification");
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        tracing::debug!(%message, "notifications unsupported on this platform");
    }
}
