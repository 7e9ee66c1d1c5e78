use std::time::{Duration, Instant};

/// Default tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 1000;

/// How long the event loop waits for input while nothing is armed
pub const IDLE_POLL_MS: u64 = 250;

/// Get the default tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// Identifies one arming of a `Ticker`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle(u64);

/// Periodic trigger driving `CycleTracker::tick` from the event loop.
///
/// Arming returns a handle; `cancel` only disarms the arming that handle
/// belongs to, while `disarm` stops whatever is armed.
#[derive(Debug)]
pub struct Ticker {
    interval: Duration,
    generation: u64,
    armed: Option<Armed>,
}

#[derive(Debug, Clone, Copy)]
struct Armed {
    handle: TickHandle,
    next_due: Instant,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            generation: 0,
            armed: None,
        }
    }

    /// Arm the trigger; the first tick is due one interval after `now`.
    /// Any previous arming is replaced.
    pub fn arm(&mut self, now: Instant) -> TickHandle {
        self.generation += 1;
        let handle = TickHandle(self.generation);
        self.armed = Some(Armed {
            handle,
            next_due: now + self.interval,
        });
        tracing::debug!(handle = handle.0, "ticker armed");
        handle
    }

    /// Stop the trigger. Safe to call when nothing is armed.
    pub fn disarm(&mut self) {
        if let Some(armed) = self.armed.take() {
            tracing::debug!(handle = armed.handle.0, "ticker disarmed");
        }
    }

    /// Disarm only if `handle` is the current arming
    pub fn cancel(&mut self, handle: TickHandle) {
        if self.is_current(handle) {
            self.disarm();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    pub fn is_current(&self, handle: TickHandle) -> bool {
        self.armed.map(|a| a.handle == handle).unwrap_or(false)
    }

    /// How long the event loop may block before the next tick is due
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.armed {
            Some(armed) => armed.next_due.saturating_duration_since(now),
            None => Duration::from_millis(IDLE_POLL_MS),
        }
    }

    /// Returns true and schedules the next tick when one is due at `now`.
    ///
    /// A late call fires once; missed intervals are not replayed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        let interval = self.interval;
        match self.armed.as_mut() {
            Some(armed) if now >= armed.next_due => {
                armed.next_due = now + interval;
                true
            }
            _ => false,
        }
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(tick_duration())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        let duration = tick_duration();
        assert_eq!(duration, Duration::from_millis(1000));
    }

    #[test]
    fn test_unarmed_ticker_never_fires() {
        let mut ticker = Ticker::default();
        let now = Instant::now();
        assert!(!ticker.is_armed());
        assert!(!ticker.fire_if_due(now + Duration::from_secs(10)));
        assert_eq!(ticker.poll_timeout(now), Duration::from_millis(IDLE_POLL_MS));
    }

    #[test]
    fn test_fires_once_per_interval() {
        let mut ticker = Ticker::new(Duration::from_secs(1));
        let start = Instant::now();
        ticker.arm(start);

        assert!(!ticker.fire_if_due(start + Duration::from_millis(500)));
        assert_eq!(
            ticker.poll_timeout(start + Duration::from_millis(500)),
            Duration::from_millis(500)
        );
        assert!(ticker.fire_if_due(start + Duration::from_secs(1)));
        assert!(!ticker.fire_if_due(start + Duration::from_millis(1500)));
        assert!(ticker.fire_if_due(start + Duration::from_secs(2)));
    }

    #[test]
    fn test_late_call_fires_once() {
        let mut ticker = Ticker::new(Duration::from_secs(1));
        let start = Instant::now();
        ticker.arm(start);

        let late = start + Duration::from_secs(10);
        assert!(ticker.fire_if_due(late));
        assert!(!ticker.fire_if_due(late));
        assert_eq!(ticker.poll_timeout(late), Duration::from_secs(1));
    }

    #[test]
    fn test_disarm_is_idempotent() {
        let mut ticker = Ticker::default();
        ticker.disarm();
        let start = Instant::now();
        ticker.arm(start);
        ticker.disarm();
        ticker.disarm();
        assert!(!ticker.is_armed());
        assert!(!ticker.fire_if_due(start + Duration::from_secs(5)));
    }

    #[test]
    fn test_stale_handle_does_not_cancel_new_arming() {
        let mut ticker = Ticker::default();
        let start = Instant::now();
        let first = ticker.arm(start);
        let second = ticker.arm(start);
        assert_ne!(first, second);

        ticker.cancel(first);
        assert!(ticker.is_armed());
        assert!(ticker.is_current(second));

        ticker.cancel(second);
        assert!(!ticker.is_armed());
        ticker.cancel(second);
        assert!(!ticker.is_armed());
    }
}
