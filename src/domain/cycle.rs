use super::enums::CycleStatus;
use super::validation::NewCycle;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Opaque identifier of a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CycleId(Uuid);

impl CycleId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CycleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CycleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single timed work session
///
/// Fields are private: only the terminal stamps may change after creation,
/// and each of them at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cycle {
    id: CycleId,
    task: String,
    planned_minutes: u32,
    started_at: DateTime<Local>,
    interrupted_at: Option<DateTime<Local>>,
    finished_at: Option<DateTime<Local>>,
}

impl Cycle {
    pub fn new(request: &NewCycle, started_at: DateTime<Local>) -> Self {
        Self {
            id: CycleId::new(),
            task: request.task().to_string(),
            planned_minutes: request.minutes_amount(),
            started_at,
            interrupted_at: None,
            finished_at: None,
        }
    }

    pub fn id(&self) -> CycleId {
        self.id
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn planned_minutes(&self) -> u32 {
        self.planned_minutes
    }

    /// Planned duration in seconds
    pub fn planned_seconds(&self) -> u32 {
        self.planned_minutes * 60
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    pub fn interrupted_at(&self) -> Option<DateTime<Local>> {
        self.interrupted_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Local>> {
        self.finished_at
    }

    pub fn status(&self) -> CycleStatus {
        match (self.interrupted_at, self.finished_at) {
            (Some(_), _) => CycleStatus::Interrupted,
            (None, Some(_)) => CycleStatus::Finished,
            (None, None) => CycleStatus::Active,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }

    /// Whole seconds between start and `now`, clamped at zero
    pub fn seconds_since_start(&self, now: DateTime<Local>) -> u32 {
        let delta = (now - self.started_at).num_seconds().max(0);
        u32::try_from(delta).unwrap_or(u32::MAX)
    }

    /// Stamp the interruption time; returns false if already terminal
    pub(crate) fn interrupt(&mut self, now: DateTime<Local>) -> bool {
        if self.is_terminal() {
            return false;
        }
        self.interrupted_at = Some(now);
        true
    }

    /// Stamp the finish time; returns false if already terminal
    pub(crate) fn finish(&mut self, now: DateTime<Local>) -> bool {
        if self.is_terminal() {
            return false;
        }
        self.finished_at = Some(now);
        true
    }
}
