use super::cycle::{Cycle, CycleId};
use super::validation::NewCycle;
use chrono::{DateTime, Local};
use thiserror::Error;

/// Misuse of the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("no cycle is active")]
    NoActiveCycle,
}

/// Result of recomputing elapsed time for the active cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still counting down
    Running { elapsed_seconds: u32 },
    /// Elapsed time reached the planned duration
    Finished(CycleId),
}

/// Owns every cycle of the session and the identity of the active one
#[derive(Debug, Clone, Default)]
pub struct CycleTracker {
    /// Append-only, in creation order
    cycles: Vec<Cycle>,
    active_cycle_id: Option<CycleId>,
    elapsed_seconds: u32,
}

impl CycleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new cycle at `now` and make it the active one.
    ///
    /// A cycle that is still active is interrupted at `now` first, so there is
    /// never more than one non-terminal cycle.
    pub fn create(&mut self, request: NewCycle, now: DateTime<Local>) -> &Cycle {
        if self.active_cycle_id.is_some() {
            if let Ok(previous) = self.interrupt(now) {
                tracing::info!(cycle = %previous.id(), "superseded cycle interrupted");
            }
        }

        let cycle = Cycle::new(&request, now);
        tracing::info!(
            cycle = %cycle.id(),
            task = cycle.task(),
            minutes = cycle.planned_minutes(),
            "cycle created"
        );

        self.active_cycle_id = Some(cycle.id());
        self.elapsed_seconds = 0;
        self.cycles.push(cycle);
        &self.cycles[self.cycles.len() - 1]
    }

    /// Cancel the active cycle before it completes
    pub fn interrupt(&mut self, now: DateTime<Local>) -> Result<&Cycle, TrackerError> {
        let index = self.active_index().ok_or(TrackerError::NoActiveCycle)?;
        self.cycles[index].interrupt(now);
        self.active_cycle_id = None;
        tracing::info!(cycle = %self.cycles[index].id(), "cycle interrupted");
        Ok(&self.cycles[index])
    }

    /// Mark the active cycle finished at `now`, capping elapsed time
    pub fn mark_finished(&mut self, now: DateTime<Local>) -> Result<&Cycle, TrackerError> {
        let index = self.active_index().ok_or(TrackerError::NoActiveCycle)?;
        let cycle = &mut self.cycles[index];
        cycle.finish(now);
        self.elapsed_seconds = cycle.planned_seconds();
        self.active_cycle_id = None;
        tracing::info!(cycle = %cycle.id(), "cycle finished");
        Ok(&self.cycles[index])
    }

    /// Recompute elapsed time of the active cycle from the wall clock.
    ///
    /// Elapsed is always `now - started_at`, never accumulated, so late or
    /// skipped ticks do not drift.
    pub fn tick(&mut self, now: DateTime<Local>) -> Result<TickOutcome, TrackerError> {
        let index = self.active_index().ok_or(TrackerError::NoActiveCycle)?;
        let cycle = &self.cycles[index];
        let elapsed = cycle.seconds_since_start(now);

        if elapsed >= cycle.planned_seconds() {
            let id = self.mark_finished(now)?.id();
            return Ok(TickOutcome::Finished(id));
        }

        self.elapsed_seconds = elapsed;
        Ok(TickOutcome::Running {
            elapsed_seconds: elapsed,
        })
    }

    /// Seconds left on the active cycle, or 0 when none is active
    pub fn remaining_seconds(&self) -> u32 {
        self.active_cycle()
            .map(|c| c.planned_seconds().saturating_sub(self.elapsed_seconds))
            .unwrap_or(0)
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn active_cycle_id(&self) -> Option<CycleId> {
        self.active_cycle_id
    }

    pub fn active_cycle(&self) -> Option<&Cycle> {
        self.active_index().map(|i| &self.cycles[i])
    }

    pub fn has_active_cycle(&self) -> bool {
        self.active_cycle_id.is_some()
    }

    pub fn get(&self, id: CycleId) -> Option<&Cycle> {
        self.cycles.iter().find(|c| c.id() == id)
    }

    /// All cycles in creation order
    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    /// All cycles, newest first
    pub fn history(&self) -> impl Iterator<Item = &Cycle> {
        self.cycles.iter().rev()
    }

    /// Distinct task names, most recently used first
    pub fn recent_tasks(&self) -> Vec<&str> {
        let mut tasks: Vec<&str> = Vec::new();
        for cycle in self.history() {
            if !tasks.contains(&cycle.task()) {
                tasks.push(cycle.task());
            }
        }
        tasks
    }

    fn active_index(&self) -> Option<usize> {
        let id = self.active_cycle_id?;
        self.cycles.iter().rposition(|c| c.id() == id)
    }
}
