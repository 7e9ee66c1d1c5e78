/// Lifecycle status of a cycle, derived from its timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleStatus {
    Active,
    Interrupted,
    Finished,
}

impl CycleStatus {
    /// Label shown in the history screen
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "In progress",
            Self::Interrupted => "Interrupted",
            Self::Finished => "Finished",
        }
    }

    /// Short marker used in front of history rows
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Active => "▶",
            Self::Interrupted => "■",
            Self::Finished => "✓",
        }
    }

    /// Terminal states accept no further updates
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Interrupted | Self::Finished)
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Timer screen: form plus countdown
    Timer,
    /// History screen: every cycle of the session
    History,
    /// Shown when a cycle has just finished
    Finished,
}

/// Field of the new-cycle form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Task,
    MinutesAmount,
}

impl Field {
    /// The other field (Tab cycles between the two)
    pub fn next(&self) -> Self {
        match self {
            Self::Task => Self::MinutesAmount,
            Self::MinutesAmount => Self::Task,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Task => "Task",
            Self::MinutesAmount => "Minutes",
        }
    }
}
