use super::enums::Field;
use std::fmt;
use thiserror::Error;

/// Shortest cycle the form accepts, in minutes
pub const MIN_MINUTES: i64 = 5;

/// Longest cycle the form accepts, in minutes
pub const MAX_MINUTES: i64 = 60;

/// A single field-level validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter a task")]
    EmptyTask,
    #[error("A cycle must be at least 5 minutes")]
    DurationTooShort,
    #[error("A cycle must be at most 60 minutes")]
    DurationTooLong,
    #[error("Duration must be a whole number of minutes")]
    DurationNotANumber,
}

impl ValidationError {
    /// Which form field this error belongs to
    pub fn field(&self) -> Field {
        match self {
            Self::EmptyTask => Field::Task,
            Self::DurationTooShort | Self::DurationTooLong | Self::DurationNotANumber => {
                Field::MinutesAmount
            }
        }
    }
}

/// Every failure found for one candidate input (never empty)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// First error reported for the given field, if any
    pub fn for_field(&self, field: Field) -> Option<ValidationError> {
        self.errors().iter().copied().find(|e| e.field() == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.errors().iter().map(|e| e.to_string()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Raw candidate for a new cycle, as collected by the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCycleForm {
    pub task: String,
    /// None when the minutes text was empty or not a number
    pub minutes_amount: Option<i64>,
}

impl NewCycleForm {
    #[cfg(test)]
    pub fn new(task: impl Into<String>, minutes_amount: i64) -> Self {
        Self {
            task: task.into(),
            minutes_amount: Some(minutes_amount),
        }
    }

    /// Build a candidate from the text typed into the form fields
    pub fn parse(task: &str, minutes_text: &str) -> Self {
        Self {
            task: task.to_string(),
            minutes_amount: parse_minutes(minutes_text),
        }
    }

    /// Check the candidate, collecting every invalid field
    pub fn validate(&self) -> Result<NewCycle, ValidationErrors> {
        let mut errors = Vec::new();

        if self.task.is_empty() {
            errors.push(ValidationError::EmptyTask);
        }

        let minutes = match self.minutes_amount {
            None => {
                errors.push(ValidationError::DurationNotANumber);
                None
            }
            Some(m) if m < MIN_MINUTES => {
                errors.push(ValidationError::DurationTooShort);
                None
            }
            Some(m) if m > MAX_MINUTES => {
                errors.push(ValidationError::DurationTooLong);
                None
            }
            Some(m) => u32::try_from(m).ok(),
        };

        match minutes {
            Some(minutes_amount) if errors.is_empty() => Ok(NewCycle {
                task: self.task.clone(),
                minutes_amount,
            }),
            _ => Err(ValidationErrors { errors }),
        }
    }
}

/// Parse minutes text. Digit runs too large for `i64` saturate so they are
/// still reported as out of range rather than as not-a-number.
fn parse_minutes(text: &str) -> Option<i64> {
    let text = text.trim();
    if let Ok(minutes) = text.parse::<i64>() {
        return Some(minutes);
    }
    let (digits, saturated) = match text.strip_prefix('-') {
        Some(rest) => (rest, i64::MIN),
        None => (text.strip_prefix('+').unwrap_or(text), i64::MAX),
    };
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Some(saturated)
    } else {
        None
    }
}

/// A validated cycle request; only obtainable through `NewCycleForm::validate`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCycle {
    task: String,
    minutes_amount: u32,
}

impl NewCycle {
    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn minutes_amount(&self) -> u32 {
        self.minutes_amount
    }
}
