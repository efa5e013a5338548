//! Trial Record - one immutable measurement within a session

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Trial Record represents a single captured measurement.
///
/// Records are created only by [`TrialSession`](super::TrialSession) and are
/// never mutated afterwards; a correction is a new record.
///
/// ## Labels
///
/// `label` is `None` when no annotation was given. An explicitly supplied
/// empty string is kept as `Some("")`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrialRecord {
    sequence_number: u64,
    value: f64,
    label: Option<String>,
    captured_at: DateTime<Utc>,
}

impl TrialRecord {
    pub(crate) const fn new(
        sequence_number: u64,
        value: f64,
        label: Option<String>,
        captured_at: DateTime<Utc>,
    ) -> Self {
        Self {
            sequence_number,
            value,
            label,
            captured_at,
        }
    }

    /// 1-based capture order within the session.
    #[must_use]
    pub const fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    /// Measured value, in the caller's unit.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Free-text annotation, if one was given.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// When the trial was captured.
    #[must_use]
    pub const fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }
}
