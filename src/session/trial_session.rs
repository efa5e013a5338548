//! Trial Session - OPEN/CLOSED capture window for one subject

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{Clock, SessionConfig, Summary, SystemClock, TrialRecord};
use crate::{Error, Result};

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Accepting trials.
    Open,
    /// Finalized; the summary is frozen.
    Closed,
}

/// Trial Session accumulates trial records for one subject.
///
/// A session is created OPEN with no records and moves to CLOSED exactly
/// once, via [`close`](Self::close). Closing freezes the [`Summary`].
///
/// ## Invariants
///
/// - Sequence numbers start at 1 and increase by 1 per append.
/// - `captured_at` never decreases across records, even if the clock does.
/// - Failed calls leave the session unchanged.
///
/// The session is not synchronized; callers serialize `append` and `close`.
#[derive(Debug)]
pub struct TrialSession<C: Clock = SystemClock> {
    subject_id: String,
    config: SessionConfig,
    clock: C,
    records: Vec<TrialRecord>,
    status: SessionStatus,
    opened_at: DateTime<Utc>,
    closed_at: Option<DateTime<Utc>>,
    summary: Option<Summary>,
}

impl TrialSession<SystemClock> {
    /// Open a session stamped with wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the config fails validation.
    pub fn new(subject_id: impl Into<String>, config: SessionConfig) -> Result<Self> {
        Self::with_clock(subject_id, config, SystemClock)
    }
}

impl<C: Clock> TrialSession<C> {
    /// Open a session stamped by `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the config fails validation.
    pub fn with_clock(
        subject_id: impl Into<String>,
        config: SessionConfig,
        clock: C,
    ) -> Result<Self> {
        config.validate()?;
        let opened_at = clock.now();
        Ok(Self {
            subject_id: subject_id.into(),
            config,
            clock,
            records: Vec::new(),
            status: SessionStatus::Open,
            opened_at,
            closed_at: None,
            summary: None,
        })
    }

    /// Subject under test.
    #[must_use]
    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    /// Configuration fixed at creation.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    /// Whether the session still accepts trials.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status == SessionStatus::Open
    }

    /// Records in capture order.
    #[must_use]
    pub fn records(&self) -> &[TrialRecord] {
        &self.records
    }

    /// Most recently captured record.
    #[must_use]
    pub fn latest(&self) -> Option<&TrialRecord> {
        self.records.last()
    }

    /// Number of records captured.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records have been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// When the session was opened.
    #[must_use]
    pub const fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// When the session was closed, if it has been.
    #[must_use]
    pub const fn closed_at(&self) -> Option<DateTime<Utc>> {
        self.closed_at
    }

    /// Append an unlabeled trial.
    ///
    /// # Errors
    ///
    /// - [`Error::SessionClosed`] if the session is closed
    /// - [`Error::InvalidValue`] if `value` is NaN or infinite
    /// - [`Error::TrialLimitReached`] if a bounded session is full
    pub fn append(&mut self, value: f64) -> Result<&TrialRecord> {
        self.push(value, None)
    }

    /// Append a trial with a free-text annotation.
    ///
    /// # Errors
    ///
    /// Same as [`append`](Self::append).
    pub fn append_labeled(&mut self, value: f64, label: impl Into<String>) -> Result<&TrialRecord> {
        self.push(value, Some(label.into()))
    }

    fn push(&mut self, value: f64, label: Option<String>) -> Result<&TrialRecord> {
        if self.status == SessionStatus::Closed {
            warn!(subject = %self.subject_id, value, "append rejected: session closed");
            return Err(Error::SessionClosed {
                subject_id: self.subject_id.clone(),
            });
        }
        if !value.is_finite() {
            warn!(subject = %self.subject_id, value, "append rejected: non-finite value");
            return Err(Error::InvalidValue { value });
        }
        if let Some(limit) = self.config.max_trials() {
            if self.records.len() >= limit {
                warn!(subject = %self.subject_id, limit, "append rejected: trial limit reached");
                return Err(Error::TrialLimitReached { limit });
            }
        }

        let now = self.clock.now();
        let captured_at = self.latest().map_or(now, |last| now.max(last.captured_at()));
        let sequence_number = self.records.len() as u64 + 1;

        self.records
            .push(TrialRecord::new(sequence_number, value, label, captured_at));
        debug!(subject = %self.subject_id, sequence_number, value, "trial recorded");

        let last = self.records.len() - 1;
        Ok(&self.records[last])
    }

    /// Close the session and freeze its summary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyClosed`] on a repeated call. The error carries
    /// the summary frozen by the first call, which stays available via
    /// [`summary`](Self::summary).
    pub fn close(&mut self) -> Result<Summary> {
        if let Some(frozen) = &self.summary {
            warn!(subject = %self.subject_id, "close rejected: session already closed");
            return Err(Error::AlreadyClosed {
                subject_id: self.subject_id.clone(),
                summary: Box::new(frozen.clone()),
            });
        }

        let summary = Summary::from_records(&self.records, &self.config);
        self.status = SessionStatus::Closed;
        self.closed_at = Some(self.clock.now());
        self.summary = Some(summary.clone());

        info!(
            subject = %self.subject_id,
            count = summary.count(),
            mean = ?summary.mean(),
            best = ?summary.best().map(TrialRecord::value),
            "session closed"
        );
        Ok(summary)
    }

    /// Frozen summary of a closed session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SessionOpen`] while the session is open.
    pub fn summary(&self) -> Result<&Summary> {
        self.summary.as_ref().ok_or_else(|| Error::SessionOpen {
            subject_id: self.subject_id.clone(),
        })
    }

    /// Snapshot of a closed session for reporting or export.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SessionOpen`] while the session is open.
    pub fn report(&self) -> Result<SessionReport> {
        let summary = self.summary()?.clone();
        Ok(SessionReport {
            subject_id: self.subject_id.clone(),
            config: self.config.clone(),
            records: self.records.clone(),
            opened_at: self.opened_at,
            closed_at: self.closed_at,
            summary,
        })
    }
}

/// Serializable snapshot of a closed session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionReport {
    /// Subject under test.
    pub subject_id: String,
    /// Configuration the session ran with.
    pub config: SessionConfig,
    /// Records in capture order.
    pub records: Vec<TrialRecord>,
    /// When the session was opened.
    pub opened_at: DateTime<Utc>,
    /// When the session was closed.
    pub closed_at: Option<DateTime<Utc>>,
    /// Frozen summary.
    pub summary: Summary,
}
