//! Session Store - one trial session per subject
//!
//! Replaces the "enter athlete name until done" capture loop: every subject
//! gets its own session, all sharing one config and clock.

use std::collections::HashMap;

use tracing::debug;

use super::{Clock, SessionConfig, Summary, SystemClock, TrialRecord, TrialSession};
use crate::{Error, Result};

/// In-memory store of trial sessions keyed by subject.
///
/// ## Design
///
/// Sessions live in a vector in insertion order, with a hash map from subject
/// to index for O(1) lookups. Reports and rankings follow insertion order.
#[derive(Debug)]
pub struct SessionStore<C: Clock + Clone = SystemClock> {
    config: SessionConfig,
    clock: C,
    sessions: Vec<TrialSession<C>>,
    index: HashMap<String, usize>,
}

impl SessionStore<SystemClock> {
    /// Create a store stamped with wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the config fails validation.
    pub fn new(config: SessionConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock + Clone> SessionStore<C> {
    /// Create a store whose sessions share `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the config fails validation.
    pub fn with_clock(config: SessionConfig, clock: C) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            clock,
            sessions: Vec::new(),
            index: HashMap::new(),
        })
    }

    /// Config shared by every session.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Number of sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the store holds no sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Subjects in insertion order.
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.sessions.iter().map(TrialSession::subject_id)
    }

    /// Sessions in insertion order.
    pub fn sessions(&self) -> impl Iterator<Item = &TrialSession<C>> {
        self.sessions.iter()
    }

    /// Open a new session for `subject_id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateSubject`] if the subject already has a session.
    pub fn open(&mut self, subject_id: impl Into<String>) -> Result<&mut TrialSession<C>> {
        let subject_id = subject_id.into();
        if self.index.contains_key(&subject_id) {
            return Err(Error::DuplicateSubject(subject_id));
        }

        let session = TrialSession::with_clock(
            subject_id.clone(),
            self.config.clone(),
            self.clock.clone(),
        )?;
        let slot = self.sessions.len();
        self.sessions.push(session);
        self.index.insert(subject_id, slot);
        debug!(subject = %self.sessions[slot].subject_id(), "session opened");

        Ok(&mut self.sessions[slot])
    }

    /// Session for `subject_id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSubject`] if no session exists.
    pub fn session(&self, subject_id: &str) -> Result<&TrialSession<C>> {
        self.index
            .get(subject_id)
            .map(|&slot| &self.sessions[slot])
            .ok_or_else(|| Error::UnknownSubject(subject_id.to_string()))
    }

    /// Mutable session for `subject_id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSubject`] if no session exists.
    pub fn session_mut(&mut self, subject_id: &str) -> Result<&mut TrialSession<C>> {
        match self.index.get(subject_id) {
            Some(&slot) => Ok(&mut self.sessions[slot]),
            None => Err(Error::UnknownSubject(subject_id.to_string())),
        }
    }

    /// Append an unlabeled trial to `subject_id`'s session.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownSubject`], or any error from
    /// [`TrialSession::append`].
    pub fn append(&mut self, subject_id: &str, value: f64) -> Result<&TrialRecord> {
        self.session_mut(subject_id)?.append(value)
    }

    /// Append a labeled trial to `subject_id`'s session.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownSubject`], or any error from
    /// [`TrialSession::append_labeled`].
    pub fn append_labeled(
        &mut self,
        subject_id: &str,
        value: f64,
        label: impl Into<String>,
    ) -> Result<&TrialRecord> {
        self.session_mut(subject_id)?.append_labeled(value, label)
    }

    /// Close every open session.
    ///
    /// Returns `(subject, summary)` pairs in insertion order. Sessions that
    /// were already closed contribute their frozen summary.
    ///
    /// # Errors
    ///
    /// Propagates any close failure other than [`Error::AlreadyClosed`].
    pub fn close_all(&mut self) -> Result<Vec<(String, Summary)>> {
        self.sessions
            .iter_mut()
            .map(|session| {
                let summary = match session.close() {
                    Err(Error::AlreadyClosed { summary, .. }) => *summary,
                    other => other?,
                };
                Ok((session.subject_id().to_string(), summary))
            })
            .collect()
    }

    /// Closed subjects ordered best-first by their best trial.
    ///
    /// Ties keep insertion order. Closed sessions without records come last;
    /// open sessions are left out.
    #[must_use]
    pub fn ranking(&self) -> Vec<(&str, &Summary)> {
        let direction = self.config.direction();
        let mut ranked: Vec<(&str, &Summary)> = self
            .sessions
            .iter()
            .filter_map(|s| s.summary().ok().map(|summary| (s.subject_id(), summary)))
            .collect();

        // Stable sort keeps insertion order on ties.
        ranked.sort_by(|(_, a), (_, b)| {
            match (a.best().map(TrialRecord::value), b.best().map(TrialRecord::value)) {
                (Some(x), Some(y)) if direction.is_better(x, y) => std::cmp::Ordering::Less,
                (Some(x), Some(y)) if direction.is_better(y, x) => std::cmp::Ordering::Greater,
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                _ => std::cmp::Ordering::Equal,
            }
        });
        ranked
    }
}
