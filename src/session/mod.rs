//! Trial Sessions
//!
//! Record repeated trials for one subject, then freeze summary statistics.
//!
//! ## Schema Overview
//!
//! ```text
//! SessionStore (1) ──< TrialSession (N) ── SessionConfig
//!                           │
//!                           ├──< TrialRecord (N) [append-only]
//!                           └─── Summary (0..1) [frozen on close]
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use fitness_trials::session::{ComparisonDirection, SessionConfig, TrialSession};
//!
//! let config = SessionConfig::new(ComparisonDirection::Minimize);
//! let mut session = TrialSession::new("athlete-7", config)?;
//! session.append(500.0)?;
//! session.append(300.0)?;
//! session.append_labeled(300.0, "anticipated")?;
//!
//! let summary = session.close()?;
//! assert_eq!(summary.count(), 3);
//! assert_eq!(summary.best().map(|r| r.sequence_number()), Some(2));
//! # Ok::<(), fitness_trials::Error>(())
//! ```

mod clock;
mod config;
mod record;
mod store;
mod summary;
mod trial_session;

pub use clock::{Clock, FixedClock, SteppingClock, SystemClock};
pub use config::{
    ComparisonDirection, SessionConfig, SessionConfigBuilder, SuccessCriterion, ThresholdDirection,
};
pub use record::TrialRecord;
pub use store::SessionStore;
pub use summary::Summary;
pub use trial_session::{SessionReport, SessionStatus, TrialSession};
