//! # fitness-trials: Trial Sessions for Fitness Assessments
//!
//! Record repeated measurements for one subject (reaction times, jump
//! heights, pull forces), close the session, and read frozen summary
//! statistics: mean, best/worst, population standard deviation and an
//! optional success rate.
//!
//! ## Design Principles
//!
//! - **Append-only records**: sequence numbers and timestamps never go back
//! - **Explicit lifecycle**: OPEN accepts trials, CLOSED freezes the summary
//! - **Undefined is not zero**: an empty session has no mean
//! - **Deterministic ties**: the earliest record wins best/worst
//!
//! ## Example Usage
//!
//! ```rust
//! use fitness_trials::session::{
//!     ComparisonDirection, SessionConfig, ThresholdDirection, TrialSession,
//! };
//!
//! let config = SessionConfig::builder(ComparisonDirection::Maximize)
//!     .success(2500.0, ThresholdDirection::GreaterThan)
//!     .unit("N")
//!     .build()?;
//!
//! let mut imtp = TrialSession::new("athlete-12", config)?;
//! imtp.append(2410.0)?;
//! imtp.append(2630.0)?;
//! imtp.append_labeled(2580.0, "slight countermovement")?;
//!
//! let summary = imtp.close()?;
//! assert_eq!(summary.best().map(|r| r.value()), Some(2630.0));
//! assert_eq!(summary.passed(), Some(2));
//! # Ok::<(), fitness_trials::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod log;
pub mod protocols;
pub mod session;

pub use error::{Error, Result};
