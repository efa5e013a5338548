//! Simple reaction time analysis and drill presets

use chrono::{DateTime, Utc};

use crate::session::{
    ComparisonDirection, FixedClock, SessionConfig, SuccessCriterion, Summary, ThresholdDirection,
    TrialSession,
};
use crate::Result;

/// Responses at or above this latency count as misses in the drill preset.
const DRILL_SUCCESS_MS: f64 = 1000.0;

/// Trials per reaction drill.
const DRILL_TRIALS: usize = 10;

/// Unbounded reaction time session: lower is better, values in ms.
#[must_use]
pub fn reaction_session_config() -> SessionConfig {
    SessionConfig::from_parts(
        ComparisonDirection::Minimize,
        None,
        None,
        Some("ms".to_string()),
    )
}

/// Ten-trial reaction drill where a response under 1000 ms is a success.
#[must_use]
pub fn reaction_drill_config() -> SessionConfig {
    SessionConfig::from_parts(
        ComparisonDirection::Minimize,
        Some(SuccessCriterion::new(DRILL_SUCCESS_MS, ThresholdDirection::LessThan)),
        Some(DRILL_TRIALS),
        Some("ms".to_string()),
    )
}

/// Average, best and consistency of a set of reaction times.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionAnalysis {
    /// Number of trials.
    pub trials: usize,
    /// Mean reaction time (ms).
    pub average_ms: f64,
    /// Fastest reaction time (ms).
    pub best_ms: f64,
    /// Population standard deviation (ms); 0 for a single trial.
    pub consistency_ms: f64,
}

impl ReactionAnalysis {
    fn from_summary(summary: &Summary) -> Option<Self> {
        Some(Self {
            trials: summary.count(),
            average_ms: summary.mean()?,
            best_ms: summary.best()?.value(),
            consistency_ms: summary.dispersion(),
        })
    }
}

/// Analyze reaction times (ms) through a one-shot minimizing session.
///
/// Returns `Ok(None)` for an empty slice.
///
/// # Errors
///
/// Returns [`Error::InvalidValue`](crate::Error::InvalidValue) for a
/// non-finite time.
pub fn analyze_reaction_times(times_ms: &[f64]) -> Result<Option<ReactionAnalysis>> {
    let mut session = TrialSession::with_clock(
        "reaction",
        reaction_session_config(),
        FixedClock::new(DateTime::<Utc>::UNIX_EPOCH),
    )?;
    for &time in times_ms {
        session.append(time)?;
    }
    let summary = session.close()?;
    Ok(ReactionAnalysis::from_summary(&summary))
}
