//! Muscular strength: IMTP peak force and 1RM relative strength

use chrono::{DateTime, Utc};

use super::ensure_positive;
use crate::session::{ComparisonDirection, FixedClock, SessionConfig, TrialSession};
use crate::{Error, Result};

/// Trials per IMTP test.
const IMTP_TRIALS: usize = 3;

/// Three-trial IMTP session: higher peak force is better, values in N.
#[must_use]
pub fn imtp_session_config() -> SessionConfig {
    SessionConfig::from_parts(
        ComparisonDirection::Maximize,
        None,
        Some(IMTP_TRIALS),
        Some("N".to_string()),
    )
}

/// Isometric mid-thigh pull results.
#[derive(Debug, Clone, PartialEq)]
pub struct ImtpResult {
    /// Number of trials pulled.
    pub trials: usize,
    /// Best peak force across trials (N).
    pub best_peak_force_n: f64,
    /// Trial that produced the best peak force (1-based; earliest on ties).
    pub best_trial: u64,
    /// Mean peak force across trials (N).
    pub mean_peak_force_n: f64,
    /// Rate of force development over 0-200 ms (N/s), if measured.
    pub rfd_n_per_s: Option<f64>,
}

/// Best peak force over up to three IMTP trials.
///
/// # Errors
///
/// - [`Error::InvalidInput`] with no trials, or a non-positive RFD
/// - [`Error::InvalidValue`] for a non-finite trial
/// - [`Error::TrialLimitReached`] with more than three trials
pub fn analyze_imtp(trials_n: &[f64], rfd_n_per_s: Option<f64>) -> Result<ImtpResult> {
    let rfd = rfd_n_per_s
        .map(|rfd| ensure_positive("RFD", rfd))
        .transpose()?;

    let mut session = TrialSession::with_clock(
        "imtp",
        imtp_session_config(),
        FixedClock::new(DateTime::<Utc>::UNIX_EPOCH),
    )?;
    for &force in trials_n {
        session.append(force)?;
    }
    let summary = session.close()?;

    match (summary.best(), summary.mean()) {
        (Some(best), Some(mean)) => Ok(ImtpResult {
            trials: summary.count(),
            best_peak_force_n: best.value(),
            best_trial: best.sequence_number(),
            mean_peak_force_n: mean,
            rfd_n_per_s: rfd,
        }),
        _ => Err(Error::InvalidInput(
            "IMTP needs at least one trial".to_string(),
        )),
    }
}

/// One-repetition maximum relative to body mass (kg lifted per kg).
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] unless both inputs are positive.
pub fn relative_strength(one_rm_kg: f64, body_mass_kg: f64) -> Result<f64> {
    Ok(ensure_positive("1RM", one_rm_kg)? / ensure_positive("body mass", body_mass_kg)?)
}
