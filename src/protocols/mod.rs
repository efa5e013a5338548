//! Assessment protocols built on trial sessions
//!
//! Health-related tests (strength, anthropometry, aerobic endurance) and
//! skill-related tests (reaction, jump, agility, force, readiness).
//!
//! Published test formulas and rating tables. Coefficients are kept exactly as
//! published; results are unrounded (round only for display).
//!
//! ```rust
//! use fitness_trials::protocols::{cmj_outcomes, t_test_rating, AgilityRating};
//!
//! let jump = cmj_outcomes(0.5, 80.0, Some(0.25))?;
//! assert!((jump.height_m - 0.306_562_5).abs() < 1e-9);
//! assert_eq!(t_test_rating(9.8)?, AgilityRating::Good);
//! # Ok::<(), fitness_trials::Error>(())
//! ```

mod aerobic;
mod agility;
mod anthropometry;
mod force;
mod jump;
mod reaction;
mod readiness;
mod strength;

pub use aerobic::cooper_vo2max;
pub use agility::{
    agility_505, illinois_rating, max_run_up_speed, t_test_rating, yo_yo_ir, Agility505,
    AgilityRating, RunUpSpeed, Sex, YoYoResult,
};
pub use anthropometry::{arm_difference, us_navy_body_fat, waist_to_chest, waist_to_hip};
pub use force::{time_to_peak_force, PeakForceTiming};
pub use jump::{broad_jump_outcomes, cmj_outcomes, BroadJumpOutcome, CmjOutcome};
pub use reaction::{
    analyze_reaction_times, reaction_drill_config, reaction_session_config, ReactionAnalysis,
};
pub use readiness::{ReadinessAssessment, ReadinessLevel, ReadinessLog, ReadinessScores};
pub use strength::{analyze_imtp, imtp_session_config, relative_strength, ImtpResult};

use crate::{Error, Result};

/// Reject non-finite or non-positive inputs.
pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidInput(format!(
            "{name} must be a positive number, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive() {
        assert!(ensure_positive("mass", 1.0).is_ok());
        assert!(ensure_positive("mass", 0.0).is_err());
        assert!(ensure_positive("mass", -3.0).is_err());
        assert!(ensure_positive("mass", f64::NAN).is_err());
    }
}
