//! Speed and agility: 505, T-test, Illinois, Yo-Yo IR, flying run-up

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ensure_positive;
use crate::{Error, Result};

/// Normative agility rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgilityRating {
    /// Top band.
    Excellent,
    /// Second band.
    Good,
    /// Middle band.
    Average,
    /// Fourth band.
    BelowAverage,
    /// Bottom band (Illinois only).
    Poor,
}

impl fmt::Display for AgilityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::BelowAverage => "Below Average",
            Self::Poor => "Poor",
        };
        f.write_str(label)
    }
}

/// Sex used to pick a normative table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male norms.
    Male,
    /// Female norms.
    Female,
}

/// T-test cut-offs (s), best band first.
const T_TEST_BANDS: [(f64, AgilityRating); 3] = [
    (9.5, AgilityRating::Excellent),
    (10.5, AgilityRating::Good),
    (11.5, AgilityRating::Average),
];

/// Illinois cut-offs (s), best band first.
const ILLINOIS_MALE: [(f64, AgilityRating); 4] = [
    (15.2, AgilityRating::Excellent),
    (16.1, AgilityRating::Good),
    (18.1, AgilityRating::Average),
    (19.3, AgilityRating::BelowAverage),
];
const ILLINOIS_FEMALE: [(f64, AgilityRating); 4] = [
    (17.0, AgilityRating::Excellent),
    (17.9, AgilityRating::Good),
    (21.0, AgilityRating::Average),
    (23.0, AgilityRating::BelowAverage),
];

/// First band whose upper bound is strictly above `time`, else `fallback`.
fn classify(time: f64, bands: &[(f64, AgilityRating)], fallback: AgilityRating) -> AgilityRating {
    bands
        .iter()
        .find(|(limit, _)| time < *limit)
        .map_or(fallback, |&(_, rating)| rating)
}

/// Rate a T-test completion time.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for a non-positive time.
pub fn t_test_rating(total_time_s: f64) -> Result<AgilityRating> {
    let time = ensure_positive("T-test time", total_time_s)?;
    Ok(classify(time, &T_TEST_BANDS, AgilityRating::BelowAverage))
}

/// Rate an Illinois agility completion time against sex-specific norms.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for a non-positive time.
pub fn illinois_rating(time_s: f64, sex: Sex) -> Result<AgilityRating> {
    let time = ensure_positive("Illinois time", time_s)?;
    let bands = match sex {
        Sex::Male => &ILLINOIS_MALE,
        Sex::Female => &ILLINOIS_FEMALE,
    };
    Ok(classify(time, bands, AgilityRating::Poor))
}

/// 505 agility results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Agility505 {
    /// Left-turn time (s).
    pub left_s: f64,
    /// Right-turn time (s), if tested.
    pub right_s: Option<f64>,
    /// Side-to-side difference as a percentage of the slower side.
    pub asymmetry_pct: Option<f64>,
    /// Mean of both sides.
    pub average_s: Option<f64>,
}

/// 505 agility test, optionally with both turn directions.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for a non-positive time.
pub fn agility_505(left_s: f64, right_s: Option<f64>) -> Result<Agility505> {
    let left = ensure_positive("left turn time", left_s)?;
    let right = right_s.map(|r| ensure_positive("right turn time", r)).transpose()?;

    Ok(Agility505 {
        left_s: left,
        right_s: right,
        asymmetry_pct: right.map(|r| (left - r).abs() / left.max(r) * 100.0),
        average_s: right.map(|r| (left + r) / 2.0),
    })
}

/// Yo-Yo intermittent recovery results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YoYoResult {
    /// Total distance covered (m).
    pub distance_m: u32,
    /// Final speed reached (km/h).
    pub final_speed_kmh: f64,
    /// Estimated VO2max (ml/kg/min).
    pub vo2max: f64,
}

/// Yo-Yo IR outcome with the Bangsbo VO2max estimate `speed·6.6 − 27.4`.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] unless distance and speed are positive.
pub fn yo_yo_ir(distance_m: u32, final_speed_kmh: f64) -> Result<YoYoResult> {
    if distance_m == 0 {
        return Err(Error::InvalidInput(
            "distance must be greater than 0".to_string(),
        ));
    }
    let speed = ensure_positive("final speed", final_speed_kmh)?;
    Ok(YoYoResult {
        distance_m,
        final_speed_kmh: speed,
        vo2max: speed * 6.6 - 27.4,
    })
}

/// Flying run-up speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunUpSpeed {
    /// Speed (m/s).
    pub metres_per_second: f64,
    /// Speed (km/h).
    pub kilometres_per_hour: f64,
}

/// Maximum run-up speed over a flying distance.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] unless distance and time are positive.
pub fn max_run_up_speed(distance_m: f64, time_s: f64) -> Result<RunUpSpeed> {
    let distance = ensure_positive("distance", distance_m)?;
    let metres_per_second = distance / ensure_positive("time", time_s)?;
    Ok(RunUpSpeed {
        metres_per_second,
        kilometres_per_hour: metres_per_second * 3.6,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_t_test_bands() {
        assert_eq!(t_test_rating(9.4).unwrap(), AgilityRating::Excellent);
        assert_eq!(t_test_rating(9.5).unwrap(), AgilityRating::Good);
        assert_eq!(t_test_rating(11.0).unwrap(), AgilityRating::Average);
        assert_eq!(t_test_rating(11.5).unwrap(), AgilityRating::BelowAverage);
        assert!(t_test_rating(0.0).is_err());
    }

    #[test]
    fn test_illinois_bands_by_sex() {
        assert_eq!(illinois_rating(15.0, Sex::Male).unwrap(), AgilityRating::Excellent);
        assert_eq!(illinois_rating(17.0, Sex::Male).unwrap(), AgilityRating::Average);
        assert_eq!(illinois_rating(19.3, Sex::Male).unwrap(), AgilityRating::Poor);
        assert_eq!(illinois_rating(17.0, Sex::Female).unwrap(), AgilityRating::Good);
        assert_eq!(illinois_rating(22.0, Sex::Female).unwrap(), AgilityRating::BelowAverage);
    }

    #[test]
    fn test_rating_display() {
        assert_eq!(AgilityRating::BelowAverage.to_string(), "Below Average");
    }

    #[test]
    fn test_505_asymmetry() {
        let result = agility_505(2.4, Some(2.5)).unwrap();
        assert!((result.asymmetry_pct.unwrap() - 4.0).abs() < 1e-9);
        assert!((result.average_s.unwrap() - 2.45).abs() < 1e-9);

        let left_only = agility_505(2.4, None).unwrap();
        assert!(left_only.asymmetry_pct.is_none());
        assert!(agility_505(2.4, Some(-1.0)).is_err());
    }

    #[test]
    fn test_yo_yo_vo2max() {
        let result = yo_yo_ir(1520, 16.5).unwrap();
        assert!((result.vo2max - 81.5).abs() < 1e-9);
        assert!(yo_yo_ir(0, 16.5).is_err());
    }

    #[test]
    fn test_max_run_up_speed() {
        let speed = max_run_up_speed(20.0, 2.5).unwrap();
        assert!((speed.metres_per_second - 8.0).abs() < 1e-12);
        assert!((speed.kilometres_per_hour - 28.8).abs() < 1e-9);
    }
}
