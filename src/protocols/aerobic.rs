//! Aerobic endurance: Cooper 12-minute run

use super::ensure_positive;
use crate::Result;

/// Cooper regression: `VO2max = (distance − 504.9) / 44.73`.
const COOPER_OFFSET_M: f64 = 504.9;
const COOPER_DIVISOR: f64 = 44.73;

/// Estimated VO2max (ml/kg/min) from the distance covered in 12 minutes.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) for a
/// non-positive distance.
pub fn cooper_vo2max(distance_m: f64) -> Result<f64> {
    Ok((ensure_positive("distance", distance_m)? - COOPER_OFFSET_M) / COOPER_DIVISOR)
}
