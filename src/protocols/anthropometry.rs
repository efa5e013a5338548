//! Girth measurements and the US Navy body-fat equation

use super::{ensure_positive, Sex};
use crate::{Error, Result};

/// US Navy circumference equations (log10 of cm).
mod navy {
    pub const MALE_GIRTH: f64 = 86.010;
    pub const MALE_HEIGHT: f64 = -70.041;
    pub const MALE_INTERCEPT: f64 = 36.76;

    pub const FEMALE_GIRTH: f64 = 163.205;
    pub const FEMALE_HEIGHT: f64 = -97.684;
    pub const FEMALE_INTERCEPT: f64 = -78.387;
}

/// Waist-to-hip ratio.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] unless both girths are positive.
pub fn waist_to_hip(waist_cm: f64, hip_cm: f64) -> Result<f64> {
    Ok(ensure_positive("waist", waist_cm)? / ensure_positive("hip", hip_cm)?)
}

/// Waist-to-chest ratio.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] unless both girths are positive.
pub fn waist_to_chest(waist_cm: f64, chest_cm: f64) -> Result<f64> {
    Ok(ensure_positive("waist", waist_cm)? / ensure_positive("chest", chest_cm)?)
}

/// Flexed minus relaxed upper-arm girth (cm).
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] unless both girths are positive.
pub fn arm_difference(relaxed_cm: f64, flexed_cm: f64) -> Result<f64> {
    Ok(ensure_positive("flexed arm", flexed_cm)? - ensure_positive("relaxed arm", relaxed_cm)?)
}

/// Estimated body fat (%) from the US Navy circumference method.
///
/// Males use `waist − neck`; females use `waist + hip − neck` and must
/// supply a hip girth.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for non-positive girths or height, a
/// missing female hip girth, or a girth sum that is not positive.
pub fn us_navy_body_fat(
    sex: Sex,
    waist_cm: f64,
    neck_cm: f64,
    hip_cm: Option<f64>,
    height_cm: f64,
) -> Result<f64> {
    let waist = ensure_positive("waist", waist_cm)?;
    let neck = ensure_positive("neck", neck_cm)?;
    let height = ensure_positive("height", height_cm)?;

    let (girth, coefficients) = match sex {
        Sex::Male => (
            waist - neck,
            (navy::MALE_GIRTH, navy::MALE_HEIGHT, navy::MALE_INTERCEPT),
        ),
        Sex::Female => {
            let hip = hip_cm.ok_or_else(|| {
                Error::InvalidInput("hip girth is required for females".to_string())
            })?;
            (
                waist + ensure_positive("hip", hip)? - neck,
                (navy::FEMALE_GIRTH, navy::FEMALE_HEIGHT, navy::FEMALE_INTERCEPT),
            )
        }
    };
    let girth = ensure_positive("circumference value", girth)?;

    let (girth_coef, height_coef, intercept) = coefficients;
    Ok(girth_coef * girth.log10() + height_coef * height.log10() + intercept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navy_body_fat_male() {
        let body_fat = us_navy_body_fat(Sex::Male, 85.0, 38.0, None, 180.0).unwrap();
        assert!((body_fat - 22.615_595_231_110_41).abs() < 1e-9);
    }

    #[test]
    fn test_navy_body_fat_female() {
        let body_fat = us_navy_body_fat(Sex::Female, 70.0, 32.0, Some(95.0), 165.0).unwrap();
        assert!((body_fat - 51.623_505_457_442_04).abs() < 1e-9);
    }

    #[test]
    fn test_navy_body_fat_rejects_bad_girths() {
        assert!(us_navy_body_fat(Sex::Female, 70.0, 32.0, None, 165.0).is_err());
        assert!(us_navy_body_fat(Sex::Male, 38.0, 40.0, None, 180.0).is_err());
        assert!(us_navy_body_fat(Sex::Male, 85.0, 38.0, None, 0.0).is_err());
    }

    #[test]
    fn test_girth_ratios() {
        assert!((waist_to_hip(80.0, 100.0).unwrap() - 0.8).abs() < 1e-12);
        assert!((waist_to_chest(80.0, 100.0).unwrap() - 0.8).abs() < 1e-12);
        assert!((arm_difference(33.0, 36.5).unwrap() - 3.5).abs() < 1e-12);
        assert!(waist_to_hip(80.0, 0.0).is_err());
    }
}
