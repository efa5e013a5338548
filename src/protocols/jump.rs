//! Jump outcomes: countermovement jump and standing broad jump

use super::ensure_positive;
use crate::Result;

/// Gravitational acceleration used for flight-time jump height (m/s²).
const GRAVITY: f64 = 9.81;

/// Sayers regression coefficients (jump height in cm, mass in kg).
mod sayers {
    pub const HEIGHT_CM: f64 = 60.7;
    pub const MASS_KG: f64 = 45.3;
    pub const INTERCEPT: f64 = -2055.0;
}

/// Harman regression coefficients as used for the broad jump.
mod harman {
    pub const DISTANCE: f64 = 21.9;
    pub const MASS_KG: f64 = 16.6;
    pub const HEIGHT_CM: f64 = -0.3;
    pub const INTERCEPT: f64 = -1416.0;
}

/// Countermovement jump results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CmjOutcome {
    /// Jump height (m).
    pub height_m: f64,
    /// Jump height (cm).
    pub height_cm: f64,
    /// Sayers peak power (W).
    pub peak_power_w: f64,
    /// Peak power per kg of body mass (W/kg).
    pub relative_power_w_per_kg: f64,
    /// Reactive strength index, when a contact time was given.
    pub reactive_strength_index: Option<f64>,
}

/// Countermovement jump outcomes from flight time.
///
/// Height is `g·t²/8`. A missing or non-positive contact time yields no RSI.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) unless flight
/// time and body mass are positive.
pub fn cmj_outcomes(
    flight_time_s: f64,
    body_mass_kg: f64,
    contact_time_s: Option<f64>,
) -> Result<CmjOutcome> {
    let flight = ensure_positive("flight time", flight_time_s)?;
    let mass = ensure_positive("body mass", body_mass_kg)?;

    let height_m = GRAVITY * flight * flight / 8.0;
    let height_cm = height_m * 100.0;
    let peak_power_w = sayers::HEIGHT_CM * height_cm + sayers::MASS_KG * mass + sayers::INTERCEPT;

    Ok(CmjOutcome {
        height_m,
        height_cm,
        peak_power_w,
        relative_power_w_per_kg: peak_power_w / mass,
        reactive_strength_index: contact_time_s
            .filter(|contact| contact.is_finite() && *contact > 0.0)
            .map(|contact| height_m / contact),
    })
}

/// Standing broad jump results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BroadJumpOutcome {
    /// Jump distance (m).
    pub distance_m: f64,
    /// Jump distance (cm).
    pub distance_cm: f64,
    /// Distance per kg of body mass (cm/kg).
    pub relative_distance_cm_per_kg: f64,
    /// Harman peak power (W).
    pub peak_power_w: f64,
    /// Peak power per kg of body mass (W/kg).
    pub relative_power_w_per_kg: f64,
}

/// Standing broad jump outcomes.
///
/// Distance enters the power regression in metres.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) unless all
/// inputs are positive.
pub fn broad_jump_outcomes(
    distance_m: f64,
    body_mass_kg: f64,
    height_cm: f64,
) -> Result<BroadJumpOutcome> {
    let distance = ensure_positive("jump distance", distance_m)?;
    let mass = ensure_positive("body mass", body_mass_kg)?;
    let stature = ensure_positive("height", height_cm)?;

    let distance_cm = distance * 100.0;
    let peak_power_w = harman::DISTANCE * distance
        + harman::MASS_KG * mass
        + harman::HEIGHT_CM * stature
        + harman::INTERCEPT;

    Ok(BroadJumpOutcome {
        distance_m: distance,
        distance_cm,
        relative_distance_cm_per_kg: distance_cm / mass,
        peak_power_w,
        relative_power_w_per_kg: peak_power_w / mass,
    })
}
