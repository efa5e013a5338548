//! Time to peak force from a sampled force-time curve

use super::ensure_positive;
use crate::{Error, Result};

/// Samples averaged for the baseline.
const BASELINE_SAMPLES: usize = 50;

/// Onset threshold as a fraction of the baseline-to-peak rise.
const ONSET_FRACTION: f64 = 0.05;

/// Peak force and its timing relative to force onset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakForceTiming {
    /// Peak force (N).
    pub peak_force_n: f64,
    /// Index of the first sample at or above the onset threshold.
    pub onset_index: usize,
    /// Index of the first sample equal to the peak.
    pub peak_index: usize,
    /// Time from onset to peak (ms).
    pub time_to_peak_ms: f64,
}

/// Time to peak force.
///
/// Baseline is the mean of the first 50 samples (or all, if fewer). Onset is
/// the first sample reaching `baseline + 5%` of the rise to peak.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for an empty curve, a non-finite sample
/// or a non-positive sampling rate.
#[allow(clippy::cast_precision_loss)]
pub fn time_to_peak_force(force_n: &[f64], sampling_rate_hz: f64) -> Result<PeakForceTiming> {
    let rate = ensure_positive("sampling rate", sampling_rate_hz)?;
    if force_n.is_empty() {
        return Err(Error::InvalidInput("force curve is empty".to_string()));
    }
    if let Some(bad) = force_n.iter().find(|f| !f.is_finite()) {
        return Err(Error::InvalidInput(format!("force sample must be finite, got {bad}")));
    }

    let window = &force_n[..force_n.len().min(BASELINE_SAMPLES)];
    let baseline = window.iter().sum::<f64>() / window.len() as f64;

    let (peak_index, peak_force_n) = force_n
        .iter()
        .copied()
        .enumerate()
        .fold((0, force_n[0]), |(best_i, best), (i, f)| {
            if f > best {
                (i, f)
            } else {
                (best_i, best)
            }
        });

    let threshold = baseline + ONSET_FRACTION * (peak_force_n - baseline);
    let onset_index = force_n.iter().position(|&f| f >= threshold).unwrap_or(0);

    Ok(PeakForceTiming {
        peak_force_n,
        onset_index,
        peak_index,
        time_to_peak_ms: (peak_index as f64 - onset_index as f64) / rate * 1000.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_to_peak_force() {
        let curve = [10.0, 15.0, 30.0, 100.0, 200.0, 350.0, 400.0];
        let timing = time_to_peak_force(&curve, 1000.0).unwrap();

        // baseline ≈ 157.9, threshold ≈ 170.0
        assert_eq!(timing.peak_index, 6);
        assert!((timing.peak_force_n - 400.0).abs() < f64::EPSILON);
        assert_eq!(timing.onset_index, 4);
        assert!((timing.time_to_peak_ms - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_first_peak_wins() {
        let timing = time_to_peak_force(&[0.0, 5.0, 5.0], 100.0).unwrap();
        assert_eq!(timing.peak_index, 1);
    }

    #[test]
    fn test_rejects_empty_and_bad_rate() {
        assert!(time_to_peak_force(&[], 1000.0).is_err());
        assert!(time_to_peak_force(&[1.0], 0.0).is_err());
        assert!(time_to_peak_force(&[1.0, f64::NAN], 10.0).is_err());
    }
}
