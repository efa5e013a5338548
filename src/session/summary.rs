//! Summary - statistics frozen when a session closes

use serde::{Deserialize, Serialize};

use super::{ComparisonDirection, SessionConfig, TrialRecord};

/// Summary statistics over a session's records.
///
/// Computed once by [`TrialSession::close`](super::TrialSession::close) and
/// never recomputed; later reads return the same values.
///
/// ## Undefined values
///
/// `mean`, `best`, `worst` and `range` are `None` for a session with no
/// records. `dispersion` is `0.0` for zero or one record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    count: usize,
    mean: Option<f64>,
    best: Option<TrialRecord>,
    worst: Option<TrialRecord>,
    range: Option<f64>,
    dispersion: f64,
    passed: Option<usize>,
    success_rate: Option<f64>,
}

impl Summary {
    /// Compute a summary from records in capture order.
    ///
    /// Ties for best or worst go to the earliest record.
    #[must_use]
    pub fn from_records(records: &[TrialRecord], config: &SessionConfig) -> Self {
        let count = records.len();
        let mean = mean(records);
        let best = select_extreme(records, config.direction()).cloned();
        let worst = select_extreme(records, config.direction().reversed()).cloned();
        let range = best
            .as_ref()
            .zip(worst.as_ref())
            .map(|(b, w)| (b.value() - w.value()).abs());
        let dispersion = mean.map_or(0.0, |m| population_std_dev(records, m));

        let passed = config
            .success()
            .map(|criterion| records.iter().filter(|r| criterion.is_met(r.value())).count());
        #[allow(clippy::cast_precision_loss)]
        let success_rate = passed
            .filter(|_| count > 0)
            .map(|p| p as f64 / count as f64 * 100.0);

        Self {
            count,
            mean,
            best,
            worst,
            range,
            dispersion,
            passed,
            success_rate,
        }
    }

    /// Number of records summarized.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Arithmetic mean; `None` when there are no records.
    #[must_use]
    pub const fn mean(&self) -> Option<f64> {
        self.mean
    }

    /// Best record under the session's comparison direction.
    #[must_use]
    pub const fn best(&self) -> Option<&TrialRecord> {
        self.best.as_ref()
    }

    /// Worst record under the session's comparison direction.
    #[must_use]
    pub const fn worst(&self) -> Option<&TrialRecord> {
        self.worst.as_ref()
    }

    /// Absolute spread between best and worst values.
    #[must_use]
    pub const fn range(&self) -> Option<f64> {
        self.range
    }

    /// Population standard deviation (divides by `count`).
    #[must_use]
    pub const fn dispersion(&self) -> f64 {
        self.dispersion
    }

    /// Records meeting the success criterion; `None` without a criterion.
    #[must_use]
    pub const fn passed(&self) -> Option<usize> {
        self.passed
    }

    /// Percentage of records meeting the success criterion, in `[0, 100]`.
    ///
    /// `None` without a criterion or without records.
    #[must_use]
    pub const fn success_rate(&self) -> Option<f64> {
        self.success_rate
    }
}

/// Largest absolute value, used to rescale sums that overflow.
fn max_magnitude(records: &[TrialRecord]) -> f64 {
    records.iter().map(|r| r.value().abs()).fold(0.0, f64::max)
}

#[allow(clippy::cast_precision_loss)]
fn mean(records: &[TrialRecord]) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    let n = records.len() as f64;
    let sum: f64 = records.iter().map(TrialRecord::value).sum();
    if sum.is_finite() {
        return Some(sum / n);
    }

    // Sum overflowed: average values scaled into [-1, 1].
    let scale = max_magnitude(records);
    let scaled: f64 = records.iter().map(|r| r.value() / scale).sum();
    Some(scaled / n * scale)
}

#[allow(clippy::cast_precision_loss)]
fn population_std_dev(records: &[TrialRecord], mean: f64) -> f64 {
    if records.len() <= 1 {
        return 0.0;
    }
    let n = records.len() as f64;
    let variance = records
        .iter()
        .map(|r| {
            let delta = r.value() - mean;
            delta * delta
        })
        .sum::<f64>()
        / n;
    if variance.is_finite() {
        return variance.sqrt();
    }

    // Squared deltas overflowed: same computation on values scaled into [-1, 1].
    let scale = max_magnitude(records);
    let scaled_mean = mean / scale;
    let scaled_variance = records
        .iter()
        .map(|r| {
            let delta = r.value() / scale - scaled_mean;
            delta * delta
        })
        .sum::<f64>()
        / n;
    scaled_variance.sqrt() * scale
}

fn select_extreme(records: &[TrialRecord], direction: ComparisonDirection) -> Option<&TrialRecord> {
    records.iter().fold(None::<&TrialRecord>, |incumbent, candidate| match incumbent {
        Some(current) if !direction.is_better(candidate.value(), current.value()) => Some(current),
        _ => Some(candidate),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ThresholdDirection;
    use chrono::{TimeZone, Utc};

    fn records(values: &[f64]) -> Vec<TrialRecord> {
        let ts = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        values
            .iter()
            .zip(1..)
            .map(|(&v, seq)| TrialRecord::new(seq, v, None, ts))
            .collect()
    }

    #[test]
    fn test_mean_and_dispersion() {
        let config = SessionConfig::new(ComparisonDirection::Maximize);

        let summary = Summary::from_records(&records(&[10.0, 20.0, 30.0]), &config);
        assert_eq!(summary.mean(), Some(20.0));

        let flat = Summary::from_records(&records(&[5.0, 5.0, 5.0]), &config);
        assert!(flat.dispersion().abs() < f64::EPSILON);

        let pair = Summary::from_records(&records(&[2.0, 4.0]), &config);
        assert!((pair.dispersion() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_summary_is_undefined_not_zero() {
        let config = SessionConfig::new(ComparisonDirection::Minimize);
        let summary = Summary::from_records(&[], &config);

        assert_eq!(summary.count(), 0);
        assert_eq!(summary.mean(), None);
        assert!(summary.best().is_none());
        assert!(summary.worst().is_none());
        assert!(summary.range().is_none());
        assert!(summary.dispersion().abs() < f64::EPSILON);
    }

    #[test]
    fn test_minimize_tie_break_prefers_earliest() {
        let config = SessionConfig::new(ComparisonDirection::Minimize);
        let summary = Summary::from_records(&records(&[500.0, 300.0, 300.0, 800.0]), &config);

        assert_eq!(summary.best().unwrap().sequence_number(), 2);
        assert_eq!(summary.worst().unwrap().sequence_number(), 4);
        assert_eq!(summary.range(), Some(500.0));
    }

    #[test]
    fn test_maximize_worst_tie_break_prefers_earliest() {
        let config = SessionConfig::new(ComparisonDirection::Maximize);
        let summary = Summary::from_records(&records(&[40.0, 10.0, 55.0, 10.0]), &config);

        assert_eq!(summary.best().unwrap().sequence_number(), 3);
        assert_eq!(summary.worst().unwrap().sequence_number(), 2);
    }

    #[test]
    fn test_large_magnitudes_stay_finite() {
        let config = SessionConfig::new(ComparisonDirection::Maximize);

        let max = Summary::from_records(&records(&[f64::MAX, f64::MAX]), &config);
        assert_eq!(max.mean(), Some(f64::MAX));
        assert!(max.dispersion().abs() < f64::EPSILON);

        let opposed = Summary::from_records(&records(&[1e200, -1e200]), &config);
        assert_eq!(opposed.mean(), Some(0.0));
        assert!((opposed.dispersion() / 1e200 - 1.0).abs() < 1e-12);

        let spread = Summary::from_records(&records(&[f64::MAX, f64::MAX / 2.0]), &config);
        let mean = spread.mean().unwrap();
        assert!((mean / f64::MAX - 0.75).abs() < 1e-12);
        assert!((spread.dispersion() / f64::MAX - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_success_rate_percentage() {
        let config = SessionConfig::builder(ComparisonDirection::Minimize)
            .success(1000.0, ThresholdDirection::LessThan)
            .build()
            .unwrap();
        let summary = Summary::from_records(&records(&[450.0, 1200.0, 980.0, 2000.0]), &config);

        assert_eq!(summary.passed(), Some(2));
        assert_eq!(summary.success_rate(), Some(50.0));
    }

    #[test]
    fn test_success_rate_absent_without_criterion_or_records() {
        let plain = SessionConfig::new(ComparisonDirection::Minimize);
        assert!(Summary::from_records(&records(&[1.0]), &plain)
            .success_rate()
            .is_none());

        let with_criterion = SessionConfig::builder(ComparisonDirection::Minimize)
            .success(1.0, ThresholdDirection::LessThan)
            .build()
            .unwrap();
        let empty = Summary::from_records(&[], &with_criterion);
        assert_eq!(empty.passed(), Some(0));
        assert!(empty.success_rate().is_none());
    }
}
