//! Trial session lifecycle tests
//!
//! Exercises the OPEN/CLOSED contract through the public API only.

use chrono::{DateTime, Duration, TimeZone, Utc};
use fitness_trials::session::{
    ComparisonDirection, FixedClock, SessionConfig, SessionStatus, SteppingClock,
    ThresholdDirection, TrialSession,
};
use fitness_trials::Error;

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
}

fn session(direction: ComparisonDirection) -> TrialSession<SteppingClock> {
    let clock = SteppingClock::new(epoch(), Duration::milliseconds(1500));
    TrialSession::with_clock("athlete-1", SessionConfig::new(direction), clock).unwrap()
}

// =============================================================================
// Append
// =============================================================================

#[test]
fn test_sequence_numbers_increase_by_one() {
    let mut session = session(ComparisonDirection::Maximize);
    for value in [31.0, 33.5, 32.0, 34.1] {
        session.append(value).unwrap();
    }

    let sequence: Vec<u64> = session.records().iter().map(|r| r.sequence_number()).collect();
    assert_eq!(sequence, [1, 2, 3, 4]);
}

#[test]
fn test_captured_at_non_decreasing() {
    let mut session = session(ComparisonDirection::Maximize);
    for value in [1.0, 2.0, 3.0] {
        session.append(value).unwrap();
    }

    let records = session.records();
    assert!(records.windows(2).all(|w| w[0].captured_at() <= w[1].captured_at()));
    assert!(records[0].captured_at() > session.opened_at());
}

#[test]
fn test_append_returns_created_record() {
    let mut session = session(ComparisonDirection::Minimize);
    let record = session.append_labeled(412.0, "").unwrap();

    assert_eq!(record.sequence_number(), 1);
    assert!((record.value() - 412.0).abs() < f64::EPSILON);
    assert_eq!(record.label(), Some(""));
    assert_eq!(session.latest().unwrap().label(), Some(""));
}

#[test]
fn test_invalid_values_rejected() {
    let mut session = session(ComparisonDirection::Minimize);
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = session.append(bad).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { .. }));
    }
    assert!(session.is_empty());
}

#[test]
fn test_no_range_validation_in_core() {
    let mut session = session(ComparisonDirection::Maximize);
    session.append(-40.0).unwrap();
    session.append(0.0).unwrap();
    session.append(1e12).unwrap();
    assert_eq!(session.len(), 3);
}

#[test]
fn test_append_after_close_fails_without_adding() {
    let mut session = session(ComparisonDirection::Minimize);
    session.append(300.0).unwrap();
    session.close().unwrap();

    let err = session.append(250.0).unwrap_err();
    assert!(matches!(err, Error::SessionClosed { ref subject_id } if subject_id == "athlete-1"));
    assert_eq!(session.len(), 1);
    assert_eq!(session.summary().unwrap().count(), 1);
}

// =============================================================================
// Close and Summary
// =============================================================================

#[test]
fn test_summary_before_close_fails() {
    let mut session = session(ComparisonDirection::Minimize);
    assert!(matches!(session.summary(), Err(Error::SessionOpen { .. })));

    session.append(300.0).unwrap();
    assert!(matches!(session.summary(), Err(Error::SessionOpen { .. })));
}

#[test]
fn test_mean_of_three() {
    let mut session = session(ComparisonDirection::Maximize);
    for value in [10.0, 20.0, 30.0] {
        session.append(value).unwrap();
    }
    let summary = session.close().unwrap();
    assert_eq!(summary.mean(), Some(20.0));
}

#[test]
fn test_population_standard_deviation() {
    let mut flat = session(ComparisonDirection::Maximize);
    for value in [5.0, 5.0, 5.0] {
        flat.append(value).unwrap();
    }
    assert!(flat.close().unwrap().dispersion().abs() < f64::EPSILON);

    let mut pair = session(ComparisonDirection::Maximize);
    pair.append(2.0).unwrap();
    pair.append(4.0).unwrap();
    assert!((pair.close().unwrap().dispersion() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_minimize_best_is_first_occurrence() {
    let mut session = session(ComparisonDirection::Minimize);
    for value in [500.0, 300.0, 300.0, 800.0] {
        session.append(value).unwrap();
    }
    let summary = session.close().unwrap();

    assert_eq!(summary.best().unwrap().sequence_number(), 2);
    assert_eq!(summary.worst().unwrap().sequence_number(), 4);
}

#[test]
fn test_empty_session_closes_cleanly() {
    let mut session = session(ComparisonDirection::Minimize);
    let summary = session.close().unwrap();

    assert_eq!(summary.count(), 0);
    assert_eq!(summary.mean(), None);
    assert!(summary.best().is_none());
    assert!(summary.dispersion().abs() < f64::EPSILON);
}

#[test]
fn test_double_close_is_idempotent_and_signalled() {
    let mut session = session(ComparisonDirection::Maximize);
    session.append(48.2).unwrap();
    session.append(51.0).unwrap();

    let first = session.close().unwrap();
    let closed_at = session.closed_at();

    let err = session.close().unwrap_err();
    assert!(err.is_already_closed());
    assert_eq!(err.frozen_summary(), Some(&first));
    assert_eq!(session.summary().unwrap(), &first);
    assert_eq!(session.closed_at(), closed_at);
    assert_eq!(session.status(), SessionStatus::Closed);
}

#[test]
fn test_success_rate_from_config() {
    let config = SessionConfig::builder(ComparisonDirection::Maximize)
        .success(40.0, ThresholdDirection::GreaterThan)
        .build()
        .unwrap();
    let mut session =
        TrialSession::with_clock("athlete-2", config, FixedClock::new(epoch())).unwrap();
    for value in [38.0, 41.5, 40.0, 44.0, 39.9] {
        session.append(value).unwrap();
    }

    let summary = session.close().unwrap();
    assert_eq!(summary.passed(), Some(2));
    assert!((summary.success_rate().unwrap() - 40.0).abs() < 1e-9);
}

#[test]
fn test_report_serializes() {
    let mut session = session(ComparisonDirection::Maximize);
    session.append_labeled(2.31, "toe-off").unwrap();
    session.close().unwrap();

    let report = session.report().unwrap();
    let json = serde_json::to_string(&report).expect("serialization failed");
    assert!(json.contains("\"subject_id\":\"athlete-1\""));
    assert!(json.contains("toe-off"));
}
