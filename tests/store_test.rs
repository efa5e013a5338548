//! Multi-subject session store tests

use chrono::{TimeZone, Utc};
use fitness_trials::session::{
    ComparisonDirection, FixedClock, SessionConfig, SessionStatus, SessionStore,
};
use fitness_trials::Error;

fn store(direction: ComparisonDirection) -> SessionStore<FixedClock> {
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap());
    SessionStore::with_clock(SessionConfig::new(direction), clock).unwrap()
}

#[test]
fn test_one_rm_capture_loop() {
    let mut store = store(ComparisonDirection::Maximize);
    for (athlete, one_rm) in [("Ana", 140.0), ("Ben", 182.5), ("Cai", 165.0)] {
        store.open(athlete).unwrap();
        store.append_labeled(athlete, one_rm, "squat").unwrap();
    }

    let summaries = store.close_all().unwrap();
    assert_eq!(summaries.len(), 3);
    assert!(store.sessions().all(|s| s.status() == SessionStatus::Closed));

    let ranking: Vec<&str> = store.ranking().into_iter().map(|(s, _)| s).collect();
    assert_eq!(ranking, ["Ben", "Cai", "Ana"]);
}

#[test]
fn test_subjects_in_insertion_order() {
    let mut store = store(ComparisonDirection::Minimize);
    store.open("left").unwrap();
    store.open("right").unwrap();
    assert_eq!(store.subjects().collect::<Vec<_>>(), ["left", "right"]);
}

#[test]
fn test_append_to_closed_subject_fails() {
    let mut store = store(ComparisonDirection::Minimize);
    store.open("left").unwrap();
    store.append("left", 2.41).unwrap();
    store.session_mut("left").unwrap().close().unwrap();

    assert!(matches!(store.append("left", 2.38), Err(Error::SessionClosed { .. })));
    assert_eq!(store.session("left").unwrap().len(), 1);
}

#[test]
fn test_close_all_twice_returns_same_summaries() {
    let mut store = store(ComparisonDirection::Minimize);
    store.open("left").unwrap();
    store.append("left", 2.41).unwrap();

    let first = store.close_all().unwrap();
    let second = store.close_all().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_ranking_skips_open_sessions() {
    let mut store = store(ComparisonDirection::Minimize);
    store.open("a").unwrap();
    store.open("b").unwrap();
    store.append("a", 1.0).unwrap();
    store.session_mut("a").unwrap().close().unwrap();

    let ranking = store.ranking();
    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking[0].0, "a");
}

#[test]
fn test_store_rejects_invalid_config() {
    let config: SessionConfig =
        serde_json::from_str(r#"{"direction": "maximize", "max_trials": 0}"#).unwrap();
    assert!(matches!(SessionStore::new(config), Err(Error::InvalidInput(_))));
}
