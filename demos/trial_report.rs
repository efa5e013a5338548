//! Reaction Drill Report Example
//!
//! Captures a ten-trial reaction drill for two athletes, closes every
//! session, prints summaries and a ranking, and appends the trials to a CSV
//! log.
//!
//! Run with: RUST_LOG=debug cargo run --example trial_report

use chrono::{Duration, Utc};
use fitness_trials::log::{SummaryLog, TrialLog};
use fitness_trials::protocols::reaction_drill_config;
use fitness_trials::session::{SessionStore, SteppingClock, TrialRecord};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Reaction Drill Report ===\n");

    // Trials four seconds apart: stimulus delay plus rest
    let clock = SteppingClock::new(Utc::now(), Duration::seconds(4));
    let mut store = SessionStore::with_clock(reaction_drill_config(), clock)?;

    // -------------------------------------------------------------------------
    // 1. Capture trials
    // -------------------------------------------------------------------------
    let drills: [(&str, [f64; 10]); 2] = [
        (
            "player1",
            [412.0, 388.0, 2000.0, 365.0, 371.0, 402.0, 359.0, 1190.0, 362.0, 359.0],
        ),
        (
            "player2",
            [298.0, 315.0, 305.0, 289.0, 2000.0, 301.0, 296.0, 310.0, 292.0, 289.0],
        ),
    ];

    for (athlete, times) in &drills {
        store.open(*athlete)?;
        for &time in times {
            // 2000 ms is the timeout value for a missed stimulus
            if time >= 2000.0 {
                store.append_labeled(athlete, time, "missed")?;
            } else {
                store.append(athlete, time)?;
            }
        }
    }

    // -------------------------------------------------------------------------
    // 2. Close and summarize
    // -------------------------------------------------------------------------
    for (athlete, summary) in store.close_all()? {
        println!("{athlete}:");
        println!("   Trials:        {}", summary.count());
        if let Some(mean) = summary.mean() {
            println!("   Average:       {mean:.2} ms");
        }
        if let Some(best) = summary.best() {
            println!("   Best:          {:.2} ms (trial {})", best.value(), best.sequence_number());
        }
        println!("   Consistency:   {:.2} ms", summary.dispersion());
        if let Some(rate) = summary.success_rate() {
            println!("   Success rate:  {rate:.1}%");
        }
        println!();
    }

    println!("Ranking:");
    for (place, (athlete, summary)) in store.ranking().into_iter().enumerate() {
        let best = summary.best().map_or(f64::NAN, TrialRecord::value);
        println!("   {}. {athlete} ({best:.0} ms)", place + 1);
    }

    // -------------------------------------------------------------------------
    // 3. Append to logs
    // -------------------------------------------------------------------------
    let dir = std::env::temp_dir();
    let trials = TrialLog::new(dir.join("reaction_drill_trials.csv"));
    let summaries = SummaryLog::new(dir.join("reaction_drill_summaries.csv"));
    for session in store.sessions() {
        trials.append_session(session)?;
        summaries.append_session(session)?;
    }

    println!("\nLogs appended:");
    println!("   {}", trials.path().display());
    println!("   {}", summaries.path().display());

    Ok(())
}
