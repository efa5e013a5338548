//! Daily readiness questionnaire and its append-only log

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::log::append_rows;
use crate::{Error, Result};

const ITEM_MIN: u8 = 1;
const ITEM_MAX: u8 = 5;
const ITEM_COUNT: u8 = 5;

const HIGH_PERCENT: f64 = 80.0;
const MODERATE_PERCENT: f64 = 60.0;

/// Five self-rated items, each 1 (worst) to 5 (best).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessScores {
    /// Sleep quality.
    pub sleep_quality: u8,
    /// Fatigue (5 = fully energized).
    pub fatigue: u8,
    /// Muscle soreness (5 = none).
    pub muscle_soreness: u8,
    /// Stress (5 = very low).
    pub stress: u8,
    /// Mood.
    pub mood: u8,
}

impl ReadinessScores {
    fn items(&self) -> [(&'static str, u8); 5] {
        [
            ("sleep quality", self.sleep_quality),
            ("fatigue", self.fatigue),
            ("muscle soreness", self.muscle_soreness),
            ("stress", self.stress),
            ("mood", self.mood),
        ]
    }
}

/// Readiness band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadinessLevel {
    /// 80% and above.
    High,
    /// 60% to below 80%.
    Moderate,
    /// Below 60%.
    Low,
}

impl fmt::Display for ReadinessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::High => "High Readiness",
            Self::Moderate => "Moderate Readiness",
            Self::Low => "Low Readiness",
        };
        f.write_str(label)
    }
}

/// Scored questionnaire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadinessAssessment {
    scores: ReadinessScores,
    total: u8,
    percent: f64,
    level: ReadinessLevel,
}

impl ReadinessAssessment {
    /// Score a questionnaire.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if any item is outside 1..=5.
    pub fn score(scores: ReadinessScores) -> Result<Self> {
        for (name, value) in scores.items() {
            if !(ITEM_MIN..=ITEM_MAX).contains(&value) {
                return Err(Error::InvalidInput(format!(
                    "{name} must be between {ITEM_MIN} and {ITEM_MAX}, got {value}"
                )));
            }
        }

        let total: u8 = scores.items().iter().map(|(_, v)| v).sum();
        let percent = f64::from(total) * 100.0 / f64::from(ITEM_COUNT * ITEM_MAX);
        let level = if percent >= HIGH_PERCENT {
            ReadinessLevel::High
        } else if percent >= MODERATE_PERCENT {
            ReadinessLevel::Moderate
        } else {
            ReadinessLevel::Low
        };

        Ok(Self {
            scores,
            total,
            percent,
            level,
        })
    }

    /// Item scores.
    #[must_use]
    pub const fn scores(&self) -> &ReadinessScores {
        &self.scores
    }

    /// Sum of item scores (5..=25).
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// Total as a percentage of the maximum.
    #[must_use]
    pub const fn percent(&self) -> f64 {
        self.percent
    }

    /// Readiness band.
    #[must_use]
    pub const fn level(&self) -> ReadinessLevel {
        self.level
    }
}

#[derive(Serialize)]
struct ReadinessRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Sleep Quality")]
    sleep_quality: u8,
    #[serde(rename = "Fatigue")]
    fatigue: u8,
    #[serde(rename = "Muscle Soreness")]
    muscle_soreness: u8,
    #[serde(rename = "Stress Levels")]
    stress: u8,
    #[serde(rename = "Mood")]
    mood: u8,
    #[serde(rename = "Total Score")]
    total: u8,
    #[serde(rename = "Readiness %")]
    percent: f64,
    #[serde(rename = "Status")]
    status: String,
}

/// Append-only CSV log of readiness assessments.
#[derive(Debug, Clone)]
pub struct ReadinessLog {
    path: PathBuf,
}

impl ReadinessLog {
    /// Log backed by the file at `path` (created on first append).
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one assessment taken at `taken_at`.
    ///
    /// The percentage is written to one decimal place.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] / [`Error::Csv`] on write failure.
    pub fn append(&self, assessment: &ReadinessAssessment, taken_at: DateTime<Utc>) -> Result<()> {
        let scores = assessment.scores();
        append_rows(
            &self.path,
            std::iter::once(ReadinessRow {
                date: taken_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                sleep_quality: scores.sleep_quality,
                fatigue: scores.fatigue,
                muscle_soreness: scores.muscle_soreness,
                stress: scores.stress,
                mood: scores.mood,
                total: assessment.total(),
                percent: (assessment.percent() * 10.0).round() / 10.0,
                status: assessment.level().to_string(),
            }),
        )?;
        Ok(())
    }
}
