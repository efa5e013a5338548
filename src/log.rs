//! Append-only CSV logs for closed sessions
//!
//! Rows are only ever appended. The header is written when the file is
//! empty, so one file can accumulate many sessions across runs.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::session::{Clock, Summary, TrialRecord, TrialSession};
use crate::Result;

/// Append `rows` to the CSV file at `path`, writing a header first if the
/// file is empty. Returns the number of rows written.
pub(crate) fn append_rows<R: Serialize>(
    path: &Path,
    rows: impl IntoIterator<Item = R>,
) -> Result<usize> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let needs_header = file.metadata()?.len() == 0;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(needs_header)
        .from_writer(file);
    let mut written = 0;
    for row in rows {
        writer.serialize(row)?;
        written += 1;
    }
    writer.flush()?;

    debug!(path = %path.display(), rows = written, header = needs_header, "log rows appended");
    Ok(written)
}

#[derive(Serialize)]
struct TrialRow<'a> {
    subject_id: &'a str,
    sequence_number: u64,
    value: f64,
    unit: Option<&'a str>,
    label: Option<&'a str>,
    captured_at: String,
}

#[derive(Serialize)]
struct SummaryRow<'a> {
    subject_id: &'a str,
    count: usize,
    mean: Option<f64>,
    best: Option<f64>,
    worst: Option<f64>,
    dispersion: f64,
    success_rate: Option<f64>,
    unit: Option<&'a str>,
}

/// Per-trial log: one row per record of a closed session.
///
/// Columns: `subject_id,sequence_number,value,unit,label,captured_at`
/// (`captured_at` in RFC 3339). Absent labels and units are empty fields.
#[derive(Debug, Clone)]
pub struct TrialLog {
    path: PathBuf,
}

impl TrialLog {
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

    /// Append every record of a closed session. Returns rows written.
    ///
    /// # Errors
    ///
    /// - [`Error::SessionOpen`](crate::Error::SessionOpen) if the session is open
    /// - [`Error::Io`](crate::Error::Io) / [`Error::Csv`](crate::Error::Csv) on write failure
    pub fn append_session<C: Clock>(&self, session: &TrialSession<C>) -> Result<usize> {
        session.summary()?;
        let subject_id = session.subject_id();
        let unit = session.config().unit();
        append_rows(
            &self.path,
            session.records().iter().map(|record: &TrialRecord| TrialRow {
                subject_id,
                sequence_number: record.sequence_number(),
                value: record.value(),
                unit,
                label: record.label(),
                captured_at: record.captured_at().to_rfc3339(),
            }),
        )
    }
}

/// Per-session log: one summary row per closed session.
///
/// Columns: `subject_id,count,mean,best,worst,dispersion,success_rate,unit`.
/// Undefined statistics are empty fields.
#[derive(Debug, Clone)]
pub struct SummaryLog {
    path: PathBuf,
}

impl SummaryLog {
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

    /// Append one summary row.
    ///
    /// # Errors
    ///
    /// [`Error::Io`](crate::Error::Io) / [`Error::Csv`](crate::Error::Csv) on write failure.
    pub fn append_summary(
        &self,
        subject_id: &str,
        summary: &Summary,
        unit: Option<&str>,
    ) -> Result<()> {
        append_rows(
            &self.path,
            std::iter::once(SummaryRow {
                subject_id,
                count: summary.count(),
                mean: summary.mean(),
                best: summary.best().map(TrialRecord::value),
                worst: summary.worst().map(TrialRecord::value),
                dispersion: summary.dispersion(),
                success_rate: summary.success_rate(),
                unit,
            }),
        )?;
        Ok(())
    }

    /// Append the summary of a closed session.
    ///
    /// # Errors
    ///
    /// [`Error::SessionOpen`](crate::Error::SessionOpen) if the session is
    /// open, otherwise as [`append_summary`](Self::append_summary).
    pub fn append_session<C: Clock>(&self, session: &TrialSession<C>) -> Result<()> {
        let summary = session.summary()?;
        self.append_summary(session.subject_id(), summary, session.config().unit())
    }
}
