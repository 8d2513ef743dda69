//! Run Reports
//!
//! Writes the per-run outputs: resource history and events as JSONL, the final
//! agent snapshot and summary as pretty JSON.

use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use pursuit_events::{Event, RunSummary};

use crate::simulation::Simulation;

pub const HISTORY_FILE: &str = "history.jsonl";
pub const EVENTS_FILE: &str = "events.jsonl";
pub const FINAL_AGENTS_FILE: &str = "final_agents.json";
pub const SUMMARY_FILE: &str = "summary.json";

/// Errors from writing run outputs
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn create_parent_dirs(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Writes one compact JSON line per record.
fn append_jsonl<W: Write, T: Serialize>(writer: &mut W, records: &[T]) -> Result<(), OutputError> {
    for record in records {
        serde_json::to_writer(&mut *writer, record)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Writes `value` as pretty JSON, creating parent directories as needed.
pub fn write_json<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<(), OutputError> {
    let path = path.as_ref();
    create_parent_dirs(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

/// Writes `records` as JSONL, replacing any existing file.
pub fn write_jsonl<T: Serialize>(path: impl AsRef<Path>, records: &[T]) -> Result<(), OutputError> {
    let path = path.as_ref();
    create_parent_dirs(path)?;
    let mut writer = BufWriter::new(File::create(path)?);
    append_jsonl(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

/// Output files for one run inside a directory
///
/// Events stream to disk step by step; everything else is written by
/// [`RunOutputs::finish`].
pub struct RunOutputs {
    dir: PathBuf,
    events: BufWriter<File>,
    events_written: usize,
}

impl RunOutputs {
    /// Creates `dir` and truncates the event log.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self, OutputError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        let events = BufWriter::new(File::create(dir.join(EVENTS_FILE))?);
        Ok(Self {
            dir,
            events,
            events_written: 0,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Appends one step's events to the event log.
    pub fn log_events(&mut self, events: &[Event]) -> Result<(), OutputError> {
        append_jsonl(&mut self.events, events)?;
        self.events_written += events.len();
        Ok(())
    }

    /// Writes history, final agent snapshot and summary, and flushes the event log.
    pub fn finish(mut self, sim: &Simulation, summary: &RunSummary) -> Result<(), OutputError> {
        self.events.flush()?;
        debug!(events = self.events_written, "Event log flushed");

        write_jsonl(self.dir.join(HISTORY_FILE), sim.history())?;
        write_json(self.dir.join(FINAL_AGENTS_FILE), &sim.agents())?;
        write_json(self.dir.join(SUMMARY_FILE), summary)?;
        Ok(())
    }
}
