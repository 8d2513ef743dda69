//! Output
//!
//! JSONL logs and JSON reports for runs driven from the command line.

pub mod report;

pub use report::{write_json, write_jsonl, OutputError, RunOutputs};
