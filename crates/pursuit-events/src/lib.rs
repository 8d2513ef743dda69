//! Shared data types for the pursuit/attrition simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! The engine produces them; renderers and analysis tools consume them.

pub mod event;
pub mod snapshot;
pub mod summary;

// Re-export snapshot types
pub use snapshot::{AgentSnapshot, HistoryRecord, Position, Role};

// Re-export event types
pub use event::{Event, EventKind, MovementKind};

// Re-export summary types
pub use summary::{Outcome, RunSummary, OUTCOME_THRESHOLD};
