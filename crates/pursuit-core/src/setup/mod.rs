//! Scenario Setup
//!
//! Agent creation and initial placement.

pub mod agents;

pub use agents::*;
