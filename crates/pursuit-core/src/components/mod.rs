//! Agent Components
//!
//! The two agent variants and their per-agent state.

pub mod agent;

pub use agent::*;
