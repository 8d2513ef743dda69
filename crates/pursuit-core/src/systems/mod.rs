//! Decision Systems
//!
//! Per-agent decision rules. Each rule reads a frozen view of the world and
//! returns a [`Decision`]; the engine applies it before the next agent acts.

pub mod decision;

pub use decision::{Damage, Decision, Heading, Movement, WorldView};
