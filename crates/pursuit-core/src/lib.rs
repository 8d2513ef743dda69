//! Pursuit/attrition simulation engine.
//!
//! A strong pursuer chases weak evaders across a bounded plane while its
//! resource bleeds away; evaders keep their distance, harass, and close in
//! once the pursuer is worn down.

pub mod components;
pub mod config;
pub mod constants;
pub mod history;
pub mod output;
pub mod setup;
pub mod simulation;
pub mod spatial;
pub mod systems;

pub use components::{Agent, Evader, Pursuer};
pub use config::{ConfigError, ScenarioConfig};
pub use history::HistoryRecorder;
pub use simulation::Simulation;
pub use spatial::SpatialIndex;

pub use pursuit_events::{
    AgentSnapshot, Event, EventKind, HistoryRecord, MovementKind, Outcome, Position, Role,
    RunSummary,
};
