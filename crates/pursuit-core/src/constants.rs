//! Simulation constants
//!
//! Fixed rules of the engagement. Scenario-level knobs live in
//! [`crate::config::ScenarioConfig`].

/// Largest coordinate an agent may occupy; keeps agents strictly inside the 100x100 plane
pub const POSITION_MAX: f64 = 99.9;

/// Upper bound on pursuers plus evaders in one scenario
pub const MAX_AGENTS: usize = 100_000;

/// Resource every pursuer starts with
pub const INITIAL_RESOURCE: f64 = 100.0;

/// Pursuer chase speed (units per tick)
pub const PURSUE_SPEED: f64 = 1.2;
/// Evader speed when closing in on a weakened pursuer
pub const CLOSE_SPEED: f64 = 1.5;
/// Evader speed when backing off
pub const RETREAT_SPEED: f64 = 1.5;
/// Evader speed when drifting back into contact
pub const REENGAGE_SPEED: f64 = 1.0;

/// Pursuer resource below which evaders go in for the finish
pub const FINISHING_THRESHOLD: f64 = 30.0;
/// Damage multiplier on harass power during a finishing move
pub const FINISHING_DAMAGE_MULTIPLIER: f64 = 2.0;
/// Slack beyond the safe distance before an evader re-engages
pub const REENGAGE_MARGIN: f64 = 5.0;
/// Harassment reaches out to this multiple of the safe distance
pub const HARASS_RANGE_FACTOR: f64 = 1.5;

/// Pursuer spawn region: [min, max] on both axes
pub const PURSUER_SPAWN: (f64, f64) = (0.0, 20.0);
/// Evader spawn region: [min, max] on both axes
pub const EVADER_SPAWN: (f64, f64) = (40.0, 60.0);
