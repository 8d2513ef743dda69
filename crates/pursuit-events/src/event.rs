//! Event Types
//!
//! Everything observable that happens during a tick: movement, harassment and
//! pursuers running dry.

use serde::{Deserialize, Serialize};

use crate::Position;

/// Why an agent moved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    /// Pursuer chasing the nearest evader
    Pursue,
    /// Evader backing off from a pursuer that came too close
    Retreat,
    /// Evader closing in on a weakened pursuer
    Close,
    /// Evader drifting back toward a pursuer it lost contact with
    Reengage,
}

/// Payload of an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    Moved {
        agent_id: u32,
        movement: MovementKind,
        from: Position,
        to: Position,
    },
    Harassed {
        evader_id: u32,
        pursuer_id: u32,
        damage: f64,
        /// Set for the bonus damage dealt during a finishing move
        finishing: bool,
    },
    Exhausted {
        pursuer_id: u32,
    },
}

/// An event stamped with the tick it happened in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub tick: u64,
    #[serde(flatten)]
    pub kind: EventKind,
}

impl Event {
    pub fn new(tick: u64, kind: EventKind) -> Self {
        Self { tick, kind }
    }
}
