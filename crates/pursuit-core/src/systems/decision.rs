//! Decision Rules
//!
//! Pursuers chase the nearest evader and pay upkeep. Evaders pick one of four
//! stances against the nearest pursuer, then harass it if it is in range.

use pursuit_events::{MovementKind, Position, Role};

use crate::components::{Agent, Evader, Pursuer};
use crate::constants::*;
use crate::spatial::{distance, SpatialIndex};

/// Read-only view of agents and their positions
#[derive(Debug, Clone, Copy)]
pub struct WorldView<'a> {
    pub agents: &'a [Agent],
    pub index: &'a SpatialIndex,
}

impl<'a> WorldView<'a> {
    pub fn new(agents: &'a [Agent], index: &'a SpatialIndex) -> Self {
        Self { agents, index }
    }

    pub fn position(&self, slot: usize) -> Position {
        self.index.position(slot)
    }

    /// Slot of the agent with `role` closest to `origin`.
    pub fn nearest_with_role(&self, origin: Position, role: Role) -> Option<usize> {
        self.index.nearest(origin, role)
    }
}

/// Which way to step relative to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Toward,
    Away,
}

/// A requested move
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Movement {
    pub kind: MovementKind,
    pub heading: Heading,
    pub target: Position,
    pub speed: f64,
}

/// Resource damage dealt to the pursuer in `target`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Damage {
    pub target: usize,
    pub amount: f64,
    pub finishing: bool,
}

/// Everything one agent wants to happen this tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decision {
    pub movement: Option<Movement>,
    /// Applied in order after the movement
    pub damage: Vec<Damage>,
    /// Resource the acting pursuer loses to its own upkeep
    pub upkeep: f64,
}

impl Decision {
    pub fn idle() -> Self {
        Self::default()
    }
}

impl Agent {
    /// Decides this tick's action for the agent sitting in `slot`.
    pub fn decide(&self, slot: usize, view: &WorldView<'_>) -> Decision {
        match self {
            Agent::Pursuer(p) => p.decide(slot, view),
            Agent::Evader(e) => e.decide(slot, view),
        }
    }
}

impl Pursuer {
    pub fn decide(&self, slot: usize, view: &WorldView<'_>) -> Decision {
        let origin = view.position(slot);
        let movement = view
            .nearest_with_role(origin, Role::Evader)
            .map(|target| Movement {
                kind: MovementKind::Pursue,
                heading: Heading::Toward,
                target: view.position(target),
                speed: PURSUE_SPEED,
            });

        Decision {
            movement,
            damage: Vec::new(),
            upkeep: self.decay_rate,
        }
    }
}

impl Evader {
    pub fn decide(&self, slot: usize, view: &WorldView<'_>) -> Decision {
        let origin = view.position(slot);
        let Some(target) = view.nearest_with_role(origin, Role::Pursuer) else {
            return Decision::idle();
        };
        let target_pos = view.position(target);
        let target_resource = view.agents[target].resource().unwrap_or(0.0);
        let dist = distance(origin, target_pos);

        let mut decision = Decision::idle();

        if target_resource < FINISHING_THRESHOLD {
            decision.movement = Some(Movement {
                kind: MovementKind::Close,
                heading: Heading::Toward,
                target: target_pos,
                speed: CLOSE_SPEED,
            });
            decision.damage.push(Damage {
                target,
                amount: self.harass_power * FINISHING_DAMAGE_MULTIPLIER,
                finishing: true,
            });
        } else if dist < self.safe_distance {
            decision.movement = Some(Movement {
                kind: MovementKind::Retreat,
                heading: Heading::Away,
                target: target_pos,
                speed: RETREAT_SPEED,
            });
        } else if dist > self.safe_distance + REENGAGE_MARGIN {
            decision.movement = Some(Movement {
                kind: MovementKind::Reengage,
                heading: Heading::Toward,
                target: target_pos,
                speed: REENGAGE_SPEED,
            });
        }

        // Harassment stacks with the finishing bonus
        if dist < self.safe_distance * HARASS_RANGE_FACTOR {
            decision.damage.push(Damage {
                target,
                amount: self.harass_power,
                finishing: false,
            });
        }

        decision
    }
}
