//! Agent Types
//!
//! Pursuers carry a decaying resource; evaders carry the parameters of their
//! standoff-and-harass behaviour. Positions live in the spatial index.

use serde::{Deserialize, Serialize};

use pursuit_events::Role;

use crate::constants::INITIAL_RESOURCE;

/// The aggressor: chases evaders and pays upkeep every tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pursuer {
    pub id: u32,
    /// Morale or capital; only ever decreases, never below zero
    resource: f64,
    pub decay_rate: f64,
}

impl Pursuer {
    pub fn new(id: u32, decay_rate: f64) -> Self {
        Self {
            id,
            resource: INITIAL_RESOURCE,
            decay_rate,
        }
    }

    /// Starts the pursuer at a reduced resource, clamped to `[0, INITIAL_RESOURCE]`.
    pub fn with_resource(mut self, resource: f64) -> Self {
        self.resource = resource.clamp(0.0, INITIAL_RESOURCE);
        self
    }

    pub fn resource(&self) -> f64 {
        self.resource
    }

    pub fn is_exhausted(&self) -> bool {
        self.resource <= 0.0
    }

    /// Subtracts `amount` from the resource, flooring at zero.
    /// Returns the resource actually lost.
    pub fn deplete(&mut self, amount: f64) -> f64 {
        let before = self.resource;
        self.resource = (self.resource - amount).max(0.0);
        before - self.resource
    }
}

/// The fabian: keeps its distance, harasses, finishes off a weakened pursuer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evader {
    pub id: u32,
    pub safe_distance: f64,
    pub harass_power: f64,
}

impl Evader {
    pub fn new(id: u32, safe_distance: f64, harass_power: f64) -> Self {
        Self {
            id,
            safe_distance,
            harass_power,
        }
    }
}

/// Any agent on the plane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Agent {
    Pursuer(Pursuer),
    Evader(Evader),
}

impl Agent {
    pub fn id(&self) -> u32 {
        match self {
            Agent::Pursuer(p) => p.id,
            Agent::Evader(e) => e.id,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Agent::Pursuer(_) => Role::Pursuer,
            Agent::Evader(_) => Role::Evader,
        }
    }

    /// Resource level, for pursuers only
    pub fn resource(&self) -> Option<f64> {
        self.as_pursuer().map(Pursuer::resource)
    }

    pub fn as_pursuer(&self) -> Option<&Pursuer> {
        match self {
            Agent::Pursuer(p) => Some(p),
            Agent::Evader(_) => None,
        }
    }

    pub fn as_pursuer_mut(&mut self) -> Option<&mut Pursuer> {
        match self {
            Agent::Pursuer(p) => Some(p),
            Agent::Evader(_) => None,
        }
    }

}

impl From<Pursuer> for Agent {
    fn from(p: Pursuer) -> Self {
        Agent::Pursuer(p)
    }
}

impl From<Evader> for Agent {
    fn from(e: Evader) -> Self {
        Agent::Evader(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pursuer_starts_full() {
        let p = Pursuer::new(0, 0.3);
        assert_eq!(p.resource(), INITIAL_RESOURCE);
        assert!(!p.is_exhausted());
    }

    #[test]
    fn test_deplete_floors_at_zero() {
        let mut p = Pursuer::new(0, 0.3).with_resource(0.5);

        assert!((p.deplete(0.3) - 0.3).abs() < 1e-12);
        let lost = p.deplete(1.0);
        assert!((lost - 0.2).abs() < 1e-9);
        assert_eq!(p.resource(), 0.0);
        assert!(p.is_exhausted());

        assert_eq!(p.deplete(1.0), 0.0);
        assert_eq!(p.resource(), 0.0);
    }

    #[test]
    fn test_with_resource_clamps() {
        assert_eq!(Pursuer::new(0, 0.1).with_resource(150.0).resource(), 100.0);
        assert_eq!(Pursuer::new(0, 0.1).with_resource(-4.0).resource(), 0.0);
    }

    #[test]
    fn test_agent_accessors() {
        let pursuer: Agent = Pursuer::new(0, 0.3).into();
        let evader: Agent = Evader::new(1, 15.0, 0.2).into();

        assert_eq!(pursuer.role(), Role::Pursuer);
        assert_eq!(pursuer.resource(), Some(100.0));

        assert_eq!(evader.id(), 1);
        assert_eq!(evader.role(), Role::Evader);
        assert_eq!(evader.resource(), None);
        assert!(evader.as_pursuer().is_none());
    }

    #[test]
    fn test_agent_serialization_is_tagged() {
        let agent: Agent = Evader::new(3, 10.0, 0.1).into();
        let value = serde_json::to_value(&agent).unwrap();
        assert_eq!(value["role"], "evader");
        assert_eq!(value["safe_distance"], 10.0);
    }
}
