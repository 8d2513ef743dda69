//! Simulation Engine
//!
//! Owns the agents, their positions and the resource history, and advances
//! the whole world one tick at a time.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::{debug, info};

use pursuit_events::{AgentSnapshot, Event, EventKind, HistoryRecord, Position};

use crate::components::Agent;
use crate::config::{
    validate_agent_count, validate_decay_rate, validate_evader_params, ConfigError, ScenarioConfig,
};
use crate::history::HistoryRecorder;
use crate::setup::spawn_agents;
use crate::spatial::SpatialIndex;
use crate::systems::{Decision, Heading, WorldView};

/// A single pursuit/attrition run
#[derive(Debug, Clone)]
pub struct Simulation {
    agents: Vec<Agent>,
    index: SpatialIndex,
    /// Agent slots in the order they act each tick; fixed for the whole run
    order: Vec<usize>,
    tick: u64,
    history: HistoryRecorder,
    /// Events of the most recent step
    events: Vec<Event>,
}

impl Simulation {
    /// Builds a run from a scenario, drawing placement and activation order from `rng`.
    pub fn new<R: Rng>(config: &ScenarioConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut sim = Self::build(spawn_agents(config, rng)?);
        sim.order.shuffle(rng);

        info!(
            pursuers = config.pursuer_count,
            evaders = config.evader_count,
            safe_distance = config.safe_distance,
            decay_rate = config.decay_rate,
            harass_power = config.harass_power,
            "Created simulation"
        );
        Ok(sim)
    }

    /// Builds a run from explicitly placed agents. Agents act in the order given.
    pub fn from_agents(placed: Vec<(Agent, Position)>) -> Result<Self, ConfigError> {
        validate_agent_count(placed.len())?;
        let mut seen = HashSet::new();
        let mut pursuers = 0usize;
        for (agent, _) in &placed {
            if !seen.insert(agent.id()) {
                return Err(ConfigError::DuplicateAgentId(agent.id()));
            }
            match agent {
                Agent::Pursuer(p) => {
                    validate_decay_rate(p.decay_rate)?;
                    pursuers += 1;
                }
                Agent::Evader(e) => validate_evader_params(e.safe_distance, e.harass_power)?,
            }
        }
        if pursuers == 0 {
            return Err(ConfigError::NoPursuers);
        }

        Ok(Self::build(placed))
    }

    fn build(placed: Vec<(Agent, Position)>) -> Self {
        let mut index = SpatialIndex::new();
        let mut agents = Vec::with_capacity(placed.len());
        for (agent, pos) in placed {
            index.place(pos, agent.role());
            agents.push(agent);
        }
        let order = (0..agents.len()).collect();

        Self {
            agents,
            index,
            order,
            tick: 0,
            history: HistoryRecorder::new(),
            events: Vec::new(),
        }
    }

    /// Advances the world by one tick.
    ///
    /// The mean pursuer resource is recorded before anyone acts, so the record
    /// for tick `t` shows the state left behind by tick `t - 1`.
    pub fn step(&mut self) {
        let tick = self.tick;
        self.history.record(tick, self.mean_pursuer_resource());
        self.events.clear();

        for i in 0..self.order.len() {
            let slot = self.order[i];
            let decision = {
                let view = WorldView::new(&self.agents, &self.index);
                self.agents[slot].decide(slot, &view)
            };
            self.apply(slot, decision);
        }

        debug!(
            tick,
            mean_resource = self.mean_pursuer_resource(),
            events = self.events.len(),
            "Step complete"
        );
        self.tick += 1;
    }

    /// Runs `steps` ticks back to back.
    pub fn run(&mut self, steps: u64) {
        for _ in 0..steps {
            self.step();
        }
    }

    fn apply(&mut self, slot: usize, decision: Decision) {
        let agent_id = self.agents[slot].id();

        if let Some(movement) = decision.movement {
            let from = self.index.position(slot);
            let moved = match movement.heading {
                Heading::Toward => self.index.move_toward(slot, movement.target, movement.speed),
                Heading::Away => self.index.move_away(slot, movement.target, movement.speed),
            };
            if let Some(to) = moved.filter(|to| *to != from) {
                self.events.push(Event::new(
                    self.tick,
                    EventKind::Moved {
                        agent_id,
                        movement: movement.kind,
                        from,
                        to,
                    },
                ));
            }
        }

        for damage in &decision.damage {
            self.deplete(damage.target, damage.amount, Some((agent_id, damage.finishing)));
        }

        if decision.upkeep > 0.0 {
            self.deplete(slot, decision.upkeep, None);
        }
    }

    /// Takes `amount` off the pursuer in `slot`. `source` names the harassing
    /// evader and whether the hit was a finishing blow.
    fn deplete(&mut self, slot: usize, amount: f64, source: Option<(u32, bool)>) {
        let Some(pursuer) = self.agents[slot].as_pursuer_mut() else {
            return;
        };
        let was_exhausted = pursuer.is_exhausted();
        let lost = pursuer.deplete(amount);
        let pursuer_id = pursuer.id;
        let exhausted = pursuer.is_exhausted();

        if let Some((evader_id, finishing)) = source {
            if lost > 0.0 {
                self.events.push(Event::new(
                    self.tick,
                    EventKind::Harassed {
                        evader_id,
                        pursuer_id,
                        damage: lost,
                        finishing,
                    },
                ));
            }
        }

        if exhausted && !was_exhausted {
            info!(tick = self.tick, pursuer_id, "Pursuer exhausted");
            self.events
                .push(Event::new(self.tick, EventKind::Exhausted { pursuer_id }));
        }
    }

    /// Number of completed ticks
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Mean resource across all pursuers
    pub fn mean_pursuer_resource(&self) -> f64 {
        let (sum, count) = self
            .agents
            .iter()
            .filter_map(Agent::resource)
            .fold((0.0, 0usize), |(sum, count), r| (sum + r, count + 1));
        if count == 0 {
            0.0
        } else {
            sum / count as f64
        }
    }

    /// Snapshot of every agent, in agent order
    pub fn agents(&self) -> Vec<AgentSnapshot> {
        self.agents
            .iter()
            .enumerate()
            .map(|(slot, agent)| AgentSnapshot {
                id: agent.id(),
                role: agent.role(),
                position: self.index.position(slot),
                resource: agent.resource(),
            })
            .collect()
    }

    /// Resource time series, one record per completed tick
    pub fn history(&self) -> &[HistoryRecord] {
        self.history.records()
    }

    pub fn activation_order(&self) -> &[usize] {
        &self.order
    }

    /// Events emitted during the most recent step
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Removes and returns the events of the most recent step.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}
