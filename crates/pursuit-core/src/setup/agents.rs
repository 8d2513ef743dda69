//! Agent Spawning
//!
//! Creates pursuers and evaders with uniformly random starting positions in
//! their role's spawn region. Pursuers take ids `0..pursuer_count`; evaders
//! continue the sequence.

use rand::Rng;

use pursuit_events::Position;

use crate::components::{Agent, Evader, Pursuer};
use crate::config::{validate_agent_count, ConfigError, ScenarioConfig};
use crate::constants::{EVADER_SPAWN, PURSUER_SPAWN};

/// Draws a point uniformly from the square `[min, max] x [min, max]`.
pub fn random_position_in<R: Rng>(rng: &mut R, (min, max): (f64, f64)) -> Position {
    Position::new(rng.gen_range(min..=max), rng.gen_range(min..=max))
}

/// Spawns every agent the scenario asks for, pursuers first.
pub fn spawn_agents<R: Rng>(
    config: &ScenarioConfig,
    rng: &mut R,
) -> Result<Vec<(Agent, Position)>, ConfigError> {
    let total = config.pursuer_count.saturating_add(config.evader_count);
    validate_agent_count(total)?;

    let mut agents = Vec::with_capacity(total);
    let mut next_id: u32 = 0;

    for _ in 0..config.pursuer_count {
        let pursuer = Pursuer::new(next_id, config.decay_rate);
        agents.push((pursuer.into(), random_position_in(rng, PURSUER_SPAWN)));
        next_id += 1;
    }

    for _ in 0..config.evader_count {
        let evader = Evader::new(next_id, config.safe_distance, config.harass_power);
        agents.push((evader.into(), random_position_in(rng, EVADER_SPAWN)));
        next_id += 1;
    }

    Ok(agents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pursuit_events::Role;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn in_region(pos: Position, (min, max): (f64, f64)) -> bool {
        (min..=max).contains(&pos.x) && (min..=max).contains(&pos.y)
    }

    #[test]
    fn test_spawn_counts_and_ids() {
        let config = ScenarioConfig {
            pursuer_count: 2,
            evader_count: 3,
            ..Default::default()
        };
        let mut rng = SmallRng::seed_from_u64(42);
        let agents = spawn_agents(&config, &mut rng).unwrap();

        assert_eq!(agents.len(), 5);
        let ids: Vec<u32> = agents.iter().map(|(a, _)| a.id()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
        assert_eq!(agents.iter().filter(|(a, _)| a.role() == Role::Pursuer).count(), 2);
    }

    #[test]
    fn test_spawn_regions() {
        let config = ScenarioConfig {
            pursuer_count: 20,
            evader_count: 20,
            ..Default::default()
        };
        let mut rng = SmallRng::seed_from_u64(7);

        for (agent, pos) in spawn_agents(&config, &mut rng).unwrap() {
            let region = match agent.role() {
                Role::Pursuer => PURSUER_SPAWN,
                Role::Evader => EVADER_SPAWN,
            };
            assert!(in_region(pos, region), "{:?} spawned outside its region at {:?}", agent, pos);
        }
    }

    #[test]
    fn test_spawned_agents_carry_config() {
        let config = ScenarioConfig {
            safe_distance: 25.0,
            harass_power: 0.1,
            decay_rate: 0.7,
            ..Default::default()
        };
        let mut rng = SmallRng::seed_from_u64(1);
        let agents = spawn_agents(&config, &mut rng).unwrap();

        let pursuer = agents[0].0.as_pursuer().unwrap();
        assert_eq!(pursuer.decay_rate, 0.7);
        assert_eq!(pursuer.resource(), 100.0);

        let Agent::Evader(evader) = &agents[1].0 else {
            panic!("expected an evader in slot 1");
        };
        assert_eq!(evader.safe_distance, 25.0);
        assert_eq!(evader.harass_power, 0.1);
    }

    #[test]
    fn test_spawn_rejects_oversized_scenario() {
        let config = ScenarioConfig {
            pursuer_count: usize::MAX,
            evader_count: 1,
            ..Default::default()
        };
        let mut rng = SmallRng::seed_from_u64(3);

        assert!(matches!(
            spawn_agents(&config, &mut rng),
            Err(ConfigError::TooManyAgents { .. })
        ));
    }
}
