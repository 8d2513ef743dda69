//! Spatial Index
//!
//! Owns every agent's position on the bounded plane, backed by an R*-tree for
//! nearest-neighbour queries. All movement goes through here so the boundary
//! clamp applies no matter who moves.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use pursuit_events::{Position, Role};

use crate::constants::POSITION_MAX;

/// Euclidean distance between two positions.
pub fn distance(a: Position, b: Position) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Clamps a coordinate pair into `[0, POSITION_MAX]` on both axes.
pub fn clamp_to_plane(pos: Position) -> Position {
    Position::new(pos.x.clamp(0.0, POSITION_MAX), pos.y.clamp(0.0, POSITION_MAX))
}

/// Tree entry: an agent slot, its role and where it stands.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentLocation {
    pub slot: usize,
    pub role: Role,
    pub position: [f64; 2],
}

impl AgentLocation {
    fn new(slot: usize, role: Role, pos: Position) -> Self {
        Self {
            slot,
            role,
            position: [pos.x, pos.y],
        }
    }
}

impl RTreeObject for AgentLocation {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.position)
    }
}

impl PointDistance for AgentLocation {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.position[0] - point[0];
        let dy = self.position[1] - point[1];
        dx * dx + dy * dy
    }
}

/// Positions of all agents, addressed by agent slot
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: RTree<AgentLocation>,
    /// Slot-ordered copy of the tree entries for direct lookup
    locations: Vec<AgentLocation>,
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            locations: Vec::new(),
        }
    }

    /// Registers a new agent at `pos` (clamped) and returns its slot.
    pub fn place(&mut self, pos: Position, role: Role) -> usize {
        let slot = self.locations.len();
        let location = AgentLocation::new(slot, role, clamp_to_plane(pos));
        self.tree.insert(location.clone());
        self.locations.push(location);
        slot
    }

    /// Position of the agent in `slot`.
    ///
    /// Panics if the slot was never placed.
    pub fn position(&self, slot: usize) -> Position {
        let [x, y] = self.locations[slot].position;
        Position::new(x, y)
    }

    /// Slot of the agent with `role` closest to `origin`, or `None` if no agent
    /// has that role.
    ///
    /// Equidistant candidates resolve to the lowest slot.
    pub fn nearest(&self, origin: Position, role: Role) -> Option<usize> {
        let mut hits = self
            .tree
            .nearest_neighbor_iter_with_distance_2(&[origin.x, origin.y])
            .filter(|(loc, _)| loc.role == role);

        let (first, best_d2) = hits.next()?;
        let mut best = first.slot;
        for (loc, d2) in hits {
            if d2 > best_d2 {
                break;
            }
            best = best.min(loc.slot);
        }
        Some(best)
    }

    /// Moves `slot` `speed` units toward `target` (may pass it). Returns the new
    /// position, or `None` if the agent already sits on the target.
    pub fn move_toward(&mut self, slot: usize, target: Position, speed: f64) -> Option<Position> {
        self.step_along(slot, target, speed)
    }

    /// Moves `slot` `speed` units directly away from `target`. Returns the new
    /// position, or `None` if the agent sits on the target.
    pub fn move_away(&mut self, slot: usize, target: Position, speed: f64) -> Option<Position> {
        self.step_along(slot, target, -speed)
    }

    fn step_along(&mut self, slot: usize, target: Position, signed_speed: f64) -> Option<Position> {
        let current = self.position(slot);
        let dx = target.x - current.x;
        let dy = target.y - current.y;
        let dist = dx.hypot(dy);
        if dist <= 0.0 {
            return None;
        }

        let next = clamp_to_plane(Position::new(
            current.x + dx / dist * signed_speed,
            current.y + dy / dist * signed_speed,
        ));
        self.relocate(slot, next);
        Some(next)
    }

    /// Moves the tree entry for `slot` so later queries in the same tick see it.
    fn relocate(&mut self, slot: usize, pos: Position) {
        let old = &self.locations[slot];
        self.tree.remove(old);
        let moved = AgentLocation::new(slot, old.role, pos);
        self.tree.insert(moved.clone());
        self.locations[slot] = moved;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_distance() {
        assert!((distance(Position::new(0.0, 0.0), Position::new(3.0, 4.0)) - 5.0).abs() < EPS);
        assert_eq!(distance(Position::new(7.0, 7.0), Position::new(7.0, 7.0)), 0.0);
    }

    #[test]
    fn test_place_clamps() {
        let mut index = SpatialIndex::new();
        let slot = index.place(Position::new(120.0, -3.0), Role::Pursuer);
        assert_eq!(index.position(slot), Position::new(POSITION_MAX, 0.0));
    }

    #[test]
    fn test_nearest() {
        let mut index = SpatialIndex::new();
        index.place(Position::new(10.0, 10.0), Role::Pursuer);
        let b = index.place(Position::new(50.0, 50.0), Role::Evader);
        let c = index.place(Position::new(12.0, 10.0), Role::Evader);

        assert_eq!(index.nearest(Position::new(0.0, 0.0), Role::Evader), Some(c));
        assert_eq!(index.nearest(Position::new(60.0, 60.0), Role::Evader), Some(b));
    }

    #[test]
    fn test_nearest_filters_by_role() {
        let mut index = SpatialIndex::new();
        index.place(Position::new(1.0, 1.0), Role::Pursuer);
        let far = index.place(Position::new(80.0, 80.0), Role::Evader);

        assert_eq!(index.nearest(Position::new(0.0, 0.0), Role::Evader), Some(far));
    }

    #[test]
    fn test_nearest_empty_is_none() {
        let mut index = SpatialIndex::new();
        assert_eq!(index.nearest(Position::new(0.0, 0.0), Role::Evader), None);

        index.place(Position::new(10.0, 10.0), Role::Pursuer);
        assert_eq!(index.nearest(Position::new(0.0, 0.0), Role::Evader), None);
    }

    #[test]
    fn test_nearest_tie_prefers_first_slot() {
        let mut index = SpatialIndex::new();
        let a = index.place(Position::new(10.0, 0.0), Role::Evader);
        index.place(Position::new(0.0, 10.0), Role::Evader);
        index.place(Position::new(0.0, 10.0), Role::Evader);

        assert_eq!(index.nearest(Position::new(0.0, 0.0), Role::Evader), Some(a));
    }

    #[test]
    fn test_nearest_sees_moves() {
        let mut index = SpatialIndex::new();
        let a = index.place(Position::new(20.0, 20.0), Role::Evader);
        let b = index.place(Position::new(30.0, 30.0), Role::Evader);
        assert_eq!(index.nearest(Position::new(0.0, 0.0), Role::Evader), Some(a));

        index.move_away(a, Position::new(0.0, 0.0), 30.0).unwrap();
        assert_eq!(index.nearest(Position::new(0.0, 0.0), Role::Evader), Some(b));
    }

    #[test]
    fn test_move_toward() {
        let mut index = SpatialIndex::new();
        let slot = index.place(Position::new(10.0, 10.0), Role::Pursuer);

        let next = index.move_toward(slot, Position::new(20.0, 10.0), 1.2).unwrap();
        assert!((next.x - 11.2).abs() < EPS);
        assert!((next.y - 10.0).abs() < EPS);
        assert_eq!(index.position(slot), next);
    }

    #[test]
    fn test_move_away() {
        let mut index = SpatialIndex::new();
        let slot = index.place(Position::new(10.0, 10.0), Role::Evader);

        let next = index.move_away(slot, Position::new(10.0, 20.0), 1.5).unwrap();
        assert!((next.x - 10.0).abs() < EPS);
        assert!((next.y - 8.5).abs() < EPS);
    }

    #[test]
    fn test_zero_distance_move_is_noop() {
        let mut index = SpatialIndex::new();
        let slot = index.place(Position::new(30.0, 30.0), Role::Evader);

        assert_eq!(index.move_toward(slot, Position::new(30.0, 30.0), 1.0), None);
        assert_eq!(index.move_away(slot, Position::new(30.0, 30.0), 1.0), None);
        assert_eq!(index.position(slot), Position::new(30.0, 30.0));
    }

    #[test]
    fn test_moves_clamp_at_edges() {
        let mut index = SpatialIndex::new();
        let low = index.place(Position::new(0.5, 0.5), Role::Evader);
        let high = index.place(Position::new(99.5, 99.5), Role::Evader);

        let next = index.move_away(low, Position::new(10.0, 10.0), 1.5).unwrap();
        assert_eq!(next, Position::new(0.0, 0.0));

        let next = index.move_away(high, Position::new(50.0, 50.0), 1.5).unwrap();
        assert_eq!(next, Position::new(POSITION_MAX, POSITION_MAX));
    }

    #[test]
    fn test_move_may_overshoot_target() {
        let mut index = SpatialIndex::new();
        let slot = index.place(Position::new(10.0, 10.0), Role::Pursuer);

        let next = index.move_toward(slot, Position::new(10.5, 10.0), 1.5).unwrap();
        assert!((next.x - 11.5).abs() < EPS);
    }
}
