//! Snapshot Types
//!
//! Read-only views of agent state and the resource time series, handed to
//! whatever draws the plane and the charts.

use serde::{Deserialize, Serialize};

/// A point on the simulation plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Which side of the engagement an agent fights on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The strong side that chases and bleeds resource every tick
    Pursuer,
    /// The weak side that keeps its distance and harasses
    Evader,
}

/// Agent state as seen by a renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub id: u32,
    pub role: Role,
    pub position: Position,
    /// Current resource; only pursuers carry one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<f64>,
}

/// One point of the mean-pursuer-resource time series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub tick: u64,
    pub mean_resource: f64,
}
