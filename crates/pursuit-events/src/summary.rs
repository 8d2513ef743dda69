//! Run Summary
//!
//! Condenses a finished run's resource history into the handful of numbers a
//! post-run review needs.

use serde::{Deserialize, Serialize};

use crate::HistoryRecord;

/// Final mean resource above which the pursuer is judged to have held on
pub const OUTCOME_THRESHOLD: f64 = 50.0;

/// Resource every pursuer starts with; reported when nothing was recorded
const FULL_RESOURCE: f64 = 100.0;

/// Verdict of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Pursuer still has more than half its resource
    PursuerHolds,
    /// Attrition and harassment wore the pursuer down
    AttritionWins,
}

impl Outcome {
    pub fn from_final_mean(final_mean: f64) -> Self {
        if final_mean > OUTCOME_THRESHOLD {
            Outcome::PursuerHolds
        } else {
            Outcome::AttritionWins
        }
    }
}

/// Summary statistics over a run's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub initial_mean: f64,
    pub final_mean: f64,
    pub min_mean: f64,
    /// First recorded tick at which the mean resource was zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exhausted_at: Option<u64>,
    pub outcome: Outcome,
}

impl RunSummary {
    pub fn from_history(history: &[HistoryRecord], ticks: u64) -> Self {
        let initial_mean = history.first().map_or(FULL_RESOURCE, |r| r.mean_resource);
        let final_mean = history.last().map_or(FULL_RESOURCE, |r| r.mean_resource);
        let min_mean = history
            .iter()
            .map(|r| r.mean_resource)
            .fold(initial_mean, f64::min);
        let exhausted_at = history
            .iter()
            .find(|r| r.mean_resource <= 0.0)
            .map(|r| r.tick);

        Self {
            ticks,
            initial_mean,
            final_mean,
            min_mean,
            exhausted_at,
            outcome: Outcome::from_final_mean(final_mean),
        }
    }
}
