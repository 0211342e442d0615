//! Per-body point values and score accumulation

use serde::{Deserialize, Serialize};

use super::round::RoundState;
use super::state::BodyId;
use crate::settings::GameConfig;

/// Static id -> points lookup, built once per session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreTable {
    /// Index 0 is body id 1
    points: Vec<u32>,
    fallback: u32,
}

impl ScoreTable {
    pub fn new(config: &GameConfig) -> Self {
        let points = (0..config.num_bodies)
            .map(|idx| {
                if idx < config.high_value_bodies {
                    config.high_value_points
                } else {
                    config.default_points
                }
            })
            .collect();
        Self {
            points,
            fallback: config.default_points,
        }
    }

    /// Points for `id`; unknown ids get the default tier
    pub fn points(&self, id: BodyId) -> u32 {
        (id as usize)
            .checked_sub(1)
            .and_then(|idx| self.points.get(idx))
            .copied()
            .unwrap_or(self.fallback)
    }
}

/// Credit a catch of `id`. Returns the points awarded, or `None` once time is up.
pub fn award(round: &mut RoundState, table: &ScoreTable, id: BodyId) -> Option<u32> {
    if !(round.remaining > 0.0) {
        return None;
    }
    let points = table.points(id);
    round.score = round.score.saturating_add(points);
    Some(points)
}
