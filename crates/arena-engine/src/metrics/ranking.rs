//! Deterministic ranking: score descending, then team id ascending.

use std::cmp::Ordering;

use arena_core::TeamId;
use serde::{Deserialize, Serialize};

/// Ranks for one recorded round, best first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRanking {
    pub round_number: u32,
    pub ranks: Vec<(TeamId, u32)>,
}

impl RoundRanking {
    pub fn rank_of(&self, team_id: &TeamId) -> Option<u32> {
        self.ranks.iter().find(|(id, _)| id == team_id).map(|(_, r)| *r)
    }

    pub fn winner(&self) -> Option<&TeamId> {
        self.ranks.first().map(|(id, _)| id)
    }
}

fn by_score_then_id(a: &(&TeamId, f64), b: &(&TeamId, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

/// Assign ranks 1..=N. Equal scores never share a rank: the lower team id
/// ranks higher.
pub fn rank_by_score<'a, I>(scores: I) -> Vec<(&'a TeamId, u32)>
where
    I: IntoIterator<Item = (&'a TeamId, f64)>,
{
    let mut entries: Vec<(&TeamId, f64)> = scores.into_iter().collect();
    entries.sort_by(by_score_then_id);
    entries
        .into_iter()
        .enumerate()
        .map(|(i, (id, _))| (id, i as u32 + 1))
        .collect()
}
