//! Team id lookup.
//!
//! Maps team ids to their position in the tournament's team list so that an
//! unknown id surfaces as `None` instead of an out-of-range index.

use rustc_hash::FxHashMap;

use crate::models::{Team, TeamId};

#[derive(Debug, Clone, Default)]
pub struct TeamIndex {
    positions: FxHashMap<TeamId, usize>,
}

impl TeamIndex {
    /// Build the index. When an id appears more than once the first team wins.
    pub fn build(teams: &[Team]) -> Self {
        let mut positions =
            FxHashMap::with_capacity_and_hasher(teams.len(), Default::default());
        for (pos, team) in teams.iter().enumerate() {
            positions.entry(team.id()).or_insert(pos);
        }
        Self { positions }
    }

    #[inline]
    pub fn position(&self, id: TeamId) -> Option<usize> {
        self.positions.get(&id).copied()
    }
}
