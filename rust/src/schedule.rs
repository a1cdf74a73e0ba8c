//! Round-robin fixture generation.
//!
//! Walks every ordered pair of distinct team positions, outer loop over the
//! away side `h` and inner loop over the home side `a`, and emits
//! `Match { home: a, away: h }`:
//! - dual-leg: every ordered pair, `n * (n - 1)` fixtures
//! - single-leg: a pair is skipped when its reverse fixture was already
//!   emitted, leaving `n * (n - 1) / 2` fixtures

use rustc_hash::FxHashSet;

use crate::log_debug;
use crate::models::{Match, TeamId};

/// Generate the fixture list for the given team ids, in list order.
pub fn generate_matches(team_ids: &[TeamId], home_away: bool, verbosity: u8) -> Vec<Match> {
    let n = team_ids.len();
    let capacity = if home_away {
        n * n.saturating_sub(1)
    } else {
        n * n.saturating_sub(1) / 2
    };
    let mut matches = Vec::with_capacity(capacity);
    let mut emitted: FxHashSet<Match> =
        FxHashSet::with_capacity_and_hasher(capacity, Default::default());

    for (i, &h) in team_ids.iter().enumerate() {
        for (j, &a) in team_ids.iter().enumerate() {
            if i == j {
                continue;
            }
            let fixture = Match::new(a, h);
            if !home_away && emitted.contains(&fixture.reversed()) {
                log_debug!(verbosity, "  skip {} v {}: reverse leg exists", a, h);
                continue;
            }
            log_debug!(verbosity, "  fixture {} v {}", a, h);
            emitted.insert(fixture);
            matches.push(fixture);
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_ids(n: usize) -> Vec<TeamId> {
        (0..n as TeamId).collect()
    }

    fn unordered(m: &Match) -> (TeamId, TeamId) {
        (m.home.min(m.away), m.home.max(m.away))
    }

    #[test]
    fn test_no_teams_no_matches() {
        assert!(generate_matches(&[], true, 0).is_empty());
        assert!(generate_matches(&[], false, 0).is_empty());
    }

    #[test]
    fn test_single_team_no_matches() {
        assert!(generate_matches(&[7], true, 0).is_empty());
        assert!(generate_matches(&[7], false, 0).is_empty());
    }

    #[test]
    fn test_match_counts() {
        for n in 0..=10 {
            let ids = make_ids(n);
            assert_eq!(generate_matches(&ids, true, 0).len(), n * n.saturating_sub(1));
            assert_eq!(
                generate_matches(&ids, false, 0).len(),
                n * n.saturating_sub(1) / 2
            );
        }
    }

    #[test]
    fn test_odd_counts_are_scheduled() {
        let ids = make_ids(5);
        assert_eq!(generate_matches(&ids, true, 0).len(), 20);
        assert_eq!(generate_matches(&ids, false, 0).len(), 10);
    }

    #[test]
    fn test_single_leg_pairs_are_unique() {
        let ids = vec![4, 9, 1, 6, 3, 8];
        let matches = generate_matches(&ids, false, 0);
        let pairs: FxHashSet<(TeamId, TeamId)> = matches.iter().map(unordered).collect();
        assert_eq!(pairs.len(), matches.len());
    }

    #[test]
    fn test_dual_leg_reverse_present_once() {
        let ids = vec![4, 9, 1, 6, 3];
        let matches = generate_matches(&ids, true, 0);
        for m in &matches {
            let reverse_count = matches.iter().filter(|o| **o == m.reversed()).count();
            assert_eq!(reverse_count, 1, "reverse of {:?}", m);
        }
    }

    #[test]
    fn test_traversal_order() {
        // Outer loop is the away side, inner loop the home side.
        let matches = generate_matches(&[1, 2, 3], true, 0);
        assert_eq!(
            matches,
            vec![
                Match::new(2, 1),
                Match::new(3, 1),
                Match::new(1, 2),
                Match::new(3, 2),
                Match::new(1, 3),
                Match::new(2, 3),
            ]
        );

        // Single leg keeps the first direction reached for each pair.
        let matches = generate_matches(&[1, 2, 3], false, 0);
        assert_eq!(
            matches,
            vec![Match::new(2, 1), Match::new(3, 1), Match::new(3, 2)]
        );
    }
}
