//! Round-robin ranking: schedule generation, result recording and ranking.
//!
//! Results are always stored from the home side's perspective. The two leg
//! modes reach a team's total through different paths:
//! - dual-leg (`home_away = true`): a team's away performance is recovered at
//!   ranking time by scanning the other teams' logs for entries against it
//!   and adding `1 - score` for each.
//! - single-leg (`home_away = false`): `record_result` mirrors
//!   `1 - score` into the away team's log immediately, and ranking only sums
//!   each team's own log.

use std::cmp::Ordering;
use thiserror::Error;

use crate::config::TournamentConfig;
use crate::models::{Match, Standing, Team, TeamId};
use crate::schedule::generate_matches;
use crate::team_index::TeamIndex;
use crate::{log_debug, log_results, log_summary};

/// Errors that can occur while running a tournament.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TournamentError {
    #[error("The number of teams must be even, got {0}")]
    OddTeamCount(usize),
    #[error("Team not found: {0}")]
    TeamNotFound(TeamId),
    #[error("Matches have already been scheduled")]
    AlreadyScheduled,
}

/// Scheduling lifecycle. Fixtures may only be generated from `Unscheduled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScheduleState {
    Unscheduled,
    Scheduled,
}

/// Ranking order for totals: highest first, NaN after everything else.
fn cmp_totals_desc(a: f64, b: f64) -> Ordering {
    a.is_nan()
        .cmp(&b.is_nan())
        .then_with(|| b.total_cmp(&a))
}

/// A round-robin tournament that owns its teams.
///
/// Teams are moved in at construction and only reachable through
/// [`teams`](Self::teams), [`team`](Self::team) and [`team_mut`](Self::team_mut).
#[derive(Debug, Clone)]
pub struct RoundRobinRanking {
    teams: Vec<Team>,
    index: TeamIndex,
    config: TournamentConfig,
    matches: Vec<Match>,
    state: ScheduleState,
}

impl RoundRobinRanking {
    /// Create a tournament accepting any team count, including zero or odd.
    pub fn new(teams: Vec<Team>, home_away: bool) -> Self {
        Self::build(teams, TournamentConfig::with_home_away(home_away))
    }

    /// Create a tournament, enforcing `require_even_teams` when set.
    pub fn with_config(
        teams: Vec<Team>,
        config: TournamentConfig,
    ) -> Result<Self, TournamentError> {
        if config.require_even_teams && teams.len() % 2 != 0 {
            return Err(TournamentError::OddTeamCount(teams.len()));
        }
        Ok(Self::build(teams, config))
    }

    fn build(teams: Vec<Team>, config: TournamentConfig) -> Self {
        let index = TeamIndex::build(&teams);
        log_summary!(
            config.verbosity,
            "Tournament: {} teams, home_away={}",
            teams.len(),
            config.home_away
        );
        Self {
            teams,
            index,
            config,
            matches: Vec::new(),
            state: ScheduleState::Unscheduled,
        }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.index.position(id).map(|pos| &self.teams[pos])
    }

    /// Mutable access to a team, e.g. to replace its results wholesale.
    pub fn team_mut(&mut self, id: TeamId) -> Option<&mut Team> {
        self.index.position(id).map(|pos| &mut self.teams[pos])
    }

    pub fn home_away(&self) -> bool {
        self.config.home_away
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn is_scheduled(&self) -> bool {
        self.state == ScheduleState::Scheduled
    }

    /// Generate the fixture list.
    ///
    /// May be called once per tournament; a second call returns
    /// `AlreadyScheduled` and leaves the existing fixtures untouched.
    pub fn schedule_matches(&mut self) -> Result<(), TournamentError> {
        if self.state == ScheduleState::Scheduled {
            return Err(TournamentError::AlreadyScheduled);
        }
        let verbosity = self.config.verbosity;
        let ids: Vec<TeamId> = self.teams.iter().map(Team::id).collect();

        let generated = generate_matches(&ids, self.config.home_away, verbosity);
        log_summary!(
            verbosity,
            "Scheduled {} matches for {} teams",
            generated.len(),
            ids.len()
        );
        self.matches.extend(generated);
        self.state = ScheduleState::Scheduled;
        Ok(())
    }

    fn position(&self, id: TeamId) -> Result<usize, TournamentError> {
        self.index
            .position(id)
            .ok_or(TournamentError::TeamNotFound(id))
    }

    /// Record a played match from the home side's perspective.
    ///
    /// `score` is the fraction won by `home` and is not range checked.
    /// In single-leg mode `1 - score` is also appended to `away`'s log.
    /// Both ids are resolved before anything is written, so an unknown id
    /// leaves every log unchanged. Repeated recordings for the same pair are
    /// kept and summed.
    pub fn record_result(
        &mut self,
        home: TeamId,
        away: TeamId,
        score: f64,
    ) -> Result<(), TournamentError> {
        let verbosity = self.config.verbosity;
        let home_pos = self.position(home)?;
        let mirror_pos = if self.config.home_away {
            None
        } else {
            Some(self.position(away)?)
        };

        self.teams[home_pos].push_result(away, score);
        log_results!(verbosity, "Result: {} v {} -> {}", home, away, score);

        if let Some(pos) = mirror_pos {
            self.teams[pos].push_result(home, 1.0 - score);
            log_results!(verbosity, "  mirrored: {} v {} -> {}", away, home, 1.0 - score);
        }
        Ok(())
    }

    /// Score earned by the team at `pos` in fixtures recorded by its opponents.
    fn away_total(&self, pos: usize, id: TeamId) -> f64 {
        self.teams
            .iter()
            .enumerate()
            .filter(|(other, _)| *other != pos)
            .flat_map(|(_, team)| team.results())
            .filter(|r| r.opponent_id == id)
            .map(|r| 1.0 - r.score)
            .sum()
    }

    /// Compute the standings, highest total first.
    ///
    /// Always returns one row per team. Scores are not range checked, so a
    /// total may be infinite or NaN; NaN totals rank last. Order among equal
    /// totals is not guaranteed.
    pub fn rank(&self) -> Vec<Standing> {
        let verbosity = self.config.verbosity;

        let mut standings: Vec<Standing> = self
            .teams
            .iter()
            .enumerate()
            .map(|(pos, team)| {
                let home = team.home_total();
                let away = if self.config.home_away {
                    self.away_total(pos, team.id())
                } else {
                    0.0
                };
                log_debug!(
                    verbosity,
                    "  {} ({}): home={} away={}",
                    team.name(),
                    team.id(),
                    home,
                    away
                );
                Standing {
                    id: team.id(),
                    name: team.name().to_string(),
                    total: home + away,
                }
            })
            .collect();

        standings.sort_by(|a, b| cmp_totals_desc(a.total, b.total));

        if let Some(leader) = standings.first() {
            log_summary!(
                verbosity,
                "Ranked {} teams, leader {} with {}",
                standings.len(),
                leader.name,
                leader.total
            );
        }
        standings
    }
}
