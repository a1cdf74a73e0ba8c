//! Round-robin tournament scheduling and ranking.
//!
//! Generates single- or dual-leg fixture lists, records results from the home
//! side's perspective and ranks teams by accumulated score. Python bindings
//! are exposed through PyO3.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

mod config;
pub mod logging;
mod models;
pub mod schedule;
mod team_index;
pub mod tournament;

pub use config::TournamentConfig;
pub use models::{Match, MatchResult, Standing, Team, TeamId};
pub use schedule::generate_matches;
pub use tournament::{RoundRobinRanking, TournamentError};

fn to_py_err(err: TournamentError) -> PyErr {
    match &err {
        TournamentError::OddTeamCount(_) => PyValueError::new_err(err.to_string()),
        TournamentError::TeamNotFound(_) => PyKeyError::new_err(err.to_string()),
        TournamentError::AlreadyScheduled => PyRuntimeError::new_err(err.to_string()),
    }
}

/// Round-robin tournament (PyO3 wrapper).
///
/// Teams passed in are copied; read them back through `teams` or `team(id)`.
#[pyclass(name = "RoundRobinRanking")]
pub struct PyRoundRobinRanking {
    inner: RoundRobinRanking,
}

#[pymethods]
impl PyRoundRobinRanking {
    /// # Raises
    /// * ValueError if `require_even_teams` is set and the team count is odd
    #[new]
    #[pyo3(signature = (teams, home_away=true, require_even_teams=false, verbosity=0))]
    fn new(
        teams: Vec<Team>,
        home_away: bool,
        require_even_teams: bool,
        verbosity: u8,
    ) -> PyResult<Self> {
        let config = TournamentConfig {
            home_away,
            require_even_teams,
            verbosity,
        };
        let inner = RoundRobinRanking::with_config(teams, config).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    #[getter]
    fn teams(&self) -> Vec<Team> {
        self.inner.teams().to_vec()
    }

    #[getter]
    fn home_away(&self) -> bool {
        self.inner.home_away()
    }

    #[getter]
    fn matches(&self) -> Vec<Match> {
        self.inner.matches().to_vec()
    }

    #[getter]
    fn config(&self) -> TournamentConfig {
        self.inner.config().clone()
    }

    #[getter]
    fn is_scheduled(&self) -> bool {
        self.inner.is_scheduled()
    }

    fn team(&self, id: TeamId) -> Option<Team> {
        self.inner.team(id).cloned()
    }

    /// Replace a team's result log.
    ///
    /// # Raises
    /// * KeyError if no team has this id
    fn set_team_results(&mut self, id: TeamId, results: Vec<MatchResult>) -> PyResult<()> {
        let team = self
            .inner
            .team_mut(id)
            .ok_or_else(|| to_py_err(TournamentError::TeamNotFound(id)))?;
        team.set_results(results);
        Ok(())
    }

    /// # Raises
    /// * RuntimeError if matches were already scheduled
    fn schedule_matches(&mut self) -> PyResult<()> {
        self.inner.schedule_matches().map_err(to_py_err)
    }

    /// # Raises
    /// * KeyError if the home team (or the away team in single-leg mode) is unknown
    fn record_result(&mut self, home: TeamId, away: TeamId, score: f64) -> PyResult<()> {
        self.inner
            .record_result(home, away, score)
            .map_err(to_py_err)
    }

    fn rank(&self) -> Vec<Standing> {
        self.inner.rank()
    }

    fn __repr__(&self) -> String {
        format!(
            "RoundRobinRanking(teams={}, home_away={}, matches={})",
            self.inner.teams().len(),
            self.inner.home_away(),
            self.inner.matches().len()
        )
    }
}

/// The round_robin_ranking Python module.
#[pymodule]
fn round_robin_ranking(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<Team>()?;
    m.add_class::<MatchResult>()?;
    m.add_class::<Match>()?;
    m.add_class::<Standing>()?;

    // Config types
    m.add_class::<TournamentConfig>()?;

    // Tournament
    m.add_class::<PyRoundRobinRanking>()?;

    Ok(())
}
