//! Configuration types for a round-robin tournament.

use pyo3::prelude::*;

/// Settings fixed at tournament construction.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TournamentConfig {
    /// Schedule both legs of every pairing (home and away)
    #[pyo3(get, set)]
    pub home_away: bool,
    /// Reject construction when the team count is odd
    #[pyo3(get, set)]
    pub require_even_teams: bool,
    /// Logging verbosity (0-3), see `logging`
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            home_away: true,
            require_even_teams: false,
            verbosity: 0,
        }
    }
}

impl TournamentConfig {
    /// Default settings with the given leg mode.
    pub fn with_home_away(home_away: bool) -> Self {
        Self {
            home_away,
            ..Self::default()
        }
    }
}

#[pymethods]
impl TournamentConfig {
    #[new]
    #[pyo3(signature = (home_away=None, require_even_teams=None, verbosity=None))]
    fn new(
        home_away: Option<bool>,
        require_even_teams: Option<bool>,
        verbosity: Option<u8>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            home_away: home_away.unwrap_or(defaults.home_away),
            require_even_teams: require_even_teams.unwrap_or(defaults.require_even_teams),
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "TournamentConfig(home_away={}, require_even_teams={}, verbosity={})",
            self.home_away, self.require_even_teams, self.verbosity
        )
    }
}
