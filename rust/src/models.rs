//! Core data types for round-robin tournaments.

use pyo3::prelude::*;

/// Numeric team identifier, unique within a tournament by convention only.
pub type TeamId = i64;

/// Outcome recorded while the owning team was the home side.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct MatchResult {
    #[pyo3(get, set)]
    pub opponent_id: TeamId,
    /// Fraction of the contest won by the home side (1.0 win, 0.5 draw, 0.0 loss).
    #[pyo3(get, set)]
    pub score: f64,
}

impl MatchResult {
    pub fn new(opponent_id: TeamId, score: f64) -> Self {
        Self { opponent_id, score }
    }
}

#[pymethods]
impl MatchResult {
    #[new]
    fn py_new(opponent_id: TeamId, score: f64) -> Self {
        Self::new(opponent_id, score)
    }

    fn __repr__(&self) -> String {
        format!(
            "MatchResult(opponent_id={}, score={})",
            self.opponent_id, self.score
        )
    }
}

/// A participant in the tournament.
///
/// `id` and `name` never change after creation. `results` only holds entries
/// where this team played at home (or mirrored entries in single-leg mode).
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct Team {
    #[pyo3(get)]
    id: TeamId,
    #[pyo3(get)]
    name: String,
    #[pyo3(get, set)]
    results: Vec<MatchResult>,
}

impl Team {
    /// Create a team with an empty result log. No validation is performed.
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            results: Vec::new(),
        }
    }

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }

    /// Replace the whole result log.
    pub fn set_results(&mut self, results: Vec<MatchResult>) {
        self.results = results;
    }

    pub fn push_result(&mut self, opponent_id: TeamId, score: f64) {
        self.results.push(MatchResult::new(opponent_id, score));
    }

    /// Sum of every score in the result log, taken as-is.
    pub fn home_total(&self) -> f64 {
        self.results.iter().map(|r| r.score).sum()
    }
}

#[pymethods]
impl Team {
    #[new]
    fn py_new(id: TeamId, name: String) -> Self {
        Self::new(id, name)
    }

    fn __repr__(&self) -> String {
        format!(
            "Team(id={}, name={:?}, results={})",
            self.id,
            self.name,
            self.results.len()
        )
    }
}

/// A scheduled fixture. Stores ids only.
#[pyclass(frozen)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Match {
    #[pyo3(get)]
    pub home: TeamId,
    #[pyo3(get)]
    pub away: TeamId,
}

impl Match {
    pub fn new(home: TeamId, away: TeamId) -> Self {
        Self { home, away }
    }

    /// The same pairing with sides swapped.
    pub fn reversed(&self) -> Self {
        Self::new(self.away, self.home)
    }
}

#[pymethods]
impl Match {
    #[new]
    fn py_new(home: TeamId, away: TeamId) -> Self {
        Self::new(home, away)
    }

    fn __repr__(&self) -> String {
        format!("Match(home={}, away={})", self.home, self.away)
    }
}

/// One row of the ranking table.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct Standing {
    #[pyo3(get)]
    pub id: TeamId,
    #[pyo3(get)]
    pub name: String,
    #[pyo3(get)]
    pub total: f64,
}

#[pymethods]
impl Standing {
    fn __repr__(&self) -> String {
        format!(
            "Standing(id={}, name={:?}, total={})",
            self.id, self.name, self.total
        )
    }
}
