//! PageRank estimation
//!
//! Two independent estimators of the random-surfer stationary distribution:
//! - [`MonteCarloEstimator`] walks the chain defined by [`transition_model`]
//!   and counts visits
//! - [`IterativeSolver`] applies the PageRank recurrence until no page moves
//!   by more than epsilon

mod convergence;
mod iteration;
mod sampling;
mod transition;

pub use convergence::{has_converged, max_delta};
pub use iteration::{apply_recurrence, iterate_pagerank, IterationOutcome, IterativeSolver};
pub use sampling::{sample_pagerank, sample_pagerank_seeded, MonteCarloEstimator};
pub use transition::{transition_model, Distribution};

use crate::error::{LinkRankError, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// Default probability of following a link rather than jumping
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Default number of random-walk samples
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Default per-page convergence tolerance
pub const DEFAULT_EPSILON: f64 = 0.001;

/// Default iteration cap for the power iteration
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Page → rank mapping, ordered by page identifier
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankVector {
    ranks: BTreeMap<String, f64>,
}

impl RankVector {
    pub fn get(&self, page: &str) -> Option<f64> {
        self.ranks.get(page).copied()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// `(page, rank)` pairs in lexicographic page order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.ranks.iter().map(|(page, rank)| (page.as_str(), *rank))
    }

    /// Ranks in lexicographic page order
    pub fn values(&self) -> Vec<f64> {
        self.ranks.values().copied().collect()
    }

    pub fn sum(&self) -> f64 {
        self.ranks.values().sum()
    }

    pub fn into_inner(self) -> BTreeMap<String, f64> {
        self.ranks
    }
}

impl FromIterator<(String, f64)> for RankVector {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            ranks: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, f64)> for RankVector {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(page, rank)| (page.to_string(), rank))
            .collect()
    }
}

pub(crate) fn validate_damping(damping: f64) -> Result<()> {
    if !(damping > 0.0 && damping < 1.0) {
        return Err(LinkRankError::InvalidArgument(format!(
            "damping factor must lie strictly between 0 and 1, got {}",
            damping
        )));
    }
    Ok(())
}

pub(crate) fn validate_epsilon(epsilon: f64) -> Result<()> {
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(LinkRankError::InvalidArgument(format!(
            "epsilon must be a positive finite number, got {}",
            epsilon
        )));
    }
    Ok(())
}
