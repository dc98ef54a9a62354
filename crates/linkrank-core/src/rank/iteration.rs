//! PageRank by power iteration
//!
//! Repeatedly applies
//!
//! ```text
//! PR(p) = (1 - d)/N + d * Σ contribution(q, p)
//! ```
//!
//! where a sink `q` contributes `PR(q)/N` to every page and any other `q`
//! contributes `PR(q)/L(q)` to each page it links to. Every iteration reads
//! one snapshot and writes a fresh vector, which is then renormalized.

use super::{
    has_converged, max_delta, validate_damping, validate_epsilon, RankVector, DEFAULT_DAMPING,
    DEFAULT_EPSILON, DEFAULT_MAX_ITERATIONS,
};
use crate::error::{LinkRankError, Result};
use crate::graph::Corpus;
use std::collections::HashMap;

/// Result of a converged power iteration
#[derive(Debug, Clone)]
pub struct IterationOutcome {
    /// Final ranks
    pub ranks: RankVector,
    /// Number of recurrence applications performed
    pub iterations: usize,
}

/// Power-iteration PageRank solver
#[derive(Debug, Clone)]
pub struct IterativeSolver {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Largest per-page change accepted as converged
    pub epsilon: f64,
    /// Iterations allowed before giving up with `NonConvergence`
    pub max_iterations: usize,
}

impl Default for IterativeSolver {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            epsilon: DEFAULT_EPSILON,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl IterativeSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the convergence threshold
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    fn validate(&self) -> Result<()> {
        validate_damping(self.damping)?;
        validate_epsilon(self.epsilon)?;
        if self.max_iterations == 0 {
            return Err(LinkRankError::InvalidArgument(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Iterate from the uniform vector until no page changes by more than epsilon
    pub fn solve(&self, corpus: &Corpus) -> Result<IterationOutcome> {
        let n = corpus.require_pages()?;
        self.validate()?;

        let index = LinkIndex::new(corpus);
        let mut previous = vec![1.0 / n as f64; n];

        for iteration in 1..=self.max_iterations {
            let next = index.step(&previous, self.damping);
            let converged = has_converged(&previous, &next, self.epsilon);
            tracing::debug!(
                "Iteration {}: max delta {:.6}",
                iteration,
                max_delta(&previous, &next)
            );
            previous = next;

            if converged {
                tracing::info!(
                    "PageRank converged after {} iterations over {} pages",
                    iteration,
                    n
                );
                return Ok(IterationOutcome {
                    ranks: index.rank_vector(&previous),
                    iterations: iteration,
                });
            }
        }

        tracing::warn!(
            "PageRank did not converge within {} iterations",
            self.max_iterations
        );
        Err(LinkRankError::NonConvergence {
            iterations: self.max_iterations,
        })
    }
}

/// Solve with default epsilon and iteration cap, returning only the ranks
pub fn iterate_pagerank(corpus: &Corpus, damping: f64) -> Result<RankVector> {
    IterativeSolver::new()
        .with_damping(damping)
        .solve(corpus)
        .map(|outcome| outcome.ranks)
}

/// Apply the recurrence once to `ranks`, renormalizing the result.
///
/// Pages of `corpus` missing from `ranks` start from zero.
pub fn apply_recurrence(corpus: &Corpus, ranks: &RankVector, damping: f64) -> Result<RankVector> {
    corpus.require_pages()?;
    validate_damping(damping)?;

    let index = LinkIndex::new(corpus);
    let previous: Vec<f64> = index
        .pages
        .iter()
        .map(|page| ranks.get(page).unwrap_or(0.0))
        .collect();
    Ok(index.rank_vector(&index.step(&previous, damping)))
}

/// Corpus flattened to positional adjacency for the inner loop
struct LinkIndex<'a> {
    pages: Vec<&'a str>,
    targets: Vec<Vec<usize>>,
    sinks: Vec<bool>,
}

impl<'a> LinkIndex<'a> {
    fn new(corpus: &'a Corpus) -> Self {
        let pages: Vec<&str> = corpus.pages().collect();
        let position: HashMap<&str, usize> =
            pages.iter().enumerate().map(|(i, &p)| (p, i)).collect();

        let targets: Vec<Vec<usize>> = corpus
            .iter()
            .map(|(_, links)| {
                links
                    .iter()
                    .filter_map(|target| position.get(target.as_str()).copied())
                    .collect()
            })
            .collect();
        let sinks: Vec<bool> = pages.iter().map(|page| corpus.is_sink(page)).collect();

        Self {
            pages,
            targets,
            sinks,
        }
    }

    /// One application of the recurrence. Reads only `previous`.
    fn step(&self, previous: &[f64], damping: f64) -> Vec<f64> {
        let n = self.pages.len() as f64;

        let sink_mass: f64 = previous
            .iter()
            .zip(&self.sinks)
            .filter(|(_, &sink)| sink)
            .map(|(rank, _)| rank)
            .sum();
        let base = (1.0 - damping) / n + damping * sink_mass / n;

        let mut next = vec![base; self.pages.len()];
        for (source, links) in self.targets.iter().enumerate() {
            if self.sinks[source] {
                continue;
            }
            let share = damping * previous[source] / links.len() as f64;
            for &target in links {
                next[target] += share;
            }
        }

        let total: f64 = next.iter().sum();
        next.into_iter().map(|rank| rank / total).collect()
    }

    fn rank_vector(&self, ranks: &[f64]) -> RankVector {
        self.pages.iter().copied().zip(ranks.iter().copied()).collect()
    }
}
