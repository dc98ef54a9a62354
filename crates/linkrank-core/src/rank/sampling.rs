//! Monte Carlo estimation of PageRank by simulating the random surfer

use super::{
    transition_model, validate_damping, Distribution, RankVector, DEFAULT_DAMPING,
    DEFAULT_SAMPLES,
};
use crate::error::{LinkRankError, Result};
use crate::graph::Corpus;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;

/// Random-walk PageRank estimator
#[derive(Debug, Clone)]
pub struct MonteCarloEstimator {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Number of pages visited, including the starting page
    pub samples: usize,
}

impl Default for MonteCarloEstimator {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl MonteCarloEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the sample count
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Estimate ranks by walking the chain `samples` steps with `rng`.
    ///
    /// Each page's rank is the share of samples that landed on it, so the
    /// result always sums to one. The walk is reproducible for a given seed.
    pub fn estimate<R: Rng + ?Sized>(&self, corpus: &Corpus, rng: &mut R) -> Result<RankVector> {
        let n = corpus.require_pages()?;
        validate_damping(self.damping)?;
        if self.samples < 1 {
            return Err(LinkRankError::InvalidArgument(
                "sample count must be at least 1".to_string(),
            ));
        }

        let pages: Vec<&str> = corpus.pages().collect();
        let mut visits: BTreeMap<&str, usize> = pages.iter().map(|&p| (p, 0)).collect();

        let mut current = pages[rng.gen_range(0..n)];
        *visits.entry(current).or_default() += 1;

        for _ in 1..self.samples {
            let distribution = transition_model(corpus, current, self.damping)?;
            current = pick(&distribution, rng.gen::<f64>());
            *visits.entry(current).or_default() += 1;
        }

        tracing::debug!(
            "Sampled {} steps over {} pages (damping {})",
            self.samples,
            n,
            self.damping
        );

        let total = self.samples as f64;
        Ok(visits
            .into_iter()
            .map(|(page, count)| (page, count as f64 / total))
            .collect())
    }
}

/// Inverse-CDF selection: the first page, in distribution order, whose
/// cumulative probability reaches `draw`.
fn pick<'a>(distribution: &Distribution<'a>, draw: f64) -> &'a str {
    let mut cumulative = 0.0;
    let mut last = "";
    for (&page, &probability) in distribution {
        cumulative += probability;
        last = page;
        if draw <= cumulative {
            return page;
        }
    }
    // Rounding can leave the cumulative sum a hair under 1.0.
    last
}

/// Estimate ranks from `samples` random-walk steps using the supplied random source
pub fn sample_pagerank<R: Rng + ?Sized>(
    corpus: &Corpus,
    damping: f64,
    samples: usize,
    rng: &mut R,
) -> Result<RankVector> {
    MonteCarloEstimator::new()
        .with_damping(damping)
        .with_samples(samples)
        .estimate(corpus, rng)
}

/// Estimate ranks with a ChaCha8 generator seeded from `seed`
pub fn sample_pagerank_seeded(
    corpus: &Corpus,
    damping: f64,
    samples: usize,
    seed: u64,
) -> Result<RankVector> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    sample_pagerank(corpus, damping, samples, &mut rng)
}
