//! Configuration management

use crate::error::{LinkRankError, Result};
use crate::rank::{
    validate_damping, validate_epsilon, IterativeSolver, MonteCarloEstimator, DEFAULT_DAMPING,
    DEFAULT_EPSILON, DEFAULT_MAX_ITERATIONS, DEFAULT_SAMPLES,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Ranking parameters shared by both estimators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Probability of following a link rather than jumping
    #[serde(default = "default_damping")]
    pub damping: f64,

    /// Random-walk samples for the Monte Carlo estimate
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Per-page convergence tolerance for power iteration
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,

    /// Iteration cap before power iteration reports non-convergence
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Seed for the random walk (entropy-seeded when absent)
    #[serde(default = "default_seed")]
    pub seed: Option<u64>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            samples: default_samples(),
            epsilon: default_epsilon(),
            max_iterations: default_max_iterations(),
            seed: default_seed(),
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, fallback: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(fallback)
}

fn default_damping() -> f64 {
    env_or("LINKRANK_DAMPING", DEFAULT_DAMPING)
}

fn default_samples() -> usize {
    env_or("LINKRANK_SAMPLES", DEFAULT_SAMPLES)
}

fn default_epsilon() -> f64 {
    env_or("LINKRANK_EPSILON", DEFAULT_EPSILON)
}

fn default_max_iterations() -> usize {
    env_or("LINKRANK_MAX_ITERATIONS", DEFAULT_MAX_ITERATIONS)
}

fn default_seed() -> Option<u64> {
    std::env::var("LINKRANK_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
}

impl RankConfig {
    /// Load config from default path
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(RankConfig::default())
        }
    }

    /// Load config from an explicit YAML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: RankConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    /// Check every parameter is usable before any ranking starts
    pub fn validate(&self) -> Result<()> {
        validate_damping(self.damping)?;
        validate_epsilon(self.epsilon)?;
        if self.samples < 1 {
            return Err(LinkRankError::InvalidArgument(
                "samples must be at least 1".to_string(),
            ));
        }
        if self.max_iterations < 1 {
            return Err(LinkRankError::InvalidArgument(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn estimator(&self) -> MonteCarloEstimator {
        MonteCarloEstimator::new()
            .with_damping(self.damping)
            .with_samples(self.samples)
    }

    pub fn solver(&self) -> IterativeSolver {
        IterativeSolver::new()
            .with_damping(self.damping)
            .with_epsilon(self.epsilon)
            .with_max_iterations(self.max_iterations)
    }

    /// Random source for the walk: seeded when configured, otherwise from OS entropy
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}
