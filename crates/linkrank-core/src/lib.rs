//! Linkrank Core Library
//!
//! PageRank for small, closed hyperlink corpora.
//!
//! # Features
//! - Corpus construction from a directory of HTML pages
//! - Random-surfer transition model with sink-page teleportation
//! - Monte Carlo rank estimate over an injectable random source
//! - Power iteration with an explicit convergence predicate
//!
//! ```
//! use linkrank_core::{iterate_pagerank, sample_pagerank_seeded, Corpus};
//!
//! let corpus = Corpus::from_links([("a", vec!["b"]), ("b", vec!["a"])]).unwrap();
//! let iterated = iterate_pagerank(&corpus, 0.85).unwrap();
//! let sampled = sample_pagerank_seeded(&corpus, 0.85, 1_000, 1).unwrap();
//! assert!((iterated.get("a").unwrap() - 0.5).abs() < 1e-9);
//! assert!((sampled.sum() - 1.0).abs() < 1e-12);
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod rank;

pub use config::RankConfig;
pub use error::{Error, LinkRankError, Result};
pub use graph::{crawl, extract_links, Corpus};
pub use rank::{
    apply_recurrence, has_converged, iterate_pagerank, max_delta, sample_pagerank,
    sample_pagerank_seeded, transition_model, Distribution, IterationOutcome, IterativeSolver,
    MonteCarloEstimator, RankVector,
};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "linkrank";
