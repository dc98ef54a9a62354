//! Rank command: crawl the corpus, run both estimators, print the results

use crate::app::{Cli, RankArgs};
use crate::output::{format_report, RankReport};
use anyhow::{Context, Result};
use linkrank_core::{crawl, RankConfig};

pub fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;
    config.validate()?;

    let corpus = crawl(&cli.corpus)
        .with_context(|| format!("Failed to read corpus {}", cli.corpus.display()))?;

    let mut rng = config.rng();
    let sampled = config.estimator().estimate(&corpus, &mut rng)?;
    let iterated = config.solver().solve(&corpus)?;

    tracing::debug!(
        "Ranked {} pages: {} samples, {} iterations",
        corpus.len(),
        config.samples,
        iterated.iterations
    );

    let report = RankReport {
        samples: config.samples,
        sampled: &sampled,
        iterations: iterated.iterations,
        iterated: &iterated.ranks,
    };
    print!("{}", format_report(&report, cli.format));
    Ok(())
}

/// File or default config, with command-line flags taking precedence
fn resolve_config(cli: &Cli) -> Result<RankConfig> {
    let mut config = match &cli.config {
        Some(path) => RankConfig::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => RankConfig::load()?,
    };
    apply_overrides(&mut config, &cli.rank);
    Ok(config)
}

fn apply_overrides(config: &mut RankConfig, args: &RankArgs) {
    if let Some(damping) = args.damping {
        config.damping = damping;
    }
    if let Some(samples) = args.samples {
        config.samples = samples;
    }
    if let Some(epsilon) = args.epsilon {
        config.epsilon = epsilon;
    }
    if let Some(max_iterations) = args.max_iterations {
        config.max_iterations = max_iterations;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
}
