// Rank an in-memory corpus with both estimators using linkrank as a library

use linkrank_core::{Corpus, IterativeSolver, MonteCarloEstimator};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() -> linkrank_core::Result<()> {
    println!("Linkrank Library Example\n");

    // A small site: the index links everywhere, the archive is a dead end
    let corpus = Corpus::from_links([
        ("index.html", vec!["about.html", "blog.html", "archive.html"]),
        ("about.html", vec!["index.html"]),
        ("blog.html", vec!["index.html", "archive.html"]),
        ("archive.html", vec![]),
    ])?;
    println!(
        "Corpus: {} pages, {} links\n",
        corpus.len(),
        corpus.link_count()
    );

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let sampled = MonteCarloEstimator::new()
        .with_samples(50_000)
        .estimate(&corpus, &mut rng)?;

    let outcome = IterativeSolver::new().with_epsilon(1e-6).solve(&corpus)?;
    println!("Power iteration converged in {} iterations\n", outcome.iterations);

    println!("{:<14} {:>8} {:>8}", "page", "sampled", "iterated");
    for (page, rank) in outcome.ranks.iter() {
        println!(
            "{:<14} {:>8.4} {:>8.4}",
            page,
            sampled.get(page).unwrap_or(0.0),
            rank
        );
    }

    Ok(())
}
