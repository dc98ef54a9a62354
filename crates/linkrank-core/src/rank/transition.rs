//! One-step transition probabilities of the random surfer

use super::validate_damping;
use crate::error::{LinkRankError, Result};
use crate::graph::Corpus;
use std::collections::BTreeMap;

/// Probability of visiting each page next, keyed by page in lexicographic order
pub type Distribution<'a> = BTreeMap<&'a str, f64>;

/// Distribution over the next page given the surfer is on `page`.
///
/// With probability `damping` the surfer follows one of the page's links
/// uniformly; otherwise it jumps to any page uniformly. A sink page jumps
/// uniformly with certainty.
pub fn transition_model<'a>(
    corpus: &'a Corpus,
    page: &str,
    damping: f64,
) -> Result<Distribution<'a>> {
    let n = corpus.require_pages()? as f64;
    validate_damping(damping)?;
    let links = corpus
        .links(page)
        .ok_or_else(|| LinkRankError::InvalidPage(page.to_string()))?;

    if corpus.is_sink(page) {
        return Ok(corpus.pages().map(|p| (p, 1.0 / n)).collect());
    }

    let jump = (1.0 - damping) / n;
    let follow = damping / links.len() as f64;

    Ok(corpus
        .pages()
        .map(|p| {
            let probability = if links.contains(p) { jump + follow } else { jump };
            (p, probability)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_corpus() -> Corpus {
        Corpus::from_links([
            ("1.html", vec!["2.html"]),
            ("2.html", vec!["1.html", "3.html"]),
            ("3.html", vec!["2.html", "4.html"]),
            ("4.html", vec![]),
        ])
        .unwrap()
    }

    #[test]
    fn test_follows_links_with_damping() {
        let corpus = sample_corpus();
        let dist = transition_model(&corpus, "2.html", 0.85).unwrap();

        assert!((dist["1.html"] - (0.0375 + 0.425)).abs() < 1e-12);
        assert!((dist["2.html"] - 0.0375).abs() < 1e-12);
        assert!((dist["3.html"] - (0.0375 + 0.425)).abs() < 1e-12);
        assert!((dist["4.html"] - 0.0375).abs() < 1e-12);
    }

    #[test]
    fn test_sink_page_is_uniform() {
        let corpus = sample_corpus();
        let dist = transition_model(&corpus, "4.html", 0.85).unwrap();

        assert_eq!(dist.len(), 4);
        for probability in dist.values() {
            assert!((probability - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn test_sums_to_one() {
        let corpus = sample_corpus();
        for page in corpus.pages() {
            let dist = transition_model(&corpus, page, 0.6).unwrap();
            let total: f64 = dist.values().sum();
            assert!((total - 1.0).abs() < 1e-9, "{} sums to {}", page, total);
        }
    }

    #[test]
    fn test_unknown_page() {
        let corpus = sample_corpus();
        let err = transition_model(&corpus, "5.html", 0.85).unwrap_err();
        assert!(matches!(err, LinkRankError::InvalidPage(p) if p == "5.html"));
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = Corpus::default();
        let err = transition_model(&corpus, "1.html", 0.85).unwrap_err();
        assert!(matches!(err, LinkRankError::InvalidCorpus(_)));
    }

    #[test]
    fn test_invalid_damping() {
        let corpus = sample_corpus();
        let err = transition_model(&corpus, "1.html", 1.5).unwrap_err();
        assert!(matches!(err, LinkRankError::InvalidArgument(_)));
    }
}
