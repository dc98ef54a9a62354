//! Immutable link graph over a closed set of pages

use crate::error::{LinkRankError, Result};
use std::collections::{BTreeMap, BTreeSet};

/// A closed hyperlink graph.
///
/// Pages are keyed by identifier and enumerate in lexicographic order. Every
/// link target is itself a page and no page links to itself; both are checked
/// on construction, so a `Corpus` value always upholds them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    pages: BTreeMap<String, BTreeSet<String>>,
}

impl Corpus {
    /// Build a corpus from a page → outgoing links mapping
    pub fn new(pages: BTreeMap<String, BTreeSet<String>>) -> Result<Self> {
        for (page, links) in &pages {
            if links.contains(page) {
                return Err(LinkRankError::InvalidCorpus(format!(
                    "page '{}' links to itself",
                    page
                )));
            }
            if let Some(missing) = links.iter().find(|target| !pages.contains_key(*target)) {
                return Err(LinkRankError::InvalidCorpus(format!(
                    "page '{}' links to '{}' which is not in the corpus",
                    page, missing
                )));
            }
        }

        Ok(Self { pages })
    }

    /// Build a corpus from `(page, [targets])` pairs
    ///
    /// ```
    /// use linkrank_core::Corpus;
    ///
    /// let corpus = Corpus::from_links([("a", vec!["b"]), ("b", vec![])]).unwrap();
    /// assert!(corpus.is_sink("b"));
    /// ```
    pub fn from_links<I, P, L, T>(pages: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (page, links) in pages {
            let page = page.into();
            if map.contains_key(&page) {
                return Err(LinkRankError::InvalidCorpus(format!(
                    "duplicate page '{}'",
                    page
                )));
            }
            map.insert(page, links.into_iter().map(Into::into).collect());
        }
        Self::new(map)
    }

    /// Number of pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Page count, or `InvalidCorpus` when there are no pages
    pub fn require_pages(&self) -> Result<usize> {
        if self.pages.is_empty() {
            return Err(LinkRankError::InvalidCorpus(
                "corpus contains no pages".to_string(),
            ));
        }
        Ok(self.pages.len())
    }

    pub fn contains(&self, page: &str) -> bool {
        self.pages.contains_key(page)
    }

    /// Outgoing links of `page`, if it is part of the corpus
    pub fn links(&self, page: &str) -> Option<&BTreeSet<String>> {
        self.pages.get(page)
    }

    /// A sink is a page with no outgoing links.
    ///
    /// Both the transition model and the power iteration treat a sink as
    /// linking to every page, so this is the one place that decides it.
    pub fn is_sink(&self, page: &str) -> bool {
        self.pages.get(page).is_some_and(BTreeSet::is_empty)
    }

    /// Page identifiers in lexicographic order
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.pages.iter().map(|(page, links)| (page.as_str(), links))
    }

    /// Total number of links in the corpus
    pub fn link_count(&self) -> usize {
        self.pages.values().map(BTreeSet::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_self_link() {
        let err = Corpus::from_links([("a", vec!["a"])]).unwrap_err();
        assert!(matches!(err, LinkRankError::InvalidCorpus(_)));
    }

    #[test]
    fn test_rejects_dangling_target() {
        let err = Corpus::from_links([("a", vec!["b"])]).unwrap_err();
        assert!(err.to_string().contains("not in the corpus"));
    }

    #[test]
    fn test_rejects_duplicate_page() {
        let err = Corpus::from_links([("a", Vec::<&str>::new()), ("a", vec![])]).unwrap_err();
        assert!(matches!(err, LinkRankError::InvalidCorpus(_)));
    }

    #[test]
    fn test_sink_detection() {
        let corpus = Corpus::from_links([("a", vec!["b"]), ("b", vec![])]).unwrap();
        assert!(!corpus.is_sink("a"));
        assert!(corpus.is_sink("b"));
        assert!(!corpus.is_sink("missing"));
    }

    #[test]
    fn test_pages_are_sorted() {
        let corpus =
            Corpus::from_links([("c", Vec::<&str>::new()), ("a", vec![]), ("b", vec![])]).unwrap();
        let pages: Vec<&str> = corpus.pages().collect();
        assert_eq!(pages, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_corpus_requires_pages() {
        let corpus = Corpus::default();
        assert!(corpus.is_empty());
        assert!(matches!(
            corpus.require_pages(),
            Err(LinkRankError::InvalidCorpus(_))
        ));
    }
}
