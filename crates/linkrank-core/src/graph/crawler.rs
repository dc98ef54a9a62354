//! Corpus construction from a directory of HTML pages

use super::{extract_links, Corpus};
use crate::error::Result;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use walkdir::WalkDir;

/// File extension that marks a page
const PAGE_EXTENSION: &str = ".html";

/// Crawl `root` and build the link graph of its pages.
///
/// Only the top level of `root` is read. Each `.html` file is a page keyed by
/// its file name; its links are the anchor targets that name another page of
/// the same directory.
pub fn crawl(root: &Path) -> Result<Corpus> {
    let mut raw: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if !name.ends_with(PAGE_EXTENSION) {
            tracing::debug!("Skipping non-page file: {}", name);
            continue;
        }

        let bytes = std::fs::read(entry.path())?;
        let content = String::from_utf8_lossy(&bytes);
        let mut links = extract_links(&content);
        links.remove(&name);
        raw.insert(name, links);
    }

    let known: BTreeSet<String> = raw.keys().cloned().collect();
    let mut dropped = 0;
    for links in raw.values_mut() {
        let before = links.len();
        links.retain(|target| known.contains(target));
        dropped += before - links.len();
    }

    let corpus = Corpus::new(raw)?;
    tracing::info!(
        "Crawled {} pages with {} links from {} ({} external links dropped)",
        corpus.len(),
        corpus.link_count(),
        root.display(),
        dropped
    );
    Ok(corpus)
}
