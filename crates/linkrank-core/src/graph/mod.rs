//! Link graph and its construction from HTML pages

mod corpus;
mod crawler;
mod link_extractor;

pub use corpus::Corpus;
pub use crawler::crawl;
pub use link_extractor::extract_links;
