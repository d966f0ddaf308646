//! Webpage access: fetch a URL and extract its title and description.
//!
//! | Item | Role | Key Dependency |
//! |------|------|----------------|
//! | [`HttpPageFetcher`] | GET the page, hand the body to the extractor | `reqwest` |
//! | [`extract_metadata`] | Pull `<title>` / `<meta>` values out of HTML | `scraper` |

mod fetch;
mod metadata;

pub use fetch::HttpPageFetcher;
pub use metadata::extract_metadata;
