//! Structured data from saved search-engine result pages.
//!
//! ```no_run
//! use serp_parser::{parse_serp, ExtractOptions, SerpExtractor};
//!
//! let html = std::fs::read_to_string("page.html").unwrap();
//! let result = parse_serp(&html);
//! println!("{} organic results", result.organic.len());
//!
//! let everything = SerpExtractor::new(ExtractOptions::all()).extract(&html);
//! assert_eq!(everything.keyword, result.keyword);
//! ```

pub mod classifier;
pub mod dom;
pub mod error;
pub mod extractors;
pub mod options;
pub mod rules;
pub mod serp;
pub mod text;
pub mod types;
pub mod url_utils;

#[cfg(test)]
mod fixtures;

pub use classifier::{classify, PageClass, PageVariant, NO_RESULTS_ERROR, UNRECOGNIZED_ERROR};
pub use dom::ParsedPage;
pub use error::{ExtractError, FieldResult};
pub use options::ExtractOptions;
pub use serp::{parse_serp, parse_serp_with, SerpExtractor};
pub use types::*;
