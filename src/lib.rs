//! urlex - extract URLs and paths from web pages
//!
//! Reads a list of targets from a file, fetches each page over HTTP(S),
//! and splits every `href`/`src` attribute value into two ordered lists:
//! absolute HTTP(S) URLs and everything else (relative paths, fragments,
//! non-HTTP schemes). Targets are processed strictly sequentially; a
//! failing target is reported and skipped, never fatal to the run.

pub mod client;
pub mod config;
pub mod core;
pub mod extractor;
pub mod logging;
pub mod output;
pub mod scanner;
pub mod targets;

// Re-export commonly used items for convenience
pub use crate::core::error::{Result, UrlexError};
pub use crate::extractor::{PageRefs, Reference, classify, extract_references};
pub use crate::scanner::{ScanPage, Scanner};
