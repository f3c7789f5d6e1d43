//! Target list reading and normalization
//!
//! A target is one raw line from the input file naming a page to fetch.
//! Blank lines are skipped; everything else is normalized to a canonical
//! request URL before fetching.

use std::fs;
use std::path::Path;

use url::Url;

use crate::core::constants::http;
use crate::core::error::{Result, UrlexError};

/// Read the target file and return its non-empty lines in order.
///
/// A missing or unreadable file is fatal to the run; the caller reports it
/// and stops.
pub fn read_targets<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    Ok(content
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Normalize a raw target string into a canonical request URL.
///
/// Targets given without a scheme default to `https`. `Url` cannot
/// represent a scheme-less URL, so the default is applied by re-parsing
/// with the scheme prefixed. Already-absolute targets pass through with
/// their scheme preserved.
pub fn normalize_target(raw: &str) -> Result<String> {
    match Url::parse(raw) {
        Ok(url) => Ok(url.to_string()),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let amended = format!("{}://{raw}", http::DEFAULT_SCHEME);
            let url = Url::parse(&amended).map_err(UrlexError::Target)?;
            Ok(url.to_string())
        }
        Err(err) => Err(UrlexError::Target(err)),
    }
}
