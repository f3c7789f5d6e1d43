//! Output formatting and display logic for urlex
//!
//! Rendering is separated from printing so the section layout can be
//! asserted on directly in tests.

use crate::config::Config;
use crate::core::constants::messages;
use crate::extractor::PageRefs;

/// Startup banner, printed once unless silent mode is set.
pub fn banner() -> &'static str {
    messages::BANNER
}

/// Render the per-page result sections.
///
/// The URL header is suppressed in silent mode; the paths header is gated
/// only on `--url-only`, matching the original reporter. Setting both
/// filter flags suppresses both lists. That quirk is intentional and
/// preserved, not corrected.
pub fn render_results(refs: &PageRefs, config: &Config) -> String {
    let mut out = String::new();

    if !config.silent() {
        out.push_str(messages::URL_SECTION);
        out.push('\n');
    }
    if !config.path_only() {
        for url in &refs.urls {
            out.push_str(url);
            out.push('\n');
        }
    }
    if !config.url_only() {
        out.push('\n');
        out.push_str(messages::PATH_SECTION);
        out.push('\n');
        for path in &refs.paths {
            out.push_str(path);
            out.push('\n');
        }
    }

    out
}
