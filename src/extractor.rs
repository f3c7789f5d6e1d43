//! Reference extraction from fetched markup
//!
//! This is the core of the tool: a pass over a streaming HTML tokenizer
//! that collects `href` and `src` attribute values and splits them into
//! absolute HTTP(S) URLs and everything else.

use lol_html::{HtmlRewriter, Settings, element};
use url::Url;

use crate::core::constants::http;

/// References extracted from one page, in document order.
///
/// Every `href`/`src` value lands in exactly one of the two lists. Nothing
/// is deduplicated and relative paths are not resolved against the page's
/// base URL.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageRefs {
    pub urls: Vec<String>,
    pub paths: Vec<String>,
}

impl PageRefs {
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty() && self.paths.is_empty()
    }
}

/// One classified attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// Absolute HTTP(S) reference, stored in canonical serialized form
    Url(String),
    /// Anything else, stored verbatim: relative paths, fragments,
    /// `mailto:`/`javascript:`/`ftp:` and other non-HTTP schemes
    Path(String),
}

/// Classify a single attribute value.
///
/// A value counts as a URL only when it parses and its scheme is exactly
/// `http` or `https`. URLs are re-serialized; paths keep the original
/// attribute value untouched.
pub fn classify(value: &str) -> Reference {
    match Url::parse(value) {
        Ok(url) if http::URL_SCHEMES.contains(&url.scheme()) => Reference::Url(url.to_string()),
        _ => Reference::Path(value.to_string()),
    }
}

/// Extract and classify all `href`/`src` attribute values from a document.
///
/// The body is run through a streaming tokenizer; only start and
/// self-closing tags carry attributes, so text, comments, doctypes, and
/// end tags never reach the handler. A truncated or malformed document is
/// not an error: tokenization stops and whatever was accumulated so far is
/// returned.
pub fn extract_references(body: &[u8]) -> PageRefs {
    let mut urls = Vec::new();
    let mut paths = Vec::new();

    {
        let mut rewriter = HtmlRewriter::new(
            Settings {
                element_content_handlers: vec![element!("*", |el| {
                    // Attributes are visited in document order. The
                    // tokenizer lowercases attribute names, so matching
                    // the literal names covers any input casing while
                    // still excluding namespaced or data-* variants.
                    for attr in el.attributes() {
                        let name = attr.name();
                        if name == "href" || name == "src" {
                            match classify(&attr.value()) {
                                Reference::Url(url) => urls.push(url),
                                Reference::Path(path) => paths.push(path),
                            }
                        }
                    }
                    Ok(())
                })],
                ..Settings::new()
            },
            |_: &[u8]| {},
        );

        // Tokenizer errors end the scan; partial results are kept.
        if rewriter.write(body).is_ok() {
            let _ = rewriter.end();
        }
    }

    PageRefs { urls, paths }
}
