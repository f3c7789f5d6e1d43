//! Per-target fetch-and-extract pipeline
//!
//! One target is fully fetched and extracted before the next begins; no
//! state is shared between iterations beyond the reusable HTTP client.

use async_trait::async_trait;
use futures::StreamExt;
use log::debug;
use reqwest::Client;

use crate::client::build_request;
use crate::config::Config;
use crate::core::error::Result;
use crate::extractor::{PageRefs, extract_references};

#[async_trait]
pub trait ScanPage {
    /// Fetch one page and extract its references.
    ///
    /// Transport failure on the request itself is an error the caller
    /// logs before moving on to the next target. A failure in the middle
    /// of the body is treated as truncation and yields partial results.
    async fn scan_page(&self, url: &str) -> Result<PageRefs>;
}

pub struct Scanner {
    client: Client,
    config: Config,
}

impl Scanner {
    pub fn new(client: Client, config: Config) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl ScanPage for Scanner {
    async fn scan_page(&self, url: &str) -> Result<PageRefs> {
        let request = build_request(self.client.get(url), &self.config);
        let response = request.send().await?;

        debug!("{} -> {}", url, response.status());

        // Collect the body chunk by chunk so a connection dropped
        // mid-transfer still leaves us with the prefix received so far.
        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            match chunk {
                Ok(bytes) => body.extend_from_slice(&bytes),
                Err(err) => {
                    debug!("body stream for {url} ended early: {err}");
                    break;
                }
            }
        }

        Ok(extract_references(&body))
    }
}
