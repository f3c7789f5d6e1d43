//! HTTP client construction and request decoration
//!
//! The client is built once per run; requests are decorated per target
//! with the fixed User-Agent and any configured cookie/custom header.

use log::debug;
use reqwest::header::{COOKIE, HeaderName, HeaderValue, USER_AGENT};
use reqwest::{Client, RequestBuilder};

use crate::config::Config;
use crate::core::constants::http;
use crate::core::error::Result;

/// Build the HTTP client for the whole run.
///
/// A configured proxy routes all traffic and disables TLS certificate
/// verification (accepted trade-off for scanning endpoints you do not
/// control). A proxy URL that fails to parse is reported and ignored; the
/// run continues with a direct client.
pub fn build_client(config: &Config) -> Result<Client> {
    let mut client_builder = Client::builder();

    if config.insecure() {
        client_builder = client_builder.danger_accept_invalid_certs(true);
    }

    if let Some(ref proxy_url) = config.proxy {
        match reqwest::Proxy::all(proxy_url) {
            Ok(proxy) => {
                if !config.silent() {
                    println!("Using proxy: {proxy_url}");
                }
                client_builder = client_builder
                    .proxy(proxy)
                    .danger_accept_invalid_certs(true);
            }
            Err(err) => {
                println!("Error parsing proxy URL: {err}");
            }
        }
    }

    Ok(client_builder.build()?)
}

/// Decorate an outgoing GET request with the configured headers.
///
/// The User-Agent is always set. A non-empty cookie string is forwarded
/// verbatim. A custom header in `Name: Value` form is split on the first
/// colon, both parts trimmed, and appended. Malformed header strings (no
/// colon, or a name/value the header type rejects) are silently ignored.
pub fn build_request(request: RequestBuilder, config: &Config) -> RequestBuilder {
    let mut request = request.header(USER_AGENT, http::USER_AGENT);

    if let Some(cookie) = config.cookie.as_deref().filter(|c| !c.is_empty()) {
        match HeaderValue::from_str(cookie) {
            Ok(value) => request = request.header(COOKIE, value),
            Err(err) => debug!("ignoring unusable cookie value: {err}"),
        }
    }

    if let Some(raw) = config.header.as_deref().filter(|h| !h.is_empty())
        && let Some((name, value)) = raw.split_once(':')
        && let Ok(name) = HeaderName::from_bytes(name.trim().as_bytes())
        && let Ok(value) = HeaderValue::from_str(value.trim())
    {
        request = request.header(name, value);
    }

    request
}
