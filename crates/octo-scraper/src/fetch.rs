//! Page fetching: the [`Fetcher`] seam and its `reqwest` implementation.

use std::error::Error as _;
use std::future::Future;
use std::io;
use std::time::Duration;

use octo_core::FetchConfig;
use reqwest::Client;

use crate::error::ScraperError;

/// Source of raw page bytes for a URL.
///
/// The pipeline only ever calls [`Fetcher::fetch`] once per lookup, so stub
/// implementations in tests can assert on exactly which URLs were requested.
pub trait Fetcher: Send + Sync {
    /// Fetches the full body of `url`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] on transport failure.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, ScraperError>> + Send;
}

/// HTTP GET fetcher with fixed headers, no response compression, and the
/// handshake, idle, and overall timeouts taken from [`FetchConfig`].
pub struct HttpFetcher {
    client: Client,
    accept: String,
}

impl HttpFetcher {
    /// Builds the underlying `reqwest::Client` from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the client cannot be constructed
    /// (e.g., the configured `User-Agent` is not a valid header value).
    pub fn new(config: &FetchConfig) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .connect_timeout(Duration::from_secs(config.handshake_timeout_secs))
            .pool_idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .no_gzip()
            .build()?;
        Ok(Self {
            client,
            accept: config.accept.clone(),
        })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ScraperError> {
        let mut response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, self.accept.as_str())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The body is still parsed; a missing JSON-LD block reports the
            // failure with more context than the status alone.
            tracing::warn!(url, status = status.as_u16(), "non-success status from product page");
        }

        let mut body = Vec::new();
        loop {
            match response.chunk().await {
                Ok(Some(chunk)) => body.extend_from_slice(&chunk),
                Ok(None) => break,
                Err(err) if is_truncated_body(&err) => {
                    tracing::warn!(
                        url,
                        received_bytes = body.len(),
                        error = %err,
                        "response body truncated; parsing partial page"
                    );
                    break;
                }
                Err(err) => return Err(err.into()),
            }
        }

        tracing::debug!(url, bytes = body.len(), "fetched product page");
        Ok(body)
    }
}

/// The connection closed before the declared body length was read.
///
/// Only an unexpected-EOF I/O error somewhere in the source chain counts;
/// reqwest wraps it as a decode error around hyper's incomplete-body error.
/// Timeouts are excluded: they must surface as errors.
fn is_truncated_body(err: &reqwest::Error) -> bool {
    if err.is_timeout() {
        return false;
    }
    let mut source = err.source();
    while let Some(cause) = source {
        if cause
            .downcast_ref::<io::Error>()
            .is_some_and(|io_err| io_err.kind() == io::ErrorKind::UnexpectedEof)
        {
            return true;
        }
        source = cause.source();
    }
    false
}
