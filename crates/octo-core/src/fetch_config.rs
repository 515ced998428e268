/// Storefront the scraper targets when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://cuddlyoctopus.com/";

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/93.0.45";

pub const DEFAULT_ACCEPT: &str = "application/json, text/plain, */*";

/// Everything the HTTP fetcher and the URL patterns need, passed explicitly
/// instead of living in process-wide statics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Storefront root, always ending in `/`. Product URLs and upload paths
    /// are matched relative to it.
    pub base_url: String,
    pub user_agent: String,
    pub accept: String,
    /// Upper bound on connection setup, TLS handshake included.
    pub handshake_timeout_secs: u64,
    /// How long an idle pooled connection is kept before being closed.
    pub idle_timeout_secs: u64,
    /// Overall bound on a single request, body included.
    pub request_timeout_secs: u64,
    /// Skips TLS certificate verification. Defaults to `true`.
    pub accept_invalid_certs: bool,
    pub log_level: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            accept: DEFAULT_ACCEPT.to_owned(),
            handshake_timeout_secs: 10,
            idle_timeout_secs: 5,
            request_timeout_secs: 300,
            accept_invalid_certs: true,
            log_level: "info".to_owned(),
        }
    }
}

impl FetchConfig {
    /// Returns a copy of this config pointed at another storefront root.
    ///
    /// A trailing `/` is appended when missing so that path patterns can be
    /// built by plain concatenation.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = normalize_base_url(base_url);
        self
    }
}

/// Trims `raw` and appends a trailing `/` when missing.
#[must_use]
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.ends_with('/') {
        trimmed.to_owned()
    } else {
        format!("{trimmed}/")
    }
}
