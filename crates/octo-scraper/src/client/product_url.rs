//! Product page URL validation.

use regex::Regex;

/// Matches `<base>product/<slug>` at the start of a URL. Anything after the
/// slug (trailing `/`, query, fragment) is accepted.
pub(super) struct ProductUrlPattern {
    re: Regex,
}

impl ProductUrlPattern {
    /// `base_url` must already end in `/`.
    pub(super) fn new(base_url: &str) -> Self {
        let re = Regex::new(&format!(r"^{}product/[^/?#\s]+", regex::escape(base_url)))
            .expect("escaped base URL yields a valid regex");
        Self { re }
    }

    pub(super) fn matches(&self, url: &str) -> bool {
        self.re.is_match(url)
    }
}
