//! JSON-LD product block extraction.

use std::sync::LazyLock;

use regex::bytes::Regex;

use crate::error::ScraperError;
use crate::types::LdProduct;

/// The bare `<script type="application/ld+json">` tag the storefront emits for
/// its product block, through the matching `</script>`. Tags carrying other
/// attributes (SEO plugin graphs) do not match. The body is matched byte-wise
/// (`-u`) so a page with stray non-UTF-8 bytes still yields its block.
static JSON_LD_SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<script\s+type\s*=\s*"application/ld\+json"\s*>((?s-u:.)*?)</script>"#)
        .expect("valid regex")
});

/// Decodes the first JSON-LD block in `page` as an [`LdProduct`].
///
/// Only bare `application/ld+json` tags count. Later blocks are never
/// consulted, even when the first one fails to decode.
///
/// # Errors
///
/// - [`ScraperError::StructuredDataMissing`] if the page has no JSON-LD block.
/// - [`ScraperError::StructuredDataMalformed`] if the block is not JSON or is
///   not a product with a non-empty `image` and a numeric `sku`.
pub fn extract_structured_data(page: &[u8], url: &str) -> Result<LdProduct, ScraperError> {
    let block = JSON_LD_SCRIPT_RE
        .captures(page)
        .and_then(|cap| cap.get(1))
        .ok_or_else(|| ScraperError::StructuredDataMissing {
            url: url.to_owned(),
        })?;

    tracing::debug!(url, bytes = block.as_bytes().len(), "found JSON-LD block");

    serde_json::from_slice::<LdProduct>(block.as_bytes()).map_err(|source| {
        ScraperError::StructuredDataMalformed {
            url: url.to_owned(),
            source,
        }
    })
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
