use thiserror::Error;

/// Everything that can end a product lookup.
///
/// A page without an alternate image is not an error; resolvers report that
/// as `Ok(None)`.
#[derive(Debug, Error)]
pub enum ScraperError {
    /// The URL is not a product page of the configured storefront. Raised
    /// before any request is made.
    #[error("not a product page URL: \"{url}\"")]
    InvalidProductUrl { url: String },

    /// Transport failure from the HTTP client, timeouts included.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("no JSON-LD product block found on {url}")]
    StructuredDataMissing { url: String },

    #[error("JSON-LD product block on {url} could not be decoded: {source}")]
    StructuredDataMalformed {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not extract image ID from \"{image_url}\": {reason}")]
    ImageIdParse { image_url: String, reason: String },

    #[error("variation catalog could not be decoded: {source}")]
    ImageCatalogMalformed {
        #[source]
        source: serde_json::Error,
    },
}
