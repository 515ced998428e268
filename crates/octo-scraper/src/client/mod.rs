//! Product lookup pipeline: URL check, fetch, JSON-LD decode, entity
//! decoding, alternate image resolution.

mod product_url;

use octo_core::{normalize_base_url, FetchConfig, ProductRecord};

use crate::error::ScraperError;
use crate::extract::extract_structured_data;
use crate::fetch::{Fetcher, HttpFetcher};
use crate::normalize::normalize_product;
use crate::resolve::ResolverChain;

use product_url::ProductUrlPattern;

/// Looks up product pages of one storefront.
///
/// Holds no mutable state; a single instance can serve any number of
/// concurrent lookups through `&self`.
pub struct ProductScraper<F = HttpFetcher> {
    fetcher: F,
    product_url: ProductUrlPattern,
    resolvers: ResolverChain,
}

impl ProductScraper<HttpFetcher> {
    /// Creates a scraper that fetches over HTTP with the headers, timeouts,
    /// and TLS policy in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &FetchConfig) -> Result<Self, ScraperError> {
        let fetcher = HttpFetcher::new(config)?;
        Ok(Self::new(fetcher, &config.base_url))
    }
}

impl<F: Fetcher> ProductScraper<F> {
    /// Creates a scraper for the storefront rooted at `base_url` that reads
    /// pages through `fetcher`.
    #[must_use]
    pub fn new(fetcher: F, base_url: &str) -> Self {
        let base_url = normalize_base_url(base_url);
        Self {
            fetcher,
            product_url: ProductUrlPattern::new(&base_url),
            resolvers: ResolverChain::new(&base_url),
        }
    }

    /// Returns `true` if `url` is a product page of this storefront.
    #[must_use]
    pub fn is_product_url(&self, url: &str) -> bool {
        self.product_url.matches(url.trim())
    }

    /// Fetches and decodes the product page at `url`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidProductUrl`] if `url` is not a product page;
    ///   nothing is fetched in that case.
    /// - [`ScraperError::Http`] on transport failure.
    /// - Any error from [`ProductScraper::parse_product_page`].
    pub async fn get_product_by_url(&self, url: &str) -> Result<ProductRecord, ScraperError> {
        let url = url.trim();
        if !self.is_product_url(url) {
            return Err(ScraperError::InvalidProductUrl {
                url: url.to_owned(),
            });
        }

        tracing::info!(url, "fetching product page");
        let page = self.fetcher.fetch(url).await?;
        self.parse_product_page(url, &page)
    }

    /// Decodes an already-fetched product page. `url` is only used in errors
    /// and logs.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::StructuredDataMissing`] / [`ScraperError::StructuredDataMalformed`]
    ///   if the JSON-LD block is absent or does not decode.
    /// - [`ScraperError::ImageIdParse`] if the page uses the older layout and
    ///   the main image has no upload ID.
    /// - [`ScraperError::ImageCatalogMalformed`] if the page's variation
    ///   catalog does not decode.
    pub fn parse_product_page(
        &self,
        url: &str,
        page: &[u8],
    ) -> Result<ProductRecord, ScraperError> {
        let product = extract_structured_data(page, url)?;
        let record = normalize_product(product);
        let alternate_image = self.resolvers.resolve(&record, page)?;

        tracing::info!(
            url,
            sku = record.sku,
            has_alternate_image = alternate_image.is_some(),
            "product page decoded"
        );

        Ok(ProductRecord {
            alternate_image,
            ..record
        })
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
