//! Alternate (age-restricted) image resolution.
//!
//! Two page layouts are in circulation. Older pages only expose the
//! restricted artwork as a sibling upload whose ID is one above the main
//! image's, referenced from inside some other embedded JSON. Newer pages
//! carry a full variation catalog. Each layout has its own resolver; the
//! [`ResolverChain`] picks one by looking at what the page contains.

mod catalog;
mod id_arithmetic;

use octo_core::ProductRecord;

use crate::error::ScraperError;

pub use catalog::{CatalogResolver, RESTRICTED_VARIANT};
pub use id_arithmetic::IdArithmeticResolver;

/// A strategy for finding the alternate image of a decoded product.
pub trait AlternateImageResolver: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Returns `true` if the page has the shape this resolver works on.
    fn detect(&self, record: &ProductRecord, page: &[u8]) -> bool;

    /// Resolves the alternate image URL. `Ok(None)` means the page has no
    /// alternate image this resolver could confirm.
    ///
    /// # Errors
    ///
    /// Returns an error only when the page structure the resolver depends on
    /// cannot be parsed.
    fn resolve(&self, record: &ProductRecord, page: &[u8])
        -> Result<Option<String>, ScraperError>;
}

/// Runs the first resolver whose layout is detected on the page.
///
/// The catalog is checked first since its anchor is unambiguous. When
/// neither layout is detected the ID-arithmetic resolver still runs, so a
/// main image without an upload ID is reported as
/// [`ScraperError::ImageIdParse`].
pub struct ResolverChain {
    catalog: CatalogResolver,
    id_arithmetic: IdArithmeticResolver,
}

impl ResolverChain {
    /// Builds both resolvers for the storefront rooted at `base_url`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            catalog: CatalogResolver,
            id_arithmetic: IdArithmeticResolver::new(base_url),
        }
    }

    /// # Errors
    ///
    /// Propagates the selected resolver's error.
    pub fn resolve(
        &self,
        record: &ProductRecord,
        page: &[u8],
    ) -> Result<Option<String>, ScraperError> {
        let resolvers: [&dyn AlternateImageResolver; 2] = [&self.catalog, &self.id_arithmetic];
        let selected = resolvers
            .into_iter()
            .find(|resolver| resolver.detect(record, page))
            .unwrap_or(&self.id_arithmetic);

        tracing::debug!(
            url = %record.url,
            strategy = selected.name(),
            "resolving alternate image"
        );
        selected.resolve(record, page)
    }
}

/// Plain substring search over raw page bytes.
pub(crate) fn page_contains(page: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || page.windows(needle.len()).any(|window| window == needle)
}
