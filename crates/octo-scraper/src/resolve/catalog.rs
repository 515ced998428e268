//! Newer layout: a WooCommerce variations form lists every artwork variant.

use std::sync::LazyLock;

use octo_core::ProductRecord;
use regex::bytes::Regex;

use super::AlternateImageResolver;
use crate::error::ScraperError;
use crate::normalize::unescape_text;
use crate::types::CatalogEntry;

/// Variant value the storefront uses for the age-restricted artwork.
pub const RESTRICTED_VARIANT: &str = "r18";

/// The entity-escaped JSON array in `data-product_variations="[...]"`.
/// Attribute values cannot contain a raw `"`, so the first `]"` closes it.
/// WooCommerce writes `"false"` instead of an array for large catalogs; that
/// does not match.
static CATALOG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?-u)data-product_variations\s*=\s*"(\[[^"]*\])""#).expect("valid regex")
});

/// Looks the alternate image up in the variation catalog: the first entry
/// tagged [`RESTRICTED_VARIANT`] supplies it.
pub struct CatalogResolver;

impl CatalogResolver {
    /// Decodes the catalog embedded in `page`, or `Ok(None)` if the page has
    /// none.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::ImageCatalogMalformed`] if the array does not
    /// decode as catalog entries.
    pub fn catalog(page: &[u8]) -> Result<Option<Vec<CatalogEntry>>, ScraperError> {
        let Some(raw) = CATALOG_RE.captures(page).and_then(|cap| cap.get(1)) else {
            return Ok(None);
        };

        let json = unescape_text(&String::from_utf8_lossy(raw.as_bytes()));
        let entries = serde_json::from_str::<Vec<CatalogEntry>>(&json)
            .map_err(|source| ScraperError::ImageCatalogMalformed { source })?;
        Ok(Some(entries))
    }
}

impl AlternateImageResolver for CatalogResolver {
    fn name(&self) -> &'static str {
        "catalog"
    }

    fn detect(&self, _record: &ProductRecord, page: &[u8]) -> bool {
        CATALOG_RE.is_match(page)
    }

    fn resolve(
        &self,
        record: &ProductRecord,
        page: &[u8],
    ) -> Result<Option<String>, ScraperError> {
        let Some(entries) = Self::catalog(page)? else {
            tracing::debug!(url = %record.url, "no variation catalog on page");
            return Ok(None);
        };

        let restricted = entries
            .iter()
            .find(|entry| entry.variant() == Some(RESTRICTED_VARIANT));

        let Some(entry) = restricted else {
            tracing::debug!(
                url = %record.url,
                variants = entries.len(),
                "catalog has no restricted variant"
            );
            return Ok(None);
        };

        tracing::debug!(
            url = %record.url,
            variation_id = entry.variation_id,
            "restricted variant found in catalog"
        );
        Ok(entry.image_url().map(str::to_owned))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProductRecord {
        ProductRecord {
            context: String::new(),
            kind: "Product".to_owned(),
            id: String::new(),
            name: String::new(),
            url: "https://cuddlyoctopus.com/product/asuna/".to_owned(),
            description: String::new(),
            main_image: "https://cuddlyoctopus.com/wp-content/uploads/2022/03/1200-asuna.jpg"
                .to_owned(),
            sku: 1,
            offers: Vec::new(),
            alternate_image: None,
        }
    }

    /// Renders entries the way WooCommerce does: JSON with escaped slashes,
    /// then HTML-attribute escaped.
    fn form(json: &str) -> Vec<u8> {
        let escaped = json.replace('/', "\\/").replace('"', "&quot;");
        format!(
            "<form class=\"variations_form cart\" action=\"\" method=\"post\" \
             data-product_id=\"1200\" data-product_variations=\"{escaped}\">"
        )
        .into_bytes()
    }

    const TWO_VARIANTS: &str = r#"[
        {"attributes":{"attribute_pa_variant":"sfw"},
         "image":{"url":"https://cuddlyoctopus.com/wp-content/uploads/2022/03/1200-asuna.jpg"},
         "display_price":90,"is_in_stock":true,"variation_id":1201,"sku":"","weight":"",
         "dimensions":{"length":"","width":"","height":""}},
        {"attributes":{"attribute_pa_variant":"r18"},
         "image":{"url":"https://cuddlyoctopus.com/wp-content/uploads/2022/03/1202-asuna-r18.jpg",
                  "full_src":"https://cuddlyoctopus.com/wp-content/uploads/2022/03/1202-asuna-r18-full.jpg"},
         "display_price":95.5,"is_in_stock":false,"variation_id":1203,"sku":"","weight":"0.5",
         "dimensions":{"length":"150","width":"50","height":""}}
    ]"#;

    #[test]
    fn returns_restricted_variant_image() {
        let resolved = CatalogResolver.resolve(&record(), &form(TWO_VARIANTS)).unwrap();
        assert_eq!(
            resolved.as_deref(),
            Some("https://cuddlyoctopus.com/wp-content/uploads/2022/03/1202-asuna-r18.jpg")
        );
    }

    #[test]
    fn first_restricted_entry_wins() {
        let json = r#"[
            {"attributes":{"attribute_pa_variant":"r18"},"image":{"url":"https://x/first.jpg"}},
            {"attributes":{"attribute_pa_variant":"r18"},"image":{"url":"https://x/second.jpg"}}
        ]"#;
        let resolved = CatalogResolver.resolve(&record(), &form(json)).unwrap();
        assert_eq!(resolved.as_deref(), Some("https://x/first.jpg"));
    }

    #[test]
    fn no_restricted_entry_is_absent_not_error() {
        let json = r#"[{"attributes":{"attribute_pa_variant":"sfw"},"image":{"url":"https://x/a.jpg"}}]"#;
        let resolved = CatalogResolver.resolve(&record(), &form(json)).unwrap();
        assert_eq!(resolved, None);
    }

    #[test]
    fn empty_catalog_is_absent() {
        let resolved = CatalogResolver.resolve(&record(), &form("[]")).unwrap();
        assert_eq!(resolved, None);
    }

    #[test]
    fn undecodable_catalog_is_malformed() {
        let page = br#"<form data-product_variations="[{&quot;attributes&quot;:&quot;r18&quot;}]">"#;
        let err = CatalogResolver.resolve(&record(), page).unwrap_err();
        assert!(
            matches!(err, ScraperError::ImageCatalogMalformed { .. }),
            "expected ImageCatalogMalformed, got: {err:?}"
        );
    }

    #[test]
    fn detect_ignores_false_catalog() {
        let page = br#"<form data-product_variations="false">"#;
        assert!(!CatalogResolver.detect(&record(), page));
        assert_eq!(CatalogResolver::catalog(page).unwrap(), None);
    }

    #[test]
    fn catalog_decodes_commerce_fields() {
        let entries = CatalogResolver::catalog(&form(TWO_VARIANTS)).unwrap().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].variation_id, 1203);
        assert_eq!(entries[1].display_price, Some(95.5));
        assert!(!entries[1].is_in_stock);
        assert_eq!(entries[1].dimensions.length, "150");
    }
}
