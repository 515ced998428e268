//! Raw shapes embedded in WooCommerce product pages.
//!
//! ## JSON-LD product block
//! The first `<script type="application/ld+json">` on a product page is a
//! bare schema.org `Product` object (no `@graph` wrapper). `image` is a
//! single URL string under `wp-content/uploads/<year>/<month>/`. `sku` is
//! emitted as a number on older pages and as a numeric string on newer ones;
//! both are accepted. Offers are passed through untouched.
//!
//! ## Variation catalog
//! Newer pages render a variations form whose `data-product_variations`
//! attribute holds an entity-escaped JSON array, one object per variant.
//! Only `attributes` and `image` matter here; the commerce fields are
//! decoded leniently so that unrelated changes to them do not break lookup.

use std::collections::HashMap;

use octo_core::Offer;
use serde::{Deserialize, Deserializer};

/// Attribute slug that distinguishes the artwork variants of a product.
pub const VARIANT_ATTRIBUTE: &str = "attribute_pa_variant";

/// The product object from the page's JSON-LD block.
#[derive(Debug, Deserialize)]
pub struct LdProduct {
    #[serde(rename = "@context", default)]
    pub context: String,
    #[serde(rename = "@type", default)]
    pub kind: String,
    #[serde(rename = "@id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
    /// Main product image. Decoding fails when it is missing or empty.
    #[serde(deserialize_with = "non_empty_string")]
    pub image: String,
    #[serde(deserialize_with = "numeric_sku")]
    pub sku: u64,
    #[serde(default)]
    pub offers: Vec<Offer>,
}

/// One row of the `data-product_variations` array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogEntry {
    /// Attribute slug to selected value, e.g. `"attribute_pa_variant" => "r18"`.
    #[serde(default)]
    pub attributes: HashMap<String, String>,
    #[serde(default)]
    pub image: CatalogImage,
    #[serde(default)]
    pub variation_id: u64,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub display_price: Option<f64>,
    #[serde(default)]
    pub is_in_stock: bool,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub dimensions: CatalogDimensions,
}

impl CatalogEntry {
    /// Returns the value of the [`VARIANT_ATTRIBUTE`] attribute.
    #[must_use]
    pub fn variant(&self) -> Option<&str> {
        self.attributes.get(VARIANT_ATTRIBUTE).map(String::as_str)
    }

    /// Best URL for this variant's image: `url`, else `full_src`.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        [&self.image.url, &self.image.full_src]
            .into_iter()
            .map(String::as_str)
            .find(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogImage {
    pub url: String,
    pub full_src: String,
    pub src: String,
    pub title: String,
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogDimensions {
    pub length: String,
    pub width: String,
    pub height: String,
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if value.trim().is_empty() {
        return Err(serde::de::Error::custom("expected a non-empty string"));
    }
    Ok(value)
}

fn numeric_sku<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawSku {
        Number(u64),
        Text(String),
    }

    match RawSku::deserialize(deserializer)? {
        RawSku::Number(n) => Ok(n),
        RawSku::Text(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| serde::de::Error::custom(format!("sku \"{s}\" is not numeric"))),
    }
}
