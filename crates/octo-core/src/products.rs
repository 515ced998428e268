use serde::{Deserialize, Serialize};

/// A product page decoded from its JSON-LD block, with the age-restricted
/// alternate image resolved when the page exposes one.
///
/// Serializes with the JSON-LD key names (`@context`, `image`, ...) so the
/// output reads like the block it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "@id")]
    pub id: String,
    /// Display name with HTML entities decoded.
    pub name: String,
    /// Canonical product page URL.
    pub url: String,
    /// Free-text description with HTML entities decoded.
    pub description: String,
    /// Primary product image. Never empty.
    #[serde(rename = "image")]
    pub main_image: String,
    pub sku: u64,
    pub offers: Vec<Offer>,
    /// Age-restricted variant of `main_image`. `None` when the page does not
    /// carry one that could be verified.
    #[serde(rename = "alternateImage")]
    pub alternate_image: Option<String>,
}

impl ProductRecord {
    #[must_use]
    pub fn has_alternate_image(&self) -> bool {
        self.alternate_image.is_some()
    }

    /// Returns the first offer, which the storefront lists as the current one.
    #[must_use]
    pub fn primary_offer(&self) -> Option<&Offer> {
        self.offers.first()
    }
}

/// One schema.org `Offer`, passed through as the storefront emits it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Offer {
    #[serde(rename = "@type")]
    pub kind: String,
    /// Decimal string exactly as published, e.g. `"90.00"`.
    pub price: String,
    pub price_valid_until: String,
    pub price_specification: PriceSpecification,
    pub price_currency: String,
    /// schema.org availability URL, e.g. `"http://schema.org/InStock"`.
    pub availability: String,
    pub url: String,
    pub seller: Seller,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceSpecification {
    pub price: String,
    pub price_currency: String,
    pub value_added_tax_included: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Seller {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    pub url: String,
}
