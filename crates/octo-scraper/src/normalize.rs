//! Conversion from the raw JSON-LD shape to [`ProductRecord`].

use octo_core::ProductRecord;

use crate::types::LdProduct;

/// Decodes HTML character entities (`&amp;`, `&#8217;`, ...).
///
/// Text without entities is returned unchanged, so applying this twice to
/// entity-free output is a no-op.
#[must_use]
pub fn unescape_text(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

/// Builds a [`ProductRecord`] from a decoded JSON-LD product.
///
/// `name` and `description` are entity-decoded; everything else is carried
/// over as-is. The alternate image is left unset for the resolver.
#[must_use]
pub fn normalize_product(product: LdProduct) -> ProductRecord {
    ProductRecord {
        context: product.context,
        kind: product.kind,
        id: product.id,
        name: unescape_text(&product.name),
        url: product.url,
        description: unescape_text(&product.description),
        main_image: product.image,
        sku: product.sku,
        offers: product.offers,
        alternate_image: None,
    }
}
