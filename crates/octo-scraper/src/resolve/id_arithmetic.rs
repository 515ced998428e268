//! Older layout: the restricted artwork is the upload right after the main
//! image, so its ID is guessed and then confirmed against the raw page.

use octo_core::ProductRecord;
use regex::Regex;

use super::{page_contains, AlternateImageResolver};
use crate::error::ScraperError;

/// Guesses `main image ID + 1` and accepts the guess only if its
/// escaped-slash form (`https:\/\/...`) appears in the raw page bytes.
///
/// When the first guess is not on the page, the first `<id>-<part>` upload
/// path found in the page (e.g. `919-1`) is substituted instead and checked
/// the same way. An unconfirmed guess is never returned.
pub struct IdArithmeticResolver {
    /// Captures the upload ID in the main image URL.
    image_id_re: Regex,
    /// Captures the first `<id>-<part>` upload ID in the raw page.
    part_id_re: regex::bytes::Regex,
}

impl IdArithmeticResolver {
    /// Builds the upload-path patterns for the storefront rooted at `base_url`.
    ///
    /// # Panics
    ///
    /// Never in practice: `base_url` is regex-escaped before compilation.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let uploads = format!("{}wp-content/uploads/", regex::escape(base_url));
        let image_id_re = Regex::new(&format!(r"{uploads}[0-9]+/[0-9]{{2}}/([0-9]+)"))
            .expect("escaped base URL yields a valid regex");
        let part_id_re =
            regex::bytes::Regex::new(&format!(r"{uploads}[0-9]+/[0-9]{{2}}/([0-9]+-[0-9]+)"))
                .expect("escaped base URL yields a valid regex");
        Self {
            image_id_re,
            part_id_re,
        }
    }

    /// Returns the upload ID substring of `main_image` and its numeric value.
    fn image_id<'a>(&self, main_image: &'a str) -> Result<(&'a str, u64), ScraperError> {
        let digits = self
            .image_id_re
            .captures(main_image)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| ScraperError::ImageIdParse {
                image_url: main_image.to_owned(),
                reason: "no upload ID in image path".to_owned(),
            })?;

        let id = digits
            .parse::<u64>()
            .map_err(|e| ScraperError::ImageIdParse {
                image_url: main_image.to_owned(),
                reason: format!("\"{digits}\": {e}"),
            })?;
        Ok((digits, id))
    }

    /// First `<id>-<part>` upload ID on the page, e.g. `"919-1"`.
    fn first_part_id(&self, page: &[u8]) -> Option<String> {
        self.part_id_re
            .captures(page)
            .and_then(|cap| cap.get(1))
            .map(|m| String::from_utf8_lossy(m.as_bytes()).into_owned())
    }
}

/// `https://a/b.jpg` -> `https:\/\/a\/b.jpg`, the form URLs take inside
/// JSON embedded in the page.
fn escaped_slash_form(url: &str) -> String {
    url.replace('/', "\\/")
}

fn is_on_page(page: &[u8], candidate: &str) -> bool {
    page_contains(page, escaped_slash_form(candidate).as_bytes())
}

impl AlternateImageResolver for IdArithmeticResolver {
    fn name(&self) -> &'static str {
        "id_arithmetic"
    }

    fn detect(&self, record: &ProductRecord, _page: &[u8]) -> bool {
        self.image_id_re.is_match(&record.main_image)
    }

    fn resolve(
        &self,
        record: &ProductRecord,
        page: &[u8],
    ) -> Result<Option<String>, ScraperError> {
        let main_image = record.main_image.as_str();
        let (id_digits, id) = self.image_id(main_image)?;
        let next_id = id
            .checked_add(1)
            .ok_or_else(|| ScraperError::ImageIdParse {
                image_url: main_image.to_owned(),
                reason: format!("\"{id_digits}\" has no successor"),
            })?
            .to_string();

        let candidate = main_image.replacen(id_digits, &next_id, 1);
        if is_on_page(page, &candidate) {
            tracing::debug!(image_id = id, %candidate, "alternate image confirmed");
            return Ok(Some(candidate));
        }

        let Some(part_id) = self.first_part_id(page) else {
            tracing::debug!(image_id = id, %candidate, "alternate image not on page");
            return Ok(None);
        };

        // The part ID has to occur in the main image, otherwise the
        // substitution leaves the main image itself as the "candidate".
        if !main_image.contains(part_id.as_str()) {
            tracing::debug!(image_id = id, %part_id, "part ID not in main image");
            return Ok(None);
        }

        let candidate = main_image.replacen(part_id.as_str(), &next_id, 1);
        if is_on_page(page, &candidate) {
            tracing::debug!(image_id = id, %part_id, %candidate, "alternate image confirmed via part ID");
            Ok(Some(candidate))
        } else {
            tracing::debug!(image_id = id, %part_id, %candidate, "part ID candidate not on page");
            Ok(None)
        }
    }
}
