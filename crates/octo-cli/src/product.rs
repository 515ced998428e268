//! `product` command: look up every URL concurrently and print the records.
//!
//! A failed lookup is logged and does not stop the others; the command exits
//! with an error if any lookup failed.

use anyhow::Context;
use octo_core::{FetchConfig, ProductRecord};
use octo_scraper::ProductScraper;

pub(crate) async fn run(config: &FetchConfig, urls: &[String], compact: bool) -> anyhow::Result<()> {
    let scraper = ProductScraper::from_config(config).context("failed to build HTTP client")?;

    let results =
        futures::future::join_all(urls.iter().map(|url| scraper.get_product_by_url(url))).await;

    let mut failures = 0usize;
    for (url, result) in urls.iter().zip(results) {
        match result {
            Ok(record) => {
                tracing::info!(
                    url = %url,
                    sku = record.sku,
                    price = record.primary_offer().map_or("", |offer| offer.price.as_str()),
                    has_alternate_image = record.has_alternate_image(),
                    "product found"
                );
                println!("{}", render(&record, compact)?);
            }
            Err(e) => {
                tracing::error!(url = %url, error = %e, "product lookup failed");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} product lookups failed", urls.len());
    }
    Ok(())
}

pub(crate) fn render(record: &ProductRecord, compact: bool) -> anyhow::Result<String> {
    let json = if compact {
        serde_json::to_string(record)?
    } else {
        serde_json::to_string_pretty(record)?
    };
    Ok(json)
}
