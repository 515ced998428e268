pub mod client;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod normalize;
pub mod resolve;
pub mod types;

pub use client::ProductScraper;
pub use error::ScraperError;
pub use fetch::{Fetcher, HttpFetcher};
pub use normalize::{normalize_product, unescape_text};
pub use resolve::{AlternateImageResolver, CatalogResolver, IdArithmeticResolver, ResolverChain};
pub use types::{CatalogEntry, LdProduct};
