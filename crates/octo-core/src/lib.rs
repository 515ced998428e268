pub mod config;
pub mod fetch_config;
pub mod products;

pub use config::{load_fetch_config, load_fetch_config_from_env};
pub use fetch_config::{normalize_base_url, FetchConfig};
pub use products::{Offer, PriceSpecification, ProductRecord, Seller};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
