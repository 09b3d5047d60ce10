pub mod app_config;
pub mod catalog;
pub mod config;
mod error;
pub mod filters;
pub mod orders;
pub mod products;
pub mod stock;

pub use app_config::{AppConfig, Environment};
pub use catalog::{load_catalog, parse_catalog, Catalog};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, CoreError, ValidationError};
pub use filters::{FilterSet, PriceRange, SortKey, DEFAULT_PRICE_CEILING};
pub use orders::{CartLine, PricingResult};
pub use products::{Platform, Product};
pub use stock::{AdjustmentRecord, StockItem, StockStatus};
