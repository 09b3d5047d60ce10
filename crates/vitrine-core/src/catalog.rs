use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, Product, StockItem};

/// Full data set handed to the rules engine at session start.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
    #[serde(default)]
    pub stock: Vec<StockItem>,
}

/// Load and validate the catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_catalog(&content)
}

/// Parse and validate catalog YAML already held in memory.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_catalog(content: &str) -> Result<Catalog, ConfigError> {
    let catalog: Catalog = serde_yaml::from_str(content).map_err(ConfigError::CatalogFileParse)?;

    validate_catalog(&catalog)?;

    Ok(catalog)
}

fn validate_catalog(catalog: &Catalog) -> Result<(), ConfigError> {
    let mut product_ids = HashSet::new();

    for product in &catalog.products {
        if product.id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "product id must be non-empty".to_string(),
            ));
        }

        if product.title.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "product '{}' has an empty title",
                product.id
            )));
        }

        if product.price < Decimal::ZERO {
            return Err(ConfigError::Validation(format!(
                "product '{}' has negative price {}",
                product.id, product.price
            )));
        }

        if let Some(original) = product.original_price {
            if original < product.price {
                return Err(ConfigError::Validation(format!(
                    "product '{}' has original price {} below price {}",
                    product.id, original, product.price
                )));
            }
        }

        if !product_ids.insert(product.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate product id: '{}'",
                product.id
            )));
        }
    }

    let mut stock_ids = HashSet::new();

    for item in &catalog.stock {
        if !stock_ids.insert(item.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate stock item id: '{}'",
                item.id
            )));
        }

        if !product_ids.contains(item.product_id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "stock item '{}' references unknown product '{}'",
                item.id, item.product_id
            )));
        }

        if item.min_stock_level > item.max_stock_level {
            return Err(ConfigError::Validation(format!(
                "stock item '{}' has min level {} above max level {}",
                item.id, item.min_stock_level, item.max_stock_level
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
