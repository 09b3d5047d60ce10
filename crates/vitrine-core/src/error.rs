use thiserror::Error;

/// Failures while loading configuration or the catalog file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read catalog file {path}: {source}")]
    CatalogFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file: {0}")]
    CatalogFileParse(#[source] serde_yaml::Error),

    #[error("catalog validation error: {0}")]
    Validation(String),
}

/// Parse failures for the string forms of domain enums.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),
}

/// A rule violation reported by a state-changing operation. The rejected
/// operation leaves all state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("an adjustment reason is required")]
    EmptyReason,

    #[error("adjustment delta must be non-zero")]
    ZeroDelta,

    #[error("stock item {item_id} has {current} units; applying {delta} would go negative")]
    NegativeQuantity {
        item_id: String,
        current: u32,
        delta: i64,
    },

    #[error("stock item {item_id} cannot hold {current} + {delta} units")]
    QuantityOverflow {
        item_id: String,
        current: u32,
        delta: i64,
    },

    #[error("unknown stock item: {0}")]
    UnknownStockItem(String),

    #[error("unknown product: {0}")]
    UnknownProduct(String),

    #[error("cart quantity must be at least 1, got {0}")]
    InvalidQuantity(u32),
}
