use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Health classification of a stock item, derived from its thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Low,
    Normal,
    High,
}

impl StockStatus {
    /// Label used by the admin stock screen.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::Low => "Estoque Baixo",
            StockStatus::Normal => "Estoque Normal",
            StockStatus::High => "Estoque Alto",
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockStatus::Low => write!(f, "low"),
            StockStatus::Normal => write!(f, "normal"),
            StockStatus::High => write!(f, "high"),
        }
    }
}

/// Warehouse record for one product. Quantities only change through a
/// validated stock adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    /// Display platform as the warehouse labels it, e.g. `"PS5"`.
    pub platform: String,
    pub sku: String,
    pub quantity: u32,
    pub min_stock_level: u32,
    pub max_stock_level: u32,
    pub last_updated: DateTime<Utc>,
}

impl StockItem {
    /// Classifies the current quantity. `Low` wins when both thresholds match.
    #[must_use]
    pub fn status(&self) -> StockStatus {
        if self.quantity <= self.min_stock_level {
            StockStatus::Low
        } else if self.quantity >= self.max_stock_level {
            StockStatus::High
        } else {
            StockStatus::Normal
        }
    }

    #[must_use]
    pub fn is_low(&self) -> bool {
        self.status() == StockStatus::Low
    }
}

/// Immutable audit entry for one applied stock change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentRecord {
    pub id: Uuid,
    pub stock_item_id: String,
    pub previous_quantity: u32,
    pub new_quantity: u32,
    pub delta: i64,
    pub reason: String,
    pub recorded_at: DateTime<Utc>,
}
