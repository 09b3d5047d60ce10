//! Stock adjustments and their append-only audit trail.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;
use vitrine_core::{AdjustmentRecord, StockItem, StockStatus, ValidationError};

/// Result of a validated adjustment: the updated item and its audit entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjustment {
    pub item: StockItem,
    pub record: AdjustmentRecord,
}

/// Validates and applies `delta` to a copy of `item`.
///
/// `item` itself is never touched; on error nothing is produced.
///
/// # Errors
///
/// - [`ValidationError::EmptyReason`] when `reason` is blank.
/// - [`ValidationError::ZeroDelta`] when `delta == 0`.
/// - [`ValidationError::NegativeQuantity`] when the result would drop below zero.
/// - [`ValidationError::QuantityOverflow`] when the result does not fit a `u32`.
pub fn adjust(
    item: &StockItem,
    delta: i64,
    reason: &str,
    at: DateTime<Utc>,
) -> Result<Adjustment, ValidationError> {
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(ValidationError::EmptyReason);
    }

    if delta == 0 {
        return Err(ValidationError::ZeroDelta);
    }

    let target = i64::from(item.quantity) + delta;
    if target < 0 {
        return Err(ValidationError::NegativeQuantity {
            item_id: item.id.clone(),
            current: item.quantity,
            delta,
        });
    }

    let new_quantity = u32::try_from(target).map_err(|_| ValidationError::QuantityOverflow {
        item_id: item.id.clone(),
        current: item.quantity,
        delta,
    })?;

    let record = AdjustmentRecord {
        id: Uuid::new_v4(),
        stock_item_id: item.id.clone(),
        previous_quantity: item.quantity,
        new_quantity,
        delta,
        reason: reason.to_string(),
        recorded_at: at,
    };

    let item = StockItem {
        quantity: new_quantity,
        last_updated: at,
        ..item.clone()
    };

    Ok(Adjustment { item, record })
}

/// Append-only list of applied adjustments.
#[derive(Debug, Clone, Default)]
pub struct StockLedger {
    records: Vec<AdjustmentRecord>,
}

impl StockLedger {
    #[must_use]
    pub fn records(&self) -> &[AdjustmentRecord] {
        &self.records
    }

    /// Entries for one stock item, oldest first.
    pub fn for_item<'a>(
        &'a self,
        stock_item_id: &'a str,
    ) -> impl Iterator<Item = &'a AdjustmentRecord> {
        self.records
            .iter()
            .filter(move |r| r.stock_item_id == stock_item_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn append(&mut self, record: AdjustmentRecord) -> &AdjustmentRecord {
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }
}

/// Dashboard counters for the stock screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StockSummary {
    pub total: usize,
    pub low: usize,
    pub high: usize,
}

#[must_use]
pub fn stock_summary(items: &[StockItem]) -> StockSummary {
    items.iter().fold(
        StockSummary {
            total: items.len(),
            ..StockSummary::default()
        },
        |mut acc, item| {
            match item.status() {
                StockStatus::Low => acc.low += 1,
                StockStatus::High => acc.high += 1,
                StockStatus::Normal => {}
            }
            acc
        },
    )
}

/// Stock-screen search over product name, SKU and platform, optionally
/// restricted to low-stock items. An empty query matches every item.
#[must_use]
pub fn search_stock<'a>(query: &str, items: &'a [StockItem], low_only: bool) -> Vec<&'a StockItem> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            needle.is_empty()
                || item.product_name.to_lowercase().contains(&needle)
                || item.sku.to_lowercase().contains(&needle)
                || item.platform.to_lowercase().contains(&needle)
        })
        .filter(|item| !low_only || item.is_low())
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap()
    }

    fn item(id: &str, name: &str, sku: &str, quantity: u32, min: u32, max: u32) -> StockItem {
        StockItem {
            id: id.to_string(),
            product_id: format!("prod-{id}"),
            product_name: name.to_string(),
            platform: "PS5".to_string(),
            sku: sku.to_string(),
            quantity,
            min_stock_level: min,
            max_stock_level: max,
            last_updated: at(8),
        }
    }

    #[test]
    fn positive_delta_updates_quantity_and_timestamp() {
        let original = item("s1", "Zelda", "ZELDA-NSW-001", 5, 5, 20);
        assert_eq!(original.status(), StockStatus::Low);

        let adjustment = adjust(&original, 1, "restock", at(10)).unwrap();
        assert_eq!(adjustment.item.quantity, 6);
        assert_eq!(adjustment.item.status(), StockStatus::Normal);
        assert_eq!(adjustment.item.last_updated, at(10));
        assert_eq!(adjustment.record.previous_quantity, 5);
        assert_eq!(adjustment.record.new_quantity, 6);
        assert_eq!(adjustment.record.delta, 1);
        assert_eq!(adjustment.record.reason, "restock");
        assert_eq!(adjustment.record.recorded_at, at(10));
        // The input is untouched.
        assert_eq!(original.quantity, 5);
    }

    #[test]
    fn negative_delta_down_to_zero_is_allowed() {
        let original = item("s1", "Zelda", "Z", 5, 1, 20);
        let adjustment = adjust(&original, -5, "sold out", at(9)).unwrap();
        assert_eq!(adjustment.item.quantity, 0);
    }

    #[test]
    fn rejects_result_below_zero() {
        let original = item("s1", "Zelda", "Z", 5, 5, 20);
        let err = adjust(&original, -10, "damaged", at(9)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NegativeQuantity {
                item_id: "s1".to_string(),
                current: 5,
                delta: -10,
            }
        );
    }

    #[test]
    fn rejects_blank_reason() {
        let original = item("s1", "Zelda", "Z", 5, 5, 20);
        assert_eq!(adjust(&original, 1, "", at(9)), Err(ValidationError::EmptyReason));
        assert_eq!(adjust(&original, 1, "   ", at(9)), Err(ValidationError::EmptyReason));
    }

    #[test]
    fn rejects_zero_delta() {
        let original = item("s1", "Zelda", "Z", 5, 5, 20);
        assert_eq!(adjust(&original, 0, "count", at(9)), Err(ValidationError::ZeroDelta));
    }

    #[test]
    fn rejects_overflow() {
        let original = item("s1", "Zelda", "Z", u32::MAX, 5, 20);
        assert!(matches!(
            adjust(&original, 1, "miscount", at(9)),
            Err(ValidationError::QuantityOverflow { .. })
        ));
    }

    #[test]
    fn reason_is_stored_trimmed() {
        let original = item("s1", "Zelda", "Z", 5, 5, 20);
        let adjustment = adjust(&original, 2, "  devolução  ", at(9)).unwrap();
        assert_eq!(adjustment.record.reason, "devolução");
    }

    #[test]
    fn ledger_filters_by_item() {
        let mut ledger = StockLedger::default();
        let a = item("s1", "Zelda", "Z", 5, 5, 20);
        let b = item("s2", "Halo", "H", 5, 5, 20);
        ledger.append(adjust(&a, 1, "restock", at(9)).unwrap().record);
        ledger.append(adjust(&b, -1, "sale", at(9)).unwrap().record);
        ledger.append(adjust(&a, 3, "restock", at(10)).unwrap().record);

        assert_eq!(ledger.len(), 3);
        let deltas: Vec<i64> = ledger.for_item("s1").map(|r| r.delta).collect();
        assert_eq!(deltas, vec![1, 3]);
    }

    #[test]
    fn summary_counts_low_and_high() {
        let items = vec![
            item("s1", "God of War", "GOW-PS5-001", 15, 5, 30),
            item("s2", "Horizon", "HFW-PS5-001", 8, 5, 25),
            item("s3", "Halo", "HALO-XBX-001", 3, 5, 20),
            item("s4", "Zelda", "ZELDA-NSW-001", 5, 5, 20),
            item("s5", "DualSense", "CTRL-PS5-001", 50, 10, 50),
        ];
        assert_eq!(
            stock_summary(&items),
            StockSummary {
                total: 5,
                low: 2,
                high: 1,
            }
        );
    }

    #[test]
    fn search_stock_matches_name_sku_and_platform() {
        let mut halo = item("s3", "Halo Infinite", "HALO-XBX-001", 3, 5, 20);
        halo.platform = "Xbox".to_string();
        let items = vec![item("s1", "God of War", "GOW-PS5-001", 15, 5, 30), halo];

        let ids = |found: Vec<&StockItem>| found.iter().map(|i| i.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(search_stock("halo", &items, false)), vec!["s3"]);
        assert_eq!(ids(search_stock("gow-ps5", &items, false)), vec!["s1"]);
        assert_eq!(ids(search_stock("XBOX", &items, false)), vec!["s3"]);
        assert_eq!(ids(search_stock("", &items, false)), vec!["s1", "s3"]);
        assert_eq!(ids(search_stock("", &items, true)), vec!["s3"]);
    }
}
