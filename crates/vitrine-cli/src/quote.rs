//! `quote` command: prices a cart built from `--item` arguments.

use vitrine_core::Catalog;
use vitrine_rules::{format_brl, order_summary, SessionStore, INSTALLMENT_COUNT};

/// Parses `PRODUCT_ID[:QUANTITY]`; quantity defaults to 1.
pub(crate) fn parse_item(raw: &str) -> Result<(String, u32), String> {
    let (id, quantity) = match raw.rsplit_once(':') {
        Some((id, qty)) => {
            let qty = qty
                .parse::<u32>()
                .map_err(|e| format!("invalid quantity {qty:?}: {e}"))?;
            (id, qty)
        }
        None => (raw, 1),
    };

    let id = id.trim();
    if id.is_empty() {
        return Err("product id must be non-empty".to_string());
    }
    if quantity == 0 {
        return Err("quantity must be at least 1".to_string());
    }
    Ok((id.to_string(), quantity))
}

pub(crate) fn run_quote(
    catalog: Catalog,
    items: &[(String, u32)],
    coupon: Option<&str>,
    summary: bool,
) -> anyhow::Result<()> {
    let mut store = SessionStore::new(catalog);
    for (product_id, quantity) in items {
        store.add_to_cart(product_id, *quantity)?;
    }

    let pricing = store.quote(coupon);

    for line in store.cart().lines() {
        println!(
            "{} ({}) x{}  {}",
            line.title,
            line.platform,
            line.quantity,
            format_brl(line.line_total())
        );
    }
    println!("subtotal:  {}", format_brl(pricing.subtotal));
    if coupon.is_some() && !pricing.coupon_applied {
        println!("coupon not recognised; no discount applied");
    }
    println!("discount:  {}", format_brl(pricing.discount));
    if pricing.has_free_shipping() {
        println!("shipping:  free");
    } else {
        println!("shipping:  {}", format_brl(pricing.shipping));
    }
    println!("total:     {}", format_brl(pricing.total));
    println!(
        "or {INSTALLMENT_COUNT}x {} interest-free",
        format_brl(pricing.per_installment)
    );

    if summary {
        println!();
        println!("{}", order_summary(store.cart().lines(), &pricing));
    }

    Ok(())
}
