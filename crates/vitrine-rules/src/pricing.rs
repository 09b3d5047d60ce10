//! Cart pricing: subtotal, coupon discount, shipping, total and installment.

use rust_decimal::Decimal;
use vitrine_core::{CartLine, PricingResult};

use crate::money::{installment_amount, round_money};

/// Orders strictly above this subtotal ship for free.
pub const FREE_SHIPPING_THRESHOLD: Decimal = Decimal::from_parts(150, 0, 0, false, 0);

/// Flat fee charged at or below [`FREE_SHIPPING_THRESHOLD`].
pub const SHIPPING_FEE: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

/// The single coupon the store honours.
pub const COUPON_CODE: &str = "UTIDOS10";

/// Fraction of the subtotal taken off by [`COUPON_CODE`].
pub const COUPON_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Discount rate for `code`, if it is recognised. Matching ignores case and
/// surrounding whitespace.
#[must_use]
pub fn coupon_rate(code: &str) -> Option<Decimal> {
    code.trim()
        .eq_ignore_ascii_case(COUPON_CODE)
        .then_some(COUPON_RATE)
}

/// `0` above the free-shipping threshold, the flat fee otherwise.
#[must_use]
pub fn shipping_for(subtotal: Decimal) -> Decimal {
    if subtotal > FREE_SHIPPING_THRESHOLD {
        Decimal::ZERO
    } else {
        SHIPPING_FEE
    }
}

/// Prices a cart.
///
/// An unrecognised or absent coupon yields a zero discount and
/// `coupon_applied == false`; it is not an error. Shipping is decided on the
/// pre-discount subtotal.
#[must_use]
pub fn compute(lines: &[CartLine], coupon: Option<&str>) -> PricingResult {
    let subtotal: Decimal = lines.iter().map(CartLine::line_total).sum();

    let rate = coupon.and_then(coupon_rate);
    let discount = rate.map_or(Decimal::ZERO, |r| round_money(subtotal * r));
    if rate.is_some() {
        tracing::info!(%subtotal, %discount, "coupon applied");
    }

    let shipping = shipping_for(subtotal);
    let total = subtotal - discount + shipping;

    PricingResult {
        subtotal: round_money(subtotal),
        discount,
        shipping,
        total: round_money(total),
        per_installment: installment_amount(total),
        coupon_applied: rate.is_some(),
    }
}
