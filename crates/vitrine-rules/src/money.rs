use rust_decimal::{Decimal, RoundingStrategy};

/// Number of interest-free installments advertised at checkout.
pub const INSTALLMENT_COUNT: u32 = 12;

/// Rounds to cents, halves away from zero.
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// One of [`INSTALLMENT_COUNT`] equal payments of `amount`, in cents.
#[must_use]
pub fn installment_amount(amount: Decimal) -> Decimal {
    round_money(amount / Decimal::from(INSTALLMENT_COUNT))
}

/// Renders `amount` as Brazilian reais, e.g. `R$ 1234,50`.
#[must_use]
pub fn format_brl(amount: Decimal) -> String {
    let mut cents = round_money(amount);
    cents.rescale(2);
    format!("R$ {}", cents.to_string().replace('.', ","))
}
