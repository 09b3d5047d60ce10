//! Plain-text order summary handed to the outbound chat integration.

use vitrine_core::{CartLine, PricingResult};

use crate::money::format_brl;

const GREETING: &str = "Olá! Gostaria de finalizar meu pedido:";

/// Builds the prefilled checkout message.
///
/// The discount line appears only when a discount was given; zero shipping is
/// written as `Grátis`.
#[must_use]
pub fn order_summary(lines: &[CartLine], pricing: &PricingResult) -> String {
    let mut out = vec![GREETING.to_string(), String::new()];

    out.extend(lines.iter().map(|line| {
        format!(
            "- {} ({}) x{}: {}",
            line.title,
            line.platform,
            line.quantity,
            format_brl(line.line_total())
        )
    }));

    out.push(String::new());
    out.push(format!("Subtotal: {}", format_brl(pricing.subtotal)));
    if pricing.discount > rust_decimal::Decimal::ZERO {
        out.push(format!("Desconto: {}", format_brl(pricing.discount)));
    }
    if pricing.has_free_shipping() {
        out.push("Frete: Grátis".to_string());
    } else {
        out.push(format!("Frete: {}", format_brl(pricing.shipping)));
    }
    out.push(format!("Total: {}", format_brl(pricing.total)));

    out.join("\n")
}
