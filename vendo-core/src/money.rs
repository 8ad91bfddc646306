use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary value to two fractional digits, half-up. Applied when
/// a value is handed back to a caller, never on intermediate sums.
pub fn round(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a monetary value for display, e.g. "R$ 50.00".
pub fn display(amount: Decimal) -> String {
    format!("R$ {:.2}", round(amount))
}
