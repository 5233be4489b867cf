//! Amounts

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits carried by every monetary amount on the wire.
pub const AMOUNT_SCALE: u32 = 2;

/// Round an amount to [`AMOUNT_SCALE`] fractional digits, half to even.
#[must_use]
pub fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointNearestEven)
}

/// Price of `quantity` units at `unit_price`, rounded per line.
#[must_use]
pub fn line_total(quantity: Decimal, unit_price: Decimal) -> Decimal {
    round_amount(quantity * unit_price)
}
