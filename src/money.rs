//! Currency arithmetic on `rust_decimal::Decimal`.
//!
//! Prices are stored as `DECIMAL(8,2)`. Every amount leaving the service layer
//! goes through [`round`] so that it serializes with exactly two decimal places
//! (`"13.00"`, not `"13"`), whatever scale the backend hands back.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places carried by every monetary value.
pub const DECIMAL_PLACES: u32 = 2;

/// Round to 2 decimal places (half away from zero) and fix the scale at 2.
#[inline]
pub fn round(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DECIMAL_PLACES);
    rounded
}

/// Exact sum of a sequence of amounts, rounded once at the end.
pub fn sum<I>(amounts: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    round(amounts.into_iter().fold(Decimal::ZERO, |acc, amount| acc + amount))
}
