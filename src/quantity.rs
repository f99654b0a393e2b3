#[macro_use]
pub mod macros;

pub mod cost;
pub mod energy;
pub mod power;
pub mod rate;
pub mod time;

use rust_decimal::Decimal;

use crate::prelude::*;

/// Convert the float into a decimal keeping its exact binary expansion.
///
/// No pre-rounding happens here, so the half-up rounding that follows sees the same digits
/// as the float actually holds.
pub fn exact_decimal(value: f64) -> Result<Decimal> {
    Decimal::from_f64_retain(value)
        .with_context(|| format!("`{value}` cannot be represented as a decimal"))
}
