use rust_decimal::{Decimal, RoundingStrategy};

/// Money is represented as an exact decimal to avoid floating-point drift
/// when folding long statements.
pub type Amount = Decimal;

/// Format an amount as a human-readable currency string with two decimals.
/// Example: 50 -> "50.00", -12.345 -> "-12.35"
pub fn format_amount(amount: Amount) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Returns true if the amount can be deposited into an account.
pub fn is_valid_amount(amount: Amount) -> bool {
    amount > Decimal::ZERO
}

/// Serde adapter rendering amounts as exact JSON numbers without trailing zeros.
/// `70` stays `70`, `12.50` becomes `12.5`; no digits go through `f64`.
pub mod json_amount {
    use serde::{Deserializer, Serializer};

    use super::Amount;

    pub fn serialize<S>(amount: &Amount, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        rust_decimal::serde::arbitrary_precision::serialize(&amount.normalize(), serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Amount, D::Error>
    where
        D: Deserializer<'de>,
    {
        rust_decimal::serde::arbitrary_precision::deserialize(deserializer)
    }
}
