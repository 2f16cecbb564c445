//! Conversion errors
//!
//! Errors never crash a calculator. They are values a caller renders as
//! "no result"; the only recovery path is the currency fallback table.

use crate::QuantityKind;
use thiserror::Error;

/// Error produced by the conversion resolver and the derived calculators
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Input was not a finite number, or was non-positive where positivity
    /// is required (currency amounts, BMI weight and height)
    #[error("invalid input value")]
    InvalidValue,

    /// No direct or two-hop conversion path between the two units
    #[error("cannot convert {from} to {to} ({kind})")]
    UnsupportedPair {
        kind: QuantityKind,
        from: String,
        to: String,
    },

    /// The exchange-rate feed could not be reached or parsed. Recovered
    /// locally by keeping the currently active rate table.
    #[error("exchange rate feed unavailable: {0}")]
    RateFeedUnavailable(String),
}

impl CalcError {
    pub fn unsupported_pair(kind: QuantityKind, from: &str, to: &str) -> Self {
        CalcError::UnsupportedPair {
            kind,
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}
