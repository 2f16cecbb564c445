//! CalcPro Core - shared types for the conversion calculators
//!
//! Provides the quantity-kind enumeration, the error type shared by every
//! converter, and the number formatting helpers used at the presentation
//! edge. Conversion results themselves are never rounded; formatting is a
//! caller concern.

mod error;
mod format;
mod kind;

pub use error::CalcError;
pub use format::format_value;
pub use kind::QuantityKind;

/// Re-export of the types most converter crates need
pub mod prelude {
    pub use crate::{format_value, CalcError, QuantityKind};
}
