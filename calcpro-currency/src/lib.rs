//! CalcPro Currency - exchange-rate conversion
//!
//! Rates come from an external feed and are expressed relative to USD.
//! The converter always has a usable table: it starts on a built-in
//! fallback and only ever replaces it with successfully fetched live data,
//! so a dead network degrades accuracy, not availability.

mod fetch;
mod rates;

pub use fetch::{RateStore, FEED_URL};
pub use rates::{symbol_for, CurrencyInfo, RateSource, RateTable, CURRENCIES};
