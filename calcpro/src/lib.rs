//! CalcPro - unit-conversion calculators with shared history
//!
//! The [`Calculator`] ties the pieces together: the static unit registry,
//! the currency rate store, and the persisted calculation history. All
//! state is explicit; there are no module-level caches.
//!
//! ```no_run
//! use calcpro::{Calculator, QuantityKind};
//!
//! let calc = Calculator::open_default().unwrap();
//! let feet = calc.convert(QuantityKind::Length, "meters", "feet", 10.0).unwrap();
//! assert!((feet - 32.8084).abs() < 1e-6);
//! ```

mod calculator;

pub use calculator::Calculator;

pub use calcpro_core::{format_value, CalcError, QuantityKind};
pub use calcpro_currency::{symbol_for, CurrencyInfo, RateSource, RateTable, CURRENCIES};
pub use calcpro_health::{bmi, BmiCategory, HeightUnit, WeightUnit};
pub use calcpro_history::{HistoryEntry, HistoryError, HistoryStore, MAX_ENTRIES};
pub use calcpro_units::{convert, Transform, UnitDef, REGISTRY};
