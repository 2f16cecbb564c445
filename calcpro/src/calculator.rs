//! Calculator facade

use std::path::Path;
use tracing::debug;
use calcpro_core::{CalcError, QuantityKind};
use calcpro_currency::{symbol_for, RateSource, RateStore};
use calcpro_health::{BmiCategory, HeightUnit, WeightUnit};
use calcpro_history::{HistoryEntry, HistoryError, HistoryStore};

/// The full calculator: registry-backed conversions, currency rates, BMI,
/// and per-kind history.
pub struct Calculator {
    rates: RateStore,
    history: HistoryStore,
}

impl Calculator {
    /// Open with history stored under `history_dir`
    pub fn open(history_dir: impl AsRef<Path>) -> Result<Self, HistoryError> {
        Ok(Calculator {
            rates: RateStore::new(),
            history: HistoryStore::new(history_dir)?,
        })
    }

    /// Open with history in the default per-user location
    pub fn open_default() -> Result<Self, HistoryError> {
        Self::open(HistoryStore::default_dir()?)
    }

    /// Convert a value between two units of a kind.
    ///
    /// Currency routes through the active rate table; BMI is not a
    /// unit-to-unit conversion and reports its pairs as unsupported (use
    /// [`Calculator::bmi`]).
    pub fn convert(
        &self,
        kind: QuantityKind,
        from: &str,
        to: &str,
        value: f64,
    ) -> Result<f64, CalcError> {
        match kind {
            QuantityKind::Currency => self.rates.table().convert(from, to, value),
            _ => calcpro_units::convert(kind, from, to, value),
        }
    }

    /// Body mass index with its category
    pub fn bmi(
        &self,
        weight: f64,
        height: f64,
        weight_unit: WeightUnit,
        height_unit: HeightUnit,
    ) -> Result<(f64, BmiCategory), CalcError> {
        let value = calcpro_health::bmi(weight, height, weight_unit, height_unit)?;
        Ok((value, BmiCategory::from_bmi(value)))
    }

    /// Refresh the exchange rates from the feed. A failure keeps the
    /// current table active; see [`RateSource`] for the active provenance.
    pub async fn refresh_rates(&mut self) -> Result<(), CalcError> {
        self.rates.refresh().await
    }

    /// Provenance of the active rate table
    pub fn rate_source(&self) -> RateSource {
        self.rates.source()
    }

    /// Cross rate between two currency codes on the active table
    pub fn rate(&self, from: &str, to: &str) -> Option<f64> {
        self.rates.table().rate(from, to)
    }

    /// Convert and save the result to the kind's history in one step
    pub fn convert_and_record(
        &self,
        kind: QuantityKind,
        from: &str,
        to: &str,
        value: f64,
    ) -> Result<f64, CalcError> {
        let result = self.convert(kind, from, to, value)?;

        let mut entry = HistoryEntry::new(value, from, result, to);
        if kind == QuantityKind::Currency {
            entry = entry.with_symbols(symbol_for(from), symbol_for(to));
        }
        if let Err(err) = self.history.record(kind, entry) {
            // History is a convenience; a failed write never loses the result
            debug!(kind = %kind, error = %err, "failed to record history entry");
        }
        Ok(result)
    }

    /// Saved history for a kind, newest first
    pub fn history(&self, kind: QuantityKind) -> Vec<HistoryEntry> {
        self.history.list(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn calculator() -> (tempfile::TempDir, Calculator) {
        let dir = tempdir().unwrap();
        let calc = Calculator::open(dir.path()).unwrap();
        (dir, calc)
    }

    #[test]
    fn test_dispatches_table_kinds() {
        let (_dir, calc) = calculator();
        let feet = calc.convert(QuantityKind::Length, "meters", "feet", 1.0).unwrap();
        assert!((feet - 3.28084).abs() < 1e-9);
    }

    #[test]
    fn test_dispatches_currency_to_rate_table() {
        let (_dir, calc) = calculator();
        assert_eq!(calc.rate_source(), RateSource::Fallback);
        assert_eq!(calc.convert(QuantityKind::Currency, "USD", "EUR", 100.0).unwrap(), 85.0);
    }

    #[test]
    fn test_bmi_with_category() {
        let (_dir, calc) = calculator();
        let (value, category) = calc.bmi(70.0, 170.0, WeightUnit::Kg, HeightUnit::Cm).unwrap();
        assert!((value - 24.22).abs() < 0.01);
        assert_eq!(category, BmiCategory::NormalWeight);
    }

    #[test]
    fn test_bmi_kind_is_not_convertible() {
        let (_dir, calc) = calculator();
        assert!(matches!(
            calc.convert(QuantityKind::Bmi, "kg", "cm", 70.0),
            Err(CalcError::UnsupportedPair { .. })
        ));
    }

    #[test]
    fn test_convert_and_record() {
        let (_dir, calc) = calculator();
        let result = calc
            .convert_and_record(QuantityKind::Currency, "USD", "EUR", 100.0)
            .unwrap();
        assert_eq!(result, 85.0);

        let log = calc.history(QuantityKind::Currency);
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].from_unit, "USD");
        assert_eq!(log[0].to_value, 85.0);
        assert_eq!(log[0].from_symbol.as_deref(), Some("$"));
        assert_eq!(log[0].to_symbol.as_deref(), Some("€"));
    }

    #[test]
    fn test_failed_conversion_records_nothing() {
        let (_dir, calc) = calculator();
        let result = calc.convert_and_record(QuantityKind::Length, "meters", "pounds", 1.0);
        assert!(result.is_err());
        assert!(calc.history(QuantityKind::Length).is_empty());
    }

    #[test]
    fn test_history_caps_per_kind() {
        let (_dir, calc) = calculator();
        for n in 1..=6 {
            calc.convert_and_record(QuantityKind::Length, "meters", "feet", n as f64)
                .unwrap();
        }
        let log = calc.history(QuantityKind::Length);
        assert_eq!(log.len(), 5);
        assert_eq!(log[0].from_value, 6.0);
        assert_eq!(log[4].from_value, 2.0);
    }
}
