//! Conversion resolver
//!
//! Resolution order: identity, direct table entry, two-hop through the
//! kind's base unit. A pair that survives none of these is unsupported and
//! yields an error rather than a garbage value.

use calcpro_core::{CalcError, QuantityKind};
use crate::REGISTRY;

/// Convert `value` from unit `from` to unit `to` within `kind`.
///
/// Results are not rounded here; fixed-decimal display is the caller's
/// concern. Currency and BMI have no table and always report the pair as
/// unsupported; their own crates resolve them.
pub fn convert(kind: QuantityKind, from: &str, to: &str, value: f64) -> Result<f64, CalcError> {
    if !value.is_finite() {
        return Err(CalcError::InvalidValue);
    }
    if from == to {
        return Ok(value);
    }

    let table = REGISTRY
        .table(kind)
        .ok_or_else(|| CalcError::unsupported_pair(kind, from, to))?;

    if let Some(t) = table.direct(from, to) {
        return Ok(t.apply(value));
    }

    let source = table
        .unit(from)
        .ok_or_else(|| CalcError::unsupported_pair(kind, from, to))?;
    let target = table
        .unit(to)
        .ok_or_else(|| CalcError::unsupported_pair(kind, from, to))?;

    let two_hop = source.to_base.then(&target.to_base.invert());
    Ok(two_hop.apply(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, rel: f64) {
        let tol = rel * b.abs().max(1.0);
        assert!((a - b).abs() <= tol, "{} != {} (tol {})", a, b, tol);
    }

    #[test]
    fn test_identity_is_exact() {
        for kind in QuantityKind::ALL.into_iter().filter(|k| k.is_table_driven()) {
            let table = REGISTRY.table(kind).unwrap();
            for u in table.units() {
                let x = 123.456;
                assert_eq!(convert(kind, u.id, u.id, x).unwrap(), x);
            }
        }
    }

    #[test]
    fn test_round_trip_all_pairs() {
        for kind in QuantityKind::ALL.into_iter().filter(|k| k.is_table_driven()) {
            let table = REGISTRY.table(kind).unwrap();
            for from in table.units() {
                for to in table.units() {
                    for x in [0.001, 1.0, 3.14159, 1024.0, 1e6] {
                        let there = convert(kind, from.id, to.id, x).unwrap();
                        let back = convert(kind, to.id, from.id, there).unwrap();
                        close(back, x, 1e-6);
                    }
                }
            }
        }
    }

    #[test]
    fn test_temperature_anchors() {
        assert_eq!(convert(QuantityKind::Temperature, "celsius", "fahrenheit", 0.0).unwrap(), 32.0);
        assert_eq!(convert(QuantityKind::Temperature, "celsius", "fahrenheit", 100.0).unwrap(), 212.0);
        assert_eq!(convert(QuantityKind::Temperature, "celsius", "kelvin", 0.0).unwrap(), 273.15);
        assert_eq!(convert(QuantityKind::Temperature, "fahrenheit", "celsius", 32.0).unwrap(), 0.0);
        close(convert(QuantityKind::Temperature, "fahrenheit", "kelvin", 32.0).unwrap(), 273.15, 1e-12);
    }

    #[test]
    fn test_temperature_composition_consistent() {
        // celsius -> fahrenheit -> celsius returns the original value
        for c in [-40.0, 0.0, 36.6, 100.0] {
            let f = convert(QuantityKind::Temperature, "celsius", "fahrenheit", c).unwrap();
            let back = convert(QuantityKind::Temperature, "fahrenheit", "celsius", f).unwrap();
            close(back, c, 1e-12);
        }
        // minus forty is the fixed point
        close(convert(QuantityKind::Temperature, "celsius", "fahrenheit", -40.0).unwrap(), -40.0, 1e-12);
    }

    #[test]
    fn test_data_is_binary() {
        assert_eq!(convert(QuantityKind::Data, "megabytes", "gigabytes", 1024.0).unwrap(), 1.0);
        assert_eq!(convert(QuantityKind::Data, "bytes", "kilobytes", 2048.0).unwrap(), 2.0);
        assert_eq!(convert(QuantityKind::Data, "terabytes", "gigabytes", 1.0).unwrap(), 1024.0);
    }

    #[test]
    fn test_length_spot_checks() {
        close(convert(QuantityKind::Length, "meters", "feet", 1.0).unwrap(), 3.28084, 1e-9);
        assert_eq!(convert(QuantityKind::Length, "feet", "inches", 1.0).unwrap(), 12.0);
        assert_eq!(convert(QuantityKind::Length, "miles", "yards", 1.0).unwrap(), 1760.0);
        close(convert(QuantityKind::Length, "kilometers", "miles", 1.609344).unwrap(), 1.0, 1e-12);
    }

    #[test]
    fn test_time_spot_checks() {
        assert_eq!(convert(QuantityKind::Time, "hours", "seconds", 2.0).unwrap(), 7200.0);
        close(convert(QuantityKind::Time, "weeks", "days", 3.0).unwrap(), 21.0, 1e-12);
    }

    #[test]
    fn test_speed_spot_checks() {
        close(convert(QuantityKind::Speed, "knots", "kmh", 10.0).unwrap(), 18.52, 1e-12);
        close(convert(QuantityKind::Speed, "kmh", "ms", 36.0).unwrap(), 10.0, 1e-12);
    }

    #[test]
    fn test_non_finite_value() {
        assert_eq!(
            convert(QuantityKind::Length, "meters", "feet", f64::NAN),
            Err(CalcError::InvalidValue)
        );
        assert_eq!(
            convert(QuantityKind::Length, "meters", "feet", f64::INFINITY),
            Err(CalcError::InvalidValue)
        );
    }

    #[test]
    fn test_unsupported_pairs() {
        // unit from another kind
        assert!(matches!(
            convert(QuantityKind::Length, "meters", "pounds", 1.0),
            Err(CalcError::UnsupportedPair { .. })
        ));
        // unknown unit entirely
        assert!(matches!(
            convert(QuantityKind::Weight, "stone", "kg", 1.0),
            Err(CalcError::UnsupportedPair { .. })
        ));
        // kinds without a table
        assert!(matches!(
            convert(QuantityKind::Currency, "USD", "EUR", 1.0),
            Err(CalcError::UnsupportedPair { .. })
        ));
        assert!(matches!(
            convert(QuantityKind::Bmi, "kg", "cm", 1.0),
            Err(CalcError::UnsupportedPair { .. })
        ));
    }
}
