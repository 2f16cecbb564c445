//! Unit definitions - the eight table-driven kinds

use std::collections::HashMap;
use std::sync::LazyLock;
use calcpro_core::QuantityKind;
use crate::{KindTable, Transform, UnitDef};

/// Global unit registry
pub static REGISTRY: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Registry of the conversion tables, one per table-driven kind
pub struct UnitRegistry {
    tables: HashMap<QuantityKind, KindTable>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            tables: HashMap::new(),
        };
        registry.insert(temperature_table());
        registry.insert(length_table());
        registry.insert(weight_table());
        registry.insert(area_table());
        registry.insert(volume_table());
        registry.insert(speed_table());
        registry.insert(data_table());
        registry.insert(time_table());
        registry
    }

    /// Table for a kind; `None` for currency and BMI
    pub fn table(&self, kind: QuantityKind) -> Option<&KindTable> {
        self.tables.get(&kind)
    }

    /// Look up a unit within a kind
    pub fn unit(&self, kind: QuantityKind, id: &str) -> Option<&UnitDef> {
        self.table(kind).and_then(|t| t.unit(id))
    }

    fn insert(&mut self, table: KindTable) {
        self.tables.insert(table.kind(), table);
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn unit(id: &'static str, label: &'static str, symbol: &'static str, to_base: Transform) -> UnitDef {
    UnitDef {
        id,
        label,
        symbol: Some(symbol),
        to_base,
    }
}

fn temperature_table() -> KindTable {
    let mut t = KindTable::new(QuantityKind::Temperature, "celsius");
    let f_to_c = Transform::Affine {
        scale: 5.0 / 9.0,
        offset: -32.0 * (5.0 / 9.0),
    };
    let k_to_c = Transform::Affine {
        scale: 1.0,
        offset: -273.15,
    };
    t.register(unit("celsius", "Celsius", "°C", Transform::IDENTITY));
    t.register(unit("fahrenheit", "Fahrenheit", "°F", f_to_c));
    t.register(unit("kelvin", "Kelvin", "K", k_to_c));

    // All six pairs are tabulated with the textbook formulas so the anchor
    // points (0°C = 32°F, 0°C = 273.15K, ...) come out exact.
    t.register_direct("celsius", "fahrenheit", Transform::Affine {
        scale: 9.0 / 5.0,
        offset: 32.0,
    });
    t.register_direct("fahrenheit", "celsius", f_to_c);
    t.register_direct("celsius", "kelvin", Transform::Affine {
        scale: 1.0,
        offset: 273.15,
    });
    t.register_direct("kelvin", "celsius", k_to_c);
    t.register_direct("fahrenheit", "kelvin", Transform::Affine {
        scale: 5.0 / 9.0,
        offset: 273.15 - 32.0 * (5.0 / 9.0),
    });
    t.register_direct("kelvin", "fahrenheit", Transform::Affine {
        scale: 9.0 / 5.0,
        offset: 32.0 - 273.15 * (9.0 / 5.0),
    });
    t
}

fn length_table() -> KindTable {
    let mut t = KindTable::new(QuantityKind::Length, "meters");
    t.register(unit("meters", "Meters", "m", Transform::IDENTITY));
    t.register(unit("feet", "Feet", "ft", Transform::Linear(1.0 / 3.28084)));
    t.register(unit("inches", "Inches", "in", Transform::Linear(1.0 / 39.3701)));
    t.register(unit("kilometers", "Kilometers", "km", Transform::Linear(1000.0)));
    t.register(unit("miles", "Miles", "mi", Transform::Linear(1609.344)));
    t.register(unit("yards", "Yards", "yd", Transform::Linear(1.0 / 1.09361)));

    // Exact-by-definition imperial relations
    t.register_direct("feet", "inches", Transform::Linear(12.0));
    t.register_direct("miles", "feet", Transform::Linear(5280.0));
    t.register_direct("miles", "inches", Transform::Linear(63360.0));
    t.register_direct("miles", "yards", Transform::Linear(1760.0));
    t.register_direct("yards", "feet", Transform::Linear(3.0));
    t.register_direct("yards", "inches", Transform::Linear(36.0));
    t.register_direct("miles", "kilometers", Transform::Linear(1.609344));
    t
}

fn weight_table() -> KindTable {
    let mut t = KindTable::new(QuantityKind::Weight, "kg");
    t.register(unit("kg", "Kilograms", "kg", Transform::IDENTITY));
    t.register(unit("pounds", "Pounds", "lb", Transform::Linear(1.0 / 2.20462)));
    t.register(unit("ounces", "Ounces", "oz", Transform::Linear(1.0 / 35.274)));
    t.register(unit("grams", "Grams", "g", Transform::Linear(0.001)));
    t.register(unit("tons", "Tons", "t", Transform::Linear(1000.0)));

    t.register_direct("pounds", "ounces", Transform::Linear(16.0));
    t.register_direct("tons", "pounds", Transform::Linear(2000.0));
    t.register_direct("tons", "ounces", Transform::Linear(32000.0));
    t
}

fn area_table() -> KindTable {
    let mut t = KindTable::new(QuantityKind::Area, "squareMeters");
    t.register(unit("squareMeters", "Square Meters", "m²", Transform::IDENTITY));
    t.register(unit("squareFeet", "Square Feet", "ft²", Transform::Linear(1.0 / 10.7639)));
    t.register(unit("squareInches", "Square Inches", "in²", Transform::Linear(1.0 / 1550.003)));
    t.register(unit("acres", "Acres", "ac", Transform::Linear(4046.86)));
    t.register(unit("hectares", "Hectares", "ha", Transform::Linear(10000.0)));

    t.register_direct("squareFeet", "squareInches", Transform::Linear(144.0));
    t.register_direct("acres", "squareFeet", Transform::Linear(43560.0));
    t.register_direct("acres", "squareInches", Transform::Linear(6272640.0));
    t.register_direct("hectares", "squareFeet", Transform::Linear(107639.0));
    t.register_direct("hectares", "squareInches", Transform::Linear(15500030.0));
    t.register_direct("hectares", "acres", Transform::Linear(2.47105));
    t
}

fn volume_table() -> KindTable {
    let mut t = KindTable::new(QuantityKind::Volume, "liters");
    t.register(unit("liters", "Liters", "L", Transform::IDENTITY));
    t.register(unit("gallons", "Gallons", "gal", Transform::Linear(3.78541)));
    t.register(unit("cubicMeters", "Cubic Meters", "m³", Transform::Linear(1000.0)));
    t.register(unit("cubicFeet", "Cubic Feet", "ft³", Transform::Linear(28.3168)));
    t.register(unit("milliliters", "Milliliters", "mL", Transform::Linear(0.001)));
    t
}

fn speed_table() -> KindTable {
    let mut t = KindTable::new(QuantityKind::Speed, "ms");
    t.register(unit("ms", "Meters per Second", "m/s", Transform::IDENTITY));
    t.register(unit("kmh", "Kilometers per Hour", "km/h", Transform::Linear(1.0 / 3.6)));
    t.register(unit("mph", "Miles per Hour", "mph", Transform::Linear(1.0 / 2.23694)));
    t.register(unit("knots", "Knots", "kn", Transform::Linear(1.0 / 1.94384)));

    // 1 knot is 1.852 km/h by definition
    t.register_direct("knots", "kmh", Transform::Linear(1.852));
    t
}

fn data_table() -> KindTable {
    const KIB: f64 = 1024.0;
    let mut t = KindTable::new(QuantityKind::Data, "bytes");
    t.register(unit("bytes", "Bytes", "B", Transform::IDENTITY));
    t.register(unit("kilobytes", "Kilobytes", "KB", Transform::Linear(KIB)));
    t.register(unit("megabytes", "Megabytes", "MB", Transform::Linear(KIB * KIB)));
    t.register(unit("gigabytes", "Gigabytes", "GB", Transform::Linear(KIB * KIB * KIB)));
    t.register(unit("terabytes", "Terabytes", "TB", Transform::Linear(KIB * KIB * KIB * KIB)));
    t
}

fn time_table() -> KindTable {
    let mut t = KindTable::new(QuantityKind::Time, "seconds");
    t.register(unit("seconds", "Seconds", "s", Transform::IDENTITY));
    t.register(unit("minutes", "Minutes", "min", Transform::Linear(60.0)));
    t.register(unit("hours", "Hours", "h", Transform::Linear(3600.0)));
    t.register(unit("days", "Days", "d", Transform::Linear(86400.0)));
    t.register(unit("weeks", "Weeks", "wk", Transform::Linear(604800.0)));
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_table_driven_kinds_present() {
        for kind in QuantityKind::ALL {
            assert_eq!(REGISTRY.table(kind).is_some(), kind.is_table_driven());
        }
    }

    #[test]
    fn test_base_units_are_identity() {
        for kind in QuantityKind::ALL.into_iter().filter(|k| k.is_table_driven()) {
            let table = REGISTRY.table(kind).unwrap();
            let base = table.unit(table.base()).expect("base unit registered");
            assert_eq!(base.to_base, Transform::IDENTITY, "{} base", kind);
        }
    }

    #[test]
    fn test_unit_lookup() {
        assert!(REGISTRY.unit(QuantityKind::Length, "meters").is_some());
        assert!(REGISTRY.unit(QuantityKind::Length, "pounds").is_none());
        assert!(REGISTRY.unit(QuantityKind::Weight, "pounds").is_some());
    }

    #[test]
    fn test_direct_entries_are_mutual_inverses() {
        for kind in QuantityKind::ALL.into_iter().filter(|k| k.is_table_driven()) {
            let table = REGISTRY.table(kind).unwrap();
            for from in table.units() {
                for to in table.units() {
                    if let Some(forward) = table.direct(from.id, to.id) {
                        let reverse = table.direct(to.id, from.id).expect("reverse entry");
                        for x in [0.5, 1.0, 42.0, 9999.0] {
                            let back = reverse.apply(forward.apply(x));
                            let tol = 1e-9 * x.abs().max(1.0);
                            assert!(
                                (back - x).abs() <= tol,
                                "{}: {}->{} not invertible",
                                kind,
                                from.id,
                                to.id
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_display_symbols() {
        let m = REGISTRY.unit(QuantityKind::Length, "meters").unwrap();
        assert_eq!(m.symbol, Some("m"));
        assert_eq!(m.label, "Meters");
    }
}
