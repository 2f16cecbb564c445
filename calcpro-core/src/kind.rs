//! Quantity kinds - the conversion domains

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

/// A conversion domain with its own set of units.
///
/// Every kind except `Currency` and `Bmi` is backed by a fixed unit table;
/// currency rates come from an external feed and BMI is a derived formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityKind {
    Temperature,
    Length,
    Weight,
    Area,
    Volume,
    Speed,
    Data,
    Time,
    Currency,
    Bmi,
}

impl QuantityKind {
    /// All kinds, in the order the calculators list them
    pub const ALL: [QuantityKind; 10] = [
        QuantityKind::Temperature,
        QuantityKind::Length,
        QuantityKind::Weight,
        QuantityKind::Area,
        QuantityKind::Volume,
        QuantityKind::Speed,
        QuantityKind::Data,
        QuantityKind::Time,
        QuantityKind::Currency,
        QuantityKind::Bmi,
    ];

    /// Lower-case name, used for storage keys and the CLI
    pub fn as_str(&self) -> &'static str {
        match self {
            QuantityKind::Temperature => "temperature",
            QuantityKind::Length => "length",
            QuantityKind::Weight => "weight",
            QuantityKind::Area => "area",
            QuantityKind::Volume => "volume",
            QuantityKind::Speed => "speed",
            QuantityKind::Data => "data",
            QuantityKind::Time => "time",
            QuantityKind::Currency => "currency",
            QuantityKind::Bmi => "bmi",
        }
    }

    /// True for the kinds resolved through the static unit registry
    pub fn is_table_driven(&self) -> bool {
        !matches!(self, QuantityKind::Currency | QuantityKind::Bmi)
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QuantityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuantityKind::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown quantity kind: {}", s))
    }
}
