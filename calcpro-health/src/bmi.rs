//! Body-mass-index formula and category bands

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use calcpro_core::CalcError;

const POUNDS_PER_KG: f64 = 2.20462;
const METERS_PER_FOOT: f64 = 0.3048;
const METERS_PER_INCH: f64 = 0.0254;

/// Accepted weight input units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    Pounds,
}

/// Accepted height input units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    Cm,
    Feet,
    Inches,
}

impl FromStr for WeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kg" => Ok(WeightUnit::Kg),
            "pounds" => Ok(WeightUnit::Pounds),
            other => Err(format!("unknown weight unit: {}", other)),
        }
    }
}

impl FromStr for HeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cm" => Ok(HeightUnit::Cm),
            "feet" => Ok(HeightUnit::Feet),
            "inches" => Ok(HeightUnit::Inches),
            other => Err(format!("unknown height unit: {}", other)),
        }
    }
}

/// Compute the body mass index.
///
/// Rejects non-finite and non-positive inputs up front so the division can
/// never produce Infinity or NaN.
pub fn bmi(
    weight: f64,
    height: f64,
    weight_unit: WeightUnit,
    height_unit: HeightUnit,
) -> Result<f64, CalcError> {
    if !weight.is_finite() || !height.is_finite() || weight <= 0.0 || height <= 0.0 {
        return Err(CalcError::InvalidValue);
    }

    let weight_kg = match weight_unit {
        WeightUnit::Kg => weight,
        WeightUnit::Pounds => weight / POUNDS_PER_KG,
    };

    let height_m = match height_unit {
        HeightUnit::Cm => height / 100.0,
        HeightUnit::Feet => height * METERS_PER_FOOT,
        HeightUnit::Inches => height * METERS_PER_INCH,
    };

    Ok(weight_kg / (height_m * height_m))
}

/// WHO category bands; each band includes its lower bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::NormalWeight
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        };
        write!(f, "{}", label)
    }
}
