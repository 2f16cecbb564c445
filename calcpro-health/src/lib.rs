//! CalcPro Health - BMI calculator
//!
//! BMI is a derived computation: weight normalized to kilograms, height to
//! meters, then kg / m². Inputs must be finite and positive; the result is
//! never Infinity or NaN.

mod bmi;

pub use bmi::{bmi, BmiCategory, HeightUnit, WeightUnit};
