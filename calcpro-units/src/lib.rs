//! CalcPro Units - Unit Tables and Conversion Resolver
//!
//! Provides the per-kind unit registry and the resolver that maps a value
//! between any two units of a kind.
//!
//! Kinds covered by the registry:
//! - Temperature (celsius, fahrenheit, kelvin)
//! - Length (meters, feet, inches, kilometers, miles, yards)
//! - Weight (kg, pounds, ounces, grams, tons)
//! - Area (squareMeters, squareFeet, squareInches, acres, hectares)
//! - Volume (liters, gallons, cubicMeters, cubicFeet, milliliters)
//! - Speed (kmh, mph, ms, knots)
//! - Data (bytes, kilobytes, megabytes, gigabytes, terabytes; 1024-based)
//! - Time (seconds, minutes, hours, days, weeks)
//!
//! Currency and BMI are handled by their own crates; they have no table
//! here and the resolver reports their pairs as unsupported.

mod convert;
mod registry;
mod transform;
mod unit;

pub use convert::convert;
pub use registry::REGISTRY;
pub use transform::Transform;
pub use unit::{KindTable, UnitDef};
