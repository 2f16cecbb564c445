//! Numeric transforms between units
//!
//! Every tabulated conversion is either a pure scale or an affine map;
//! temperature is the only affine family. Transforms compose and invert,
//! which is what makes the two-hop path through a base unit work.

use serde::{Deserialize, Serialize};

/// A pure numeric mapping applied to a value during conversion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Transform {
    /// f(x) = x * factor
    Linear(f64),
    /// f(x) = x * scale + offset
    Affine { scale: f64, offset: f64 },
}

impl Transform {
    pub const IDENTITY: Transform = Transform::Linear(1.0);

    /// Apply the transform to a value
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Transform::Linear(factor) => value * factor,
            Transform::Affine { scale, offset } => value * scale + offset,
        }
    }

    /// The inverse mapping. Scale must be non-zero, which holds for every
    /// registered unit.
    pub fn invert(&self) -> Transform {
        match self {
            Transform::Linear(factor) => Transform::Linear(1.0 / factor),
            Transform::Affine { scale, offset } => Transform::Affine {
                scale: 1.0 / scale,
                offset: -offset / scale,
            },
        }
    }

    /// Compose: apply `self` first, then `next`
    pub fn then(&self, next: &Transform) -> Transform {
        match (self, next) {
            (Transform::Linear(a), Transform::Linear(b)) => Transform::Linear(a * b),
            _ => {
                let (a1, b1) = self.coefficients();
                let (a2, b2) = next.coefficients();
                Transform::Affine {
                    scale: a1 * a2,
                    offset: b1 * a2 + b2,
                }
            }
        }
    }

    fn coefficients(&self) -> (f64, f64) {
        match self {
            Transform::Linear(factor) => (*factor, 0.0),
            Transform::Affine { scale, offset } => (*scale, *offset),
        }
    }
}
