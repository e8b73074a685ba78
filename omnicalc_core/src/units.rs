//! # Unit Types
//!
//! Type-safe wrappers for the body-measurement units the health calculators
//! accept. These provide compile-time safety against unit confusion while
//! remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Each calculator hardcodes exactly two unit systems (metric, US)
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Example
//!
//! ```rust
//! use omnicalc_core::units::{Centimeters, Inches, Meters};
//!
//! let height = Centimeters(175.0);
//! let meters: Meters = height.into();
//! assert_eq!(meters.0, 1.75);
//!
//! let inches: Inches = height.into();
//! assert!((inches.0 - 68.9).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * 100.0)
    }
}

impl From<Centimeters> for Inches {
    fn from(cm: Centimeters) -> Self {
        Inches(cm.0 / 2.54)
    }
}

impl From<Inches> for Centimeters {
    fn from(inches: Inches) -> Self {
        Centimeters(inches.0 * 2.54)
    }
}

impl Inches {
    /// Build a length from whole feet plus inches (US height entry)
    pub fn from_feet_and_inches(feet: f64, inches: f64) -> Self {
        Inches(feet * 12.0 + inches)
    }
}

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Mass in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoundsMass(pub f64);

impl From<PoundsMass> for Kilograms {
    fn from(lb: PoundsMass) -> Self {
        Kilograms(lb.0 * 0.453592)
    }
}

impl From<Kilograms> for PoundsMass {
    fn from(kg: Kilograms) -> Self {
        PoundsMass(kg.0 / 0.453592)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Centimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(Inches);
impl_arithmetic!(Kilograms);
impl_arithmetic!(PoundsMass);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cm_to_meters() {
        let cm = Centimeters(180.0);
        let m: Meters = cm.into();
        assert_eq!(m.0, 1.8);
    }

    #[test]
    fn test_feet_and_inches() {
        let height = Inches::from_feet_and_inches(5.0, 9.0);
        assert_eq!(height.0, 69.0);
        let cm: Centimeters = height.into();
        assert!((cm.0 - 175.26).abs() < 0.01);
    }

    #[test]
    fn test_pounds_to_kg() {
        let lb = PoundsMass(154.0);
        let kg: Kilograms = lb.into();
        assert!((kg.0 - 69.853).abs() < 0.01);
    }

    #[test]
    fn test_arithmetic() {
        let a = Kilograms(70.0);
        let b = Kilograms(10.0);
        assert_eq!((a + b).0, 80.0);
        assert_eq!((a - b).0, 60.0);
        assert_eq!((a * 2.0).0, 140.0);
        assert_eq!((a / 2.0).0, 35.0);
    }

    #[test]
    fn test_serialization() {
        let cm = Centimeters(175.5);
        let json = serde_json::to_string(&cm).unwrap();
        assert_eq!(json, "175.5");

        let roundtrip: Centimeters = serde_json::from_str(&json).unwrap();
        assert_eq!(cm, roundtrip);
    }
}
