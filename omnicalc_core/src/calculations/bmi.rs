//! # Body Mass Index
//!
//! BMI = weight_kg / height_m², with the WHO category bands:
//! < 18.5 Underweight, < 25 Normal weight, < 30 Overweight, else Obese.
//!
//! ## Example
//!
//! ```rust
//! use omnicalc_core::calculations::bmi::{BmiInput, BmiCategory, calculate};
//!
//! let input = BmiInput::Metric { height_cm: 175.0, weight_kg: 70.0 };
//! let result = calculate(&input).unwrap();
//! assert!((result.bmi - 22.857).abs() < 0.001);
//! assert_eq!(result.category, BmiCategory::NormalWeight);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Centimeters, Inches, Kilograms, Meters, PoundsMass};

/// Input parameters for a BMI calculation.
///
/// Height and weight are accepted in either of the two supported unit
/// systems; imperial inputs are converted to metric before the formula is
/// applied.
///
/// ## JSON Example
///
/// ```json
/// { "unit_system": "Metric", "height_cm": 175.0, "weight_kg": 70.0 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "unit_system")]
pub enum BmiInput {
    /// Height in centimeters, weight in kilograms
    Metric { height_cm: f64, weight_kg: f64 },
    /// Height in feet + inches, weight in pounds
    Imperial {
        height_feet: f64,
        height_inches: f64,
        weight_lb: f64,
    },
}

impl BmiInput {
    /// Height converted to meters
    pub fn height_m(&self) -> f64 {
        match self {
            BmiInput::Metric { height_cm, .. } => Meters::from(Centimeters(*height_cm)).value(),
            BmiInput::Imperial {
                height_feet,
                height_inches,
                ..
            } => {
                let total = Inches::from_feet_and_inches(*height_feet, *height_inches);
                Meters::from(Centimeters::from(total)).value()
            }
        }
    }

    /// Weight converted to kilograms
    pub fn weight_kg(&self) -> f64 {
        match self {
            BmiInput::Metric { weight_kg, .. } => *weight_kg,
            BmiInput::Imperial { weight_lb, .. } => Kilograms::from(PoundsMass(*weight_lb)).value(),
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.height_m() <= 0.0 {
            return Err(CalcError::invalid_input(
                "height",
                self.height_m().to_string(),
                "Height must be positive",
            ));
        }
        if self.weight_kg() <= 0.0 {
            return Err(CalcError::invalid_input(
                "weight",
                self.weight_kg().to_string(),
                "Weight must be positive",
            ));
        }
        Ok(())
    }
}

/// WHO BMI category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Display label for result rendering
    pub fn display_name(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Ordered (upper bound, category) brackets; first satisfied bound wins.
/// The table is open-ended: anything at or above the last bound is Obese.
const BMI_BANDS: &[(f64, BmiCategory)] = &[
    (18.5, BmiCategory::Underweight),
    (25.0, BmiCategory::NormalWeight),
    (30.0, BmiCategory::Overweight),
];

fn categorize(bmi: f64) -> BmiCategory {
    BMI_BANDS
        .iter()
        .find(|(bound, _)| bmi < *bound)
        .map(|(_, cat)| *cat)
        .unwrap_or(BmiCategory::Obese)
}

/// Results from a BMI calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiResult {
    /// Body mass index (kg/m²)
    pub bmi: f64,

    /// Category from the ordered WHO brackets
    pub category: BmiCategory,
}

/// Calculate BMI and its category.
pub fn calculate(input: &BmiInput) -> CalcResult<BmiResult> {
    input.validate()?;

    let height_m = input.height_m();
    let bmi = input.weight_kg() / (height_m * height_m);

    Ok(BmiResult {
        bmi,
        category: categorize(bmi),
    })
}
