//! # Ideal Weight
//!
//! Four classic linear ideal-body-weight formulas, each of the shape
//! `base + slope * (height_inches - 60)` with sex-specific coefficients:
//!
//! | Formula        | Male          | Female        |
//! |----------------|---------------|---------------|
//! | Robinson (1983)| 52 + 1.9x     | 49 + 1.7x     |
//! | Miller (1983)  | 56.2 + 1.41x  | 53.1 + 1.36x  |
//! | Devine (1974)  | 50 + 2.3x     | 45.5 + 2.3x   |
//! | Hamwi (1964)   | 48 + 2.7x     | 45.5 + 2.2x   |
//!
//! plus a "healthy" range from the BMI bounds 18.5 and 24.9 applied to the
//! given height. All outputs are kilograms.

use serde::{Deserialize, Serialize};

use crate::calculations::Sex;
use crate::errors::{CalcError, CalcResult};
use crate::units::{Centimeters, Inches, Meters};

/// Input parameters for an ideal weight calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdealWeightInput {
    pub sex: Sex,

    /// Height (cm)
    pub height_cm: f64,
}

impl IdealWeightInput {
    /// Build from a US-style feet + inches height entry.
    pub fn from_imperial(sex: Sex, height_feet: f64, height_inches: f64) -> Self {
        let total = Inches::from_feet_and_inches(height_feet, height_inches);
        Self {
            sex,
            height_cm: Centimeters::from(total).value(),
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.height_cm <= 0.0 {
            return Err(CalcError::invalid_input(
                "height_cm",
                self.height_cm.to_string(),
                "Height must be positive",
            ));
        }
        Ok(())
    }
}

/// Results from an ideal weight calculation, all in kilograms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdealWeightResult {
    pub robinson_kg: f64,
    pub miller_kg: f64,
    pub devine_kg: f64,
    pub hamwi_kg: f64,

    /// Lower bound of the healthy range (BMI 18.5)
    pub healthy_min_kg: f64,

    /// Upper bound of the healthy range (BMI 24.9)
    pub healthy_max_kg: f64,
}

/// Calculate the four formula estimates and the healthy BMI range.
pub fn calculate(input: &IdealWeightInput) -> CalcResult<IdealWeightResult> {
    input.validate()?;

    let height_in = Inches::from(Centimeters(input.height_cm)).value();
    let over_60 = height_in - 60.0;

    let (robinson_kg, miller_kg, devine_kg, hamwi_kg) = match input.sex {
        Sex::Male => (
            52.0 + 1.9 * over_60,
            56.2 + 1.41 * over_60,
            50.0 + 2.3 * over_60,
            48.0 + 2.7 * over_60,
        ),
        Sex::Female => (
            49.0 + 1.7 * over_60,
            53.1 + 1.36 * over_60,
            45.5 + 2.3 * over_60,
            45.5 + 2.2 * over_60,
        ),
    };

    let height_m = Meters::from(Centimeters(input.height_cm)).value();
    let healthy_min_kg = 18.5 * height_m * height_m;
    let healthy_max_kg = 24.9 * height_m * height_m;

    Ok(IdealWeightResult {
        robinson_kg,
        miller_kg,
        devine_kg,
        hamwi_kg,
        healthy_min_kg,
        healthy_max_kg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_male_at_five_nine() {
        let input = IdealWeightInput::from_imperial(Sex::Male, 5.0, 9.0);
        let result = calculate(&input).unwrap();
        // height is exactly 69 in, so x = 9
        assert!((result.robinson_kg - 69.1).abs() < 0.01);
        assert!((result.miller_kg - 68.89).abs() < 0.01);
        assert!((result.devine_kg - 70.7).abs() < 0.01);
        assert!((result.hamwi_kg - 72.3).abs() < 0.01);
    }

    #[test]
    fn test_female_coefficients_differ() {
        let male = calculate(&IdealWeightInput {
            sex: Sex::Male,
            height_cm: 170.0,
        })
        .unwrap();
        let female = calculate(&IdealWeightInput {
            sex: Sex::Female,
            height_cm: 170.0,
        })
        .unwrap();
        assert!(female.robinson_kg < male.robinson_kg);
        assert!(female.hamwi_kg < male.hamwi_kg);
        // Devine shares the slope but not the base
        assert!((male.devine_kg - female.devine_kg - 4.5).abs() < 1e-9);
    }

    #[test]
    fn test_healthy_range_from_bmi_bounds() {
        let input = IdealWeightInput {
            sex: Sex::Male,
            height_cm: 175.0,
        };
        let result = calculate(&input).unwrap();
        assert!((result.healthy_min_kg - 18.5 * 1.75 * 1.75).abs() < 1e-9);
        assert!((result.healthy_max_kg - 24.9 * 1.75 * 1.75).abs() < 1e-9);
        assert!(result.healthy_min_kg < result.healthy_max_kg);
    }

    #[test]
    fn test_invalid_height() {
        let input = IdealWeightInput {
            sex: Sex::Male,
            height_cm: -170.0,
        };
        assert!(calculate(&input).is_err());
    }
}
