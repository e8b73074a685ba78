//! # Body Fat Percentage (US Navy Method)
//!
//! Estimates body fat from circumference measurements and height using the
//! sex-specific US Navy log10 formulas:
//!
//! ```text
//! male:   495 / (1.0324 - 0.19077*log10(waist - neck) + 0.15456*log10(height)) - 450
//! female: 495 / (1.29579 - 0.35004*log10(waist + hip - neck) + 0.221*log10(height)) - 450
//! ```
//!
//! All measurements are in centimeters. The result also reports fat mass and
//! lean body mass derived from the given weight.

use serde::{Deserialize, Serialize};

use crate::calculations::Sex;
use crate::errors::{CalcError, CalcResult};

/// Input parameters for a body fat calculation.
///
/// `hip_cm` is required for female inputs and ignored for male inputs.
///
/// ## JSON Example
///
/// ```json
/// {
///   "sex": "Male",
///   "height_cm": 175.0,
///   "weight_kg": 70.0,
///   "neck_cm": 37.0,
///   "waist_cm": 85.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyFatInput {
    pub sex: Sex,

    /// Height (cm)
    pub height_cm: f64,

    /// Body weight (kg), used for fat/lean mass breakdown
    pub weight_kg: f64,

    /// Neck circumference (cm)
    pub neck_cm: f64,

    /// Waist circumference (cm)
    pub waist_cm: f64,

    /// Hip circumference (cm), required for female inputs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hip_cm: Option<f64>,
}

impl BodyFatInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("height_cm", self.height_cm),
            ("weight_kg", self.weight_kg),
            ("neck_cm", self.neck_cm),
            ("waist_cm", self.waist_cm),
        ] {
            if value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Measurement must be positive",
                ));
            }
        }

        match self.sex {
            Sex::Male => {
                // The log argument must be positive
                if self.waist_cm <= self.neck_cm {
                    return Err(CalcError::invalid_input(
                        "waist_cm",
                        self.waist_cm.to_string(),
                        "Waist must be larger than neck",
                    ));
                }
            }
            Sex::Female => {
                let hip = self.hip_cm.unwrap_or(0.0);
                if hip <= 0.0 {
                    return Err(CalcError::invalid_input(
                        "hip_cm",
                        hip.to_string(),
                        "Hip measurement is required and must be positive",
                    ));
                }
                if self.waist_cm + hip <= self.neck_cm {
                    return Err(CalcError::invalid_input(
                        "waist_cm",
                        self.waist_cm.to_string(),
                        "Waist plus hip must be larger than neck",
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Body fat category, seven contiguous bands per sex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyFatCategory {
    BelowEssential,
    EssentialFat,
    Athletes,
    Fitness,
    Average,
    Obese,
    SeverelyObese,
}

impl BodyFatCategory {
    /// Display label for result rendering
    pub fn display_name(&self) -> &'static str {
        match self {
            BodyFatCategory::BelowEssential => "Below Essential Fat",
            BodyFatCategory::EssentialFat => "Essential Fat",
            BodyFatCategory::Athletes => "Athletes",
            BodyFatCategory::Fitness => "Fitness",
            BodyFatCategory::Average => "Average",
            BodyFatCategory::Obese => "Obese",
            BodyFatCategory::SeverelyObese => "Severely Obese",
        }
    }
}

/// Ordered (upper bound, category) brackets for male body fat percentages.
const MALE_BANDS: &[(f64, BodyFatCategory)] = &[
    (2.0, BodyFatCategory::BelowEssential),
    (6.0, BodyFatCategory::EssentialFat),
    (14.0, BodyFatCategory::Athletes),
    (18.0, BodyFatCategory::Fitness),
    (25.0, BodyFatCategory::Average),
    (38.0, BodyFatCategory::Obese),
];

/// Ordered (upper bound, category) brackets for female body fat percentages.
const FEMALE_BANDS: &[(f64, BodyFatCategory)] = &[
    (10.0, BodyFatCategory::BelowEssential),
    (14.0, BodyFatCategory::EssentialFat),
    (21.0, BodyFatCategory::Athletes),
    (25.0, BodyFatCategory::Fitness),
    (32.0, BodyFatCategory::Average),
    (45.0, BodyFatCategory::Obese),
];

fn categorize(body_fat_pct: f64, sex: Sex) -> BodyFatCategory {
    let bands = match sex {
        Sex::Male => MALE_BANDS,
        Sex::Female => FEMALE_BANDS,
    };
    bands
        .iter()
        .find(|(bound, _)| body_fat_pct < *bound)
        .map(|(_, cat)| *cat)
        .unwrap_or(BodyFatCategory::SeverelyObese)
}

/// Results from a body fat calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyFatResult {
    /// Estimated body fat percentage
    pub body_fat_pct: f64,

    /// Category from the sex-specific brackets
    pub category: BodyFatCategory,

    /// Fat mass: weight * body_fat_pct / 100 (kg)
    pub fat_mass_kg: f64,

    /// Lean body mass: weight - fat mass (kg)
    pub lean_body_mass_kg: f64,
}

/// Calculate body fat percentage via the US Navy method.
pub fn calculate(input: &BodyFatInput) -> CalcResult<BodyFatResult> {
    input.validate()?;

    let body_fat_pct = match input.sex {
        Sex::Male => {
            495.0
                / (1.0324 - 0.19077 * (input.waist_cm - input.neck_cm).log10()
                    + 0.15456 * input.height_cm.log10())
                - 450.0
        }
        Sex::Female => {
            let hip = input.hip_cm.unwrap_or(0.0);
            495.0
                / (1.29579 - 0.35004 * (input.waist_cm + hip - input.neck_cm).log10()
                    + 0.221 * input.height_cm.log10())
                - 450.0
        }
    };

    let fat_mass_kg = body_fat_pct / 100.0 * input.weight_kg;
    let lean_body_mass_kg = input.weight_kg - fat_mass_kg;

    Ok(BodyFatResult {
        body_fat_pct,
        category: categorize(body_fat_pct, input.sex),
        fat_mass_kg,
        lean_body_mass_kg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn male_input() -> BodyFatInput {
        BodyFatInput {
            sex: Sex::Male,
            height_cm: 175.0,
            weight_kg: 70.0,
            neck_cm: 37.0,
            waist_cm: 85.0,
            hip_cm: None,
        }
    }

    #[test]
    fn test_male_navy_formula() {
        let result = calculate(&male_input()).unwrap();
        assert!((result.body_fat_pct - 17.71).abs() < 0.05);
        assert_eq!(result.category, BodyFatCategory::Fitness);
    }

    #[test]
    fn test_female_navy_formula() {
        let input = BodyFatInput {
            sex: Sex::Female,
            height_cm: 165.0,
            weight_kg: 60.0,
            neck_cm: 33.0,
            waist_cm: 75.0,
            hip_cm: Some(95.0),
        };
        let result = calculate(&input).unwrap();
        assert!((result.body_fat_pct - 26.92).abs() < 0.05);
        assert_eq!(result.category, BodyFatCategory::Average);
    }

    #[test]
    fn test_mass_breakdown_sums_to_weight() {
        let result = calculate(&male_input()).unwrap();
        assert!((result.fat_mass_kg + result.lean_body_mass_kg - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_female_requires_hip() {
        let input = BodyFatInput {
            sex: Sex::Female,
            hip_cm: None,
            ..male_input()
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_male_ignores_hip() {
        let input = BodyFatInput {
            hip_cm: Some(100.0),
            ..male_input()
        };
        let with_hip = calculate(&input).unwrap();
        let without = calculate(&male_input()).unwrap();
        assert_eq!(with_hip.body_fat_pct, without.body_fat_pct);
    }

    #[test]
    fn test_waist_must_exceed_neck() {
        let input = BodyFatInput {
            waist_cm: 30.0,
            ..male_input()
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_nonpositive_measurement_rejected() {
        let input = BodyFatInput {
            neck_cm: 0.0,
            ..male_input()
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_band_tables_are_ascending() {
        for bands in [MALE_BANDS, FEMALE_BANDS] {
            assert_eq!(bands.len(), 6); // seventh band is the open-ended fallback
            for pair in bands.windows(2) {
                assert!(pair[0].0 < pair[1].0);
            }
        }
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(categorize(1.0, Sex::Male), BodyFatCategory::BelowEssential);
        assert_eq!(categorize(6.0, Sex::Male), BodyFatCategory::Athletes);
        assert_eq!(categorize(24.999, Sex::Male), BodyFatCategory::Average);
        assert_eq!(categorize(25.0, Sex::Male), BodyFatCategory::Obese);
        assert_eq!(categorize(50.0, Sex::Male), BodyFatCategory::SeverelyObese);
        assert_eq!(categorize(24.999, Sex::Female), BodyFatCategory::Fitness);
        assert_eq!(categorize(32.0, Sex::Female), BodyFatCategory::Obese);
    }
}
