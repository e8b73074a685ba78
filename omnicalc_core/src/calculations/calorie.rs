//! # Daily Calorie Needs (BMR / TDEE)
//!
//! Basal metabolic rate via the Mifflin-St Jeor equation:
//!
//! ```text
//! BMR = 10*weight_kg + 6.25*height_cm - 5*age + 5     (male)
//! BMR = 10*weight_kg + 6.25*height_cm - 5*age - 161   (female)
//! ```
//!
//! TDEE scales BMR by one of five fixed activity multipliers; the goal
//! calorie target applies a fixed offset per weight goal.

use serde::{Deserialize, Serialize};

use crate::calculations::Sex;
use crate::errors::{CalcError, CalcResult};

/// Activity level with its TDEE multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Exercise 1-3 days/week
    Light,
    /// Exercise 3-5 days/week
    Moderate,
    /// Exercise 6-7 days/week
    Active,
    /// Hard exercise daily or physical job
    VeryActive,
}

impl ActivityLevel {
    /// TDEE multiplier applied to BMR
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

/// Weight goal with its fixed daily calorie offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    Maintain,
    LoseSlow,
    LoseFast,
    GainSlow,
    GainFast,
}

impl Goal {
    /// Daily calorie offset applied to TDEE
    pub fn calorie_offset(&self) -> f64 {
        match self {
            Goal::Maintain => 0.0,
            Goal::LoseSlow => -250.0,
            Goal::LoseFast => -500.0,
            Goal::GainSlow => 250.0,
            Goal::GainFast => 500.0,
        }
    }

    /// Human-readable description of the goal pace
    pub fn description(&self) -> &'static str {
        match self {
            Goal::Maintain => "Maintain current weight",
            Goal::LoseSlow => "Lose 0.5 lbs per week",
            Goal::LoseFast => "Lose 1 lb per week",
            Goal::GainSlow => "Gain 0.5 lbs per week",
            Goal::GainFast => "Gain 1 lb per week",
        }
    }
}

/// Input parameters for a daily calorie calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "sex": "Male",
///   "age_years": 30.0,
///   "height_cm": 175.0,
///   "weight_kg": 70.0,
///   "activity": "Moderate",
///   "goal": "Maintain"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieInput {
    pub sex: Sex,

    /// Age in years
    pub age_years: f64,

    /// Height (cm)
    pub height_cm: f64,

    /// Weight (kg)
    pub weight_kg: f64,

    pub activity: ActivityLevel,

    pub goal: Goal,
}

impl CalorieInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("age_years", self.age_years),
            ("height_cm", self.height_cm),
            ("weight_kg", self.weight_kg),
        ] {
            if value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Value must be positive",
                ));
            }
        }
        Ok(())
    }
}

/// Results from a daily calorie calculation (all kcal/day).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieResult {
    /// Basal metabolic rate
    pub bmr: f64,

    /// Total daily energy expenditure: BMR * activity multiplier
    pub tdee: f64,

    /// TDEE adjusted for the selected goal
    pub goal_calories: f64,

    /// Description of the goal pace
    pub goal_description: String,
}

/// Calculate BMR, TDEE, and the goal calorie target.
pub fn calculate(input: &CalorieInput) -> CalcResult<CalorieResult> {
    input.validate()?;

    let sex_offset = match input.sex {
        Sex::Male => 5.0,
        Sex::Female => -161.0,
    };
    let bmr = 10.0 * input.weight_kg + 6.25 * input.height_cm - 5.0 * input.age_years + sex_offset;
    let tdee = bmr * input.activity.multiplier();
    let goal_calories = tdee + input.goal.calorie_offset();

    Ok(CalorieResult {
        bmr,
        tdee,
        goal_calories,
        goal_description: input.goal.description().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> CalorieInput {
        CalorieInput {
            sex: Sex::Male,
            age_years: 30.0,
            height_cm: 175.0,
            weight_kg: 70.0,
            activity: ActivityLevel::Sedentary,
            goal: Goal::Maintain,
        }
    }

    #[test]
    fn test_male_bmr() {
        let result = calculate(&test_input()).unwrap();
        // 700 + 1093.75 - 150 + 5
        assert!((result.bmr - 1648.75).abs() < 1e-9);
        assert!((result.tdee - 1648.75 * 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_female_offset() {
        let input = CalorieInput {
            sex: Sex::Female,
            ..test_input()
        };
        let result = calculate(&input).unwrap();
        // Female BMR is 166 kcal below male at identical measurements
        assert!((result.bmr - (1648.75 - 166.0)).abs() < 1e-9);
    }

    #[test]
    fn test_activity_multipliers() {
        let levels = [
            (ActivityLevel::Sedentary, 1.2),
            (ActivityLevel::Light, 1.375),
            (ActivityLevel::Moderate, 1.55),
            (ActivityLevel::Active, 1.725),
            (ActivityLevel::VeryActive, 1.9),
        ];
        for (level, expected) in levels {
            assert_eq!(level.multiplier(), expected);
        }
    }

    #[test]
    fn test_goal_offsets() {
        let base = calculate(&test_input()).unwrap();
        let lose_fast = calculate(&CalorieInput {
            goal: Goal::LoseFast,
            ..test_input()
        })
        .unwrap();
        let gain_slow = calculate(&CalorieInput {
            goal: Goal::GainSlow,
            ..test_input()
        })
        .unwrap();
        assert!((base.goal_calories - lose_fast.goal_calories - 500.0).abs() < 1e-9);
        assert!((gain_slow.goal_calories - base.goal_calories - 250.0).abs() < 1e-9);
        assert_eq!(lose_fast.goal_description, "Lose 1 lb per week");
    }

    #[test]
    fn test_invalid_age() {
        let input = CalorieInput {
            age_years: 0.0,
            ..test_input()
        };
        assert!(calculate(&input).is_err());
    }
}
