//! # Everyday Calculations
//!
//! This module contains all calculation engines. Each calculation follows
//! the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! Stateful engines (the scientific keypad, generation history) expose small
//! state machines instead, but still hold plain serializable data and never
//! touch the outside world.
//!
//! ## Available Calculations
//!
//! - [`loan`] - Amortized loan, mortgage, and auto loan payments
//! - [`bmi`] - Body mass index with weight category
//! - [`body_fat`] - US Navy circumference body fat estimate
//! - [`ideal_weight`] - Ideal body weight across four formulas
//! - [`calorie`] - Mifflin-St Jeor BMR and daily calorie targets
//! - [`dates`] - Date shifting, date differences, and age
//! - [`fraction`] - Fraction arithmetic with gcd reduction
//! - [`percentage`] - Everyday percentage math
//! - [`interest`] - Simple and compound interest
//! - [`triangle`] - Triangle area and three-sides analysis
//! - [`random`] - Uniform random integer batches
//! - [`password`] - Password generation and strength scoring
//! - [`scientific`] - Keypad-driven scientific calculator state machine
//! - [`gpa`] - Credit-weighted grade point average

pub mod bmi;
pub mod body_fat;
pub mod calorie;
pub mod dates;
pub mod fraction;
pub mod gpa;
pub mod ideal_weight;
pub mod interest;
pub mod loan;
pub mod password;
pub mod percentage;
pub mod random;
pub mod scientific;
pub mod triangle;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use bmi::{BmiCategory, BmiInput, BmiResult};
pub use body_fat::{BodyFatCategory, BodyFatInput, BodyFatResult};
pub use calorie::{ActivityLevel, CalorieInput, CalorieResult, Goal};
pub use dates::AgeResult;
pub use fraction::{Fraction, FractionInput, FractionOp, FractionResult};
pub use gpa::{GpaInput, GpaResult, GradeScale, LetterGrade};
pub use ideal_weight::{IdealWeightInput, IdealWeightResult};
pub use interest::{CompoundFrequency, InterestInput, InterestResult};
pub use loan::{AutoLoanInput, LoanInput, LoanResult, MortgageInput, PaymentFrequency};
pub use password::{PasswordOptions, StrengthLabel};
pub use random::{GenerationHistory, RandomNumbersInput};
pub use scientific::{AngleMode, BinaryOp, Calculator, UnaryFunc};
pub use triangle::{TriangleAnalysis, TriangleSidesInput};

/// Biological sex, as used by the body composition formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn display_name(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}
