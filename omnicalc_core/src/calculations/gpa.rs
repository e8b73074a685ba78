//! # GPA Calculator
//!
//! Credit-weighted grade point average:
//!
//! ```text
//! GPA = sum(points(grade) * credits) / sum(credits)
//! ```
//!
//! Courses without a grade selected are skipped. The five-point scale differs
//! from the four-point scale only in awarding 5.0 for an A+.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Letter grades from A+ down to F.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterGrade {
    APlus,
    A,
    AMinus,
    BPlus,
    B,
    BMinus,
    CPlus,
    C,
    CMinus,
    DPlus,
    D,
    DMinus,
    F,
}

impl LetterGrade {
    pub fn display_name(&self) -> &'static str {
        match self {
            LetterGrade::APlus => "A+",
            LetterGrade::A => "A",
            LetterGrade::AMinus => "A-",
            LetterGrade::BPlus => "B+",
            LetterGrade::B => "B",
            LetterGrade::BMinus => "B-",
            LetterGrade::CPlus => "C+",
            LetterGrade::C => "C",
            LetterGrade::CMinus => "C-",
            LetterGrade::DPlus => "D+",
            LetterGrade::D => "D",
            LetterGrade::DMinus => "D-",
            LetterGrade::F => "F",
        }
    }
}

/// Grading scale selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradeScale {
    FourPoint,
    FivePoint,
}

impl GradeScale {
    /// Grade points for a letter grade on this scale.
    pub fn points(&self, grade: LetterGrade) -> f64 {
        match (self, grade) {
            (GradeScale::FivePoint, LetterGrade::APlus) => 5.0,
            (GradeScale::FourPoint, LetterGrade::APlus) => 4.0,
            (_, LetterGrade::A) => 4.0,
            (_, LetterGrade::AMinus) => 3.7,
            (_, LetterGrade::BPlus) => 3.3,
            (_, LetterGrade::B) => 3.0,
            (_, LetterGrade::BMinus) => 2.7,
            (_, LetterGrade::CPlus) => 2.3,
            (_, LetterGrade::C) => 2.0,
            (_, LetterGrade::CMinus) => 1.7,
            (_, LetterGrade::DPlus) => 1.3,
            (_, LetterGrade::D) => 1.0,
            (_, LetterGrade::DMinus) => 0.7,
            (_, LetterGrade::F) => 0.0,
        }
    }
}

/// One course row. A row without a grade does not contribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub grade: Option<LetterGrade>,
    pub credits: f64,
}

/// Input parameters for a GPA calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpaInput {
    pub courses: Vec<Course>,
    pub scale: GradeScale,
}

/// Results from a GPA calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpaResult {
    pub gpa: f64,

    /// Total credits of the graded courses
    pub total_credits: f64,

    /// Total grade points earned (points * credits, summed)
    pub total_points: f64,
}

/// Credit-weighted GPA over the graded courses.
pub fn calculate(input: &GpaInput) -> CalcResult<GpaResult> {
    let mut total_credits = 0.0;
    let mut total_points = 0.0;

    for (i, course) in input.courses.iter().enumerate() {
        let Some(grade) = course.grade else {
            continue;
        };
        if course.credits <= 0.0 {
            return Err(CalcError::invalid_input(
                format!("courses[{}].credits", i),
                course.credits.to_string(),
                "Credits must be positive",
            ));
        }
        total_credits += course.credits;
        total_points += input.scale.points(grade) * course.credits;
    }

    if total_credits == 0.0 {
        return Err(CalcError::invalid_input(
            "courses",
            "no graded courses",
            "At least one course with a grade and credits is required",
        ));
    }

    Ok(GpaResult {
        gpa: total_points / total_credits,
        total_credits,
        total_points,
    })
}
