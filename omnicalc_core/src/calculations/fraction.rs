//! # Fraction Arithmetic
//!
//! Add, subtract, multiply, and divide integer fractions:
//!
//! ```text
//! add/sub:  (n1*d2 ± n2*d1) / (d1*d2)
//! multiply: (n1*n2) / (d1*d2)
//! divide:   (n1*d2) / (d1*n2)
//! ```
//!
//! Results are reported three ways: the unreduced fraction, the reduced
//! fraction (via Euclidean gcd), and the decimal value.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{CalcError, CalcResult};

/// An integer fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fraction {
    pub numerator: i64,
    pub denominator: i64,
}

impl Fraction {
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Reduce by the gcd of numerator and denominator.
    pub fn simplified(&self) -> Fraction {
        let divisor = gcd(self.numerator, self.denominator);
        if divisor == 0 {
            return *self;
        }
        Fraction {
            numerator: self.numerator / divisor,
            denominator: self.denominator / divisor,
        }
    }

    /// Decimal value of the fraction
    pub fn decimal(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // A denominator of 1 displays as a bare integer
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// Euclidean gcd, recursive, with `gcd(a, 0) = |a|`.
fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 {
        a.abs()
    } else {
        gcd(b, a % b)
    }
}

/// The four fraction operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FractionOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl FractionOp {
    /// Operator symbol for display
    pub fn symbol(&self) -> &'static str {
        match self {
            FractionOp::Add => "+",
            FractionOp::Subtract => "-",
            FractionOp::Multiply => "*",
            FractionOp::Divide => "/",
        }
    }
}

/// Input parameters for a fraction calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "first": { "numerator": 1, "denominator": 2 },
///   "second": { "numerator": 1, "denominator": 3 },
///   "op": "Add"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FractionInput {
    pub first: Fraction,
    pub second: Fraction,
    pub op: FractionOp,
}

impl FractionInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.first.denominator == 0 {
            return Err(CalcError::invalid_input(
                "first.denominator",
                "0",
                "Denominator cannot be zero",
            ));
        }
        if self.second.denominator == 0 {
            return Err(CalcError::invalid_input(
                "second.denominator",
                "0",
                "Denominator cannot be zero",
            ));
        }
        // Dividing by a zero fraction would put a zero in the result's
        // denominator
        if self.op == FractionOp::Divide && self.second.numerator == 0 {
            return Err(CalcError::invalid_input(
                "second.numerator",
                "0",
                "Cannot divide by zero",
            ));
        }
        Ok(())
    }
}

/// Results from a fraction calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FractionResult {
    /// Unreduced result of the operation
    pub raw: Fraction,

    /// Result reduced by the gcd
    pub simplified: Fraction,

    /// Decimal value of the result
    pub decimal: f64,
}

fn overflow_error() -> CalcError {
    CalcError::invalid_input(
        "fractions",
        "overflow",
        "Intermediate value exceeds the supported integer range",
    )
}

fn mul(a: i64, b: i64) -> CalcResult<i64> {
    a.checked_mul(b).ok_or_else(overflow_error)
}

fn add(a: i64, b: i64) -> CalcResult<i64> {
    a.checked_add(b).ok_or_else(overflow_error)
}

fn sub(a: i64, b: i64) -> CalcResult<i64> {
    a.checked_sub(b).ok_or_else(overflow_error)
}

/// Apply a fraction operation and reduce the result.
///
/// Cross-multiplication is checked; operands large enough to overflow i64
/// are rejected rather than wrapped.
pub fn calculate(input: &FractionInput) -> CalcResult<FractionResult> {
    input.validate()?;

    let Fraction {
        numerator: n1,
        denominator: d1,
    } = input.first;
    let Fraction {
        numerator: n2,
        denominator: d2,
    } = input.second;

    let raw = match input.op {
        FractionOp::Add => Fraction::new(add(mul(n1, d2)?, mul(n2, d1)?)?, mul(d1, d2)?),
        FractionOp::Subtract => Fraction::new(sub(mul(n1, d2)?, mul(n2, d1)?)?, mul(d1, d2)?),
        FractionOp::Multiply => Fraction::new(mul(n1, n2)?, mul(d1, d2)?),
        FractionOp::Divide => Fraction::new(mul(n1, d2)?, mul(d1, n2)?),
    };

    Ok(FractionResult {
        raw,
        simplified: raw.simplified(),
        decimal: raw.decimal(),
    })
}
