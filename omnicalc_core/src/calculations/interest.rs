//! # Simple & Compound Interest
//!
//! One calculation reports both views over the same inputs:
//!
//! ```text
//! simple:   I = P * r * t
//! compound: I = P * (1 + r/n)^(n*t) - P
//! ```
//!
//! where `n` is the number of compounding periods per year.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// How often interest compounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompoundFrequency {
    Annually,
    Quarterly,
    Monthly,
    Daily,
}

impl CompoundFrequency {
    /// Compounding periods per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundFrequency::Annually => 1,
            CompoundFrequency::Quarterly => 4,
            CompoundFrequency::Monthly => 12,
            CompoundFrequency::Daily => 365,
        }
    }
}

/// Input parameters for an interest calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "principal": 1000.0,
///   "annual_rate_pct": 5.0,
///   "years": 2.0,
///   "frequency": "Monthly"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestInput {
    /// Principal amount ($)
    pub principal: f64,

    /// Annual interest rate in percent
    pub annual_rate_pct: f64,

    /// Investment period in years
    pub years: f64,

    /// Compounding frequency for the compound-interest view
    pub frequency: CompoundFrequency,
}

impl InterestInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("principal", self.principal),
            ("annual_rate_pct", self.annual_rate_pct),
            ("years", self.years),
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

/// Results from an interest calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestResult {
    /// Simple interest earned ($)
    pub simple_interest: f64,

    /// Principal plus simple interest ($)
    pub total_amount_simple: f64,

    /// Compound interest earned ($)
    pub compound_interest: f64,

    /// Principal plus compound interest ($)
    pub total_amount_compound: f64,
}

/// Calculate simple and compound interest for the same inputs.
pub fn calculate(input: &InterestInput) -> CalcResult<InterestResult> {
    input.validate()?;

    let rate = input.annual_rate_pct / 100.0;

    let simple_interest = input.principal * rate * input.years;
    let total_amount_simple = input.principal + simple_interest;

    let n = input.frequency.periods_per_year() as f64;
    let total_amount_compound = input.principal * (1.0 + rate / n).powf(n * input.years);
    let compound_interest = total_amount_compound - input.principal;

    Ok(InterestResult {
        simple_interest,
        total_amount_simple,
        compound_interest,
        total_amount_compound,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input(frequency: CompoundFrequency) -> InterestInput {
        InterestInput {
            principal: 1000.0,
            annual_rate_pct: 5.0,
            years: 2.0,
            frequency,
        }
    }

    #[test]
    fn test_simple_interest() {
        let result = calculate(&test_input(CompoundFrequency::Annually)).unwrap();
        assert!((result.simple_interest - 100.0).abs() < 1e-9);
        assert!((result.total_amount_simple - 1100.0).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_compounding() {
        let result = calculate(&test_input(CompoundFrequency::Monthly)).unwrap();
        // 1000 * (1 + 0.05/12)^24
        assert!((result.total_amount_compound - 1104.94).abs() < 0.01);
        assert!((result.compound_interest - 104.94).abs() < 0.01);
    }

    #[test]
    fn test_more_frequent_compounding_earns_more() {
        let annually = calculate(&test_input(CompoundFrequency::Annually)).unwrap();
        let quarterly = calculate(&test_input(CompoundFrequency::Quarterly)).unwrap();
        let monthly = calculate(&test_input(CompoundFrequency::Monthly)).unwrap();
        let daily = calculate(&test_input(CompoundFrequency::Daily)).unwrap();
        assert!(annually.compound_interest < quarterly.compound_interest);
        assert!(quarterly.compound_interest < monthly.compound_interest);
        assert!(monthly.compound_interest < daily.compound_interest);
    }

    #[test]
    fn test_annual_compounding_one_year_matches_simple() {
        let input = InterestInput {
            principal: 500.0,
            annual_rate_pct: 4.0,
            years: 1.0,
            frequency: CompoundFrequency::Annually,
        };
        let result = calculate(&input).unwrap();
        assert!((result.simple_interest - result.compound_interest).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_inputs() {
        for (p, r, t) in [(0.0, 5.0, 2.0), (1000.0, -1.0, 2.0), (1000.0, 5.0, 0.0)] {
            let input = InterestInput {
                principal: p,
                annual_rate_pct: r,
                years: t,
                frequency: CompoundFrequency::Annually,
            };
            assert!(calculate(&input).is_err());
        }
    }
}
