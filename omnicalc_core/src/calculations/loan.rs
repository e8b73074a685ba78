//! # Loan & Amortization Math
//!
//! Payment calculations for generic loans, mortgages, and auto loans using
//! the standard amortizing-loan formula:
//!
//! ```text
//! payment = P * r(1+r)^k / ((1+r)^k - 1)
//! ```
//!
//! where `P` is the principal, `r` the periodic interest rate, and `k` the
//! total number of payments.
//!
//! ## Example
//!
//! ```rust
//! use omnicalc_core::calculations::loan::{LoanInput, PaymentFrequency, calculate};
//!
//! let input = LoanInput {
//!     principal: 25_000.0,
//!     annual_rate_pct: 5.0,
//!     term_years: 5.0,
//!     frequency: PaymentFrequency::Monthly,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.payment - 471.78).abs() < 0.05);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// How often a payment is made.
///
/// The variant determines the payments-per-year count used to derive the
/// periodic rate and the total payment count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentFrequency {
    Annually,
    Quarterly,
    Monthly,
    Biweekly,
    Weekly,
}

impl PaymentFrequency {
    /// Number of payments per year for this frequency
    pub fn payments_per_year(&self) -> u32 {
        match self {
            PaymentFrequency::Annually => 1,
            PaymentFrequency::Quarterly => 4,
            PaymentFrequency::Monthly => 12,
            PaymentFrequency::Biweekly => 26,
            PaymentFrequency::Weekly => 52,
        }
    }

    /// Display name for result rendering
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentFrequency::Annually => "Annually",
            PaymentFrequency::Quarterly => "Quarterly",
            PaymentFrequency::Monthly => "Monthly",
            PaymentFrequency::Biweekly => "Biweekly",
            PaymentFrequency::Weekly => "Weekly",
        }
    }
}

/// Periodic payment for an amortizing loan.
///
/// Assumes the caller has already validated `principal > 0`,
/// `periodic_rate > 0`, and `num_payments > 0`.
fn amortized_payment(principal: f64, periodic_rate: f64, num_payments: f64) -> f64 {
    let growth = (1.0 + periodic_rate).powf(num_payments);
    principal * (periodic_rate * growth) / (growth - 1.0)
}

// ============================================================================
// Generic Loan
// ============================================================================

/// Input parameters for a generic amortizing loan.
///
/// ## JSON Example
///
/// ```json
/// {
///   "principal": 25000.0,
///   "annual_rate_pct": 5.0,
///   "term_years": 5.0,
///   "frequency": "Monthly"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    /// Amount borrowed ($)
    pub principal: f64,

    /// Nominal annual interest rate in percent (e.g., 5.0 for 5%)
    pub annual_rate_pct: f64,

    /// Loan term in years
    pub term_years: f64,

    /// Payment frequency
    pub frequency: PaymentFrequency,
}

impl LoanInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.principal <= 0.0 {
            return Err(CalcError::invalid_input(
                "principal",
                self.principal.to_string(),
                "Principal must be positive",
            ));
        }
        if self.annual_rate_pct <= 0.0 {
            return Err(CalcError::invalid_input(
                "annual_rate_pct",
                self.annual_rate_pct.to_string(),
                "Interest rate must be positive",
            ));
        }
        if self.term_years <= 0.0 {
            return Err(CalcError::invalid_input(
                "term_years",
                self.term_years.to_string(),
                "Term must be positive",
            ));
        }
        Ok(())
    }
}

/// Results from a loan calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanResult {
    /// Payment amount per period ($)
    pub payment: f64,

    /// Total of all payments over the life of the loan ($)
    pub total_payment: f64,

    /// Total interest paid: total_payment - principal ($)
    pub total_interest: f64,
}

/// Calculate the periodic payment and totals for a generic loan.
pub fn calculate(input: &LoanInput) -> CalcResult<LoanResult> {
    input.validate()?;

    let per_year = input.frequency.payments_per_year() as f64;
    let periodic_rate = input.annual_rate_pct / 100.0 / per_year;
    let num_payments = input.term_years * per_year;

    let payment = amortized_payment(input.principal, periodic_rate, num_payments);
    let total_payment = payment * num_payments;
    let total_interest = total_payment - input.principal;

    Ok(LoanResult {
        payment,
        total_payment,
        total_interest,
    })
}

// ============================================================================
// Mortgage
// ============================================================================

/// Input parameters for a fixed-rate mortgage.
///
/// The principal is derived as `home_price - down_payment`; payments are
/// always monthly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageInput {
    /// Purchase price of the home ($)
    pub home_price: f64,

    /// Down payment ($)
    pub down_payment: f64,

    /// Nominal annual interest rate in percent
    pub annual_rate_pct: f64,

    /// Loan term in whole years (e.g., 15, 30)
    pub term_years: u32,
}

/// Results from a mortgage calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageResult {
    /// Monthly payment ($)
    pub monthly_payment: f64,

    /// Total of all payments ($)
    pub total_payment: f64,

    /// Total interest paid ($)
    pub total_interest: f64,
}

/// Calculate the monthly payment and totals for a mortgage.
pub fn calculate_mortgage(input: &MortgageInput) -> CalcResult<MortgageResult> {
    let principal = input.home_price - input.down_payment;
    if principal <= 0.0 {
        return Err(CalcError::invalid_input(
            "home_price",
            principal.to_string(),
            "Loan amount (price minus down payment) must be positive",
        ));
    }

    let monthly_rate = input.annual_rate_pct / 100.0 / 12.0;
    let num_payments = input.term_years as f64 * 12.0;
    if monthly_rate <= 0.0 {
        return Err(CalcError::invalid_input(
            "annual_rate_pct",
            input.annual_rate_pct.to_string(),
            "Interest rate must be positive",
        ));
    }
    if num_payments <= 0.0 {
        return Err(CalcError::invalid_input(
            "term_years",
            input.term_years.to_string(),
            "Term must be positive",
        ));
    }

    let monthly_payment = amortized_payment(principal, monthly_rate, num_payments);
    let total_payment = monthly_payment * num_payments;
    let total_interest = total_payment - principal;

    Ok(MortgageResult {
        monthly_payment,
        total_payment,
        total_interest,
    })
}

// ============================================================================
// Auto Loan
// ============================================================================

/// Input parameters for an auto loan.
///
/// The financed amount is derived as
/// `vehicle_price + sales tax - down_payment - trade_in_value`, where the
/// sales tax is `vehicle_price * sales_tax_pct / 100`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoLoanInput {
    /// Vehicle price ($)
    pub vehicle_price: f64,

    /// Down payment ($), 0 if none
    #[serde(default)]
    pub down_payment: f64,

    /// Trade-in value ($), 0 if none
    #[serde(default)]
    pub trade_in_value: f64,

    /// Sales tax rate in percent, 0 if none
    #[serde(default)]
    pub sales_tax_pct: f64,

    /// Nominal annual interest rate in percent
    pub annual_rate_pct: f64,

    /// Loan term in months (e.g., 36, 48, 60, 72)
    pub term_months: u32,
}

/// Results from an auto loan calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoLoanResult {
    /// Amount financed after tax, down payment, and trade-in ($)
    pub loan_amount: f64,

    /// Monthly payment ($)
    pub monthly_payment: f64,

    /// Total of all payments ($)
    pub total_payment: f64,

    /// Total interest paid ($)
    pub total_interest: f64,
}

/// Calculate the financed amount, monthly payment, and totals for an auto loan.
pub fn calculate_auto_loan(input: &AutoLoanInput) -> CalcResult<AutoLoanResult> {
    let tax_amount = input.vehicle_price * input.sales_tax_pct / 100.0;
    let loan_amount = input.vehicle_price + tax_amount - input.down_payment - input.trade_in_value;

    if loan_amount <= 0.0 {
        return Err(CalcError::invalid_input(
            "vehicle_price",
            loan_amount.to_string(),
            "Amount financed must be positive",
        ));
    }

    let monthly_rate = input.annual_rate_pct / 100.0 / 12.0;
    if monthly_rate <= 0.0 {
        return Err(CalcError::invalid_input(
            "annual_rate_pct",
            input.annual_rate_pct.to_string(),
            "Interest rate must be positive",
        ));
    }
    if input.term_months == 0 {
        return Err(CalcError::invalid_input(
            "term_months",
            input.term_months.to_string(),
            "Term must be positive",
        ));
    }

    let num_payments = input.term_months as f64;
    let monthly_payment = amortized_payment(loan_amount, monthly_rate, num_payments);
    let total_payment = monthly_payment * num_payments;
    let total_interest = total_payment - loan_amount;

    Ok(AutoLoanResult {
        loan_amount,
        monthly_payment,
        total_payment,
        total_interest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_loan() -> LoanInput {
        LoanInput {
            principal: 25_000.0,
            annual_rate_pct: 5.0,
            term_years: 5.0,
            frequency: PaymentFrequency::Monthly,
        }
    }

    #[test]
    fn test_monthly_loan_payment() {
        let result = calculate(&test_loan()).unwrap();
        // 25k at 5% over 60 months is the textbook $471.78
        assert!((result.payment - 471.78).abs() < 0.05);
    }

    #[test]
    fn test_totals_are_consistent() {
        let result = calculate(&test_loan()).unwrap();
        assert!((result.payment * 60.0 - result.total_payment).abs() < 1e-6);
        assert!((result.total_payment - 25_000.0 - result.total_interest).abs() < 1e-6);
    }

    #[test]
    fn test_frequency_counts() {
        assert_eq!(PaymentFrequency::Annually.payments_per_year(), 1);
        assert_eq!(PaymentFrequency::Quarterly.payments_per_year(), 4);
        assert_eq!(PaymentFrequency::Monthly.payments_per_year(), 12);
        assert_eq!(PaymentFrequency::Biweekly.payments_per_year(), 26);
        assert_eq!(PaymentFrequency::Weekly.payments_per_year(), 52);
    }

    #[test]
    fn test_more_frequent_payments_cost_less_interest() {
        let monthly = calculate(&test_loan()).unwrap();
        let weekly = calculate(&LoanInput {
            frequency: PaymentFrequency::Weekly,
            ..test_loan()
        })
        .unwrap();
        assert!(weekly.total_interest < monthly.total_interest);
    }

    #[test]
    fn test_invalid_principal() {
        let mut input = test_loan();
        input.principal = 0.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_invalid_rate() {
        let mut input = test_loan();
        input.annual_rate_pct = -1.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_invalid_term() {
        let mut input = test_loan();
        input.term_years = 0.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_mortgage_payment() {
        let input = MortgageInput {
            home_price: 500_000.0,
            down_payment: 100_000.0,
            annual_rate_pct: 6.5,
            term_years: 30,
        };
        let result = calculate_mortgage(&input).unwrap();
        // 400k at 6.5% over 30 years
        assert!((result.monthly_payment - 2528.27).abs() < 1.0);
        assert!(result.total_interest > 0.0);
    }

    #[test]
    fn test_mortgage_down_payment_exceeds_price() {
        let input = MortgageInput {
            home_price: 200_000.0,
            down_payment: 250_000.0,
            annual_rate_pct: 6.5,
            term_years: 30,
        };
        assert!(calculate_mortgage(&input).is_err());
    }

    #[test]
    fn test_auto_loan_derives_financed_amount() {
        let input = AutoLoanInput {
            vehicle_price: 35_000.0,
            down_payment: 5_000.0,
            trade_in_value: 3_000.0,
            sales_tax_pct: 8.0,
            annual_rate_pct: 7.0,
            term_months: 60,
        };
        let result = calculate_auto_loan(&input).unwrap();
        // 35000 + 2800 tax - 5000 - 3000 = 29800 financed
        assert!((result.loan_amount - 29_800.0).abs() < 1e-9);
        assert!((result.monthly_payment - 590.08).abs() < 0.5);
    }

    #[test]
    fn test_auto_loan_fully_covered_by_trade_in() {
        let input = AutoLoanInput {
            vehicle_price: 10_000.0,
            down_payment: 5_000.0,
            trade_in_value: 6_000.0,
            sales_tax_pct: 0.0,
            annual_rate_pct: 7.0,
            term_months: 36,
        };
        assert!(calculate_auto_loan(&input).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = test_loan();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: LoanInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.principal, roundtrip.principal);
        assert_eq!(input.frequency, roundtrip.frequency);
    }
}
