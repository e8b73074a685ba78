//! # Percentage Math
//!
//! Three everyday percentage operations:
//!
//! - what is X% of Y: `(x/100) * y`
//! - X is what percent of Y: `(x/y) * 100`, guarded against `y = 0`
//! - percentage change: `((new - old)/old) * 100`, guarded against `old = 0`,
//!   reported as a magnitude plus an increase/decrease flag

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// What is `percent`% of `value`?
pub fn percentage_of(percent: f64, value: f64) -> f64 {
    percent / 100.0 * value
}

/// `value` is what percent of `total`?
pub fn what_percent(value: f64, total: f64) -> CalcResult<f64> {
    if total == 0.0 {
        return Err(CalcError::invalid_input(
            "total",
            "0",
            "Cannot take a percentage of zero",
        ));
    }
    Ok(value / total * 100.0)
}

/// Result of a percentage-change calculation.
///
/// The change is reported as an absolute magnitude; `increase` carries the
/// sign. A change of exactly zero counts as an increase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PercentChange {
    /// Absolute percentage change
    pub magnitude_pct: f64,

    /// True when the value grew (or stayed equal)
    pub increase: bool,
}

/// Percentage change from `old_value` to `new_value`.
pub fn percent_change(old_value: f64, new_value: f64) -> CalcResult<PercentChange> {
    if old_value == 0.0 {
        return Err(CalcError::invalid_input(
            "old_value",
            "0",
            "Change from zero is undefined",
        ));
    }
    let change = (new_value - old_value) / old_value * 100.0;
    Ok(PercentChange {
        magnitude_pct: change.abs(),
        increase: change >= 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_of() {
        assert_eq!(percentage_of(25.0, 200.0), 50.0);
        assert_eq!(percentage_of(0.0, 200.0), 0.0);
        assert_eq!(percentage_of(150.0, 40.0), 60.0);
    }

    #[test]
    fn test_what_percent() {
        assert_eq!(what_percent(50.0, 200.0).unwrap(), 25.0);
        assert_eq!(what_percent(200.0, 50.0).unwrap(), 400.0);
    }

    #[test]
    fn test_what_percent_of_zero_rejected() {
        assert!(what_percent(50.0, 0.0).is_err());
    }

    #[test]
    fn test_percent_increase() {
        let change = percent_change(100.0, 125.0).unwrap();
        assert_eq!(change.magnitude_pct, 25.0);
        assert!(change.increase);
    }

    #[test]
    fn test_percent_decrease_reports_magnitude() {
        let change = percent_change(200.0, 150.0).unwrap();
        assert_eq!(change.magnitude_pct, 25.0);
        assert!(!change.increase);
    }

    #[test]
    fn test_zero_change_counts_as_increase() {
        let change = percent_change(80.0, 80.0).unwrap();
        assert_eq!(change.magnitude_pct, 0.0);
        assert!(change.increase);
    }

    #[test]
    fn test_change_from_zero_rejected() {
        assert!(percent_change(0.0, 10.0).is_err());
    }

    #[test]
    fn test_negative_base_change() {
        // (-50 -> -25) is +25 over a -50 base: -50% change, i.e. a decrease
        let change = percent_change(-50.0, -25.0).unwrap();
        assert_eq!(change.magnitude_pct, 50.0);
        assert!(!change.increase);
    }
}
