//! # Date & Age Arithmetic
//!
//! Calendar math built on `chrono::NaiveDate`:
//!
//! - add or subtract a whole number of days from a date
//! - difference between two dates (days, weeks, calendar-aware years/months)
//! - exact age with next-birthday lookahead
//!
//! The year/month difference borrows like hand calculation: the month delta
//! drops by one when the later day-of-month is smaller than the earlier one,
//! and a negative month delta borrows 12 months from the year delta. The age
//! calculation additionally borrows days from the month preceding the target
//! month.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Add / Subtract Days
// ============================================================================

/// Direction for a day-shift operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftDirection {
    Add,
    Subtract,
}

/// Input parameters for shifting a date by whole days.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftDateInput {
    /// Starting date
    pub date: NaiveDate,

    /// Number of whole days to shift
    pub days: u64,

    pub direction: ShiftDirection,
}

/// Result of a day-shift operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftDateResult {
    pub date: NaiveDate,
}

/// Add or subtract `days` whole days from a calendar date.
pub fn shift_date(input: &ShiftDateInput) -> CalcResult<ShiftDateResult> {
    let shifted = match input.direction {
        ShiftDirection::Add => input.date.checked_add_days(Days::new(input.days)),
        ShiftDirection::Subtract => input.date.checked_sub_days(Days::new(input.days)),
    };

    shifted
        .map(|date| ShiftDateResult { date })
        .ok_or_else(|| {
            CalcError::invalid_input(
                "days",
                input.days.to_string(),
                "Shift moves the date out of the supported calendar range",
            )
        })
}

// ============================================================================
// Date Difference
// ============================================================================

/// Input parameters for a date difference. Order does not matter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateDifferenceInput {
    pub date1: NaiveDate,
    pub date2: NaiveDate,
}

/// Results from a date difference calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateDifferenceResult {
    /// Absolute day count between the two dates
    pub days: i64,

    /// Whole weeks: days / 7, floored
    pub weeks: i64,

    /// Calendar-aware whole months beyond the year count
    pub months: u32,

    /// Calendar-aware whole years
    pub years: u32,

    /// Total months: years * 12 + months
    pub total_months: u32,
}

/// Calendar-aware (years, months) between an earlier and a later date.
fn calendar_delta(earlier: NaiveDate, later: NaiveDate) -> (u32, u32) {
    let mut years = later.year() - earlier.year();
    let mut months = later.month() as i32 - earlier.month() as i32;

    if later.day() < earlier.day() {
        months -= 1;
    }
    if months < 0 {
        months += 12;
        years -= 1;
    }

    (years as u32, months as u32)
}

/// Calculate the difference between two dates.
pub fn date_difference(input: &DateDifferenceInput) -> CalcResult<DateDifferenceResult> {
    let (earlier, later) = if input.date1 <= input.date2 {
        (input.date1, input.date2)
    } else {
        (input.date2, input.date1)
    };

    let days = (later - earlier).num_days();
    let weeks = days / 7;
    let (years, months) = calendar_delta(earlier, later);

    Ok(DateDifferenceResult {
        days,
        weeks,
        months,
        years,
        total_months: years * 12 + months,
    })
}

// ============================================================================
// Age
// ============================================================================

/// Input parameters for an age calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeInput {
    pub birth_date: NaiveDate,

    /// The date to compute the age on (usually today)
    pub target_date: NaiveDate,
}

/// Results from an age calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeResult {
    /// Whole years of age
    pub years: u32,

    /// Whole months beyond the year count
    pub months: u32,

    /// Whole days beyond the month count
    pub days: u32,

    /// Total days lived
    pub total_days: i64,

    /// Total whole weeks lived
    pub total_weeks: i64,

    /// Total whole months lived
    pub total_months: u32,

    /// Date of the next birthday (strictly after the target date)
    pub next_birthday: NaiveDate,

    /// Days from the target date until the next birthday
    pub days_until_birthday: i64,
}

/// Number of days in the month preceding the given date's month.
fn days_in_preceding_month(date: NaiveDate) -> u32 {
    let first_of_month =
        NaiveDate::from_ymd_opt(date.year(), date.month(), 1).expect("first of month is valid");
    first_of_month.pred_opt().expect("date is past year 0").day()
}

/// The birthday anniversary within `year`. A Feb 29 birth date rolls to
/// Mar 1 in non-leap years.
fn birthday_in_year(birth: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, birth.month() + 1, 1))
        .expect("anniversary resolves within the year")
}

/// Calculate exact age, lifetime totals, and the next birthday.
pub fn age(input: &AgeInput) -> CalcResult<AgeResult> {
    if input.birth_date > input.target_date {
        return Err(CalcError::invalid_input(
            "birth_date",
            input.birth_date.to_string(),
            "Birth date must not be after the target date",
        ));
    }

    let birth = input.birth_date;
    let target = input.target_date;

    let mut years = target.year() - birth.year();
    let mut months = target.month() as i32 - birth.month() as i32;
    let mut days = target.day() as i32 - birth.day() as i32;

    if days < 0 {
        months -= 1;
        days += days_in_preceding_month(target) as i32;
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    let total_days = (target - birth).num_days();
    let total_weeks = total_days / 7;
    let total_months = years as u32 * 12 + months as u32;

    let mut next_birthday = birthday_in_year(birth, target.year());
    if next_birthday <= target {
        next_birthday = birthday_in_year(birth, target.year() + 1);
    }
    let days_until_birthday = (next_birthday - target).num_days();

    Ok(AgeResult {
        years: years as u32,
        months: months as u32,
        days: days as u32,
        total_days,
        total_weeks,
        total_months,
        next_birthday,
        days_until_birthday,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_days_across_leap_day() {
        let input = ShiftDateInput {
            date: date(2024, 1, 1),
            days: 60,
            direction: ShiftDirection::Add,
        };
        assert_eq!(shift_date(&input).unwrap().date, date(2024, 3, 1));
    }

    #[test]
    fn test_subtract_days() {
        let input = ShiftDateInput {
            date: date(2024, 3, 1),
            days: 1,
            direction: ShiftDirection::Subtract,
        };
        assert_eq!(shift_date(&input).unwrap().date, date(2024, 2, 29));
    }

    #[test]
    fn test_difference_example() {
        let input = DateDifferenceInput {
            date1: date(2024, 1, 1),
            date2: date(2024, 3, 1),
        };
        let result = date_difference(&input).unwrap();
        assert_eq!(result.days, 60);
        assert_eq!(result.weeks, 8);
        assert_eq!(result.months, 2);
        assert_eq!(result.years, 0);
        assert_eq!(result.total_months, 2);
    }

    #[test]
    fn test_difference_is_symmetric() {
        let forward = date_difference(&DateDifferenceInput {
            date1: date(2020, 5, 10),
            date2: date(2024, 2, 3),
        })
        .unwrap();
        let backward = date_difference(&DateDifferenceInput {
            date1: date(2024, 2, 3),
            date2: date(2020, 5, 10),
        })
        .unwrap();
        assert_eq!(forward.days, backward.days);
        assert_eq!(forward.months, backward.months);
        assert_eq!(forward.years, backward.years);
    }

    #[test]
    fn test_difference_month_borrow() {
        // 2023-03-15 to 2024-03-14: the day borrow drops it to 11 months
        let result = date_difference(&DateDifferenceInput {
            date1: date(2023, 3, 15),
            date2: date(2024, 3, 14),
        })
        .unwrap();
        assert_eq!(result.years, 0);
        assert_eq!(result.months, 11);
        assert_eq!(result.total_months, 11);
    }

    #[test]
    fn test_age_exact() {
        let result = age(&AgeInput {
            birth_date: date(1990, 6, 15),
            target_date: date(2024, 8, 29),
        })
        .unwrap();
        assert_eq!(result.years, 34);
        assert_eq!(result.months, 2);
        assert_eq!(result.days, 14);
        assert_eq!(result.total_months, 34 * 12 + 2);
        assert_eq!(result.next_birthday, date(2025, 6, 15));
        assert_eq!(result.days_until_birthday, 290);
    }

    #[test]
    fn test_age_day_borrow_uses_preceding_month() {
        // Days borrow from May (31 days), the month before the target's June
        let result = age(&AgeInput {
            birth_date: date(1990, 5, 31),
            target_date: date(2024, 6, 15),
        })
        .unwrap();
        assert_eq!(result.years, 34);
        assert_eq!(result.months, 0);
        assert_eq!(result.days, 15);
    }

    #[test]
    fn test_birthday_on_target_rolls_to_next_year() {
        let result = age(&AgeInput {
            birth_date: date(1990, 8, 29),
            target_date: date(2024, 8, 29),
        })
        .unwrap();
        assert_eq!(result.years, 34);
        assert_eq!(result.months, 0);
        assert_eq!(result.days, 0);
        assert_eq!(result.next_birthday, date(2025, 8, 29));
        assert_eq!(result.days_until_birthday, 365);
    }

    #[test]
    fn test_leap_day_birth_rolls_to_march() {
        let result = age(&AgeInput {
            birth_date: date(2000, 2, 29),
            target_date: date(2023, 6, 1),
        })
        .unwrap();
        // 2024 is a leap year, so the next anniversary lands on Feb 29
        assert_eq!(result.next_birthday, date(2024, 2, 29));

        let non_leap = age(&AgeInput {
            birth_date: date(2000, 2, 29),
            target_date: date(2025, 1, 15),
        })
        .unwrap();
        assert_eq!(non_leap.next_birthday, date(2025, 3, 1));
    }

    #[test]
    fn test_birth_after_target_rejected() {
        let result = age(&AgeInput {
            birth_date: date(2030, 1, 1),
            target_date: date(2024, 1, 1),
        });
        assert!(result.is_err());
    }
}
