//! # Calculator Catalog
//!
//! Central registry of every calculator the engine offers. Each entry has
//! metadata for building menus, landing pages, and search.
//!
//! ## Usage
//!
//! ```rust
//! use omnicalc_core::catalog::{CalculatorId, CalculatorCategory};
//!
//! let meta = CalculatorId::Bmi.metadata();
//! assert_eq!(meta.slug, "bmi-calculator");
//! assert_eq!(meta.category, CalculatorCategory::FitnessHealth);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Categories
// ============================================================================

/// Categories for grouping calculators in menus and on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculatorCategory {
    /// Loans, mortgages, interest
    Financial,
    /// Body composition and nutrition
    FitnessHealth,
    /// Arithmetic, geometry, fractions
    Math,
    /// Everything else (dates, passwords, random numbers)
    Other,
}

impl CalculatorCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            CalculatorCategory::Financial => "Financial Calculators",
            CalculatorCategory::FitnessHealth => "Fitness & Health Calculators",
            CalculatorCategory::Math => "Math Calculators",
            CalculatorCategory::Other => "Other Calculators",
        }
    }

    /// Sort order for menus (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            CalculatorCategory::Financial => 1,
            CalculatorCategory::FitnessHealth => 2,
            CalculatorCategory::Math => 3,
            CalculatorCategory::Other => 4,
        }
    }
}

// ============================================================================
// Calculator Metadata
// ============================================================================

/// Metadata for one calculator.
///
/// Everything needed to list the calculator in a menu, route to it by slug,
/// and match it in search.
#[derive(Debug, Clone)]
pub struct CalculatorInfo {
    /// Human-readable name (e.g., "Mortgage Calculator")
    pub name: &'static str,
    /// URL-style identifier (e.g., "mortgage-calculator")
    pub slug: &'static str,
    /// One-line description for listings
    pub description: &'static str,
    /// Category for grouping
    pub category: CalculatorCategory,
    /// Extra search terms beyond the name
    pub keywords: &'static [&'static str],
}

// ============================================================================
// Calculator Enum
// ============================================================================

/// All calculators in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CalculatorId {
    Scientific,
    Loan,
    Mortgage,
    AutoLoan,
    Interest,
    Bmi,
    BodyFat,
    IdealWeight,
    Calorie,
    DateShift,
    DateDifference,
    Age,
    Fraction,
    Percentage,
    Triangle,
    RandomNumber,
    Password,
    Gpa,
}

impl CalculatorId {
    /// Get the full metadata for this calculator
    pub fn metadata(&self) -> CalculatorInfo {
        match self {
            CalculatorId::Scientific => CalculatorInfo {
                name: "Scientific Calculator",
                slug: "scientific-calculator",
                description: "Keypad calculator with trigonometric, logarithmic, and power functions",
                category: CalculatorCategory::Math,
                keywords: &["sin", "cos", "tan", "log", "factorial"],
            },
            CalculatorId::Loan => CalculatorInfo {
                name: "Loan Calculator",
                slug: "loan-calculator",
                description: "Amortized loan payment, total payment, and total interest",
                category: CalculatorCategory::Financial,
                keywords: &["payment", "amortization", "interest"],
            },
            CalculatorId::Mortgage => CalculatorInfo {
                name: "Mortgage Calculator",
                slug: "mortgage-calculator",
                description: "Monthly mortgage payment from home price, down payment, rate, and term",
                category: CalculatorCategory::Financial,
                keywords: &["home", "house", "down payment"],
            },
            CalculatorId::AutoLoan => CalculatorInfo {
                name: "Auto Loan Calculator",
                slug: "auto-loan-calculator",
                description: "Car loan payment including sales tax, down payment, and trade-in",
                category: CalculatorCategory::Financial,
                keywords: &["car", "vehicle", "trade-in"],
            },
            CalculatorId::Interest => CalculatorInfo {
                name: "Interest Calculator",
                slug: "interest-calculator",
                description: "Simple and compound interest side by side",
                category: CalculatorCategory::Financial,
                keywords: &["compound", "savings", "principal"],
            },
            CalculatorId::Bmi => CalculatorInfo {
                name: "BMI Calculator",
                slug: "bmi-calculator",
                description: "Body mass index with weight category",
                category: CalculatorCategory::FitnessHealth,
                keywords: &["body mass index", "weight", "obesity"],
            },
            CalculatorId::BodyFat => CalculatorInfo {
                name: "Body Fat Calculator",
                slug: "body-fat-calculator",
                description: "US Navy circumference method body fat estimate",
                category: CalculatorCategory::FitnessHealth,
                keywords: &["navy", "lean mass", "waist"],
            },
            CalculatorId::IdealWeight => CalculatorInfo {
                name: "Ideal Weight Calculator",
                slug: "ideal-weight-calculator",
                description: "Ideal body weight by the Robinson, Miller, Devine, and Hamwi formulas",
                category: CalculatorCategory::FitnessHealth,
                keywords: &["robinson", "devine", "hamwi"],
            },
            CalculatorId::Calorie => CalculatorInfo {
                name: "Calorie Calculator",
                slug: "calorie-calculator",
                description: "Daily calorie needs from BMR, activity level, and weight goal",
                category: CalculatorCategory::FitnessHealth,
                keywords: &["bmr", "tdee", "diet", "mifflin"],
            },
            CalculatorId::DateShift => CalculatorInfo {
                name: "Date Calculator",
                slug: "date-calculator",
                description: "Add or subtract days from a date",
                category: CalculatorCategory::Other,
                keywords: &["days", "add", "subtract"],
            },
            CalculatorId::DateDifference => CalculatorInfo {
                name: "Days Between Dates",
                slug: "days-between-dates",
                description: "Days, weeks, months, and years between two dates",
                category: CalculatorCategory::Other,
                keywords: &["duration", "difference"],
            },
            CalculatorId::Age => CalculatorInfo {
                name: "Age Calculator",
                slug: "age-calculator",
                description: "Exact age in years, months, and days, plus days until the next birthday",
                category: CalculatorCategory::Other,
                keywords: &["birthday", "birth date"],
            },
            CalculatorId::Fraction => CalculatorInfo {
                name: "Fraction Calculator",
                slug: "fraction-calculator",
                description: "Add, subtract, multiply, and divide fractions with reduced results",
                category: CalculatorCategory::Math,
                keywords: &["numerator", "denominator", "simplify"],
            },
            CalculatorId::Percentage => CalculatorInfo {
                name: "Percentage Calculator",
                slug: "percentage-calculator",
                description: "Percent of a value, percent one value is of another, and percent change",
                category: CalculatorCategory::Math,
                keywords: &["percent", "increase", "decrease"],
            },
            CalculatorId::Triangle => CalculatorInfo {
                name: "Triangle Calculator",
                slug: "triangle-calculator",
                description: "Triangle area, angles, and classification from sides or base and height",
                category: CalculatorCategory::Math,
                keywords: &["heron", "pythagorean", "angles"],
            },
            CalculatorId::RandomNumber => CalculatorInfo {
                name: "Random Number Generator",
                slug: "random-number-generator",
                description: "Uniform random integers in a range, with or without duplicates",
                category: CalculatorCategory::Other,
                keywords: &["rng", "dice", "lottery"],
            },
            CalculatorId::Password => CalculatorInfo {
                name: "Password Generator",
                slug: "password-generator",
                description: "Random passwords with configurable character classes and strength rating",
                category: CalculatorCategory::Other,
                keywords: &["security", "strength", "symbols"],
            },
            CalculatorId::Gpa => CalculatorInfo {
                name: "GPA Calculator",
                slug: "gpa-calculator",
                description: "Credit-weighted grade point average on a 4.0 or 5.0 scale",
                category: CalculatorCategory::Other,
                keywords: &["grades", "credits", "college"],
            },
        }
    }

    /// Get all calculators in a given category
    pub fn in_category(category: CalculatorCategory) -> Vec<CalculatorId> {
        ALL_CALCULATORS
            .iter()
            .filter(|c| c.metadata().category == category)
            .copied()
            .collect()
    }

    /// All categories in menu order
    pub fn all_categories() -> Vec<CalculatorCategory> {
        use CalculatorCategory::*;
        let mut cats = vec![Financial, FitnessHealth, Math, Other];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All calculators in the catalog (for iteration)
pub static ALL_CALCULATORS: &[CalculatorId] = &[
    CalculatorId::Scientific,
    CalculatorId::Loan,
    CalculatorId::Mortgage,
    CalculatorId::AutoLoan,
    CalculatorId::Interest,
    CalculatorId::Bmi,
    CalculatorId::BodyFat,
    CalculatorId::IdealWeight,
    CalculatorId::Calorie,
    CalculatorId::DateShift,
    CalculatorId::DateDifference,
    CalculatorId::Age,
    CalculatorId::Fraction,
    CalculatorId::Percentage,
    CalculatorId::Triangle,
    CalculatorId::RandomNumber,
    CalculatorId::Password,
    CalculatorId::Gpa,
];

/// Case-insensitive search over names, descriptions, and keywords.
pub fn search(query: &str) -> Vec<CalculatorId> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    ALL_CALCULATORS
        .iter()
        .filter(|c| {
            let meta = c.metadata();
            meta.name.to_lowercase().contains(&query)
                || meta.description.to_lowercase().contains(&query)
                || meta.keywords.iter().any(|k| k.to_lowercase().contains(&query))
        })
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slugs_are_unique() {
        let slugs: HashSet<_> = ALL_CALCULATORS.iter().map(|c| c.metadata().slug).collect();
        assert_eq!(slugs.len(), ALL_CALCULATORS.len());
    }

    #[test]
    fn test_every_category_is_populated() {
        for category in CalculatorId::all_categories() {
            assert!(
                !CalculatorId::in_category(category).is_empty(),
                "empty category: {:?}",
                category
            );
        }
    }

    #[test]
    fn test_search_by_name() {
        let hits = search("mortgage");
        assert_eq!(hits, vec![CalculatorId::Mortgage]);
    }

    #[test]
    fn test_search_by_keyword() {
        let hits = search("BMR");
        assert!(hits.contains(&CalculatorId::Calorie));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        assert_eq!(search("GPA"), search("gpa"));
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        assert!(search("   ").is_empty());
        assert!(search("").is_empty());
    }
}
