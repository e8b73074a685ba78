//! # Password Generation & Strength
//!
//! Generation draws each character uniformly from the union of the enabled
//! character classes. With `exclude_ambiguous` set, the easily-confused
//! characters `i l 1 L o 0 O` are removed from the pool first.
//!
//! Strength scoring awards one point per length milestone (8, 12, 16) and one
//! per character class present, for a score of 0 to 7 mapped onto seven
//! labeled bands.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Characters dropped from the pool when `exclude_ambiguous` is set.
const AMBIGUOUS: &str = "il1Lo0O";

/// Options controlling password generation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length": 16,
///   "include_uppercase": true,
///   "include_lowercase": true,
///   "include_digits": true,
///   "include_symbols": false,
///   "exclude_ambiguous": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordOptions {
    /// Number of characters to generate
    pub length: usize,

    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,

    /// Drop `i l 1 L o 0 O` from the pool
    pub exclude_ambiguous: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_symbols: true,
            exclude_ambiguous: false,
        }
    }
}

impl PasswordOptions {
    /// The character pool implied by the options.
    pub fn charset(&self) -> Vec<char> {
        let mut pool = String::new();
        if self.include_uppercase {
            pool.push_str(UPPERCASE);
        }
        if self.include_lowercase {
            pool.push_str(LOWERCASE);
        }
        if self.include_digits {
            pool.push_str(DIGITS);
        }
        if self.include_symbols {
            pool.push_str(SYMBOLS);
        }
        if self.exclude_ambiguous {
            pool.retain(|c| !AMBIGUOUS.contains(c));
        }
        pool.chars().collect()
    }

    /// Validate the options.
    pub fn validate(&self) -> CalcResult<()> {
        if self.length == 0 {
            return Err(CalcError::invalid_input(
                "length",
                "0",
                "Length must be positive",
            ));
        }
        if self.charset().is_empty() {
            return Err(CalcError::invalid_input(
                "character classes",
                "none",
                "At least one character class must be enabled",
            ));
        }
        Ok(())
    }
}

/// Generate a password from the configured pool.
pub fn generate(options: &PasswordOptions, rng: &mut impl Rng) -> CalcResult<String> {
    options.validate()?;

    let pool = options.charset();
    let password = (0..options.length)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect();

    Ok(password)
}

/// Strength score for a password, 0 to 7.
///
/// One point each for length at least 8, 12, and 16, and one for each of
/// lowercase, uppercase, digit, and symbol presence. Any non-alphanumeric
/// character counts as a symbol, so externally supplied passwords score the
/// same whether or not their symbols come from the generation pool.
pub fn score_strength(password: &str) -> u8 {
    let mut score = 0;
    if password.len() >= 8 {
        score += 1;
    }
    if password.len() >= 12 {
        score += 1;
    }
    if password.len() >= 16 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }
    score
}

/// Labeled strength band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    /// Band for a 0-7 strength score.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=1 => StrengthLabel::VeryWeak,
            2 => StrengthLabel::Weak,
            3 => StrengthLabel::Fair,
            4 => StrengthLabel::Good,
            5 => StrengthLabel::Strong,
            _ => StrengthLabel::VeryStrong,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Good => "Good",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }

    /// Display color for the band
    pub fn color(&self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "red",
            StrengthLabel::Weak => "orange",
            StrengthLabel::Fair => "yellow",
            StrengthLabel::Good => "lightgreen",
            StrengthLabel::Strong => "green",
            StrengthLabel::VeryStrong => "darkgreen",
        }
    }
}
