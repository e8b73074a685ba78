//! # Scientific Calculator Engine
//!
//! A key-dispatch state machine mirroring a four-function calculator keypad
//! extended with scientific keys. State is the display string, a pending
//! operand/operation pair, an operand-entry flag, and the angle mode.
//!
//! Evaluation is strictly left to right with no operator precedence: keying
//! `2 + 3 * 4 =` yields 20, not 14. Division by zero and domain errors follow
//! IEEE 754, so the display can read `inf` or `NaN`; `clear` always recovers.

use serde::{Deserialize, Serialize};

/// Angle interpretation for the trigonometric keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleMode {
    Degrees,
    Radians,
}

/// Binary operator keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// The `=` key. Applying it yields the second operand unchanged, which
    /// flushes the pending operation without starting a new one.
    Equals,
}

impl BinaryOp {
    fn apply(&self, first: f64, second: f64) -> f64 {
        match self {
            BinaryOp::Add => first + second,
            BinaryOp::Subtract => first - second,
            BinaryOp::Multiply => first * second,
            BinaryOp::Divide => first / second,
            BinaryOp::Equals => second,
        }
    }
}

/// Unary function keys, including the constant keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryFunc {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Ln,
    Log10,
    Sqrt,
    Cbrt,
    Square,
    Cube,
    Factorial,
    Reciprocal,
    /// e^x
    Exp,
    /// 10^x
    Pow10,
    /// x / 100
    Percent,
    /// Replaces the display with pi
    Pi,
    /// Replaces the display with e
    E,
}

/// Scientific calculator state machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calculator {
    display: String,
    previous_value: Option<f64>,
    operation: Option<BinaryOp>,
    waiting_for_operand: bool,
    angle_mode: AngleMode,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            previous_value: None,
            operation: None,
            waiting_for_operand: false,
            angle_mode: AngleMode::Degrees,
        }
    }

    /// Current display string
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Numeric value of the display
    pub fn value(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    pub fn set_angle_mode(&mut self, mode: AngleMode) {
        self.angle_mode = mode;
    }

    /// Key a digit 0-9. Other values are ignored.
    pub fn input_digit(&mut self, digit: u8) {
        if digit > 9 {
            return;
        }
        if self.waiting_for_operand {
            self.display = digit.to_string();
            self.waiting_for_operand = false;
        } else if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push_str(&digit.to_string());
        }
    }

    /// Key the decimal point. A second point in the same operand is ignored.
    pub fn input_decimal(&mut self) {
        if self.waiting_for_operand {
            self.display = "0.".to_string();
            self.waiting_for_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Key a binary operator (or `=`).
    ///
    /// If an operation is already pending it is applied first, using the
    /// current display as the second operand, and its result becomes both the
    /// display and the first operand of the new operation.
    pub fn input_operation(&mut self, op: BinaryOp) {
        let input_value = self.value();

        match (self.previous_value, self.operation) {
            (Some(previous), Some(pending)) => {
                let result = pending.apply(previous, input_value);
                self.display = format_value(result);
                self.previous_value = Some(result);
            }
            _ => {
                self.previous_value = Some(input_value);
            }
        }

        self.waiting_for_operand = true;
        self.operation = Some(op);
    }

    /// Key a unary function; the result replaces the display.
    pub fn input_function(&mut self, func: UnaryFunc) {
        let x = self.value();
        let result = match func {
            UnaryFunc::Sin => self.to_radians(x).sin(),
            UnaryFunc::Cos => self.to_radians(x).cos(),
            UnaryFunc::Tan => self.to_radians(x).tan(),
            UnaryFunc::Asin => self.from_radians(x.asin()),
            UnaryFunc::Acos => self.from_radians(x.acos()),
            UnaryFunc::Atan => self.from_radians(x.atan()),
            UnaryFunc::Ln => x.ln(),
            UnaryFunc::Log10 => x.log10(),
            UnaryFunc::Sqrt => x.sqrt(),
            UnaryFunc::Cbrt => x.cbrt(),
            UnaryFunc::Square => x * x,
            UnaryFunc::Cube => x * x * x,
            UnaryFunc::Factorial => factorial(x),
            UnaryFunc::Reciprocal => 1.0 / x,
            UnaryFunc::Exp => x.exp(),
            UnaryFunc::Pow10 => 10.0_f64.powf(x),
            UnaryFunc::Percent => x / 100.0,
            UnaryFunc::Pi => std::f64::consts::PI,
            UnaryFunc::E => std::f64::consts::E,
        };
        self.display = format_value(result);
        self.waiting_for_operand = true;
    }

    /// The `C` key: reset all state.
    pub fn clear(&mut self) {
        *self = Self {
            angle_mode: self.angle_mode,
            ..Self::new()
        };
    }

    /// The `CE` key: reset the display only.
    pub fn clear_entry(&mut self) {
        self.display = "0".to_string();
    }

    fn to_radians(&self, x: f64) -> f64 {
        match self.angle_mode {
            AngleMode::Degrees => x.to_radians(),
            AngleMode::Radians => x,
        }
    }

    fn from_radians(&self, x: f64) -> f64 {
        match self.angle_mode {
            AngleMode::Degrees => x.to_degrees(),
            AngleMode::Radians => x,
        }
    }
}

/// Factorial over the integer part of `n`; negative input yields NaN.
fn factorial(n: f64) -> f64 {
    if n < 0.0 {
        return f64::NAN;
    }
    let mut result = 1.0;
    let mut i = 2.0;
    while i <= n {
        result *= i;
        i += 1.0;
    }
    result
}

/// Render a value the way the display shows it: integers without a decimal
/// point, everything else via the default float formatting.
fn format_value(value: f64) -> String {
    value.to_string()
}
