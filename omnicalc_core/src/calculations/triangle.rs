//! # Triangle Solver
//!
//! Two modes:
//!
//! - area from base and height: `area = b*h/2`
//! - full analysis from three sides: triangle-inequality validation, area via
//!   Heron's formula, angles via the law of cosines, and classification as
//!   Equilateral / Isosceles / Scalene with a "Right" qualifier
//!
//! The right-triangle check compares `shortest² + middle²` against `longest²`
//! with a fixed epsilon of 0.001. The epsilon is absolute, not relative to
//! side length, so very large or very small triangles may misclassify.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Absolute tolerance for the Pythagorean right-triangle check.
const RIGHT_EPSILON: f64 = 0.001;

// ============================================================================
// Area Mode
// ============================================================================

/// Input parameters for the base/height area mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleAreaInput {
    pub base: f64,
    pub height: f64,
}

/// Result of the base/height area mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleAreaResult {
    pub area: f64,
}

/// Triangle area from base and height.
pub fn area_from_base_height(input: &TriangleAreaInput) -> CalcResult<TriangleAreaResult> {
    if input.base <= 0.0 {
        return Err(CalcError::invalid_input(
            "base",
            input.base.to_string(),
            "Base must be positive",
        ));
    }
    if input.height <= 0.0 {
        return Err(CalcError::invalid_input(
            "height",
            input.height.to_string(),
            "Height must be positive",
        ));
    }
    Ok(TriangleAreaResult {
        area: input.base * input.height / 2.0,
    })
}

// ============================================================================
// Three-Sides Analysis
// ============================================================================

/// Input parameters for the three-sides analysis mode.
///
/// ## JSON Example
///
/// ```json
/// { "side_a": 3.0, "side_b": 4.0, "side_c": 5.0 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleSidesInput {
    pub side_a: f64,
    pub side_b: f64,
    pub side_c: f64,
}

impl TriangleSidesInput {
    /// Validate positivity and the triangle inequality.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("side_a", self.side_a),
            ("side_b", self.side_b),
            ("side_c", self.side_c),
        ] {
            if value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Side must be positive",
                ));
            }
        }

        let (a, b, c) = (self.side_a, self.side_b, self.side_c);
        if a + b <= c || b + c <= a || a + c <= b {
            return Err(CalcError::invalid_input(
                "sides",
                format!("{}, {}, {}", a, b, c),
                "Sides violate the triangle inequality",
            ));
        }
        Ok(())
    }
}

/// Classification by side equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriangleShape {
    /// All three sides equal
    Equilateral,
    /// Exactly two sides equal
    Isosceles,
    /// No sides equal
    Scalene,
}

impl TriangleShape {
    pub fn display_name(&self) -> &'static str {
        match self {
            TriangleShape::Equilateral => "Equilateral",
            TriangleShape::Isosceles => "Isosceles",
            TriangleShape::Scalene => "Scalene",
        }
    }
}

/// Results from the three-sides analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleAnalysis {
    /// Area via Heron's formula
    pub area: f64,

    /// Sum of the three sides
    pub perimeter: f64,

    /// Angle opposite side a, in degrees
    pub angle_a_deg: f64,

    /// Angle opposite side b, in degrees
    pub angle_b_deg: f64,

    /// Angle opposite side c, in degrees (180 - A - B)
    pub angle_c_deg: f64,

    /// Classification by side equality
    pub shape: TriangleShape,

    /// True when the sides satisfy the Pythagorean check within epsilon
    pub is_right: bool,
}

impl TriangleAnalysis {
    /// Combined label, e.g. "Scalene Right" or "Equilateral"
    pub fn type_label(&self) -> String {
        if self.is_right {
            format!("{} Right", self.shape.display_name())
        } else {
            self.shape.display_name().to_string()
        }
    }
}

/// Full analysis of a triangle given its three side lengths.
pub fn analyze_sides(input: &TriangleSidesInput) -> CalcResult<TriangleAnalysis> {
    input.validate()?;

    let (a, b, c) = (input.side_a, input.side_b, input.side_c);

    // Heron's formula
    let s = (a + b + c) / 2.0;
    let area = (s * (s - a) * (s - b) * (s - c)).sqrt();

    // Law of cosines, third angle by difference
    let angle_a_deg = ((b * b + c * c - a * a) / (2.0 * b * c)).acos().to_degrees();
    let angle_b_deg = ((a * a + c * c - b * b) / (2.0 * a * c)).acos().to_degrees();
    let angle_c_deg = 180.0 - angle_a_deg - angle_b_deg;

    let shape = if a == b && b == c {
        TriangleShape::Equilateral
    } else if a == b || b == c || a == c {
        TriangleShape::Isosceles
    } else {
        TriangleShape::Scalene
    };

    let mut sides = [a, b, c];
    sides.sort_by(|x, y| x.partial_cmp(y).expect("sides are finite"));
    let is_right =
        (sides[0] * sides[0] + sides[1] * sides[1] - sides[2] * sides[2]).abs() < RIGHT_EPSILON;

    Ok(TriangleAnalysis {
        area,
        perimeter: a + b + c,
        angle_a_deg,
        angle_b_deg,
        angle_c_deg,
        shape,
        is_right,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sides(a: f64, b: f64, c: f64) -> TriangleSidesInput {
        TriangleSidesInput {
            side_a: a,
            side_b: b,
            side_c: c,
        }
    }

    #[test]
    fn test_area_mode() {
        let result = area_from_base_height(&TriangleAreaInput {
            base: 10.0,
            height: 4.0,
        })
        .unwrap();
        assert_eq!(result.area, 20.0);
    }

    #[test]
    fn test_area_mode_guards() {
        assert!(area_from_base_height(&TriangleAreaInput {
            base: 0.0,
            height: 4.0
        })
        .is_err());
        assert!(area_from_base_height(&TriangleAreaInput {
            base: 10.0,
            height: -1.0
        })
        .is_err());
    }

    #[test]
    fn test_three_four_five() {
        let result = analyze_sides(&sides(3.0, 4.0, 5.0)).unwrap();
        assert!((result.area - 6.0).abs() < 1e-9);
        assert_eq!(result.perimeter, 12.0);
        assert_eq!(result.shape, TriangleShape::Scalene);
        assert!(result.is_right);
        assert_eq!(result.type_label(), "Scalene Right");
        assert!((result.angle_a_deg - 36.8699).abs() < 0.001);
        assert!((result.angle_b_deg - 53.1301).abs() < 0.001);
        assert!((result.angle_c_deg - 90.0).abs() < 0.001);
    }

    #[test]
    fn test_equilateral() {
        let result = analyze_sides(&sides(2.0, 2.0, 2.0)).unwrap();
        assert_eq!(result.shape, TriangleShape::Equilateral);
        assert!(!result.is_right);
        assert_eq!(result.type_label(), "Equilateral");
        assert!((result.angle_a_deg - 60.0).abs() < 1e-9);
        assert!((result.area - 3.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_right_isosceles() {
        let result = analyze_sides(&sides(1.0, 1.0, 2.0_f64.sqrt())).unwrap();
        assert_eq!(result.shape, TriangleShape::Isosceles);
        assert!(result.is_right);
        assert_eq!(result.type_label(), "Isosceles Right");
    }

    #[test]
    fn test_angles_sum_to_180() {
        let result = analyze_sides(&sides(7.0, 9.0, 12.0)).unwrap();
        let sum = result.angle_a_deg + result.angle_b_deg + result.angle_c_deg;
        assert!((sum - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_triangle_inequality_rejected() {
        assert!(analyze_sides(&sides(1.0, 2.0, 10.0)).is_err());
        // Degenerate (collinear) triangles are rejected too
        assert!(analyze_sides(&sides(1.0, 2.0, 3.0)).is_err());
    }

    #[test]
    fn test_nonpositive_side_rejected() {
        assert!(analyze_sides(&sides(0.0, 4.0, 5.0)).is_err());
        assert!(analyze_sides(&sides(3.0, -4.0, 5.0)).is_err());
    }

    #[test]
    fn test_epsilon_is_absolute() {
        // Scaled-down 3-4-5: the squared mismatch shrinks below epsilon even
        // for slightly perturbed sides, documenting the scale dependence
        let result = analyze_sides(&sides(0.03, 0.04, 0.0501)).unwrap();
        assert!(result.is_right);
    }
}
