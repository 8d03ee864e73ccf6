//! Arithmetic and result formatting for the calculator engine.
//!
//! Invalid-domain math never fails loudly: it produces `NaN` (or infinity),
//! which the formatter turns into `"Error"` (or `"∞"`).

use super::state::{Operator, ScientificFunction};

/// Display text for a `NaN` result.
pub const ERROR_TEXT: &str = "Error";

/// Display text for an infinite result.
pub const INFINITY_TEXT: &str = "∞";

/// Largest `n` whose factorial is still finite as an `f64`.
const MAX_FINITE_FACTORIAL: f64 = 170.0;

/// Apply a binary operator to `left` and `right`.
pub fn apply_operator(operator: Operator, left: f64, right: f64) -> f64 {
    match operator {
        Operator::Add => left + right,
        Operator::Subtract => left - right,
        Operator::Multiply => left * right,
        Operator::Divide => {
            if right != 0.0 {
                left / right
            } else {
                f64::NAN
            }
        }
        Operator::Power => left.powf(right),
    }
}

/// Apply a scientific function to `value`.
///
/// Trigonometry takes its input in degrees. With `inverse` set, sin/cos/tan
/// become asin/acos/atan and the result is returned in degrees.
pub fn apply_function(function: ScientificFunction, value: f64, inverse: bool) -> f64 {
    match function {
        ScientificFunction::Sin if inverse => value.asin().to_degrees(),
        ScientificFunction::Sin => value.to_radians().sin(),
        ScientificFunction::Cos if inverse => value.acos().to_degrees(),
        ScientificFunction::Cos => value.to_radians().cos(),
        ScientificFunction::Tan if inverse => value.atan().to_degrees(),
        ScientificFunction::Tan => value.to_radians().tan(),
        ScientificFunction::Ln => {
            if value > 0.0 {
                value.ln()
            } else {
                f64::NAN
            }
        }
        ScientificFunction::Log => {
            if value > 0.0 {
                value.log10()
            } else {
                f64::NAN
            }
        }
        ScientificFunction::Sqrt => {
            if value >= 0.0 {
                value.sqrt()
            } else {
                f64::NAN
            }
        }
        ScientificFunction::Reciprocal => {
            if value != 0.0 {
                1.0 / value
            } else {
                f64::NAN
            }
        }
        ScientificFunction::Factorial => factorial(value),
    }
}

/// Factorial of a non-negative integer value, `NaN` otherwise.
///
/// Anything past 170! overflows to infinity without iterating.
fn factorial(n: f64) -> f64 {
    if n < 0.0 || n.fract() != 0.0 {
        return f64::NAN;
    }
    if n > MAX_FINITE_FACTORIAL {
        return f64::INFINITY;
    }

    (1..=n as u32).fold(1.0, |acc, i| acc * f64::from(i))
}

/// Format a computed value for the display.
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return ERROR_TEXT.to_string();
    }
    if value.is_infinite() {
        return INFINITY_TEXT.to_string();
    }

    // `as i64` saturates, so out-of-range integers take the decimal path,
    // which still prints every integer digit.
    let truncated = value as i64;
    if value == truncated as f64 {
        return truncated.to_string();
    }

    let formatted = format!("{:.8}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    // Negatives that round to zero at 8 places show as "0", never "-0".
    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Parse display text into a finite number.
///
/// Returns `None` for `"Error"`, `"∞"`, or anything else that is not a
/// plain decimal.
pub fn parse_display(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operators() {
        assert_eq!(apply_operator(Operator::Add, 5.0, 3.0), 8.0);
        assert_eq!(apply_operator(Operator::Subtract, 5.0, 3.0), 2.0);
        assert_eq!(apply_operator(Operator::Multiply, 5.0, 3.0), 15.0);
        assert_eq!(apply_operator(Operator::Divide, 6.0, 3.0), 2.0);
        assert_eq!(apply_operator(Operator::Power, 2.0, 10.0), 1024.0);
    }

    #[test]
    fn test_division_by_zero() {
        assert!(apply_operator(Operator::Divide, 1.0, 0.0).is_nan());
        assert!(apply_operator(Operator::Divide, 0.0, 0.0).is_nan());
    }

    #[test]
    fn test_power_invalid_domain() {
        assert!(apply_operator(Operator::Power, -8.0, 0.5).is_nan());
    }

    #[test]
    fn test_trig_in_degrees() {
        assert_eq!(format_result(apply_function(ScientificFunction::Sin, 90.0, false)), "1");
        assert_eq!(format_result(apply_function(ScientificFunction::Cos, 0.0, false)), "1");
        assert_eq!(format_result(apply_function(ScientificFunction::Sin, 180.0, false)), "0");
        assert_eq!(format_result(apply_function(ScientificFunction::Tan, 45.0, false)), "1");
    }

    #[test]
    fn test_inverse_trig_returns_degrees() {
        assert_eq!(format_result(apply_function(ScientificFunction::Sin, 1.0, true)), "90");
        assert_eq!(format_result(apply_function(ScientificFunction::Cos, 0.0, true)), "90");
        assert_eq!(format_result(apply_function(ScientificFunction::Tan, 1.0, true)), "45");
        assert!(apply_function(ScientificFunction::Sin, 2.0, true).is_nan());
    }

    #[test]
    fn test_logarithms() {
        assert_eq!(format_result(apply_function(ScientificFunction::Log, 1000.0, false)), "3");
        assert_eq!(apply_function(ScientificFunction::Ln, 1.0, false), 0.0);
        assert!(apply_function(ScientificFunction::Ln, 0.0, false).is_nan());
        assert!(apply_function(ScientificFunction::Log, -1.0, false).is_nan());
    }

    #[test]
    fn test_sqrt_and_reciprocal() {
        assert_eq!(apply_function(ScientificFunction::Sqrt, 16.0, false), 4.0);
        assert!(apply_function(ScientificFunction::Sqrt, -4.0, false).is_nan());
        assert_eq!(apply_function(ScientificFunction::Reciprocal, 4.0, false), 0.25);
        assert!(apply_function(ScientificFunction::Reciprocal, 0.0, false).is_nan());
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0.0), 1.0);
        assert_eq!(factorial(5.0), 120.0);
        assert!(factorial(-1.0).is_nan());
        assert!(factorial(2.5).is_nan());
        assert!(factorial(171.0).is_infinite());
        assert!(factorial(170.0).is_finite());
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(format_result(f64::NAN), "Error");
        assert_eq!(format_result(f64::INFINITY), "∞");
        assert_eq!(format_result(f64::NEG_INFINITY), "∞");
    }

    #[test]
    fn test_format_integers() {
        assert_eq!(format_result(8.0), "8");
        assert_eq!(format_result(-42.0), "-42");
        assert_eq!(format_result(-0.0), "0");
        assert_eq!(format_result(1e20), "100000000000000000000");
    }

    #[test]
    fn test_format_decimals() {
        assert_eq!(format_result(0.5), "0.5");
        assert_eq!(format_result(1.0 / 3.0), "0.33333333");
        assert_eq!(format_result(2.0 / 3.0), "0.66666667");
        assert_eq!(format_result(-1e-12), "0");
    }

    #[test]
    fn test_integer_round_trip() {
        for value in [0.0, 7.0, -15.0, 1024.0, 3_628_800.0] {
            assert_eq!(parse_display(&format_result(value)), Some(value));
        }
    }

    #[test]
    fn test_parse_display() {
        assert_eq!(parse_display("12.5"), Some(12.5));
        assert_eq!(parse_display("5."), Some(5.0));
        assert_eq!(parse_display("-1"), Some(-1.0));
        assert_eq!(parse_display("Error"), None);
        assert_eq!(parse_display("∞"), None);
        assert_eq!(parse_display("inf"), None);
    }
}
