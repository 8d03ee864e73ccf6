//! Calculator state and its pure transitions.
//!
//! Every transition takes the current state by reference and returns the
//! next one; nothing is mutated in place.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::evaluation::{apply_function, apply_operator, format_result, parse_display};
use crate::error::InputError;

/// A binary operator awaiting its second operand.
///
/// Serialized as its button symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
    ];

    /// The symbol shown on the button.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "x^y",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = InputError;

    /// Accepts the button symbols and their ASCII spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "−" | "-" => Ok(Self::Subtract),
            "×" | "*" => Ok(Self::Multiply),
            "÷" | "/" => Ok(Self::Divide),
            "x^y" | "^" => Ok(Self::Power),
            other => Err(InputError::UnknownOperator(other.to_string())),
        }
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

impl<'de> Deserialize<'de> for Operator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let symbol = String::deserialize(deserializer)?;
        symbol.parse().map_err(serde::de::Error::custom)
    }
}

/// A unary function from the scientific panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScientificFunction {
    Sin,
    Cos,
    Tan,
    Ln,
    Log,
    Sqrt,
    Reciprocal,
    Factorial,
}

impl ScientificFunction {
    pub const ALL: [ScientificFunction; 8] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Ln,
        Self::Log,
        Self::Sqrt,
        Self::Reciprocal,
        Self::Factorial,
    ];

    /// The label shown on the button.
    ///
    /// Trig labels switch to their inverse names when `inverse` is set.
    pub fn label(self, inverse: bool) -> &'static str {
        match (self, inverse) {
            (Self::Sin, true) => "asin",
            (Self::Cos, true) => "acos",
            (Self::Tan, true) => "atan",
            (Self::Sin, false) => "sin",
            (Self::Cos, false) => "cos",
            (Self::Tan, false) => "tan",
            (Self::Ln, _) => "ln",
            (Self::Log, _) => "log",
            (Self::Sqrt, _) => "√",
            (Self::Reciprocal, _) => "1/x",
            (Self::Factorial, _) => "x!",
        }
    }
}

impl fmt::Display for ScientificFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(false))
    }
}

impl FromStr for ScientificFunction {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sin" => Ok(Self::Sin),
            "cos" => Ok(Self::Cos),
            "tan" => Ok(Self::Tan),
            "ln" => Ok(Self::Ln),
            "log" => Ok(Self::Log),
            "√" | "sqrt" => Ok(Self::Sqrt),
            "1/x" => Ok(Self::Reciprocal),
            "x!" | "!" => Ok(Self::Factorial),
            other => Err(InputError::UnknownFunction(other.to_string())),
        }
    }
}

/// The left operand and operator of an unfinished binary operation.
///
/// Stored as one value so an operand can never exist without its operator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PendingOperation {
    #[serde(with = "operand")]
    pub operand: f64,
    pub operator: Operator,
}

impl PendingOperation {
    /// Complete the operation with `right` as the second operand.
    pub fn evaluate(self, right: f64) -> f64 {
        apply_operator(self.operator, self.operand, right)
    }
}

/// Serde helper for operands, which may be `NaN` or infinite after a
/// chain evaluation. Those are written as their display text.
mod operand {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::calculator::evaluation::{ERROR_TEXT, INFINITY_TEXT};

    const NEG_INFINITY_TEXT: &str = "-∞";

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_str(ERROR_TEXT)
        } else if value.is_infinite() && *value > 0.0 {
            serializer.serialize_str(INFINITY_TEXT)
        } else if value.is_infinite() {
            serializer.serialize_str(NEG_INFINITY_TEXT)
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => match text.as_str() {
                ERROR_TEXT => Ok(f64::NAN),
                INFINITY_TEXT => Ok(f64::INFINITY),
                NEG_INFINITY_TEXT => Ok(f64::NEG_INFINITY),
                other => Err(serde::de::Error::custom(format!("invalid operand '{}'", other))),
            },
        }
    }
}

/// Everything the display needs to render one calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    display_text: String,
    pending: Option<PendingOperation>,
    reset_display_on_next_input: bool,
    inverse_trig: bool,
    is_function_expanded: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display_text: "0".to_string(),
            pending: None,
            reset_display_on_next_input: false,
            inverse_trig: false,
            is_function_expanded: false,
        }
    }
}

impl CalculatorState {
    /// Default state with the two mode flags preset.
    pub fn with_modes(inverse_trig: bool, is_function_expanded: bool) -> Self {
        Self {
            inverse_trig,
            is_function_expanded,
            ..Self::default()
        }
    }

    /// The text currently on the display.
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// The stored left operand, if an operation is pending.
    pub fn previous_value(&self) -> Option<f64> {
        self.pending.map(|p| p.operand)
    }

    /// The pending operator, if any.
    pub fn current_operator(&self) -> Option<Operator> {
        self.pending.map(|p| p.operator)
    }

    /// The pending operand and operator as one value.
    pub fn pending(&self) -> Option<PendingOperation> {
        self.pending
    }

    /// Whether the next digit starts a fresh number.
    pub fn reset_display_on_next_input(&self) -> bool {
        self.reset_display_on_next_input
    }

    pub fn inverse_trig(&self) -> bool {
        self.inverse_trig
    }

    pub fn is_function_expanded(&self) -> bool {
        self.is_function_expanded
    }

    /// Whether the display holds a number rather than `"Error"` or `"∞"`.
    pub fn display_is_numeric(&self) -> bool {
        parse_display(&self.display_text).is_some()
    }

    /// Enter a digit, replacing the display after a result or a lone `"0"`.
    ///
    /// Digits outside `0..=9` leave the state unchanged.
    pub fn with_digit(&self, digit: u8) -> Self {
        let Some(digit) = char::from_digit(u32::from(digit), 10) else {
            return self.clone();
        };

        let display_text = if self.reset_display_on_next_input || self.display_text == "0" {
            digit.to_string()
        } else {
            let mut text = self.display_text.clone();
            text.push(digit);
            text
        };

        Self {
            display_text,
            reset_display_on_next_input: false,
            ..self.clone()
        }
    }

    /// Append a decimal point unless the display already has one.
    pub fn with_decimal(&self) -> Self {
        if !self.display_is_numeric() {
            return Self {
                display_text: "0.".to_string(),
                reset_display_on_next_input: false,
                ..self.clone()
            };
        }
        if self.display_text.contains('.') {
            return self.clone();
        }

        Self {
            display_text: format!("{}.", self.display_text),
            ..self.clone()
        }
    }

    /// Drop the last character, falling back to `"0"`.
    pub fn with_backspace(&self) -> Self {
        let mut chars = self.display_text.chars();
        chars.next_back();
        let rest = chars.as_str();

        let display_text = if !self.display_is_numeric() || rest.is_empty() || rest == "-" {
            "0".to_string()
        } else {
            rest.to_string()
        };

        Self {
            display_text,
            ..self.clone()
        }
    }

    /// Make `operator` pending, chain-evaluating first if a second operand was typed.
    pub fn with_operator(&self, operator: Operator) -> Self {
        let current = parse_display(&self.display_text);

        match self.pending {
            Some(pending) if !self.reset_display_on_next_input => {
                let result = pending.evaluate(current.unwrap_or(0.0));
                Self {
                    display_text: format_result(result),
                    pending: Some(PendingOperation {
                        operand: result,
                        operator,
                    }),
                    reset_display_on_next_input: true,
                    ..self.clone()
                }
            }
            _ => Self {
                pending: current.map(|operand| PendingOperation { operand, operator }),
                reset_display_on_next_input: true,
                ..self.clone()
            },
        }
    }

    /// Complete the pending operation. No-op when nothing is pending.
    pub fn with_equals(&self) -> Self {
        let Some(pending) = self.pending else {
            return self.clone();
        };

        let current = parse_display(&self.display_text).unwrap_or(0.0);
        Self {
            display_text: format_result(pending.evaluate(current)),
            pending: None,
            reset_display_on_next_input: true,
            ..self.clone()
        }
    }

    /// Apply a scientific function to the display. No-op on a non-numeric display.
    pub fn with_function(&self, function: ScientificFunction) -> Self {
        let Some(value) = parse_display(&self.display_text) else {
            return self.clone();
        };

        Self {
            display_text: format_result(apply_function(function, value, self.inverse_trig)),
            reset_display_on_next_input: true,
            ..self.clone()
        }
    }

    /// Flip between standard and inverse trig.
    pub fn with_inverse_toggled(&self) -> Self {
        Self {
            inverse_trig: !self.inverse_trig,
            ..self.clone()
        }
    }

    /// Flip the function panel flag.
    pub fn with_function_panel_toggled(&self) -> Self {
        Self {
            is_function_expanded: !self.is_function_expanded,
            ..self.clone()
        }
    }
}
