//! Display snapshot handed to a front end for rendering.

use serde::Serialize;

use crate::calculator::{CalculatorState, ERROR_TEXT, INFINITY_TEXT, format_result};

/// What a front end shows for one calculator state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisplayItem {
    /// The pending operation, e.g. `"5 ×"`. Empty when nothing is pending.
    pub expression: String,
    /// The main display text.
    pub display_result: String,
    /// Whether the display shows `"Error"` or `"∞"`.
    pub is_error: bool,
    pub inverse_trig: bool,
    pub functions_expanded: bool,
}

impl DisplayItem {
    /// Build the snapshot for `state`.
    pub fn from_state(state: &CalculatorState) -> Self {
        let expression = state
            .pending()
            .map(|p| format!("{} {}", format_result(p.operand), p.operator))
            .unwrap_or_default();
        let display_result = state.display_text().to_string();
        let is_error = display_result == ERROR_TEXT || display_result == INFINITY_TEXT;

        Self {
            expression,
            display_result,
            is_error,
            inverse_trig: state.inverse_trig(),
            functions_expanded: state.is_function_expanded(),
        }
    }

    /// Mode indicators shown next to the display, e.g. `"INV FN"`.
    pub fn indicators(&self) -> String {
        let mut flags = Vec::new();
        if self.inverse_trig {
            flags.push("INV");
        }
        if self.functions_expanded {
            flags.push("FN");
        }
        flags.join(" ")
    }

    /// Render as a single terminal line.
    pub fn to_line(&self) -> String {
        let mut line = String::new();
        let indicators = self.indicators();
        if !indicators.is_empty() {
            line.push_str(&format!("[{}] ", indicators));
        }
        if !self.expression.is_empty() {
            line.push_str(&format!("{} ", self.expression));
        }
        line.push_str(&self.display_result);
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{CalculatorEngine, parse_keys};

    fn item(script: &str) -> DisplayItem {
        let mut engine = CalculatorEngine::new();
        DisplayItem::from_state(engine.press_all(parse_keys(script).unwrap()))
    }

    #[test]
    fn test_plain_number() {
        let item = item("42");
        assert_eq!(item.expression, "");
        assert_eq!(item.display_result, "42");
        assert!(!item.is_error);
        assert_eq!(item.to_line(), "42");
    }

    #[test]
    fn test_pending_expression() {
        let item = item("5 × 3");
        assert_eq!(item.expression, "5 ×");
        assert_eq!(item.to_line(), "5 × 3");
    }

    #[test]
    fn test_error_results() {
        assert!(item("1 ÷ 0 =").is_error);
        assert!(item("10 x^y 400 =").is_error);
        assert_eq!(item("10 x^y 400 =").display_result, "∞");
    }

    #[test]
    fn test_indicators() {
        let item = item("inv fn 1");
        assert_eq!(item.indicators(), "INV FN");
        assert_eq!(item.to_line(), "[INV FN] 1");
    }
}
