//! The calculator engine: owns the current state and applies key presses.

use std::sync::Arc;

use tracing::{trace, warn};

use super::input::Key;
use super::state::{CalculatorState, Operator, ScientificFunction};

/// Callback invoked with the new state after every key press.
pub type StateListener = Arc<dyn Fn(&CalculatorState) + Send + Sync>;

/// Holds one calculator session.
///
/// Each mutator replaces the state wholesale, notifies listeners and returns
/// the new state for rendering.
pub struct CalculatorEngine {
    state: CalculatorState,
    listeners: Vec<StateListener>,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Start a session from the default state.
    pub fn new() -> Self {
        Self::with_state(CalculatorState::default())
    }

    /// Start a session from an existing state.
    pub fn with_state(state: CalculatorState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
        }
    }

    /// The current state, for rendering.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Register a callback for state changes.
    pub fn subscribe(&mut self, listener: impl Fn(&CalculatorState) + Send + Sync + 'static) {
        self.listeners.push(Arc::new(listener));
    }

    /// Apply any key press.
    pub fn press(&mut self, key: Key) -> &CalculatorState {
        match key {
            Key::Digit(d) => self.on_number_click(d),
            Key::Decimal => self.on_decimal_click(),
            Key::Backspace => self.on_backspace_click(),
            Key::Operator(op) => self.on_operator_click(op),
            Key::Equals => self.on_equals_click(),
            Key::Clear => self.on_clear_click(),
            Key::Function(func) => self.on_scientific_function_click(func),
            Key::ToggleInverse => self.toggle_inverse_trig(),
            Key::ToggleFunctions => self.toggle_function_expanded(),
        }
    }

    /// Apply a sequence of key presses, returning the final state.
    pub fn press_all(&mut self, keys: impl IntoIterator<Item = Key>) -> &CalculatorState {
        for key in keys {
            self.press(key);
        }
        &self.state
    }

    /// Digit button. Values above 9 are ignored.
    pub fn on_number_click(&mut self, digit: u8) -> &CalculatorState {
        if digit > 9 {
            warn!(digit, "Ignoring out-of-range digit");
            return &self.state;
        }
        let next = self.state.with_digit(digit);
        self.replace("digit", next)
    }

    /// Decimal point button.
    pub fn on_decimal_click(&mut self) -> &CalculatorState {
        let next = self.state.with_decimal();
        self.replace("decimal", next)
    }

    /// Backspace button.
    pub fn on_backspace_click(&mut self) -> &CalculatorState {
        let next = self.state.with_backspace();
        self.replace("backspace", next)
    }

    /// Binary operator button.
    pub fn on_operator_click(&mut self, operator: Operator) -> &CalculatorState {
        let next = self.state.with_operator(operator);
        self.replace("operator", next)
    }

    /// Equals button.
    pub fn on_equals_click(&mut self) -> &CalculatorState {
        let next = self.state.with_equals();
        self.replace("equals", next)
    }

    /// Scientific function button.
    pub fn on_scientific_function_click(&mut self, function: ScientificFunction) -> &CalculatorState {
        let next = self.state.with_function(function);
        self.replace("function", next)
    }

    /// Clear button: back to the default state.
    pub fn on_clear_click(&mut self) -> &CalculatorState {
        self.replace("clear", CalculatorState::default())
    }

    /// Inverse trig toggle.
    pub fn toggle_inverse_trig(&mut self) -> &CalculatorState {
        let next = self.state.with_inverse_toggled();
        self.replace("inverse", next)
    }

    /// Function panel toggle.
    pub fn toggle_function_expanded(&mut self) -> &CalculatorState {
        let next = self.state.with_function_panel_toggled();
        self.replace("functions", next)
    }

    fn replace(&mut self, event: &'static str, next: CalculatorState) -> &CalculatorState {
        trace!(
            event,
            display = next.display_text(),
            pending = ?next.pending(),
            "State transition"
        );
        self.state = next;
        for listener in &self.listeners {
            listener(&self.state);
        }
        &self.state
    }
}
