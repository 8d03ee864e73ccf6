//! Calculator core.
//!
//! This module provides:
//! - The immutable calculator state and its transitions
//! - Arithmetic, scientific functions and result formatting
//! - The engine that applies key presses and notifies listeners
//! - Parsing of typed key scripts into key presses

mod engine;
mod evaluation;
mod input;
mod state;

pub use engine::{CalculatorEngine, StateListener};
pub use evaluation::{ERROR_TEXT, INFINITY_TEXT, format_result, parse_display};
pub use input::{Key, parse_keys};
pub use state::{CalculatorState, Operator, PendingOperation, ScientificFunction};
