//! A scientific calculator engine driven by key presses.
//!
//! The engine keeps a single immutable [`CalculatorState`] and replaces it on
//! every key. Front ends read the state (or a [`DisplayItem`] built from it)
//! and forward button presses back as [`Key`] values.

pub mod calculator;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;

pub use calculator::{
    CalculatorEngine, CalculatorState, Key, Operator, ScientificFunction, parse_keys,
};
pub use config::Config;
pub use display::DisplayItem;
pub use error::{ConfigError, InputError};
