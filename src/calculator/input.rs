//! Key events and the key-script parser.
//!
//! A key script is plain text such as `12.5 × 2 =` or `inv 1 sin`, turned
//! into the sequence of button presses it describes.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use super::state::{Operator, ScientificFunction};
use crate::error::InputError;

const RECIPROCAL: &str = "1/x";

/// One press of a calculator button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Decimal,
    Backspace,
    Operator(Operator),
    Equals,
    Clear,
    Function(ScientificFunction),
    ToggleInverse,
    ToggleFunctions,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{}", d),
            Self::Decimal => f.write_str("."),
            Self::Backspace => f.write_str("⌫"),
            Self::Operator(op) => write!(f, "{}", op),
            Self::Equals => f.write_str("="),
            Self::Clear => f.write_str("C"),
            Self::Function(func) => write!(f, "{}", func),
            Self::ToggleInverse => f.write_str("inv"),
            Self::ToggleFunctions => f.write_str("fn"),
        }
    }
}

lazy_static! {
    /// Matches a single key token.
    /// Longer spellings come first so `1/x` and `x^y` win over their prefixes.
    /// Digits glued to `1/x` (`21/x`) stay in that token and are split off later.
    static ref KEY_TOKEN: Regex = Regex::new(
        r"x\^y|[0-9.]*1/x|x!|sqrt|sin|cos|tan|ln|log|inv|fn|clear|back|[0-9.]+|[+\-−*×/÷^!√=C⌫]"
    ).unwrap();
}

/// Parse a key script into button presses.
///
/// Whitespace between tokens is optional. Numbers expand to one key per
/// digit or decimal point. Anything that is not a known token is an error.
pub fn parse_keys(input: &str) -> Result<Vec<Key>, InputError> {
    let mut keys = Vec::new();
    let mut last_end = 0;

    for token in KEY_TOKEN.find_iter(input) {
        check_gap(&input[last_end..token.start()])?;
        push_token(token.as_str(), &mut keys)?;
        last_end = token.end();
    }
    check_gap(&input[last_end..])?;

    Ok(keys)
}

/// Text between tokens must be whitespace only.
fn check_gap(gap: &str) -> Result<(), InputError> {
    let unknown = gap.trim();
    if unknown.is_empty() {
        Ok(())
    } else {
        Err(InputError::UnknownKey(unknown.to_string()))
    }
}

fn push_token(token: &str, keys: &mut Vec<Key>) -> Result<(), InputError> {
    let key = match token {
        "=" => Key::Equals,
        "C" | "clear" => Key::Clear,
        "⌫" | "back" => Key::Backspace,
        "inv" => Key::ToggleInverse,
        "fn" => Key::ToggleFunctions,
        reciprocal if reciprocal.ends_with(RECIPROCAL) => {
            push_number(&reciprocal[..reciprocal.len() - RECIPROCAL.len()], keys);
            Key::Function(ScientificFunction::Reciprocal)
        }
        number if number.starts_with(|c: char| c.is_ascii_digit() || c == '.') => {
            push_number(number, keys);
            return Ok(());
        }
        other => match other.parse::<Operator>() {
            Ok(op) => Key::Operator(op),
            Err(_) => Key::Function(other.parse::<ScientificFunction>()?),
        },
    };

    keys.push(key);
    Ok(())
}

/// One key per digit or decimal point.
fn push_number(number: &str, keys: &mut Vec<Key>) {
    keys.extend(number.bytes().map(|b| match b {
        b'.' => Key::Decimal,
        digit => Key::Digit(digit - b'0'),
    }));
}
