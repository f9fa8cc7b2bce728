//! Calculation output and error types.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::inputs::InputError;

use super::format::grouped;

/// Headline value of a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultValue {
    /// A rupee amount (or other figure) computed by the calculator.
    Amount(f64),
    /// A status or verdict.
    Text(String),
}

impl ResultValue {
    pub fn as_amount(&self) -> Option<f64> {
        match self {
            Self::Amount(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Amount(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount(n) => write!(f, "₹{}", grouped(*n)),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// What a calculator hands back to the presentation layer.
///
/// Field order and names match the JSON shape the simulator page renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorResult {
    pub result: ResultValue,
    pub steps: Vec<String>,
    pub formula: String,
}

impl SimulatorResult {
    /// Result for a module id with no calculator behind it.
    pub fn unavailable() -> Self {
        Self {
            result: ResultValue::Text("Calculation not available".to_string()),
            steps: vec!["This simulator is not yet implemented".to_string()],
            formula: "N/A".to_string(),
        }
    }

    /// True when this is the not-available sentinel.
    pub fn is_unavailable(&self) -> bool {
        self.formula == "N/A"
    }
}

/// Errors from a calculation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// An input could not be read as the type the calculator needs.
    #[error(transparent)]
    Input(#[from] InputError),

    /// An input would make the arithmetic divide by zero or go meaningless.
    #[error("degenerate value for '{field}': {reason}")]
    Degenerate { field: String, reason: String },
}

impl EngineError {
    pub(crate) fn degenerate(field: &str, reason: &str) -> Self {
        tracing::warn!(field, reason, "rejecting degenerate calculator input");
        Self::Degenerate { field: field.to_string(), reason: reason.to_string() }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
