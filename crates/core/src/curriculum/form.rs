//! Checking a filled-in form before it is handed to the engine.

use thiserror::Error;

use super::types::{FieldKind, InputField, SimulatorConfig};
use crate::inputs::{Inputs, RawValue, parse_date, parse_number};

/// A problem that blocks a calculation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("missing required field: {field}")]
    MissingRequired { field: String },

    #[error("field '{field}' expects a {expected}, got '{value}'")]
    TypeMismatch { field: String, expected: FieldKind, value: String },

    #[error("'{value}' is not an option for '{field}' (choose from {allowed:?})")]
    NotAnOption { field: String, value: String, allowed: Vec<String> },
}

/// Outcome of [`check_form`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormReport {
    pub errors: Vec<FormError>,
    /// Advisory only: bounds are hints, the engine accepts any finite value.
    pub warnings: Vec<String>,
}

impl FormReport {
    /// Whether the calculation can run.
    pub fn is_ready(&self) -> bool {
        self.errors.is_empty()
    }

    fn merge(&mut self, other: FormReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

/// Check `inputs` against the fields `sim` declares.
///
/// Names not declared by the simulator are ignored.
pub fn check_form(sim: &SimulatorConfig, inputs: &Inputs) -> FormReport {
    let mut report = FormReport::default();
    for field in &sim.inputs {
        match inputs.get(&field.name) {
            Some(raw) if !raw.is_blank() => report.merge(check_field(field, raw)),
            _ if field.required => report
                .errors
                .push(FormError::MissingRequired { field: field.name.clone() }),
            _ => {}
        }
    }
    report
}

fn check_field(field: &InputField, raw: &RawValue) -> FormReport {
    let mut report = FormReport::default();
    let mismatch = || FormError::TypeMismatch {
        field: field.name.clone(),
        expected: field.kind,
        value: raw.to_string(),
    };

    match field.kind {
        FieldKind::Number => {
            let Ok(n) = parse_number(&field.name, raw) else {
                report.errors.push(mismatch());
                return report;
            };
            if let Some(min) = field.min
                && n < min
            {
                report
                    .warnings
                    .push(format!("{}: value {} is less than minimum {}", field.name, n, min));
            }
            if let Some(max) = field.max
                && n > max
            {
                report
                    .warnings
                    .push(format!("{}: value {} is greater than maximum {}", field.name, n, max));
            }
        }
        FieldKind::Date => {
            if parse_date(&field.name, raw).is_err() {
                report.errors.push(mismatch());
            }
        }
        FieldKind::Select => {
            let value = raw.to_string();
            let allowed = field.options.clone().unwrap_or_default();
            if !allowed.iter().any(|opt| opt == value.trim()) {
                report.errors.push(FormError::NotAnOption {
                    field: field.name.clone(),
                    value,
                    allowed,
                });
            }
        }
        FieldKind::Text => {}
    }
    report
}
