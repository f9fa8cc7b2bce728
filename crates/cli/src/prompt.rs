//! Interactive prompts for collecting calculator inputs.
//!
//! Fields already supplied on the command line or in an inputs file are
//! never asked for again. In batch mode, or when stdin is not a terminal,
//! nothing is prompted and a missing required field is an error.

use banksim_core::curriculum::{FieldKind, InputField, SimulatorConfig};
use banksim_core::inputs::{parse_date, parse_number, Inputs, RawValue};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::io::{self, IsTerminal};

/// Options for prompting behavior.
#[derive(Debug, Clone, Default)]
pub struct PromptOptions {
    /// If true, fail on missing inputs instead of prompting.
    pub batch_mode: bool,
}

/// Result of input collection.
#[derive(Debug)]
pub struct CollectedInputs {
    pub values: Inputs,
    /// Fields that were prompted for.
    pub prompted: Vec<String>,
}

/// Error type for input collection.
#[derive(Debug)]
pub enum PromptError {
    /// Missing required field in batch mode.
    MissingRequired(String),
    /// IO error during prompting.
    Io(io::Error),
    /// User cancelled input.
    Cancelled,
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptError::MissingRequired(name) => {
                write!(f, "missing required input: {name}\n  Hint: use --set {name}=... or remove --batch")
            }
            PromptError::Io(e) => write!(f, "IO error: {e}"),
            PromptError::Cancelled => write!(f, "input cancelled by user"),
        }
    }
}

impl std::error::Error for PromptError {}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        PromptError::Io(e)
    }
}

/// Fill in the fields of `sim` that `provided` lacks.
pub fn collect_inputs(
    sim: &SimulatorConfig,
    provided: Inputs,
    options: &PromptOptions,
) -> Result<CollectedInputs, PromptError> {
    let is_interactive = io::stdin().is_terminal() && !options.batch_mode;
    collect_with(sim, provided, is_interactive)
}

fn collect_with(
    sim: &SimulatorConfig,
    provided: Inputs,
    is_interactive: bool,
) -> Result<CollectedInputs, PromptError> {
    let mut values = provided;
    let mut prompted = Vec::new();

    for field in &sim.inputs {
        if values.get(&field.name).is_some_and(|v| !v.is_blank()) {
            continue;
        }
        if !is_interactive {
            if field.required {
                return Err(PromptError::MissingRequired(field.name.clone()));
            }
            continue;
        }

        tracing::debug!(field = %field.name, "prompting for input");
        if let Some(value) = prompt_field(field)? {
            values.insert(&field.name, value);
            prompted.push(field.name.clone());
        }
    }

    Ok(CollectedInputs { values, prompted })
}

/// Ask for one field. `None` means an optional field was left empty.
fn prompt_field(field: &InputField) -> Result<Option<RawValue>, PromptError> {
    let theme = ColorfulTheme::default();

    if let (FieldKind::Select, Some(options)) = (field.kind, &field.options) {
        let idx = Select::with_theme(&theme)
            .with_prompt(&field.label)
            .items(options)
            .default(0)
            .interact()
            .map_err(dialoguer_error_to_prompt_error)?;
        return Ok(Some(RawValue::Text(options[idx].clone())));
    }

    let prompt_text = match (field.kind, field.bounds_hint()) {
        (FieldKind::Date, _) => format!("{} (YYYY-MM-DD)", field.label),
        (_, Some(hint)) => format!("{} [{hint}]", field.label),
        _ => field.label.clone(),
    };

    let kind = field.kind;
    let name = field.name.clone();
    let required = field.required;
    let text = Input::<String>::with_theme(&theme)
        .with_prompt(prompt_text)
        .allow_empty(!required)
        .validate_with(move |input: &String| -> Result<(), String> {
            validate_entry(&name, kind, required, input)
        })
        .interact_text()
        .map_err(dialoguer_error_to_prompt_error)?;

    if text.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(RawValue::Text(text.trim().to_string())))
}

/// Check typed text before accepting it.
fn validate_entry(name: &str, kind: FieldKind, required: bool, input: &str) -> Result<(), String> {
    if input.trim().is_empty() {
        return if required { Err("a value is required".into()) } else { Ok(()) };
    }
    let raw = RawValue::Text(input.to_string());
    match kind {
        FieldKind::Number => parse_number(name, &raw).map(|_| ()).map_err(|e| e.to_string()),
        FieldKind::Date => parse_date(name, &raw).map(|_| ()).map_err(|e| e.to_string()),
        FieldKind::Text | FieldKind::Select => Ok(()),
    }
}

/// Convert dialoguer error to our PromptError.
fn dialoguer_error_to_prompt_error(e: dialoguer::Error) -> PromptError {
    match e {
        dialoguer::Error::IO(io_err) => {
            if io_err.kind() == io::ErrorKind::UnexpectedEof {
                PromptError::Cancelled
            } else {
                PromptError::Io(io_err)
            }
        }
    }
}
