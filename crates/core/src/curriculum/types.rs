//! Curriculum content records.

use serde::{Deserialize, Serialize};

/// Kind of form control a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Number,
    Text,
    Select,
    Date,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Text => "text",
            Self::Select => "select",
            Self::Date => "date",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One form control of a simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputField {
    /// Key under which the value is passed to the engine.
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl InputField {
    /// Human-readable bounds, e.g. `1..=20 step 0.25`.
    pub fn bounds_hint(&self) -> Option<String> {
        let range = match (self.min, self.max) {
            (Some(lo), Some(hi)) => format!("{lo}..={hi}"),
            (Some(lo), None) => format!(">= {lo}"),
            (None, Some(hi)) => format!("<= {hi}"),
            (None, None) => String::new(),
        };
        let step = self.step.map(|s| format!("step {s}"));
        match (range.is_empty(), step) {
            (true, None) => None,
            (true, Some(s)) => Some(s),
            (false, None) => Some(range),
            (false, Some(s)) => Some(format!("{range} {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulatorKind {
    Calculator,
    Demo,
    Validator,
    Comparison,
}

impl SimulatorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Calculator => "calculator",
            Self::Demo => "demo",
            Self::Validator => "validator",
            Self::Comparison => "comparison",
        }
    }
}

/// Declarative description of a module's interactive form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    #[serde(rename = "type")]
    pub kind: SimulatorKind,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub inputs: Vec<InputField>,
    /// Display-only formula shown before a calculation runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
}

impl SimulatorConfig {
    pub fn field(&self, name: &str) -> Option<&InputField> {
        self.inputs.iter().find(|f| f.name == name)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &InputField> {
        self.inputs.iter().filter(|f| f.required)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    pub title: String,
    /// Unit label, e.g. "Unit III".
    pub unit: String,
    pub description: String,
    #[serde(default)]
    pub theory: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulator: Option<SimulatorConfig>,
}

impl Module {
    pub fn has_simulator(&self) -> bool {
        self.simulator.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: String,
    pub title: String,
    /// Icon name used by graphical front ends.
    #[serde(default)]
    pub icon: String,
    pub description: String,
    #[serde(default)]
    pub modules: Vec<Module>,
}
