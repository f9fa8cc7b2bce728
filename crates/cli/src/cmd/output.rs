//! Shared output formatting.

use banksim_core::curriculum::{Catalog, InputField, Module};
use banksim_core::engine::{CalculatorKind, SimulatorResult};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

/// Module summary for JSON output.
#[derive(Debug, Serialize)]
pub struct ModuleOutput {
    pub id: String,
    pub unit: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulator: Option<String>,
    pub calculator: bool,
}

impl From<&Module> for ModuleOutput {
    fn from(m: &Module) -> Self {
        Self {
            id: m.id.clone(),
            unit: m.unit.clone(),
            title: m.title.clone(),
            simulator: m.simulator.as_ref().map(|s| s.kind.as_str().to_string()),
            calculator: CalculatorKind::from_module_id(&m.id).is_some(),
        }
    }
}

#[derive(Tabled)]
struct ModuleRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Unit")]
    unit: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Simulator")]
    simulator: String,
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Required")]
    required: String,
    #[tabled(rename = "Accepts")]
    accepts: String,
}

impl From<&InputField> for FieldRow {
    fn from(f: &InputField) -> Self {
        let accepts = match &f.options {
            Some(opts) => opts.join(" | "),
            None => f.bounds_hint().unwrap_or_default(),
        };
        Self {
            name: f.name.clone(),
            label: f.label.clone(),
            kind: f.kind.to_string(),
            required: if f.required { "yes" } else { "no" }.to_string(),
            accepts,
        }
    }
}

pub fn print_modules_table(modules: &[&Module]) {
    if modules.is_empty() {
        println!("(no modules found)");
        return;
    }

    let rows: Vec<ModuleRow> = modules
        .iter()
        .map(|m| ModuleRow {
            id: m.id.clone(),
            unit: m.unit.clone(),
            title: m.title.clone(),
            simulator: m
                .simulator
                .as_ref()
                .map(|s| s.title.clone())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    println!("{}", Table::new(&rows).with(Style::rounded()));
    println!("\nTotal: {} modules", rows.len());
}

pub fn print_modules_json(modules: &[&Module]) {
    let output: Vec<ModuleOutput> = modules.iter().copied().map(ModuleOutput::from).collect();
    println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
}

pub fn print_modules_quiet(modules: &[&Module]) {
    for m in modules {
        println!("{}", m.id);
    }
}

pub fn print_fields_table(fields: &[InputField]) {
    let rows: Vec<FieldRow> = fields.iter().map(FieldRow::from).collect();
    println!("{}", Table::new(&rows).with(Style::rounded()));
}

/// Print a module header: title, unit and description.
pub fn print_module_header(catalog: &Catalog, module: &Module) {
    println!("{}", module.title);
    match catalog.unit_of(&module.id) {
        Some(unit) => println!("{}", unit.title),
        None => println!("{}", module.unit),
    }
    println!("{}", module.description);
}

pub fn print_result(result: &SimulatorResult) {
    println!("Result: {}", result.result);
    println!("Formula: {}", result.formula);
    println!();
    for (i, step) in result.steps.iter().enumerate() {
        println!("{:>2}. {step}", i + 1);
    }
}

pub fn print_result_json(result: &SimulatorResult) {
    println!("{}", serde_json::to_string_pretty(result).unwrap_or_default());
}
