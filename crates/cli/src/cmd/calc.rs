//! Calc command: collect inputs, check the form, run the engine.

use banksim_core::config::types::ResolvedConfig;
use banksim_core::curriculum::check_form;
use banksim_core::engine::{compute_result_with, CalcContext};
use banksim_core::inputs::{InputError, Inputs};
use std::path::Path;
use std::time::Duration;
use std::{fs, thread};
use tracing::debug;

use super::output::{print_result, print_result_json};
use crate::prompt::{collect_inputs, PromptOptions};
use crate::CalcArgs;

pub fn run(rc: &ResolvedConfig, args: CalcArgs) {
    let catalog = super::load_catalog(rc);
    let module = super::find_module(&catalog, &args.module);

    let mut inputs = match args.inputs {
        Some(ref path) => read_inputs_file(path).unwrap_or_else(|e| {
            eprintln!("Error reading {}: {e}", path.display());
            super::exit(1);
        }),
        None => Inputs::new(),
    };
    match Inputs::from_assignments(&args.set) {
        Ok(set) => inputs.extend(set),
        Err(e) => {
            eprintln!("Error: {e}");
            super::exit(2);
        }
    }

    if let Some(ref sim) = module.simulator {
        let options = PromptOptions { batch_mode: args.batch };
        inputs = match collect_inputs(sim, inputs, &options) {
            Ok(collected) => {
                debug!(prompted = ?collected.prompted, "collected inputs");
                collected.values
            }
            Err(e) => {
                eprintln!("Error: {e}");
                super::exit(1);
            }
        };

        let report = check_form(sim, &inputs);
        for warning in &report.warnings {
            eprintln!("Warning: {warning}");
        }
        if !report.is_ready() {
            for e in &report.errors {
                eprintln!("Error: {e}");
            }
            super::exit(1);
        }
    }

    if !args.no_delay && rc.engine.delay_ms > 0 {
        if !args.json {
            eprintln!("Calculating...");
        }
        thread::sleep(Duration::from_millis(rc.engine.delay_ms));
    }

    let ctx = args.today.map_or_else(CalcContext::now, CalcContext::on);
    let result = match compute_result_with(&module.id, &inputs, &ctx) {
        Ok(r) => r,
        Err(e) => {
            debug!(module = %module.id, error = %e, "calculation failed");
            eprintln!("Error: {e}");
            super::exit(1);
        }
    };

    if args.json {
        print_result_json(&result);
    } else {
        println!("{}", module.title);
        println!();
        print_result(&result);
    }
}

/// Read inputs from a `.json`, `.yaml` or `.yml` file.
fn read_inputs_file(path: &Path) -> Result<Inputs, InputError> {
    let s = fs::read_to_string(path).map_err(|e| InputError::Document(e.to_string()))?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Inputs::from_json_str(&s),
        Some("yaml" | "yml") => Inputs::from_yaml_str(&s),
        _ => Err(InputError::Document("expected a .json, .yaml or .yml file".into())),
    }
}
