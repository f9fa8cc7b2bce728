//! List command implementation.

use banksim_core::config::types::ResolvedConfig;
use banksim_core::curriculum::Module;

use super::output::{print_modules_json, print_modules_quiet, print_modules_table};
use crate::{ListArgs, OutputFormat};

pub fn run(rc: &ResolvedConfig, args: ListArgs) {
    let catalog = super::load_catalog(rc);

    let modules: Vec<&Module> = match args.unit {
        Some(ref id) => match catalog.unit(id) {
            Some(unit) => unit.modules.iter().collect(),
            None => {
                let ids: Vec<_> = catalog.units().iter().map(|u| u.id.as_str()).collect();
                eprintln!("Unknown unit: {id}");
                eprintln!("Available units: {}", ids.join(", "));
                super::exit(1);
            }
        },
        None => catalog.modules().collect(),
    };
    let modules: Vec<&Module> =
        modules.into_iter().filter(|m| !args.simulators || m.has_simulator()).collect();

    match resolve_format(args.output, args.json, args.quiet) {
        OutputFormat::Table => print_modules_table(&modules),
        OutputFormat::Json => print_modules_json(&modules),
        OutputFormat::Quiet => print_modules_quiet(&modules),
    }
}

/// Resolve the output format from flags.
fn resolve_format(output: OutputFormat, json: bool, quiet: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else if quiet {
        OutputFormat::Quiet
    } else {
        output
    }
}
