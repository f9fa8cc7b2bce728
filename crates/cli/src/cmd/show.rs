use banksim_core::config::types::ResolvedConfig;
use banksim_core::engine::CalculatorKind;

use super::output::{print_fields_table, print_module_header};
use crate::ShowArgs;

pub fn run(rc: &ResolvedConfig, args: ShowArgs) {
    let catalog = super::load_catalog(rc);
    let module = super::find_module(&catalog, &args.module);

    if args.json {
        println!("{}", serde_json::to_string_pretty(module).unwrap_or_default());
        return;
    }

    print_module_header(&catalog, module);

    match module.simulator {
        Some(ref sim) => {
            println!();
            println!("Simulator: {} ({})", sim.title, sim.kind.as_str());
            println!("{}", sim.description);
            if let Some(ref formula) = sim.formula {
                println!("Formula: {formula}");
            }
            print_fields_table(&sim.inputs);
            if CalculatorKind::from_module_id(&module.id).is_some() {
                println!("Run it with: bsim calc {}", module.id);
            }
        }
        None => {
            println!();
            println!("(no simulator for this module)");
        }
    }

    if args.theory {
        println!();
        println!("{}", module.theory.trim_end());
    }
}
