use banksim_core::config::loader::{default_config_path, ConfigError};
use banksim_core::config::types::ResolvedConfig;
use banksim_core::engine::CalculatorKind;
use std::path::Path;

pub fn run(cfg_path: Option<&Path>, loaded: Result<ResolvedConfig, ConfigError>) {
    let rc = match loaded {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL bsim doctor");
            println!("{e}");
            if cfg_path.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            super::exit(1);
        }
    };

    let catalog = match rc.catalog() {
        Ok(c) => c,
        Err(e) => {
            println!("FAIL bsim doctor");
            println!("{e}");
            super::exit(1);
        }
    };

    println!("OK   bsim doctor");
    println!("{}", banksim_core::build_summary());
    println!("config: {}", rc.source);
    println!(
        "curriculum: {}",
        rc.curriculum_path
            .as_ref()
            .map_or_else(|| "<builtin>".to_string(), |p| p.display().to_string())
    );
    println!("engine.delay_ms: {}", rc.engine.delay_ms);
    println!("logging.level: {}", rc.logging.level);
    if let Some(ref file) = rc.logging.file {
        println!("logging.file: {}", file.display());
    }

    println!("units: {}", catalog.units().len());
    println!("modules: {}", catalog.modules().count());
    println!("simulators: {}", catalog.simulators().count());

    let backed = CalculatorKind::ALL
        .iter()
        .filter(|k| catalog.module(k.module_id()).is_some())
        .count();
    println!("calculators: {backed}/{}", CalculatorKind::ALL.len());

    for module in catalog.uncovered_simulators() {
        println!("WARN simulator without calculator: {}", module.id);
    }
    for kind in CalculatorKind::ALL {
        if catalog.module(kind.module_id()).is_none() {
            println!("WARN calculator without module: {}", kind.module_id());
        }
    }
}
