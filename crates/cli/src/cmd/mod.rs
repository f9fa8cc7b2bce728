pub mod calc;
pub mod doctor;
pub mod list;
pub mod output;
pub mod show;

use banksim_core::config::types::ResolvedConfig;
use banksim_core::curriculum::{Catalog, Module};

use crate::logging;

/// Exit after flushing the log file.
pub fn exit(code: i32) -> ! {
    logging::flush();
    std::process::exit(code)
}

/// Load the configured curriculum or exit.
pub fn load_catalog(rc: &ResolvedConfig) -> Catalog {
    rc.catalog().unwrap_or_else(|e| {
        eprintln!("Failed to load curriculum: {e}");
        exit(1);
    })
}

/// Look up a module or exit with a hint.
pub fn find_module<'a>(catalog: &'a Catalog, id: &str) -> &'a Module {
    catalog.module(id).unwrap_or_else(|| {
        eprintln!("Unknown module: {id}");
        eprintln!("Hint: run 'bsim list' to see module ids.");
        exit(1);
    })
}
