#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

//! Calculation engine and curriculum registry for the banking and
//! financial services course.

pub mod config;
pub mod curriculum;
pub mod engine;
pub mod inputs;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// One-line build summary printed by `bsim doctor`.
pub fn build_summary() -> String {
    format!("banksim-core v{} on {}", version(), std::env::consts::OS)
}
