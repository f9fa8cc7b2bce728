mod cmd;
mod completions;
mod logging;
mod prompt;

use banksim_core::config::loader::{ConfigError, ConfigLoader};
use banksim_core::config::types::ResolvedConfig;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "bsim",
    version,
    about = "Banking and financial services course with interactive calculators"
)]
pub struct Cli {
    /// Path to config file (defaults to ~/.config/banksim/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and curriculum, and report calculator coverage
    Doctor,

    /// List curriculum modules
    List(ListArgs),

    /// Show a module's simulator form and theory
    Show(ShowArgs),

    /// Run a module's calculator
    Calc(CalcArgs),

    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Quiet,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only modules of this unit (e.g. "unit3")
    #[arg(long)]
    pub unit: Option<String>,

    /// Only modules that have a simulator
    #[arg(long)]
    pub simulators: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub output: OutputFormat,

    /// Shorthand for --output json
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,

    /// Shorthand for --output quiet (module ids only)
    #[arg(long)]
    pub quiet: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Module id (e.g. "rbi-functions")
    pub module: String,

    /// Include the theory text
    #[arg(long)]
    pub theory: bool,

    /// Print the module as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct CalcArgs {
    /// Module id (e.g. "discounting")
    pub module: String,

    /// Set an input value: --set name=value (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,

    /// Read input values from a JSON or YAML file
    #[arg(long, value_name = "FILE")]
    pub inputs: Option<PathBuf>,

    /// Never prompt; fail when a required input is missing
    #[arg(long)]
    pub batch: bool,

    /// Skip the pause before showing the result
    #[arg(long)]
    pub no_delay: bool,

    /// Treat this date as today (YYYY-MM-DD)
    #[arg(long, value_parser = parse_today)]
    pub today: Option<NaiveDate>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_today(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn main() {
    let cli = Cli::parse();

    let loaded = ConfigLoader::load(cli.config.as_deref());
    if let Ok(ref rc) = loaded {
        logging::init(rc);
    }

    match cli.command {
        Commands::Completions { shell } => completions::print(shell),
        Commands::Doctor => cmd::doctor::run(cli.config.as_deref(), loaded),
        Commands::List(args) => cmd::list::run(&require(loaded), args),
        Commands::Show(args) => cmd::show::run(&require(loaded), args),
        Commands::Calc(args) => cmd::calc::run(&require(loaded), args),
    }

    logging::flush();
}

fn require(loaded: Result<ResolvedConfig, ConfigError>) -> ResolvedConfig {
    loaded.unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}");
        std::process::exit(1);
    })
}
