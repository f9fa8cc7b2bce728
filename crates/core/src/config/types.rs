use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub version: u32,
    /// Optional replacement for the builtin curriculum.
    #[serde(default)]
    pub curriculum: Option<String>,
    #[serde(default)]
    pub engine: EngineSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    /// Pause before a calculation is shown, in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self { delay_ms: default_delay_ms() }
    }
}

fn default_delay_ms() -> u64 {
    500
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Where the settings in a [`ResolvedConfig`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(p) => write!(f, "{}", p.display()),
            Self::Defaults => f.write_str("<defaults>"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub source: ConfigSource,
    /// Expanded curriculum path, `None` for the builtin curriculum.
    pub curriculum_path: Option<PathBuf>,
    pub engine: EngineSettings,
    pub logging: LoggingConfig,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            source: ConfigSource::Defaults,
            curriculum_path: None,
            engine: EngineSettings::default(),
            logging: LoggingConfig::default(),
        }
    }
}
