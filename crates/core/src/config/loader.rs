use crate::config::types::{ConfigFile, ConfigSource, LoggingConfig, ResolvedConfig};
use crate::curriculum::{Catalog, CatalogError};
use shellexpand::full;
use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("home directory not available to expand '~'")]
    NoHome,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings.
    ///
    /// An explicit `config_path` must exist. Without one the default
    /// location is tried and built-in defaults apply when it is absent.
    pub fn load(config_path: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
        let path = match config_path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.display().to_string()));
                }
                p.to_path_buf()
            }
            None => {
                let p = default_config_path();
                if !p.exists() {
                    tracing::debug!(path = %p.display(), "no config file, using defaults");
                    return Ok(ResolvedConfig::default());
                }
                p
            }
        };

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }

        Self::resolve(path, cf)
    }

    fn resolve(path: PathBuf, cf: ConfigFile) -> Result<ResolvedConfig, ConfigError> {
        let curriculum_path = cf.curriculum.as_deref().map(expand_path).transpose()?;

        let logging = match cf.logging.file {
            Some(ref file) => LoggingConfig {
                file: Some(expand_path(&file.to_string_lossy())?),
                ..cf.logging.clone()
            },
            None => cf.logging,
        };

        Ok(ResolvedConfig {
            source: ConfigSource::File(path),
            curriculum_path,
            engine: cf.engine,
            logging,
        })
    }
}

impl ResolvedConfig {
    /// The configured curriculum, or the builtin one.
    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.curriculum_path {
            Some(p) => Catalog::from_path(p),
            None => Catalog::builtin(),
        }
    }
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("banksim").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("banksim").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}
