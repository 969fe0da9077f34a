//! Engine configuration loading for the CLI.

use std::path::{Path, PathBuf};

use rasterlab_core::{EngineConfig, EngineError};

/// Environment variable naming a JSON engine config file.
pub const CONFIG_ENV: &str = "RASTERLAB_CONFIG";

/// Errors that can occur while loading the engine config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(#[from] EngineError),
}

/// Resolve the config file: an explicit path wins over `RASTERLAB_CONFIG`.
pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
}

/// Load the engine config, falling back to defaults when no file is given.
pub fn load_config(explicit: Option<&Path>) -> Result<EngineConfig, ConfigError> {
    let Some(path) = config_path(explicit) else {
        return Ok(EngineConfig::default());
    };
    let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    let config = parse_config(&text, &path)?;
    tracing::info!("loaded engine config from {}", path.display());
    Ok(config)
}

/// Parse and validate a JSON config document read from `path`.
pub fn parse_config(text: &str, path: &Path) -> Result<EngineConfig, ConfigError> {
    let config: EngineConfig =
        serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    config.validate()?;
    Ok(config)
}
