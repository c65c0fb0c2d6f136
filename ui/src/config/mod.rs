use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub mod app;
pub mod defaults;
pub mod limits;
pub mod setup;
pub mod validation;

pub use app::{AppConfig, BoundsConfig, LabelsConfig, OutputConfig, RoutingConfig};
pub use validation::{ConfigLoadResult, ConfigValidationError};

/// Prefix of environment variables that override configuration values,
/// e.g. `PAGENAV__ROUTING__BASE_PATH=/blog/`.
pub const ENV_PREFIX: &str = "PAGENAV";

/// Which layers take part in configuration loading.
///
/// Layers are applied in order, later ones overriding earlier ones:
/// embedded defaults, the user config file, `./config.toml` (or the explicit
/// file), then the environment.
#[derive(Debug, Clone)]
pub struct ConfigSources {
    explicit_file: Option<PathBuf>,
    user_config: bool,
    local_config: bool,
    env_overrides: Option<HashMap<String, String>>,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            explicit_file: None,
            user_config: true,
            local_config: true,
            env_overrides: None,
        }
    }
}

impl ConfigSources {
    /// Embedded defaults only. Useful for tests and reproducible output.
    pub fn isolated() -> Self {
        Self {
            explicit_file: None,
            user_config: false,
            local_config: false,
            env_overrides: Some(HashMap::new()),
        }
    }

    /// Load `path` instead of `./config.toml`. The file must exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.explicit_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Replace the process environment with a fixed set of variables.
    pub fn with_env(mut self, vars: HashMap<String, String>) -> Self {
        self.env_overrides = Some(vars);
        self
    }
}

/// Load and validate configuration from the given sources
pub fn load_config(sources: &ConfigSources) -> ConfigLoadResult {
    let mut builder =
        Config::builder().add_source(File::from_str(defaults::DEFAULT_CONFIG, FileFormat::Toml));

    if sources.user_config {
        match setup::get_config_file_path() {
            Ok(path) => builder = builder.add_source(File::from(path).required(false)),
            Err(e) => log::debug!("Skipping user configuration: {e}"),
        }
    }

    if let Some(path) = &sources.explicit_file {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    } else if sources.local_config {
        builder = builder.add_source(File::with_name("config.toml").required(false));
    }

    let env_source = match &sources.env_overrides {
        Some(vars) => Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .source(Some(vars.clone())),
        None => {
            dotenv::dotenv().ok();
            Environment::with_prefix(ENV_PREFIX).separator("__")
        }
    };

    let config = match builder.add_source(env_source).build() {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your config.toml file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => {
            if let Err(errors) = app_config.validate() {
                log::error!("Configuration validation failed with {} error(s)", errors.len());
                return ConfigLoadResult::ValidationError(errors);
            }
            log::debug!("Configuration loaded");
            ConfigLoadResult::Success(Box::new(app_config))
        }
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct LoggingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("warn")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref().filter(|file| !file.is_empty())
    }
}
