use super::app::AppConfig;
use super::limits::LOG_LEVELS;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid routing.base_path: {configured:?} (must start with '/')")]
    BasePath { configured: String },
    #[error("Invalid labels.{which}: label must not be empty")]
    EmptyLabel { which: &'static str },
    #[error("Invalid output.width: {configured} (min: {min_limit}, max: {max_limit})")]
    TerminalWidth {
        configured: u16,
        min_limit: u16,
        max_limit: u16,
    },
    #[error("Invalid logging.level: {configured:?}")]
    LogLevel { configured: String },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::BasePath { configured } => {
                format!(
                    "Base path is not absolute!\n\n\
                    Your configured value: {configured:?}\n\n\
                    Please update routing.base_path in config.toml to a path starting with '/', e.g. \"/blog/\"."
                )
            }
            ConfigValidationError::EmptyLabel { which } => {
                format!(
                    "Link label is empty!\n\n\
                    Please set labels.{which} in config.toml to the text shown on the {which} page link."
                )
            }
            ConfigValidationError::TerminalWidth {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Terminal width out of range!\n\n\
                    Your configured value: {configured}\n\
                    Valid range: {min_limit} - {max_limit}\n\n\
                    Please update output.width in config.toml to a value between {min_limit} and {max_limit}."
                )
            }
            ConfigValidationError::LogLevel { configured } => {
                format!(
                    "Unknown log level!\n\n\
                    Your configured value: {configured:?}\n\
                    Valid levels: {}\n\n\
                    Please update logging.level in config.toml.",
                    LOG_LEVELS.join(", ")
                )
            }
        }
    }
}

/// Configuration loading result
#[derive(Debug)]
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
    ValidationError(Vec<ConfigValidationError>),
}

impl ConfigLoadResult {
    pub fn into_result(self) -> crate::error::AppResult<AppConfig> {
        match self {
            ConfigLoadResult::Success(config) => Ok(*config),
            ConfigLoadResult::LoadError(msg) | ConfigLoadResult::DeserializeError(msg) => {
                Err(crate::error::AppError::Config(msg))
            }
            ConfigLoadResult::ValidationError(errors) => Err(errors.into()),
        }
    }
}
