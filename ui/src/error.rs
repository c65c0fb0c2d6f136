use crate::config::ConfigValidationError;
use pager::PaginationError;
use std::fmt::Display;

/// Application-wide error types for the pagenav command line tool.
///
/// Each variant carries a message that is already formatted for the user, so
/// errors can cross module boundaries without dragging their source types
/// along.
///
/// # Error Categories
///
/// - [`Pagination`] - The page request itself was rejected
/// - [`Config`] - Configuration loading and validation errors
/// - [`Render`] - A host renderer failed to produce output
/// - [`Io`] - File system failures while writing config or logs
/// - [`Serialization`] - JSON/TOML encoding failures
///
/// [`Pagination`]: AppError::Pagination
/// [`Config`]: AppError::Config
/// [`Render`]: AppError::Render
/// [`Io`]: AppError::Io
/// [`Serialization`]: AppError::Serialization
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Out-of-range or empty page request.
    Pagination(PaginationError),

    /// Configuration could not be loaded, parsed or validated.
    Config(String),

    /// A renderer (template, terminal buffer) failed.
    Render(String),

    Io(String),

    Serialization(String),
}

impl AppError {
    /// Message shown to the user on the command line.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Pagination(err) => err.user_message(),
            AppError::Config(msg) => format!(
                "Configuration problem:\n\n{msg}\n\nCheck config.toml and PAGENAV__* environment variables."
            ),
            other => other.to_string(),
        }
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Pagination(err) => write!(f, "Pagination Error: {err}"),
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Render(msg) => write!(f, "Render Error: {msg}"),
            AppError::Io(msg) => write!(f, "IO Error: {msg}"),
            AppError::Serialization(msg) => write!(f, "Serialization Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<PaginationError> for AppError {
    fn from(err: PaginationError) -> Self {
        AppError::Pagination(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(err: toml::ser::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::Render(err.to_string())
    }
}

impl From<Vec<ConfigValidationError>> for AppError {
    fn from(errors: Vec<ConfigValidationError>) -> Self {
        let messages: Vec<String> = errors.iter().map(|e| e.user_message()).collect();
        AppError::Config(messages.join("\n\n"))
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
