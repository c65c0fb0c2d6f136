//! # Pagenav
//!
//! Host-side rendering of pagination controls for statically generated sites.
//! The link sequence itself comes from the [`pager`] crate; this library turns
//! it into HTML, JSON, plain text, HTTP `Link` headers or a terminal widget,
//! and wires it to configuration and logging for the `pagenav` binary.
//!
//! ## Modules
//!
//! - [`app`] - Command execution
//! - [`cli`] - Command line definition
//! - [`components`] - tui-realm components
//! - [`config`] - Layered configuration loading and validation
//! - [`error`] - Error types
//! - [`logger`] - Logging setup
//! - [`render`] - Output renderers

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod error;
pub mod logger;
pub mod render;

pub use error::{AppError, AppResult};
pub use render::OutputFormat;
