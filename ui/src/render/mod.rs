//! # Host Renderers
//!
//! Turn the framework-neutral [`LinkDescriptor`] sequence produced by
//! [`pager::PaginationView`] into concrete output. The renderers never
//! reorder or filter links: prev, numbered and next appear exactly as the
//! view emitted them.
//!
//! - [`html`] - `<nav>` markup for static site templates
//! - [`link_header`] - HTTP `Link` header value for prev/next
//! - [`text`] - single line of plain text
//! - JSON through `serde_json`
//! - terminal output through [`crate::components::PaginationBar`]

use crate::components::PaginationBar;
use crate::error::AppResult;
use pager::LinkDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod html;
pub mod link_header;
pub mod text;

/// Supported output formats
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
    Text,
    LinkHeader,
    Terminal,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
            OutputFormat::LinkHeader => "link-header",
            OutputFormat::Terminal => "terminal",
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation options shared by the renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Embed the default stylesheet in HTML output
    pub with_style: bool,
    /// Buffer width for terminal output
    pub width: u16,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            with_style: false,
            width: 80,
        }
    }
}

/// Render `links` in the requested format.
pub fn render(
    links: &[LinkDescriptor],
    format: OutputFormat,
    options: &RenderOptions,
) -> AppResult<String> {
    log::debug!("Rendering {} links as {format}", links.len());
    match format {
        OutputFormat::Html => html::render(
            links,
            &html::HtmlOptions {
                with_style: options.with_style,
            },
        ),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(links)?),
        OutputFormat::Text => Ok(text::render(links)),
        OutputFormat::LinkHeader => Ok(link_header::render(links).unwrap_or_default()),
        OutputFormat::Terminal => PaginationBar::new(links.to_vec()).render_to_string(options.width),
    }
}
