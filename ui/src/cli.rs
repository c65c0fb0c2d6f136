use crate::config::AppConfig;
use crate::render::OutputFormat;
use clap::{Args, Parser, Subcommand};
use pager::BoundsPolicy;
use std::path::PathBuf;

/// Render pagination controls for a statically generated site
#[derive(Debug, Parser)]
#[command(name = "pagenav", version, about)]
pub struct Cli {
    /// Configuration file to load instead of ./config.toml
    #[arg(long, short = 'c', global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the links for one page of a listing
    Render(RenderArgs),
    /// Inspect or create configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Page currently being viewed (1-based)
    pub current: u32,

    /// Total number of pages
    pub total: u32,

    #[arg(long, short = 'f')]
    pub format: Option<OutputFormat>,

    /// Path of the first listing page, e.g. /blog/
    #[arg(long)]
    pub base_path: Option<String>,

    /// Extra path segment for numbered pages, e.g. "page" for /blog/page/2
    #[arg(long)]
    pub page_segment: Option<String>,

    /// Snap out-of-range pages into range instead of failing
    #[arg(long)]
    pub clamp: bool,

    /// Embed the default stylesheet in HTML output
    #[arg(long)]
    pub with_style: bool,

    /// Width of the terminal output
    #[arg(long)]
    pub width: Option<u16>,
}

impl RenderArgs {
    /// Apply command line flags on top of the loaded configuration.
    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(format) = self.format {
            config.output_mut().set_format(format);
        }
        if let Some(base_path) = &self.base_path {
            config.routing_mut().set_base_path(base_path.clone());
        }
        if let Some(segment) = &self.page_segment {
            config.routing_mut().set_page_segment(segment.clone());
        }
        if self.clamp {
            config.bounds_mut().set_policy(BoundsPolicy::Clamp);
        }
        if self.with_style {
            config.output_mut().set_with_style(true);
        }
        if let Some(width) = self.width {
            config.output_mut().set_width(width);
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,
    /// Write the default configuration to ~/.config/pagenav/config.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
