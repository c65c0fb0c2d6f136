use crate::cli::{Cli, Command, ConfigCommand};
use crate::config::{self, AppConfig, ConfigSources, setup};
use crate::error::{AppError, AppResult};
use crate::render::{self, RenderOptions};
use std::io::Write;

/// Resolve configuration sources from the command line and load them.
pub fn load_config(cli: &Cli) -> AppResult<AppConfig> {
    let sources = match &cli.config {
        Some(path) => ConfigSources::default().with_file(path),
        None => ConfigSources::default(),
    };
    config::load_config(&sources).into_result()
}

/// Render `current` of `total` pages with the given configuration.
pub fn render_page(config: &AppConfig, current: u32, total: u32) -> AppResult<String> {
    let links = config.pagination_view().render(current, total)?;
    let options = RenderOptions {
        with_style: config.output().with_style(),
        width: config.output().width(),
    };
    render::render(&links, config.output().format(), &options)
}

/// Execute a parsed command, writing results to `out`.
pub fn run(cli: &Cli, mut config: AppConfig, out: &mut impl Write) -> AppResult<()> {
    match &cli.command {
        Command::Render(args) => {
            args.apply_to(&mut config);
            config.validate()?;

            let rendered = render_page(&config, args.current, args.total)?;
            log::info!(
                "Rendered page {}/{} as {}",
                args.current,
                args.total,
                config.output().format()
            );
            writeln!(out, "{rendered}")?;
        }
        Command::Config(ConfigCommand::Show) => {
            let encoded = toml::to_string_pretty(&config)?;
            write!(out, "{encoded}")?;
        }
        Command::Config(ConfigCommand::Init { force }) => {
            let path = match &cli.config {
                Some(path) => setup::write_default_config(path, *force)?,
                None => setup::initialize_config_file(*force)?,
            };
            writeln!(out, "Wrote default configuration to {}", path.display())?;
        }
    }
    Ok(())
}

/// Report a failed command to the user exactly once.
///
/// The user-facing explanation goes to `err_out`; the raw error is only
/// logged at `debug` so a logger writing to stderr does not repeat it.
pub fn report_error(err: &AppError, err_out: &mut impl Write) {
    log::debug!("Command failed: {err:?}");
    let _ = writeln!(err_out, "{}", err.user_message());
}
