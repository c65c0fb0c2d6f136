use clap::Parser;
use pagenav::cli::Cli;
use pagenav::{app, logger};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match app::load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            app::report_error(&e, &mut std::io::stderr().lock());
            std::process::exit(2);
        }
    };

    logger::setup_logger(config.logging())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = app::run(&cli, config, &mut out) {
        app::report_error(&e, &mut std::io::stderr().lock());
        std::process::exit(1);
    }
    Ok(())
}
