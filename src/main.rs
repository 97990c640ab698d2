use clap::Parser;
use selector_gen::cli::commands::{SUCCESS_MESSAGE, cmd_generate};
use selector_gen::cli::config::{Cli, load_config, resolve_settings};
use selector_gen::cli::logging::init_logger;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    // Resolve settings: CLI > config > defaults
    let config = load_config(cli.config.as_deref());
    let settings = resolve_settings(&cli, &config);

    let report = cmd_generate(&settings)?;
    for path in &report.written {
        log::info!("  Wrote: {}", path.display());
    }

    println!("{}", SUCCESS_MESSAGE);
    Ok(())
}
