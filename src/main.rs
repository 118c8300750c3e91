use anyhow::Result;
use clap::Parser;
use settings_search::cli::{self, Cli};
use settings_search::debug;

fn main() -> Result<()> {
    // Process CLI arguments first (before logging init for cleaner output)
    let cli = Cli::parse();
    let config = cli::load_config(&cli)?;

    let level = debug::resolve_level(cli.log_level, config.log_level);
    debug::init_log_bridge(level, cli.log_file.as_deref())?;
    log::info!("Starting settings-search");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = cli::execute(&cli, config, &mut out) {
        eprintln!("settings-search: error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
