use anyhow::Result;

use sysmetrics::cli::build_cli;
use sysmetrics::commands;
use sysmetrics::core::config::Config;

fn main() -> Result<()> {
    sysmetrics::init_logging();

    let matches = build_cli().get_matches();
    let config = Config::from_matches(&matches)?;

    commands::report(&config)
}
