use std::process::ExitCode;

use clap::Parser;
use log::info;
use radarscope_app::cli::Cli;
use radarscope_app::logging::setup_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.logging_level);
    info!("Main: Application started.");

    match radarscope_app::run(cli) {
        Ok(()) => {
            info!("Main: Program finished.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
