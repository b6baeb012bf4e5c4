use clap::Parser;
use clean_folder::cli::{Cli, run_cli};
use clean_folder::output::OutputFormatter;
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run_cli(cli.path.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            OutputFormatter::error(&format!("Error: {}", e));
            ExitCode::FAILURE
        }
    }
}
