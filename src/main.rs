use clap::Parser;
use nmprune::cli::{Cli, load_options, run_cli};
use nmprune::output::OutputFormatter;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let options = match load_options(&cli) {
        Ok(options) => options,
        Err(e) => {
            OutputFormatter::error(&e.to_string());
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(options.log_filter()),
    )
    .init();

    match run_cli(&options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            OutputFormatter::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
