//! Stratus CLI - shell access and service lifecycle for Cloud Foundry style platforms

use std::process::ExitCode;

use clap::Parser;
use stratus_cli::cli::Cli;
use stratus_cli::domain::error::error_code;
use stratus_cli::logging;
use stratus_cli::output::json::format_error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let json = cli.json;

    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            match json.then(|| format_error(&format!("{e:#}"), error_code(&e))) {
                Some(Ok(out)) => println!("{out}"),
                _ => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
