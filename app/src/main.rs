//! panel-bitmap binary.
//!
//! Converts one PNG/JPEG image into a 1-bit BMP that fits the panel and
//! prints the output path. Any failure prints a single `Error:` line and
//! exits with status 1.

use std::process::ExitCode;

use clap::Parser;

use panel_bitmap::cli::Cli;

fn main() -> ExitCode {
    let dotenv = panel_bitmap::load_dotenv();
    panel_bitmap::init_tracing();
    match dotenv {
        Some(path) => tracing::debug!("Loaded .env from: {}", path.display()),
        None => tracing::debug!("No .env file found, using system environment variables"),
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help / --version
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(1);
        }
    };

    let result = panel_bitmap::run(&cli);
    match &result {
        Ok(path) => println!("Image successfully converted and saved to: {}", path.display()),
        Err(e) => {
            tracing::debug!("Conversion failed: {e:?}");
            eprintln!("Error: {e}");
        }
    }
    ExitCode::from(panel_bitmap::exit_status(&result))
}
