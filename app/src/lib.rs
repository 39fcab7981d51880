//! panel-bitmap: command-line front end for `bitmap-engine`.

pub mod cli;
pub mod config;

use std::path::{Path, PathBuf};

use bitmap_engine::Converter;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::AppConfig;

/// Initialise tracing on stderr. `RUST_LOG` overrides the default `warn` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load .env from the first candidate path that exists.
///
/// Call before [`init_tracing`] so a `RUST_LOG` set in `.env` takes effect.
pub fn load_dotenv() -> Option<PathBuf> {
    load_dotenv_from(&[Path::new(".env"), Path::new("../.env")])
}

fn load_dotenv_from(candidates: &[&Path]) -> Option<PathBuf> {
    candidates
        .iter()
        .find(|path| dotenvy::from_path(path).is_ok())
        .map(|path| path.to_path_buf())
}

/// Run one conversion. Returns the path of the written bitmap.
pub fn run(cli: &Cli) -> anyhow::Result<PathBuf> {
    let config = AppConfig::from_env()?.with_overrides(cli);
    run_with_config(cli, &config)
}

/// Run one conversion with an already resolved configuration.
pub fn run_with_config(cli: &Cli, config: &AppConfig) -> anyhow::Result<PathBuf> {
    tracing::debug!(?config, input = %cli.input_image.display(), "Starting conversion");

    let converter = Converter::new(config.bounds()?).with_threshold(config.threshold);
    let written = converter.convert_file(&cli.input_image, cli.output.as_deref())?;
    Ok(written)
}

/// Process exit status for a run result: 0 on success, 1 on any error.
pub fn exit_status<T>(result: &anyhow::Result<T>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}
