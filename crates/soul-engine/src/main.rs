//! Headless runner for the soul garden.
//!
//! Stands in for the presentation layer: it builds one session, optionally
//! replays a deed script into it, and prints the resulting garden snapshot
//! as JSON on stdout. Logs go to stderr.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `SOUL_CONFIG` or `soul-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Build the session (stock deed catalog, empty garden)
//! 4. Replay the deed script named by `SOUL_SCRIPT`, if any
//! 5. Print the garden snapshot

mod error;
mod script;

use std::path::{Path, PathBuf};

use tracing::info;
use tracing_subscriber::EnvFilter;

use soul_core::{SoulConfig, SoulSession};
use soul_types::Stage;

use crate::error::EngineError;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "soul-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, script replay, or output fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config_path = std::env::var("SOUL_CONFIG")
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let (config, from_file) = load_config(&config_path)?;

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!("soul-engine starting");
    info!(
        path = %config_path.display(),
        from_file,
        seed = ?config.garden.seed,
        "Configuration loaded"
    );

    // 3. Build the session.
    let session = SoulSession::new(&config);
    info!(
        good_deeds = session.good_deeds()?.len(),
        bad_deeds = session.bad_deeds()?.len(),
        "Session ready"
    );

    // 4. Replay the deed script.
    if let Ok(script_path) = std::env::var("SOUL_SCRIPT") {
        let entries = script::load(Path::new(&script_path))?;
        info!(path = %script_path, entries = entries.len(), "Replaying deed script");
        script::replay(&session, &entries)?;
    }

    // 5. Print the garden.
    let garden = session.garden()?;
    info!(
        items = garden.items.len(),
        alive = garden.alive_items().count(),
        seeds = garden.count_at_stage(Stage::Seed),
        trees = garden.count_at_stage(Stage::Tree),
        fruit = garden.count_at_stage(Stage::Fruit),
        birds = garden.count_at_stage(Stage::Bird),
        good_deed_count = garden.good_deed_count,
        bad_deed_count = garden.bad_deed_count,
        total_points = garden.total_points,
        "Garden summary"
    );
    println!("{}", serde_json::to_string_pretty(&garden).map_err(EngineError::from)?);

    Ok(())
}

/// Load configuration from `path`, falling back to defaults when the file
/// does not exist. Returns whether the file was read.
fn load_config(path: &Path) -> Result<(SoulConfig, bool), EngineError> {
    if path.exists() {
        Ok((SoulConfig::from_file(path)?, true))
    } else {
        let mut config = SoulConfig::default();
        config.apply_env_overrides()?;
        Ok((config, false))
    }
}
