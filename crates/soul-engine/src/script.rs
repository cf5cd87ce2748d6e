//! Deed scripts: a YAML list of deeds replayed into a session.
//!
//! Each entry is either a stock catalog deed, picked by its position in the
//! catalog, or a user-entered deed with a title and description:
//!
//! ```yaml
//! - kind: good
//!   catalog_index: 0
//! - kind: bad
//!   title: "Lost my temper"
//!   description: "Shouted in traffic"
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use soul_core::SoulSession;

use crate::error::EngineError;

/// Whether a script entry is a good or a bad deed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeedKind {
    /// Plants a seed and runs the upgrade pass.
    Good,
    /// Runs the downgrade pass.
    Bad,
}

/// One line of a deed script.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScriptEntry {
    /// Good or bad.
    pub kind: DeedKind,
    /// Position of a stock deed in the catalog list for `kind`.
    #[serde(default)]
    pub catalog_index: Option<usize>,
    /// Title of a user-entered deed.
    #[serde(default)]
    pub title: Option<String>,
    /// Description of a user-entered deed.
    #[serde(default)]
    pub description: Option<String>,
}

/// Counts of what a replay recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Good deeds recorded.
    pub good: u64,
    /// Bad deeds recorded.
    pub bad: u64,
}

/// Read and parse a script file.
pub fn load(path: &Path) -> Result<Vec<ScriptEntry>, EngineError> {
    let contents = std::fs::read_to_string(path).map_err(|e| EngineError::Script {
        message: format!("failed to read {}: {e}", path.display()),
    })?;
    parse(&contents)
}

/// Parse a script from YAML.
pub fn parse(yaml: &str) -> Result<Vec<ScriptEntry>, EngineError> {
    serde_yml::from_str(yaml).map_err(|e| EngineError::Script {
        message: format!("failed to parse script YAML: {e}"),
    })
}

/// Record every entry, in order, into `session`.
///
/// Stops at the first entry that cannot be recorded; entries before it
/// stay recorded.
pub fn replay(session: &SoulSession, entries: &[ScriptEntry]) -> Result<ReplaySummary, EngineError> {
    let mut summary = ReplaySummary::default();

    for (line, entry) in entries.iter().enumerate() {
        match (entry.catalog_index, entry.kind) {
            (Some(index), DeedKind::Good) => {
                let id = session
                    .good_deeds()?
                    .get(index)
                    .map(|deed| deed.id)
                    .ok_or_else(|| missing_catalog_entry(line, index))?;
                session.record_catalog_good_deed(id)?;
            }
            (Some(index), DeedKind::Bad) => {
                let id = session
                    .bad_deeds()?
                    .get(index)
                    .map(|deed| deed.id)
                    .ok_or_else(|| missing_catalog_entry(line, index))?;
                session.record_catalog_bad_deed(id)?;
            }
            (None, kind) => {
                let (Some(title), Some(description)) = (&entry.title, &entry.description) else {
                    return Err(EngineError::Script {
                        message: format!(
                            "entry {line}: needs either catalog_index or title and description"
                        ),
                    });
                };
                match kind {
                    DeedKind::Good => {
                        session.log_good_deed(title, description)?;
                    }
                    DeedKind::Bad => {
                        session.log_bad_deed(title, description)?;
                    }
                }
            }
        }

        match entry.kind {
            DeedKind::Good => summary.good = summary.good.saturating_add(1),
            DeedKind::Bad => summary.bad = summary.bad.saturating_add(1),
        }
    }

    info!(good = summary.good, bad = summary.bad, "Script replayed");
    Ok(summary)
}

fn missing_catalog_entry(line: usize, index: usize) -> EngineError {
    EngineError::Script {
        message: format!("entry {line}: no catalog deed at index {index}"),
    }
}
