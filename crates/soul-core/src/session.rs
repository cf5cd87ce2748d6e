//! A soul-garden session: one deed catalog and one garden behind one lock.
//!
//! [`SoulSession`] is what a presentation layer holds. It runs the
//! "log a deed" flow (add to catalog, then record in the garden) and hands
//! out cloned snapshots for rendering. Catalog and garden share a single
//! [`Mutex`], so each recording and each reset is one critical section
//! even when the session is shared across threads via `Arc`.

use std::sync::{Mutex, MutexGuard};

use serde::Serialize;
use tracing::info;

use soul_garden::{GardenEngine, PositionSource, RngPlacement};
use soul_types::{
    BadDeed, BadDeedCategory, DeedId, GardenItem, GardenState, GoodDeed, GoodDeedCategory, NewDeed,
};

use crate::catalog::{CatalogError, DeedCatalog};
use crate::config::{DeedsConfig, SoulConfig};

/// Placement source boxed so a session can be driven by any generator.
pub type BoxedPlacement = Box<dyn PositionSource + Send>;

/// Errors returned by session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The new deed failed catalog validation.
    #[error("catalog rejected deed: {source}")]
    Catalog {
        /// The underlying validation error.
        #[from]
        source: CatalogError,
    },

    /// No deed with this id exists in the catalog.
    #[error("deed not found: {0}")]
    UnknownDeed(DeedId),

    /// A thread panicked while holding the session lock.
    #[error("session lock poisoned")]
    Poisoned,
}

/// A good deed that was added to the catalog and planted in the garden.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoggedGoodDeed {
    /// The catalog record.
    pub deed: GoodDeed,
    /// The item it planted, after the upgrade pass.
    pub item: GardenItem,
}

/// State guarded by the session lock.
struct SessionInner {
    catalog: DeedCatalog,
    garden: GardenEngine<BoxedPlacement>,
}

/// Thread-safe owner of a deed catalog and a garden engine.
pub struct SoulSession {
    inner: Mutex<SessionInner>,
    deeds: DeedsConfig,
}

impl SoulSession {
    /// Build a session from configuration with the stock deed catalog.
    ///
    /// Placement is seeded from `garden.seed` when set, otherwise from OS
    /// entropy.
    pub fn new(config: &SoulConfig) -> Self {
        let placement: BoxedPlacement = match config.garden.seed {
            Some(seed) => Box::new(RngPlacement::seeded(seed)),
            None => Box::new(RngPlacement::from_os_rng()),
        };
        Self::with_placement(config, DeedCatalog::with_defaults(), placement)
    }

    /// Build a session with an explicit catalog and placement source.
    pub fn with_placement(
        config: &SoulConfig,
        catalog: DeedCatalog,
        placement: BoxedPlacement,
    ) -> Self {
        let garden =
            GardenEngine::with_placement(config.garden.rules, config.garden.layout, placement);
        Self {
            inner: Mutex::new(SessionInner { catalog, garden }),
            deeds: config.deeds.clone(),
        }
    }

    /// Add a user-entered good deed worth the configured default points,
    /// then plant it in the garden.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Catalog`] if the title or description is
    /// blank (nothing is recorded), or [`SessionError::Poisoned`].
    pub fn log_good_deed(
        &self,
        title: &str,
        description: &str,
    ) -> Result<LoggedGoodDeed, SessionError> {
        let mut inner = self.lock()?;
        let deed = inner.catalog.add_good_deed(NewDeed {
            title: title.to_owned(),
            description: description.to_owned(),
            points: self.deeds.default_good_points,
            category: GoodDeedCategory::Other,
        })?;
        let item = inner.garden.record_good_deed(&deed);
        info!(deed_id = %deed.id, title = %deed.title, "Good deed logged");
        Ok(LoggedGoodDeed { deed, item })
    }

    /// Add a user-entered bad deed worth the configured default points,
    /// then apply it to the garden.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Catalog`] if the title or description is
    /// blank (nothing is recorded), or [`SessionError::Poisoned`].
    pub fn log_bad_deed(&self, title: &str, description: &str) -> Result<BadDeed, SessionError> {
        let mut inner = self.lock()?;
        let deed = inner.catalog.add_bad_deed(NewDeed {
            title: title.to_owned(),
            description: description.to_owned(),
            points: self.deeds.default_bad_points,
            category: BadDeedCategory::Other,
        })?;
        inner.garden.record_bad_deed(&deed);
        info!(deed_id = %deed.id, title = %deed.title, "Bad deed logged");
        Ok(deed)
    }

    /// Record a good deed already in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownDeed`] if no good deed has this id,
    /// or [`SessionError::Poisoned`].
    pub fn record_catalog_good_deed(&self, id: DeedId) -> Result<GardenItem, SessionError> {
        let mut inner = self.lock()?;
        let deed = inner
            .catalog
            .good_deed(id)
            .cloned()
            .ok_or(SessionError::UnknownDeed(id))?;
        Ok(inner.garden.record_good_deed(&deed))
    }

    /// Record a bad deed already in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownDeed`] if no bad deed has this id,
    /// or [`SessionError::Poisoned`].
    pub fn record_catalog_bad_deed(&self, id: DeedId) -> Result<BadDeed, SessionError> {
        let mut inner = self.lock()?;
        let deed = inner
            .catalog
            .bad_deed(id)
            .cloned()
            .ok_or(SessionError::UnknownDeed(id))?;
        inner.garden.record_bad_deed(&deed);
        Ok(deed)
    }

    /// Snapshot of the garden for rendering.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Poisoned`] if the lock is poisoned.
    pub fn garden(&self) -> Result<GardenState, SessionError> {
        Ok(self.lock()?.garden.state().clone())
    }

    /// Snapshot of all good deeds in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Poisoned`] if the lock is poisoned.
    pub fn good_deeds(&self) -> Result<Vec<GoodDeed>, SessionError> {
        Ok(self.lock()?.catalog.good_deeds().to_vec())
    }

    /// Snapshot of all bad deeds in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Poisoned`] if the lock is poisoned.
    pub fn bad_deeds(&self) -> Result<Vec<BadDeed>, SessionError> {
        Ok(self.lock()?.catalog.bad_deeds().to_vec())
    }

    /// Start a fresh garden. The catalog is kept.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Poisoned`] if the lock is poisoned.
    pub fn reset_garden(&self) -> Result<(), SessionError> {
        self.lock()?.garden.reset();
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, SessionInner>, SessionError> {
        let Ok(guard) = self.inner.lock() else {
            return Err(SessionError::Poisoned);
        };
        Ok(guard)
    }
}
