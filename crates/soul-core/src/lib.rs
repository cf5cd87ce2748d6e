//! Configuration, deed catalog, and session orchestration for the soul
//! garden.
//!
//! # Modules
//!
//! - [`catalog`] -- [`DeedCatalog`]: stock and user-entered good and bad
//!   deeds, with input validation.
//! - [`config`] -- Configuration loading from `soul-config.yaml` into
//!   strongly-typed structs.
//! - [`session`] -- [`SoulSession`]: catalog plus garden behind one lock,
//!   running the "log a deed" flow.
//!
//! [`DeedCatalog`]: catalog::DeedCatalog
//! [`SoulSession`]: session::SoulSession

pub mod catalog;
pub mod config;
pub mod session;

pub use catalog::{CatalogError, DeedCatalog};
pub use config::{ConfigError, SoulConfig};
pub use session::{LoggedGoodDeed, SessionError, SoulSession};
