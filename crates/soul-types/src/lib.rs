//! Shared type definitions for the soul garden.
//!
//! This crate is the single source of truth for the data model shared by
//! the garden engine, the deed catalog, and the presentation layer. Types
//! flow to `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for deeds and garden items
//! - [`enums`] -- Stages, item kinds, colour tags, deed categories
//! - [`structs`] -- Deeds, garden items, and the garden snapshot

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{BadDeedCategory, ColorTag, GoodDeedCategory, ItemKind, Stage};
pub use ids::{DeedId, GardenItemId};
pub use structs::{BadDeed, GardenItem, GardenState, GoodDeed, NewDeed, Position, ScoredDeed};
