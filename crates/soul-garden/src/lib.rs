//! Garden progression engine for the soul garden.
//!
//! Good deeds plant seeds; the running good-deed count grows them into
//! trees, fruit-bearing trees, and finally birds. Bad deeds walk items back
//! down the ladder and, past a threshold, burn them for good.
//!
//! # Modules
//!
//! - [`engine`] -- [`GardenEngine`]: owns the [`GardenState`] and runs the
//!   upgrade and downgrade passes.
//! - [`placement`] -- Layout bounds and the injectable [`PositionSource`]
//!   used to place new seeds.
//! - [`rules`] -- The ordered threshold tables and the [`Transition`]s they
//!   produce.
//!
//! [`GardenState`]: soul_types::GardenState

pub mod engine;
pub mod placement;
pub mod rules;

// Re-export primary types at crate root.
pub use engine::GardenEngine;
pub use placement::{FixedPlacement, LayoutBounds, PositionSource, RngPlacement};
pub use rules::{DowngradeThresholds, GrowthRules, Transition, UpgradeThresholds};
