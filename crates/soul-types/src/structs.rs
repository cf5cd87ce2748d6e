//! Core entity structs for the soul garden.
//!
//! Covers the deed records kept by the catalog, the garden items grown
//! from good deeds, and the [`GardenState`] snapshot handed to the
//! presentation layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{BadDeedCategory, ColorTag, GoodDeedCategory, ItemKind, Stage};
use crate::ids::{DeedId, GardenItemId};

// ---------------------------------------------------------------------------
// Deeds
// ---------------------------------------------------------------------------

/// Anything the garden can score: an opaque id and a signed point value.
///
/// The garden engine reads nothing else from a deed.
pub trait ScoredDeed {
    /// Identifier of the deed, kept on garden items as a back-reference.
    fn deed_id(&self) -> DeedId;

    /// Point value added to the running total when the deed is recorded.
    fn points(&self) -> i64;
}

/// A good deed stored in the deed catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GoodDeed {
    /// Catalog identifier.
    pub id: DeedId,
    /// Short title shown in lists.
    pub title: String,
    /// Longer explanation of the deed.
    pub description: String,
    /// Points awarded. Positive by convention, not enforced.
    pub points: i64,
    /// Catalog category.
    pub category: GoodDeedCategory,
    /// When the deed was added to the catalog.
    pub created_at: DateTime<Utc>,
}

impl ScoredDeed for GoodDeed {
    fn deed_id(&self) -> DeedId {
        self.id
    }

    fn points(&self) -> i64 {
        self.points
    }
}

/// A bad deed stored in the deed catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BadDeed {
    /// Catalog identifier.
    pub id: DeedId,
    /// Short title shown in lists.
    pub title: String,
    /// Longer explanation of the deed.
    pub description: String,
    /// Points awarded. Negative by convention, not enforced.
    pub points: i64,
    /// Catalog category.
    pub category: BadDeedCategory,
    /// When the deed was added to the catalog.
    pub created_at: DateTime<Utc>,
}

impl ScoredDeed for BadDeed {
    fn deed_id(&self) -> DeedId {
        self.id
    }

    fn points(&self) -> i64 {
        self.points
    }
}

/// Input for adding a deed to the catalog: everything except the id and
/// timestamp, which the catalog assigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDeed<C> {
    /// Short title shown in lists.
    pub title: String,
    /// Longer explanation of the deed.
    pub description: String,
    /// Points awarded when the deed is recorded.
    pub points: i64,
    /// Catalog category.
    pub category: C,
}

// ---------------------------------------------------------------------------
// Garden items
// ---------------------------------------------------------------------------

/// A 2D coordinate inside the garden layout region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Position {
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset.
    pub y: f64,
}

/// A progression artifact created by a single good deed.
///
/// Items are owned by [`GardenState`] and only ever change through the
/// garden engine's upgrade and downgrade passes. Once `alive` is `false`
/// the item is terminal and no field changes again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GardenItem {
    /// Unique, time-ordered identifier.
    pub id: GardenItemId,
    /// Seedling or bird.
    pub kind: ItemKind,
    /// Current growth stage.
    pub stage: Stage,
    /// Placement inside the layout region, fixed at creation.
    pub position: Position,
    /// The good deed that planted this item.
    pub origin_deed_id: DeedId,
    /// `false` once the item has burned.
    pub alive: bool,
    /// Display tone for the current stage.
    pub color_tag: ColorTag,
    /// When the item was planted.
    pub created_at: DateTime<Utc>,
}

impl GardenItem {
    /// Plant a fresh seed for `origin_deed_id` at `position`.
    pub fn seed(origin_deed_id: DeedId, position: Position) -> Self {
        Self {
            id: GardenItemId::new(),
            kind: ItemKind::Seedling,
            stage: Stage::Seed,
            position,
            origin_deed_id,
            alive: true,
            color_tag: ColorTag::for_stage(Stage::Seed, true),
            created_at: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// Garden state
// ---------------------------------------------------------------------------

/// Deed tallies, running points, and every item planted so far.
///
/// `items` is kept in creation order. Both counters only ever increase
/// until the garden is reset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GardenState {
    /// Items in creation order, dead ones included.
    pub items: Vec<GardenItem>,
    /// Number of good deeds recorded.
    pub good_deed_count: u64,
    /// Number of bad deeds recorded.
    pub bad_deed_count: u64,
    /// Signed sum of the points of every recorded deed.
    pub total_points: i64,
}

impl GardenState {
    /// Create an empty garden.
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            good_deed_count: 0,
            bad_deed_count: 0,
            total_points: 0,
        }
    }

    /// `true` when nothing has been recorded since creation or reset.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
            && self.good_deed_count == 0
            && self.bad_deed_count == 0
            && self.total_points == 0
    }

    /// Items that are still alive.
    pub fn alive_items(&self) -> impl Iterator<Item = &GardenItem> {
        self.items.iter().filter(|item| item.alive)
    }

    /// Items that have burned.
    pub fn burned_items(&self) -> impl Iterator<Item = &GardenItem> {
        self.items.iter().filter(|item| !item.alive)
    }

    /// Number of living items currently at `stage`.
    pub fn count_at_stage(&self, stage: Stage) -> usize {
        self.alive_items().filter(|item| item.stage == stage).count()
    }

    /// Total number of recorded deeds, good and bad.
    pub const fn deed_count(&self) -> u64 {
        self.good_deed_count.saturating_add(self.bad_deed_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Position {
        Position { x: 0.0, y: 0.0 }
    }

    #[test]
    fn seed_starts_alive_and_green() {
        let deed = DeedId::new();
        let item = GardenItem::seed(deed, origin());
        assert_eq!(item.stage, Stage::Seed);
        assert_eq!(item.kind, ItemKind::Seedling);
        assert_eq!(item.color_tag, ColorTag::Growing);
        assert_eq!(item.origin_deed_id, deed);
        assert!(item.alive);
    }

    #[test]
    fn new_state_is_empty() {
        let state = GardenState::new();
        assert!(state.is_empty());
        assert_eq!(state, GardenState::default());
        assert_eq!(state.deed_count(), 0);
    }

    #[test]
    fn alive_and_burned_partition_items() {
        let mut state = GardenState::new();
        let mut burned = GardenItem::seed(DeedId::new(), origin());
        burned.alive = false;
        burned.color_tag = ColorTag::Burned;
        state.items.push(GardenItem::seed(DeedId::new(), origin()));
        state.items.push(burned);

        assert_eq!(state.alive_items().count(), 1);
        assert_eq!(state.burned_items().count(), 1);
        assert_eq!(state.count_at_stage(Stage::Seed), 1);
    }

    #[test]
    fn good_deed_exposes_scored_fields() {
        let deed = GoodDeed {
            id: DeedId::new(),
            title: String::from("Prayer"),
            description: String::from("Praying on time"),
            points: 10,
            category: GoodDeedCategory::Prayer,
            created_at: Utc::now(),
        };
        assert_eq!(deed.deed_id(), deed.id);
        assert_eq!(ScoredDeed::points(&deed), 10);
    }

    #[test]
    fn garden_state_serializes_to_json() {
        let mut state = GardenState::new();
        state.items.push(GardenItem::seed(DeedId::new(), origin()));
        state.good_deed_count = 1;
        state.total_points = 10;

        let json = serde_json::to_string(&state).unwrap_or_default();
        let back: Result<GardenState, _> = serde_json::from_str(&json);
        assert!(back.is_ok());
        assert!(json.contains("\"stage\":\"seed\""));
    }
}
