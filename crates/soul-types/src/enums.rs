//! Enumeration types for the soul garden.
//!
//! Growth stages, item kinds, display colour tags, and the deed
//! categories used by the deed catalog.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Growth stages
// ---------------------------------------------------------------------------

/// One of the four ordered progression stages of a garden item.
///
/// Upgrades move `Seed -> Tree -> Fruit -> Bird`; downgrades walk the same
/// ladder in reverse. A stage never changes by more than one step per pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Stage {
    /// Freshly planted, or demoted all the way down.
    Seed,
    /// Grown into a tree.
    Tree,
    /// A tree bearing fruit.
    Fruit,
    /// The final stage: the item has become a bird.
    Bird,
}

impl Stage {
    /// All stages in progression order.
    pub const ALL: [Self; 4] = [Self::Seed, Self::Tree, Self::Fruit, Self::Bird];

    /// Zero-based position on the growth ladder.
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Seed => 0,
            Self::Tree => 1,
            Self::Fruit => 2,
            Self::Bird => 3,
        }
    }

    /// The stage one step up, or `None` at [`Stage::Bird`].
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Seed => Some(Self::Tree),
            Self::Tree => Some(Self::Fruit),
            Self::Fruit => Some(Self::Bird),
            Self::Bird => None,
        }
    }

    /// The stage one step down, or `None` at [`Stage::Seed`].
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Seed => None,
            Self::Tree => Some(Self::Seed),
            Self::Fruit => Some(Self::Tree),
            Self::Bird => Some(Self::Fruit),
        }
    }
}

impl core::fmt::Display for Stage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Seed => "seed",
            Self::Tree => "tree",
            Self::Fruit => "fruit",
            Self::Bird => "bird",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Item kind
// ---------------------------------------------------------------------------

/// Coarse category of a garden item.
///
/// Items are seedlings (the tree family) until promoted to [`Stage::Bird`],
/// and return to the tree family when a bird is demoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ItemKind {
    /// Seed, tree, or fruit-bearing tree.
    Seedling,
    /// A bird.
    Bird,
}

// ---------------------------------------------------------------------------
// Colour tags
// ---------------------------------------------------------------------------

/// Display tone attached to a garden item, recomputed on every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ColorTag {
    /// Grey: a seed that was demoted back down.
    Dormant,
    /// Green: a fresh seed or a tree.
    Growing,
    /// Orange: a fruit-bearing tree.
    Fruit,
    /// Blue: a bird.
    Bird,
    /// Red: the item was burned and is dead.
    Burned,
}

impl ColorTag {
    /// Tone an item carries at `stage` when it got there by planting or
    /// promotion. Dead items are always burned.
    ///
    /// A seed reached by demotion is [`ColorTag::Dormant`] instead; the
    /// caller applying the demotion picks that tone.
    pub const fn for_stage(stage: Stage, alive: bool) -> Self {
        if !alive {
            return Self::Burned;
        }
        match stage {
            Stage::Seed | Stage::Tree => Self::Growing,
            Stage::Fruit => Self::Fruit,
            Stage::Bird => Self::Bird,
        }
    }

    /// Hex colour the presentation layer paints this tone with.
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Dormant => "#95a5a6",
            Self::Growing => "#27ae60",
            Self::Fruit => "#f39c12",
            Self::Bird => "#3498db",
            Self::Burned => "#e74c3c",
        }
    }
}

// ---------------------------------------------------------------------------
// Deed categories
// ---------------------------------------------------------------------------

/// Category of a good deed in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum GoodDeedCategory {
    /// Prayer and worship.
    Prayer,
    /// Material or spiritual help for people in need.
    Charity,
    /// Kindness and respect toward others.
    Kindness,
    /// Study and reflection.
    Learning,
    /// Anything else, including user-entered deeds.
    Other,
}

/// Category of a bad deed in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum BadDeedCategory {
    /// Uncontrolled anger.
    Anger,
    /// Greed and envy.
    Greed,
    /// Neglecting duties.
    Laziness,
    /// Lying and dishonesty.
    Dishonesty,
    /// Anything else, including user-entered deeds.
    Other,
}
