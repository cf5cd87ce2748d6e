//! Stage-transition rule tables for the upgrade and downgrade passes.
//!
//! Both tables are evaluated top to bottom against a single item and stop
//! at the first matching row, so an item moves at most one stage per pass.
//!
//! # Upgrade (after every good deed)
//!
//! | Stage | Good deeds | Becomes | Tone    |
//! |-------|-----------:|---------|---------|
//! | Seed  | >= 3       | Tree    | growing |
//! | Tree  | >= 6       | Fruit   | fruit   |
//! | Fruit | >= 9       | Bird    | bird    |
//!
//! # Downgrade (after every bad deed)
//!
//! | Stage | Bad deeds | Becomes     | Tone    |
//! |-------|----------:|-------------|---------|
//! | Bird  | >= 2      | Fruit       | fruit   |
//! | Fruit | >= 4      | Tree        | growing |
//! | Tree  | >= 6      | Seed        | dormant |
//! | any   | >= 8      | dead        | burned  |
//!
//! The burn row only fires when no stage row matched the item in the same
//! pass. A tree facing the eighth bad deed is demoted to a seed, and only
//! burns on the next bad deed.

use serde::{Deserialize, Serialize};

use soul_types::{ColorTag, GardenItem, ItemKind, Stage};

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Good-deed counts at which each upgrade row fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpgradeThresholds {
    /// Seed becomes tree.
    pub seed_to_tree: u64,
    /// Tree becomes fruit.
    pub tree_to_fruit: u64,
    /// Fruit becomes bird.
    pub fruit_to_bird: u64,
}

impl Default for UpgradeThresholds {
    fn default() -> Self {
        Self {
            seed_to_tree: 3,
            tree_to_fruit: 6,
            fruit_to_bird: 9,
        }
    }
}

/// Bad-deed counts at which each downgrade row fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DowngradeThresholds {
    /// Bird falls back to fruit.
    pub bird_to_fruit: u64,
    /// Fruit falls back to tree.
    pub fruit_to_tree: u64,
    /// Tree falls back to seed.
    pub tree_to_seed: u64,
    /// Any living item with no matching stage row burns.
    pub burn: u64,
}

impl Default for DowngradeThresholds {
    fn default() -> Self {
        Self {
            bird_to_fruit: 2,
            fruit_to_tree: 4,
            tree_to_seed: 6,
            burn: 8,
        }
    }
}

/// The complete rule set driving garden progression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthRules {
    /// Rows of the upgrade table.
    pub upgrade: UpgradeThresholds,
    /// Rows of the downgrade table.
    pub downgrade: DowngradeThresholds,
}

impl GrowthRules {
    /// Check that thresholds rise along each ladder.
    ///
    /// Upgrades must need strictly more good deeds at each higher stage, and
    /// downgrades strictly more bad deeds the further down the ladder they
    /// reach, with burning last.
    pub const fn is_consistent(&self) -> bool {
        let up = &self.upgrade;
        let down = &self.downgrade;
        up.seed_to_tree < up.tree_to_fruit
            && up.tree_to_fruit < up.fruit_to_bird
            && down.bird_to_fruit < down.fruit_to_tree
            && down.fruit_to_tree < down.tree_to_seed
            && down.tree_to_seed < down.burn
    }

    /// First matching upgrade row for an item at `stage` once
    /// `good_deed_count` good deeds have been recorded.
    pub const fn upgrade(&self, stage: Stage, good_deed_count: u64) -> Option<Transition> {
        let up = &self.upgrade;
        match stage {
            Stage::Seed if good_deed_count >= up.seed_to_tree => Some(Transition::Promote {
                from: Stage::Seed,
                to: Stage::Tree,
            }),
            Stage::Tree if good_deed_count >= up.tree_to_fruit => Some(Transition::Promote {
                from: Stage::Tree,
                to: Stage::Fruit,
            }),
            Stage::Fruit if good_deed_count >= up.fruit_to_bird => Some(Transition::Promote {
                from: Stage::Fruit,
                to: Stage::Bird,
            }),
            _ => None,
        }
    }

    /// First matching downgrade row for an item at `stage` once
    /// `bad_deed_count` bad deeds have been recorded.
    ///
    /// Stage rows are tried before the burn row.
    pub const fn downgrade(&self, stage: Stage, bad_deed_count: u64) -> Option<Transition> {
        let down = &self.downgrade;
        let demotion = match stage {
            Stage::Bird if bad_deed_count >= down.bird_to_fruit => Some(Transition::Demote {
                from: Stage::Bird,
                to: Stage::Fruit,
            }),
            Stage::Fruit if bad_deed_count >= down.fruit_to_tree => Some(Transition::Demote {
                from: Stage::Fruit,
                to: Stage::Tree,
            }),
            Stage::Tree if bad_deed_count >= down.tree_to_seed => Some(Transition::Demote {
                from: Stage::Tree,
                to: Stage::Seed,
            }),
            _ => None,
        };

        match demotion {
            Some(transition) => Some(transition),
            None if bad_deed_count >= down.burn => Some(Transition::Burn { stage }),
            None => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

/// A single change applied to one garden item during a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// One step up the growth ladder.
    Promote {
        /// Stage before the pass.
        from: Stage,
        /// Stage after the pass.
        to: Stage,
    },
    /// One step down the growth ladder.
    Demote {
        /// Stage before the pass.
        from: Stage,
        /// Stage after the pass.
        to: Stage,
    },
    /// The item dies. Its stage is left as it was.
    Burn {
        /// Stage the item burned at.
        stage: Stage,
    },
}

impl Transition {
    /// Apply this transition to `item`, updating stage, kind, and tone.
    ///
    /// Dead items are left untouched.
    pub fn apply(self, item: &mut GardenItem) {
        if !item.alive {
            return;
        }
        match self {
            Self::Promote { to, .. } => {
                item.stage = to;
                if to == Stage::Bird {
                    item.kind = ItemKind::Bird;
                }
                item.color_tag = ColorTag::for_stage(to, true);
            }
            Self::Demote { from, to } => {
                item.stage = to;
                if from == Stage::Bird {
                    item.kind = ItemKind::Seedling;
                }
                item.color_tag = match to {
                    Stage::Seed => ColorTag::Dormant,
                    _ => ColorTag::for_stage(to, true),
                };
            }
            Self::Burn { stage } => {
                item.alive = false;
                item.color_tag = ColorTag::for_stage(stage, false);
            }
        }
    }
}
