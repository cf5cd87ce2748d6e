//! The garden progression engine.
//!
//! [`GardenEngine`] owns one [`GardenState`] and is the only thing allowed
//! to mutate it. Every good deed plants a seed and runs the upgrade pass;
//! every bad deed runs the downgrade pass. Both passes visit each living
//! item once and apply at most one [`Transition`] to it.
//!
//! The engine is a plain owned value with no interior locking. Hosts that
//! share it across threads must put the whole engine behind one lock so
//! each recording runs as a single critical section.

use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use soul_types::{GardenItem, GardenItemId, GardenState, ScoredDeed};

use crate::placement::{LayoutBounds, PositionSource, RngPlacement};
use crate::rules::{GrowthRules, Transition};

/// Which table a pass evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Upgrade,
    Downgrade,
}

/// Owns the garden state and applies the growth rules to it.
#[derive(Debug, Clone)]
pub struct GardenEngine<P = RngPlacement<StdRng>> {
    state: GardenState,
    rules: GrowthRules,
    layout: LayoutBounds,
    placement: P,
}

impl GardenEngine<RngPlacement<StdRng>> {
    /// Create an empty garden with default rules, default layout, and
    /// entropy-seeded placement.
    pub fn new() -> Self {
        Self::with_placement(
            GrowthRules::default(),
            LayoutBounds::default(),
            RngPlacement::from_os_rng(),
        )
    }

    /// Create an empty garden whose item placement is reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self::with_placement(
            GrowthRules::default(),
            LayoutBounds::default(),
            RngPlacement::seeded(seed),
        )
    }
}

impl Default for GardenEngine<RngPlacement<StdRng>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PositionSource> GardenEngine<P> {
    /// Create an empty garden with explicit rules, layout, and placement.
    pub const fn with_placement(rules: GrowthRules, layout: LayoutBounds, placement: P) -> Self {
        Self {
            state: GardenState::new(),
            rules,
            layout,
            placement,
        }
    }

    /// Record a good deed.
    ///
    /// Plants a seed for the deed, bumps the good-deed count, adds the
    /// deed's points, then runs the upgrade pass over every living item,
    /// the new seed included. Returns the new item as it stands after the
    /// pass.
    ///
    /// Points are taken as given. A "good" deed worth zero or less is
    /// accepted and logged at `warn`.
    pub fn record_good_deed(&mut self, deed: &impl ScoredDeed) -> GardenItem {
        let points = deed.points();
        if points <= 0 {
            warn!(deed_id = %deed.deed_id(), points, "Good deed with non-positive points accepted");
        }

        let position = self.placement.next_position(&self.layout);
        let planted = GardenItem::seed(deed.deed_id(), position);
        self.state.items.push(planted.clone());
        self.state.good_deed_count = self.state.good_deed_count.saturating_add(1);
        self.state.total_points = self.state.total_points.saturating_add(points);

        let changed = self.run_pass(Pass::Upgrade);
        info!(
            deed_id = %deed.deed_id(),
            item_id = %planted.id,
            points,
            good_deed_count = self.state.good_deed_count,
            total_points = self.state.total_points,
            changed,
            "Good deed recorded"
        );

        match self.state.items.last() {
            Some(item) if item.id == planted.id => item.clone(),
            _ => planted,
        }
    }

    /// Record a bad deed.
    ///
    /// Bumps the bad-deed count, adds the deed's (usually negative) points,
    /// then runs the downgrade pass over every living item.
    pub fn record_bad_deed(&mut self, deed: &impl ScoredDeed) {
        let points = deed.points();
        self.state.bad_deed_count = self.state.bad_deed_count.saturating_add(1);
        self.state.total_points = self.state.total_points.saturating_add(points);

        let changed = self.run_pass(Pass::Downgrade);
        info!(
            deed_id = %deed.deed_id(),
            points,
            bad_deed_count = self.state.bad_deed_count,
            total_points = self.state.total_points,
            changed,
            "Bad deed recorded"
        );
    }

    /// Read-only view of the current garden.
    pub const fn state(&self) -> &GardenState {
        &self.state
    }

    /// Look up a single item by id.
    pub fn item(&self, id: GardenItemId) -> Option<&GardenItem> {
        self.state.items.iter().find(|item| item.id == id)
    }

    /// Clear every item and zero all counters.
    pub fn reset(&mut self) {
        info!(
            items = self.state.items.len(),
            good_deed_count = self.state.good_deed_count,
            bad_deed_count = self.state.bad_deed_count,
            "Garden reset"
        );
        self.state = GardenState::new();
    }

    /// The rules this engine evaluates.
    pub const fn rules(&self) -> &GrowthRules {
        &self.rules
    }

    /// The region new items are placed in.
    pub const fn layout(&self) -> &LayoutBounds {
        &self.layout
    }

    /// Evaluate one table against every living item, returning how many
    /// items changed.
    fn run_pass(&mut self, pass: Pass) -> usize {
        let rules = self.rules;
        let good = self.state.good_deed_count;
        let bad = self.state.bad_deed_count;
        let mut changed: usize = 0;

        for item in self.state.items.iter_mut().filter(|item| item.alive) {
            let transition = match pass {
                Pass::Upgrade => rules.upgrade(item.stage, good),
                Pass::Downgrade => rules.downgrade(item.stage, bad),
            };
            if let Some(transition) = transition {
                transition.apply(item);
                changed = changed.saturating_add(1);
                log_transition(item, transition);
            }
        }

        changed
    }
}

fn log_transition(item: &GardenItem, transition: Transition) {
    match transition {
        Transition::Promote { from, to } => {
            debug!(item_id = %item.id, %from, %to, "Item promoted");
        }
        Transition::Demote { from, to } => {
            debug!(item_id = %item.id, %from, %to, "Item demoted");
        }
        Transition::Burn { stage } => {
            debug!(item_id = %item.id, %stage, "Item burned");
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use soul_types::{
        BadDeed, BadDeedCategory, ColorTag, DeedId, GoodDeed, GoodDeedCategory, ItemKind,
        Position, Stage,
    };

    use super::*;
    use crate::placement::FixedPlacement;

    fn good(points: i64) -> GoodDeed {
        GoodDeed {
            id: DeedId::new(),
            title: String::from("Helping a neighbour"),
            description: String::from("Carried groceries upstairs"),
            points,
            category: GoodDeedCategory::Kindness,
            created_at: Utc::now(),
        }
    }

    fn bad(points: i64) -> BadDeed {
        BadDeed {
            id: DeedId::new(),
            title: String::from("Lost temper"),
            description: String::from("Shouted at a friend"),
            points,
            category: BadDeedCategory::Anger,
            created_at: Utc::now(),
        }
    }

    fn engine() -> GardenEngine<FixedPlacement> {
        GardenEngine::with_placement(
            GrowthRules::default(),
            LayoutBounds::default(),
            FixedPlacement::new([Position { x: 100.0, y: 150.0 }]),
        )
    }

    #[test]
    fn first_good_deed_plants_a_seed() {
        let mut engine = engine();
        let deed = good(10);
        let item = engine.record_good_deed(&deed);

        assert_eq!(item.stage, Stage::Seed);
        assert_eq!(item.kind, ItemKind::Seedling);
        assert_eq!(item.origin_deed_id, deed.id);
        assert_eq!(item.position, Position { x: 100.0, y: 150.0 });
        assert!(item.alive);

        let state = engine.state();
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.good_deed_count, 1);
        assert_eq!(state.total_points, 10);
    }

    #[test]
    fn third_good_deed_returns_already_upgraded_item() {
        let mut engine = engine();
        engine.record_good_deed(&good(10));
        engine.record_good_deed(&good(10));
        let third = engine.record_good_deed(&good(10));

        assert_eq!(third.stage, Stage::Tree);
        assert_eq!(third.color_tag, ColorTag::Growing);
        assert_eq!(engine.item(third.id), Some(&third));
    }

    #[test]
    fn bad_deed_updates_counters_without_items() {
        let mut engine = engine();
        engine.record_bad_deed(&bad(-8));

        let state = engine.state();
        assert!(state.items.is_empty());
        assert_eq!(state.bad_deed_count, 1);
        assert_eq!(state.total_points, -8);
    }

    #[test]
    fn negative_good_deed_is_accepted() {
        let mut engine = engine();
        engine.record_good_deed(&good(-5));
        assert_eq!(engine.state().total_points, -5);
        assert_eq!(engine.state().good_deed_count, 1);
    }

    #[test]
    fn points_saturate_instead_of_overflowing() {
        let mut engine = engine();
        engine.record_good_deed(&good(i64::MAX));
        engine.record_good_deed(&good(10));
        assert_eq!(engine.state().total_points, i64::MAX);
    }

    #[test]
    fn reset_restores_empty_state() {
        let mut engine = engine();
        engine.record_good_deed(&good(10));
        engine.record_bad_deed(&bad(-10));
        engine.reset();
        assert!(engine.state().is_empty());
        assert_eq!(engine.state(), &GardenState::new());
    }

    #[test]
    fn seeded_engines_place_items_identically() {
        let mut a = GardenEngine::seeded(9);
        let mut b = GardenEngine::seeded(9);
        let deed = good(10);
        assert_eq!(
            a.record_good_deed(&deed).position,
            b.record_good_deed(&deed).position
        );
        let first = a.state().items.first().map(|item| item.position);
        assert!(first.is_some_and(|pos| a.layout().contains(pos)));
    }

    #[test]
    fn unknown_item_lookup_is_none() {
        let engine = engine();
        assert!(engine.item(GardenItemId::new()).is_none());
    }
}
