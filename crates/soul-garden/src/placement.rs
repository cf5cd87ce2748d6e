//! Placement of newly planted items inside the garden layout region.
//!
//! Positions come from a [`PositionSource`] so the engine never reaches for
//! a global RNG. Production code uses [`RngPlacement`] (seeded or from OS
//! entropy); tests can script exact coordinates with [`FixedPlacement`].

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use soul_types::Position;

/// Axis-aligned region new items are placed in.
///
/// Bounds are half-open: `x_min <= x < x_max`, `y_min <= y < y_max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutBounds {
    /// Left edge (inclusive).
    pub x_min: f64,
    /// Right edge (exclusive).
    pub x_max: f64,
    /// Top edge (inclusive).
    pub y_min: f64,
    /// Bottom edge (exclusive).
    pub y_max: f64,
}

impl Default for LayoutBounds {
    fn default() -> Self {
        Self {
            x_min: 50.0,
            x_max: 350.0,
            y_min: 100.0,
            y_max: 300.0,
        }
    }
}

impl LayoutBounds {
    /// `true` when both axes are finite and non-empty.
    pub fn is_valid(&self) -> bool {
        [self.x_min, self.x_max, self.y_min, self.y_max]
            .iter()
            .all(|v| v.is_finite())
            && self.x_min < self.x_max
            && self.y_min < self.y_max
    }

    /// Whether `position` lies inside the region.
    pub const fn contains(&self, position: Position) -> bool {
        position.x >= self.x_min
            && position.x < self.x_max
            && position.y >= self.y_min
            && position.y < self.y_max
    }

    /// The top-left corner, used when a source has nothing better to offer.
    pub const fn origin(&self) -> Position {
        Position {
            x: self.x_min,
            y: self.y_min,
        }
    }
}

/// Supplies the position of each newly planted item.
pub trait PositionSource {
    /// Pick a position for the next item inside `bounds`.
    fn next_position(&mut self, bounds: &LayoutBounds) -> Position;
}

impl<P: PositionSource + ?Sized> PositionSource for Box<P> {
    fn next_position(&mut self, bounds: &LayoutBounds) -> Position {
        (**self).next_position(bounds)
    }
}

/// Uniformly random placement driven by any [`Rng`].
#[derive(Debug, Clone)]
pub struct RngPlacement<R> {
    rng: R,
}

impl<R: Rng> RngPlacement<R> {
    /// Wrap an existing generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngPlacement<StdRng> {
    /// Reproducible placement: the same seed yields the same positions.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Placement seeded from operating system entropy.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> PositionSource for RngPlacement<R> {
    fn next_position(&mut self, bounds: &LayoutBounds) -> Position {
        Position {
            x: sample_axis(&mut self.rng, bounds.x_min, bounds.x_max),
            y: sample_axis(&mut self.rng, bounds.y_min, bounds.y_max),
        }
    }
}

/// Sample `[min, max)`, collapsing to `min` when the range is empty or
/// not finite.
fn sample_axis<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    if min.is_finite() && max.is_finite() && min < max {
        rng.random_range(min..max)
    } else {
        min
    }
}

/// Hands out a scripted list of positions in order, cycling when it runs
/// out.
///
/// An empty script places every item at the layout origin.
#[derive(Debug, Clone, Default)]
pub struct FixedPlacement {
    positions: VecDeque<Position>,
}

impl FixedPlacement {
    /// Script the given positions.
    pub fn new(positions: impl IntoIterator<Item = Position>) -> Self {
        Self {
            positions: positions.into_iter().collect(),
        }
    }
}

impl PositionSource for FixedPlacement {
    fn next_position(&mut self, bounds: &LayoutBounds) -> Position {
        match self.positions.pop_front() {
            Some(position) => {
                self.positions.push_back(position);
                position
            }
            None => bounds.origin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn default_bounds_match_garden_region() {
        let bounds = LayoutBounds::default();
        assert!(bounds.is_valid());
        assert!(bounds.contains(Position { x: 50.0, y: 100.0 }));
        assert!(!bounds.contains(Position { x: 350.0, y: 150.0 }));
        assert!(!bounds.contains(Position { x: 200.0, y: 99.0 }));
    }

    #[test]
    fn inverted_bounds_are_invalid() {
        let bounds = LayoutBounds {
            x_min: 10.0,
            x_max: 5.0,
            ..LayoutBounds::default()
        };
        assert!(!bounds.is_valid());
    }

    #[test]
    fn random_positions_stay_in_bounds() {
        let bounds = LayoutBounds::default();
        let mut placement = RngPlacement::new(SmallRng::seed_from_u64(7));
        for _ in 0..500 {
            let pos = placement.next_position(&bounds);
            assert!(bounds.contains(pos), "{pos:?} outside {bounds:?}");
        }
    }

    #[test]
    fn seeded_placement_is_reproducible() {
        let bounds = LayoutBounds::default();
        let mut a = RngPlacement::seeded(42);
        let mut b = RngPlacement::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.next_position(&bounds), b.next_position(&bounds));
        }
    }

    #[test]
    fn empty_range_collapses_to_min() {
        let bounds = LayoutBounds {
            x_min: 80.0,
            x_max: 80.0,
            y_min: 120.0,
            y_max: 90.0,
        };
        let mut placement = RngPlacement::seeded(1);
        assert_eq!(placement.next_position(&bounds), Position { x: 80.0, y: 120.0 });
    }

    #[test]
    fn fixed_placement_cycles() {
        let bounds = LayoutBounds::default();
        let a = Position { x: 60.0, y: 110.0 };
        let b = Position { x: 70.0, y: 120.0 };
        let mut placement = FixedPlacement::new([a, b]);
        assert_eq!(placement.next_position(&bounds), a);
        assert_eq!(placement.next_position(&bounds), b);
        assert_eq!(placement.next_position(&bounds), a);
    }

    #[test]
    fn empty_fixed_placement_uses_origin() {
        let bounds = LayoutBounds::default();
        let mut placement = FixedPlacement::default();
        assert_eq!(placement.next_position(&bounds), bounds.origin());
    }
}
