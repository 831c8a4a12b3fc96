//! Pluggable synthesis of default vertex positions.
//!
//! Vertices loaded without coordinates receive a position on first
//! assignment access (see
//! [`DiGraph::position_or_assign`](crate::DiGraph::position_or_assign)).
//! The synthesis strategy is injectable; the documented default is
//! [`RandomPositions`], which draws uniform coordinates from a fixed
//! window. Tests that need reproducible layouts construct the provider
//! with [`RandomPositions::with_seed`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::Position;

/// Strategy for synthesizing a position for a vertex that has none.
pub trait PositionProvider {
    /// Produces a position for the given vertex key.
    fn position_for(&mut self, key: u64) -> Position;
}

/// Default provider: uniform random positions inside the window
/// x ∈ (32.001, 32.999), y ∈ (35.001, 35.999), z = 0.
pub struct RandomPositions {
    rng: StdRng,
}

impl RandomPositions {
    /// Creates a provider seeded from system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a provider with a fixed seed for reproducible layouts.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPositions {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionProvider for RandomPositions {
    fn position_for(&mut self, _key: u64) -> Position {
        Position::new(
            self.rng.gen_range(32.001..32.999),
            self.rng.gen_range(35.001..35.999),
            0.0,
        )
    }
}
