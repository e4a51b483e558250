//! Deterministic simulation RNG resource.
//!
//! Wraps `ChaCha8Rng` for cross-platform deterministic randomness.
//! Simulation code takes a `&mut impl Rng` (systems pass `&mut rng.0` from
//! `ResMut<SimRng>`) instead of `rand::thread_rng()` so that identical seeds
//! produce identical feed updates.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::DEFAULT_SEED;
use crate::sim_config::SimulationConfig;

/// Deterministic RNG resource for all simulation randomness.
#[derive(Resource)]
pub struct SimRng(pub ChaCha8Rng);

impl Default for SimRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(DEFAULT_SEED))
    }
}

impl SimRng {
    /// Create a new `SimRng` seeded from the given `u64` value.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

pub struct SimRngPlugin;

impl Plugin for SimRngPlugin {
    fn build(&self, app: &mut App) {
        // Seed from the config when the host inserted one before adding the
        // plugin; otherwise fall back to the default seed.
        let rng = app
            .world()
            .get_resource::<SimulationConfig>()
            .map(|config| SimRng::from_seed_u64(config.seed))
            .unwrap_or_default();
        app.insert_resource(rng);
    }
}
