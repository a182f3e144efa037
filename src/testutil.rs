use std::collections::VecDeque;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::lattice::Lattice;
use crate::passive::PassiveSet;
use crate::rng::{RngSource, UniformSource};

// ---------------------------------------------------------------------------
// Deterministic random sources
// ---------------------------------------------------------------------------

/// Uniform source that replays a fixed queue of draws.
///
/// Panics when the script runs out or a draw exceeds the requested bound, so
/// a test that consumes the stream in the wrong order fails loudly instead of
/// silently passing with shifted draws.
pub struct ScriptedSource {
    draws: VecDeque<u64>,
}

impl ScriptedSource {
    pub fn new(draws: impl IntoIterator<Item = u64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.draws.is_empty()
    }
}

impl UniformSource for ScriptedSource {
    fn next_int(&mut self, max_inclusive: u64) -> u64 {
        let draw = self
            .draws
            .pop_front()
            .expect("scripted source ran out of draws");
        assert!(
            draw <= max_inclusive,
            "scripted draw {draw} exceeds bound {max_inclusive}"
        );
        draw
    }
}

/// Seeded `SmallRng` source, the generator the binary uses.
pub fn seeded(seed: u64) -> RngSource<SmallRng> {
    RngSource(SmallRng::seed_from_u64(seed))
}

// ---------------------------------------------------------------------------
// Fixture constructors
// ---------------------------------------------------------------------------

/// Lattice from explicit per-site occupancies.
pub fn lattice_from(occupancy: &[u32]) -> Lattice {
    Lattice::from_occupancy(occupancy.to_vec()).expect("non-empty occupancy")
}

/// Passive set from a value list.
pub fn passive(values: &[u32]) -> PassiveSet {
    PassiveSet::new(values.to_vec())
}

// ---------------------------------------------------------------------------
// Assertion helpers
// ---------------------------------------------------------------------------

/// Assert two lattices produced from the same seed are identical, site by
/// site.
pub fn assert_same_run(a: &Lattice, b: &Lattice) {
    assert_eq!(
        a.occupancy(),
        b.occupancy(),
        "same-seed runs diverged: {:?} vs {:?}",
        a.occupancy(),
        b.occupancy()
    );
}
