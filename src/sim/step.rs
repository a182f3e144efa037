use crate::error::SimError;
use crate::lattice::Lattice;
use crate::passive::PassiveSet;
use crate::rng::UniformSource;

use super::activity::{active_particles, active_sites};
use super::topple::redistribute;

/// Advance the lattice by one discrete time tick.
///
/// Returns the activity count observed before the move: the number of
/// particles sitting on active sites when the tick began. Zero means the
/// lattice was already absorbing and nothing changed.
pub fn step(
    lattice: &mut Lattice,
    passive: &PassiveSet,
    max_amplitude: u32,
    source: &mut dyn UniformSource,
) -> Result<u64, SimError> {
    let active = active_sites(lattice.occupancy(), passive);
    // Computed once per tick; the redistributor reuses it as the batch size.
    let activity = active_particles(lattice.occupancy(), &active);
    redistribute(lattice, &active, activity, max_amplitude, source)?;
    Ok(activity)
}
