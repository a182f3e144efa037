use crate::error::SimError;
use crate::lattice::{Lattice, wrap_index};
use crate::rng::UniformSource;

use super::moves::sample_moves;

/// Scatter every particle on the active sites to a random neighboring site.
///
/// `nb_active_particles` must be the sum of the active sites' occupancies
/// (computed once per tick by the caller). One move is consumed per particle,
/// iterating active sites in ascending order and particles within a site in
/// batch order. Sources are zeroed before arrivals are accumulated, so a
/// destination that is also a source correctly ends up with only its new
/// arrivals. Total particle count is unchanged.
pub fn redistribute(
    lattice: &mut Lattice,
    active: &[usize],
    nb_active_particles: u64,
    max_amplitude: u32,
    source: &mut dyn UniformSource,
) -> Result<(), SimError> {
    // Amplitude validation happens here, before any occupancy mutation.
    let moves = sample_moves(nb_active_particles, max_amplitude, source)?;

    let occupancy = lattice.occupancy();
    let mut destinations = Vec::with_capacity(moves.len());
    let mut k = 0;
    for &a in active {
        for _ in 0..occupancy[a] {
            destinations.push(wrap_index(a as i64 + moves[k], lattice.len()));
            k += 1;
        }
    }

    let sites = lattice.sites_mut();
    for &a in active {
        sites[a] = 0;
    }
    for d in destinations {
        sites[d] += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{ScriptedSource, lattice_from, seeded};

    #[test]
    fn scripted_pair_splits_to_both_neighbors() {
        // Site 0 holds 2 particles; moves decode to [+1, -1].
        let mut lattice = lattice_from(&[2, 0, 0, 0]);
        let mut source = ScriptedSource::new([0, 0, 0, 1]);
        redistribute(&mut lattice, &[0], 2, 1, &mut source).unwrap();
        assert_eq!(lattice.occupancy(), &[0, 1, 0, 1]);
        assert!(source.is_exhausted());
    }

    #[test]
    fn source_zeroed_before_arrivals_land() {
        // Moves decode to [+1, +1, -1]: destinations 2, 2, 0. Site 1 loses
        // all three particles and must end at 0.
        let mut lattice = lattice_from(&[0, 3, 0]);
        let mut source = ScriptedSource::new([0, 0, 0, 0, 0, 1]);
        redistribute(&mut lattice, &[1], 3, 1, &mut source).unwrap();
        assert_eq!(lattice.occupancy(), &[1, 0, 2]);
    }

    #[test]
    fn arrival_at_a_zeroed_source_survives() {
        // Sites 0 and 2 both active; a particle from 2 lands on 0 after 0 was
        // zeroed, so it must not be wiped out.
        let mut lattice = lattice_from(&[2, 0, 2, 0]);
        let mut source = ScriptedSource::new([0, 0, 0, 1, 0, 0, 1, 1]);
        // Decoded moves: [+1, -1, +1, -2] -> destinations 1, 3, 3, 0.
        redistribute(&mut lattice, &[0, 2], 4, 2, &mut source).unwrap();
        assert_eq!(lattice.occupancy(), &[1, 1, 0, 2]);
    }

    #[test]
    fn wrapping_hops_stay_on_the_ring() {
        // Particle at the last site hops +1 and wraps to site 0; particle at
        // site 0 hops -1 and wraps to the last site.
        let mut lattice = lattice_from(&[1, 0, 0, 1]);
        let mut source = ScriptedSource::new([0, 1, 0, 0]);
        // Decoded moves: -1 for site 0, +1 for site 3.
        redistribute(&mut lattice, &[0, 3], 2, 1, &mut source).unwrap();
        assert_eq!(lattice.occupancy(), &[1, 0, 0, 1]);
    }

    #[test]
    fn empty_active_list_is_a_noop() {
        let mut lattice = lattice_from(&[0, 1, 0, 1]);
        let mut source = ScriptedSource::new([]);
        redistribute(&mut lattice, &[], 0, 3, &mut source).unwrap();
        assert_eq!(lattice.occupancy(), &[0, 1, 0, 1]);
    }

    #[test]
    fn invalid_amplitude_leaves_occupancy_untouched() {
        let mut lattice = lattice_from(&[2, 0, 0]);
        let mut source = ScriptedSource::new([]);
        let err = redistribute(&mut lattice, &[0], 2, 0, &mut source);
        assert_eq!(err, Err(SimError::InvalidAmplitude(0)));
        assert_eq!(lattice.occupancy(), &[2, 0, 0]);
    }

    #[test]
    fn particle_count_conserved_over_random_scatters() {
        let mut rng = seeded(11);
        let mut lattice = lattice_from(&[4, 0, 7, 2, 0, 3, 0, 0, 9, 1]);
        let before = lattice.total_particles();
        for _ in 0..200 {
            let active: Vec<usize> = (0..lattice.len())
                .filter(|&i| lattice.occupancy()[i] > 1)
                .collect();
            let particles: u64 = active
                .iter()
                .map(|&a| u64::from(lattice.occupancy()[a]))
                .sum();
            redistribute(&mut lattice, &active, particles, 3, &mut rng).unwrap();
            assert_eq!(lattice.total_particles(), before);
        }
    }
}
