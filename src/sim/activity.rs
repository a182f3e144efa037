use crate::passive::PassiveSet;

/// Indices of every active site, in ascending order.
///
/// A site is active iff its occupancy value is not a member of the passive
/// set. An empty result is the absorbing configuration.
pub fn active_sites(occupancy: &[u32], passive: &PassiveSet) -> Vec<usize> {
    occupancy
        .iter()
        .enumerate()
        .filter(|&(_, &value)| !passive.contains(value))
        .map(|(site, _)| site)
        .collect()
}

/// Total number of particles sitting on the given active sites.
pub fn active_particles(occupancy: &[u32], active: &[usize]) -> u64 {
    active.iter().map(|&a| u64::from(occupancy[a])).sum()
}
