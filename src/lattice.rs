use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::rng::UniformSource;

/// One-dimensional ring lattice of per-site particle counts.
///
/// The length is fixed for the lifetime of a run and the total particle count
/// is conserved by every redistribution step: particles move, they are never
/// created or destroyed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lattice {
    sites: Vec<u32>,
}

impl Lattice {
    /// Empty lattice of `len` sites.
    pub fn new(len: usize) -> Result<Self, SimError> {
        if len == 0 {
            return Err(SimError::ZeroLatticeSize);
        }
        Ok(Self {
            sites: vec![0; len],
        })
    }

    /// Lattice seeded with `floor(density * len)` particles, each placed
    /// independently at a uniformly random site.
    pub fn seed_random(
        density: f64,
        len: usize,
        source: &mut dyn UniformSource,
    ) -> Result<Self, SimError> {
        let mut lattice = Self::new(len)?;
        let particles = (density * len as f64) as u64;
        for _ in 0..particles {
            let site = source.next_int(len as u64 - 1) as usize;
            lattice.sites[site] += 1;
        }
        Ok(lattice)
    }

    /// Lattice built directly from explicit per-site occupancies.
    pub fn from_occupancy(sites: Vec<u32>) -> Result<Self, SimError> {
        if sites.is_empty() {
            return Err(SimError::ZeroLatticeSize);
        }
        Ok(Self { sites })
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Per-site particle counts, indexed by site.
    pub fn occupancy(&self) -> &[u32] {
        &self.sites
    }

    /// Total particle count across all sites.
    pub fn total_particles(&self) -> u64 {
        self.sites.iter().map(|&c| u64::from(c)).sum()
    }

    pub(crate) fn sites_mut(&mut self) -> &mut [u32] {
        &mut self.sites
    }
}

/// Canonical representative of `site` modulo `len`, in `[0, len)`.
///
/// Floor division, so negative indices wrap onto the ring:
/// `wrap_index(-1, 4) == 3`.
pub fn wrap_index(site: i64, len: usize) -> usize {
    site.rem_euclid(len as i64) as usize
}
