use thiserror::Error;

/// Contract violations detected inside the simulation core.
///
/// These are programming or configuration defects, not transient runtime
/// conditions. They are reported to the caller before any occupancy mutation:
/// a run that continued past one would produce statistics from a corrupted
/// lattice.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    #[error("lattice size must be positive")]
    ZeroLatticeSize,
    #[error("max hop amplitude must be at least 1, got {0}")]
    InvalidAmplitude(u32),
}

/// Errors surfaced by the run driver.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Sim(#[from] SimError),
    #[error("failed to write snapshot checkpoint")]
    Snapshot(#[from] std::io::Error),
}
