pub mod error;
pub mod flush;
pub mod lattice;
pub mod passive;
pub mod rng;
pub mod sim;
pub mod testutil;

pub use error::{RunError, SimError};
pub use flush::Snapshot;
pub use lattice::{Lattice, wrap_index};
pub use passive::PassiveSet;
pub use rng::{RngSource, UniformSource};
pub use sim::{RunConfig, RunReport, RunStatus, run, step};
