mod activity;
mod moves;
mod runner;
mod step;
mod topple;

pub use activity::{active_particles, active_sites};
pub use moves::sample_moves;
pub use runner::{RunConfig, RunReport, RunStatus, run};
pub use step::step;
pub use topple::redistribute;
