use std::path::PathBuf;

use crate::error::RunError;
use crate::flush::flush_snapshot;
use crate::lattice::Lattice;
use crate::passive::PassiveSet;
use crate::rng::UniformSource;

use super::step::step;

/// Policy configuration for a simulation run.
///
/// The iteration cap and report interval are driver policy, not model
/// physics, so they are explicit here rather than constants buried in the
/// loop.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub max_iterations: u64,
    /// Invoke the progress callback every N iterations.
    pub report_interval: u64,
    /// If set, write an occupancy snapshot every N iterations.
    pub flush_interval: Option<u64>,
    /// Directory to write snapshot checkpoints into.
    pub output_dir: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100_000,
            report_interval: 10_000,
            flush_interval: None,
            output_dir: None,
        }
    }
}

/// Terminal state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every site reached a passive occupancy value.
    Absorbed,
    /// The iteration cap was hit with activity remaining.
    CappedOut,
}

/// Summary of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub status: RunStatus,
    /// Iterations executed, including the final step that observed the
    /// terminal state.
    pub iterations: u64,
    /// Activity count returned by the final step.
    pub final_activity: u64,
}

/// Step the lattice until it absorbs or the iteration cap is reached.
///
/// Calls `report` with `(iteration, activity)` every
/// `config.report_interval` iterations. No step executes past a terminal
/// state. The RNG stream is consumed in a strict per-particle order inside
/// each step, so a fixed seed reproduces the whole run.
pub fn run(
    lattice: &mut Lattice,
    passive: &PassiveSet,
    max_amplitude: u32,
    source: &mut dyn UniformSource,
    config: &RunConfig,
    mut report: impl FnMut(u64, u64),
) -> Result<RunReport, RunError> {
    let mut iteration: u64 = 0;
    loop {
        let activity = step(lattice, passive, max_amplitude, source)?;
        iteration += 1;

        if config.report_interval > 0 && iteration % config.report_interval == 0 {
            report(iteration, activity);
        }

        let status = if activity == 0 {
            Some(RunStatus::Absorbed)
        } else if iteration >= config.max_iterations {
            Some(RunStatus::CappedOut)
        } else {
            None
        };

        // Snapshot at each interval and once more at termination.
        if let (Some(interval), Some(dir)) = (config.flush_interval, &config.output_dir)
            && (status.is_some() || (interval > 0 && iteration % interval == 0))
        {
            flush_snapshot(lattice, iteration, dir)?;
        }

        if let Some(status) = status {
            tracing::debug!(?status, iteration, activity, "run terminated");
            return Ok(RunReport {
                status,
                iterations: iteration,
                final_activity: activity,
            });
        }
    }
}
