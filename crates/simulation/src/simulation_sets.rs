//! Deterministic simulation ordering via `SystemSet` phases.
//!
//! All simulation systems run in `FixedUpdate`, configured as a chain:
//!
//! ```text
//! PreSim  →  Simulation  →  PostSim
//! ```
//!
//! * **PreSim** – View lifecycle handling (mounting a view schedules its
//!   simulator's job, unmounting cancels it), then dispatch requests. Runs
//!   first so a view unmounted this step never ticks this step.
//! * **Simulation** – The scheduler advances its timers and runs every due
//!   simulator callback (monitoring feed tick, team movement tick).
//! * **PostSim** – Snapshot publishing. Only *reads* simulator state, so UI
//!   consumers see a consistent snapshot of everything that ticked this step.

use bevy::prelude::*;

/// Ordered phases for systems running in the `FixedUpdate` schedule.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// View lifecycle and dispatch requests.
    PreSim,
    /// Scheduler timers and simulator ticks.
    Simulation,
    /// Snapshot publishing for subscribers.
    PostSim,
}
