use bevy::prelude::*;

pub mod config;
pub mod geo;
pub mod incidents;
pub mod monitoring;
pub mod scheduler;
pub mod sim_config;
pub mod sim_rng;
pub mod simulation_sets;
pub mod snapshots;
pub mod teams;
pub mod views;

#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

pub use simulation_sets::SimulationSet;

use scheduler::{run_due_jobs, Scheduler};
use sim_config::SimulationConfig;
use snapshots::LatestSnapshots;
use views::{handle_view_lifecycle, ViewFeeds, ViewLifecycle};

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Feature plugins read the config while building, so it has to be in
        // place (and valid) before they are added.
        let invalid = app
            .world()
            .get_resource::<SimulationConfig>()
            .and_then(|config| config.validate().err());
        if let Some(e) = invalid {
            warn!("SimulationConfig rejected, using defaults: {}", e);
            app.insert_resource(SimulationConfig::default());
        }

        app.init_resource::<SimulationConfig>()
            .init_resource::<Scheduler>()
            .init_resource::<ViewFeeds>()
            .init_resource::<LatestSnapshots>()
            .add_event::<ViewLifecycle>()
            .configure_sets(
                FixedUpdate,
                (
                    SimulationSet::PreSim,
                    SimulationSet::Simulation,
                    SimulationSet::PostSim,
                )
                    .chain(),
            )
            .add_systems(
                FixedUpdate,
                handle_view_lifecycle.in_set(SimulationSet::PreSim),
            )
            .add_systems(
                FixedUpdate,
                (run_due_jobs, bevy::ecs::schedule::apply_deferred)
                    .chain()
                    .in_set(SimulationSet::Simulation),
            );

        app.add_plugins((
            sim_rng::SimRngPlugin,
            monitoring::MonitoringPlugin,
            teams::TeamsPlugin,
            incidents::IncidentsPlugin,
        ));
    }
}
