//! # TestDashboard: headless integration test harness
//!
//! Wraps `bevy::app::App` + `SimulationPlugin` so tests can mount views,
//! advance simulated time and inspect the simulators without a host UI.
//!
//! Time is driven by `TimeUpdateStrategy::ManualDuration`, so every
//! `app.update()` advances the clock by exactly one fixed step and runs
//! `FixedUpdate` exactly once. Runs are therefore reproducible for a given
//! seed.

use std::time::Duration;

use bevy::app::App;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::config::FIXED_TIMESTEP_SECS;
use crate::geo::LatLng;
use crate::incidents::IncidentRegistry;
use crate::monitoring::MonitoringSimulator;
use crate::scheduler::Scheduler;
use crate::sim_config::SimulationConfig;
use crate::snapshots::LatestSnapshots;
use crate::teams::{DispatchRequest, TeamMovementSimulator};
use crate::views::{DashboardView, ViewFeeds, ViewLifecycle};
use crate::SimulationPlugin;

/// A headless Bevy App wrapping `SimulationPlugin` for integration testing.
///
/// Nothing ticks until a view is mounted; call [`mount`](Self::mount) and
/// then [`tick`](Self::tick) or [`advance_secs`](Self::advance_secs).
pub struct TestDashboard {
    app: App,
}

impl Default for TestDashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDashboard {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Dashboard with the default config (seed, 5s and 10s periods).
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Dashboard with a host-provided config, inserted before the plugin
    /// builds so the feed periods and seed take effect.
    pub fn with_config(config: SimulationConfig) -> Self {
        Self::build(Some(config))
    }

    /// Dashboard with the default periods and the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(SimulationConfig {
            seed,
            ..Default::default()
        })
    }

    fn build(config: Option<SimulationConfig>) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            FIXED_TIMESTEP_SECS,
        )));
        app.insert_resource(Time::<Fixed>::from_seconds(FIXED_TIMESTEP_SECS));

        if let Some(config) = config {
            app.insert_resource(config);
        }
        app.add_plugins(SimulationPlugin);

        // The first update only initializes the clock (zero delta), so no
        // fixed step runs yet.
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Host actions
    // -----------------------------------------------------------------------

    /// Mount a view; its feed starts on the next tick.
    pub fn mount(&mut self, view: DashboardView) -> &mut Self {
        self.app.world_mut().send_event(ViewLifecycle::mounted(view));
        self
    }

    /// Unmount a view; its feed stops on the next tick.
    pub fn unmount(&mut self, view: DashboardView) -> &mut Self {
        self.app
            .world_mut()
            .send_event(ViewLifecycle::unmounted(view));
        self
    }

    /// Mount both dashboard views.
    pub fn mount_all(&mut self) -> &mut Self {
        self.mount(DashboardView::Monitoring)
            .mount(DashboardView::IncidentBoard)
    }

    /// Queue a dispatch request; it is applied on the next tick.
    pub fn dispatch(&mut self, team_id: &str, incident_id: &str, route: Vec<LatLng>) -> &mut Self {
        self.app.world_mut().send_event(DispatchRequest {
            team_id: team_id.to_string(),
            incident_id: incident_id.to_string(),
            route,
        });
        self
    }

    // -----------------------------------------------------------------------
    // Simulation
    // -----------------------------------------------------------------------

    /// Run N fixed steps (100ms each).
    pub fn tick(&mut self, n: u32) -> &mut Self {
        for _ in 0..n {
            self.app.update();
        }
        self
    }

    /// Advance simulated time by `secs`, rounded to whole fixed steps.
    pub fn advance_secs(&mut self, secs: f64) -> &mut Self {
        let steps = (secs / FIXED_TIMESTEP_SECS).round() as u32;
        self.tick(steps)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Access the ECS world mutably.
    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    /// Get a reference to any resource.
    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn monitoring(&self) -> &MonitoringSimulator {
        self.resource::<MonitoringSimulator>()
    }

    pub fn teams(&self) -> &TeamMovementSimulator {
        self.resource::<TeamMovementSimulator>()
    }

    pub fn incidents(&self) -> &IncidentRegistry {
        self.resource::<IncidentRegistry>()
    }

    pub fn latest(&self) -> &LatestSnapshots {
        self.resource::<LatestSnapshots>()
    }

    pub fn config(&self) -> &SimulationConfig {
        self.resource::<SimulationConfig>()
    }

    pub fn is_mounted(&self, view: DashboardView) -> bool {
        self.resource::<ViewFeeds>().is_mounted(view)
    }

    /// Number of repeating jobs currently scheduled.
    pub fn scheduled_jobs(&self) -> usize {
        self.resource::<Scheduler>().len()
    }
}
