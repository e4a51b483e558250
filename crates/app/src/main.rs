//! Headless dashboard runner.
//!
//! Mounts both dashboard views at startup and runs the simulation in real
//! time, logging every published snapshot. Environment:
//!
//! - `DISASTER_WATCH_CONFIG`: path to a JSON `SimulationConfig`
//! - `DISASTER_WATCH_SEED`: overrides the config seed
//! - `DISASTER_WATCH_RUN_SECS`: exit after this many seconds
//! - `DISASTER_WATCH_JSON`: also print each snapshot as a JSON line on stdout

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use simulation::config::FIXED_TIMESTEP_SECS;
use simulation::monitoring::{MetricStatus, MonitoringSnapshot};
use simulation::sim_config::SimulationConfig;
use simulation::teams::{TeamSnapshot, TeamStatus};
use simulation::views::{DashboardView, ViewLifecycle};

const CONFIG_ENV: &str = "DISASTER_WATCH_CONFIG";
const SEED_ENV: &str = "DISASTER_WATCH_SEED";
const RUN_SECS_ENV: &str = "DISASTER_WATCH_RUN_SECS";
const JSON_ENV: &str = "DISASTER_WATCH_JSON";

/// Frame pacing for the run loop. Fixed steps still run at 10 Hz.
const FRAME_SECS: f64 = 1.0 / 60.0;

fn main() {
    let mut app = App::new();

    app.add_plugins(
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
            FRAME_SECS,
        ))),
    )
    .add_plugins(LogPlugin::default())
    .insert_resource(Time::<Fixed>::from_seconds(FIXED_TIMESTEP_SECS));

    // Logging is up once LogPlugin is added, so config problems are reported.
    let config = resolve_config();
    info!(
        "Starting dashboard: seed {}, monitoring every {}s, teams every {}s",
        config.seed, config.monitoring_interval_secs, config.team_interval_secs
    );
    app.insert_resource(config)
        .add_plugins(simulation::SimulationPlugin);

    app.insert_resource(SnapshotOutput {
        json: std::env::var(JSON_ENV).is_ok(),
    })
    .add_systems(Startup, mount_dashboard)
    .add_systems(Update, (report_monitoring, report_teams));

    if let Some(secs) = run_duration() {
        app.insert_resource(RunDuration(Timer::from_seconds(secs, TimerMode::Once)))
            .add_systems(Update, stop_after_run_duration);
    }

    app.run();
}

// =============================================================================
// Configuration
// =============================================================================

fn resolve_config() -> SimulationConfig {
    let mut config = match std::env::var(CONFIG_ENV) {
        Ok(path) => match SimulationConfig::from_path(&path) {
            Ok(config) => {
                info!("Loaded config from {}", path);
                config
            }
            Err(e) => {
                error!("Failed to load config {}: {}. Using defaults", path, e);
                SimulationConfig::default()
            }
        },
        Err(_) => SimulationConfig::default(),
    };

    if let Ok(raw) = std::env::var(SEED_ENV) {
        match raw.trim().parse::<u64>() {
            Ok(seed) => config.seed = seed,
            Err(e) => warn!("Ignoring {}={:?}: {}", SEED_ENV, raw, e),
        }
    }
    config
}

fn run_duration() -> Option<f32> {
    let raw = std::env::var(RUN_SECS_ENV).ok()?;
    match raw.trim().parse::<f32>() {
        Ok(secs) if secs.is_finite() && secs > 0.0 => Some(secs),
        _ => {
            warn!("Ignoring {}={:?}: expected a positive number", RUN_SECS_ENV, raw);
            None
        }
    }
}

// =============================================================================
// Systems
// =============================================================================

#[derive(Resource)]
struct SnapshotOutput {
    json: bool,
}

#[derive(Resource)]
struct RunDuration(Timer);

fn mount_dashboard(mut lifecycle: EventWriter<ViewLifecycle>) {
    lifecycle.send(ViewLifecycle::mounted(DashboardView::Monitoring));
    lifecycle.send(ViewLifecycle::mounted(DashboardView::IncidentBoard));
}

fn report_monitoring(mut snapshots: EventReader<MonitoringSnapshot>, output: Res<SnapshotOutput>) {
    for snapshot in snapshots.read() {
        let count = |status: MetricStatus| {
            snapshot
                .categories
                .iter()
                .flat_map(|c| &c.metrics)
                .filter(|m| m.status == status)
                .count()
        };
        info!(
            "Monitoring tick {}: {} alert, {} warning",
            snapshot.tick,
            count(MetricStatus::Alert),
            count(MetricStatus::Warning)
        );
        if output.json {
            print_json("monitoring", snapshot);
        }
    }
}

fn report_teams(mut snapshots: EventReader<TeamSnapshot>, output: Res<SnapshotOutput>) {
    for snapshot in snapshots.read() {
        let on_site = snapshot
            .teams
            .iter()
            .filter(|t| t.status == TeamStatus::OnSite)
            .count();
        info!(
            "Teams tick {}: {} deployed, {} on site",
            snapshot.tick, snapshot.deployed, on_site
        );
        if output.json {
            print_json("teams", snapshot);
        }
    }
}

fn print_json(kind: &str, snapshot: &impl serde::Serialize) {
    match serde_json::to_value(snapshot) {
        Ok(value) => println!("{}", serde_json::json!({ "type": kind, "snapshot": value })),
        Err(e) => error!("Failed to serialize {} snapshot: {}", kind, e),
    }
}

fn stop_after_run_duration(
    time: Res<Time>,
    mut timer: ResMut<RunDuration>,
    mut exit: EventWriter<AppExit>,
) {
    if timer.0.tick(time.delta()).just_finished() {
        info!("Run time elapsed, exiting");
        exit.send(AppExit::Success);
    }
}
