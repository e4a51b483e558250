use bevy::prelude::*;
use serde::Serialize;

use super::state::{MetricUpdate, MonitoringSimulator};
use super::types::{MetricCategory, MetricStatus};
use crate::sim_rng::SimRng;
use crate::snapshots::LatestSnapshots;

/// Full feed state, published after every feed change.
#[derive(Event, Debug, Clone, PartialEq, Serialize)]
pub struct MonitoringSnapshot {
    /// Feed ticks run when the snapshot was taken.
    pub tick: u64,
    pub categories: Vec<MetricCategory>,
}

impl MonitoringSnapshot {
    pub fn capture(sim: &MonitoringSimulator) -> Self {
        Self {
            tick: sim.ticks(),
            categories: sim.categories().to_vec(),
        }
    }
}

/// Scheduler callback: one feed step.
pub fn tick_monitoring_feed(mut sim: ResMut<MonitoringSimulator>, mut rng: ResMut<SimRng>) {
    let update = sim.tick(&mut rng.0);
    match update {
        Some(update) => log_update(&update),
        None => debug!("Monitoring: tick {} left the feed unchanged", sim.ticks()),
    }
}

fn log_update(update: &MetricUpdate) {
    if update.escalated() && update.status == MetricStatus::Alert {
        info!(
            "ALERT: {} / {} reached {} (was {})",
            update.category, update.label, update.value, update.previous_value
        );
    } else if update.status_changed() {
        info!(
            "Monitoring: {} / {} is now {} at {}",
            update.category,
            update.label,
            update.status.label(),
            update.value
        );
    } else {
        debug!(
            "Monitoring: {} / {} {} -> {}",
            update.category, update.label, update.previous_value, update.value
        );
    }
}

/// Publishes the feed whenever it changed since this system last ran.
pub fn publish_monitoring_snapshot(
    sim: Res<MonitoringSimulator>,
    mut snapshots: EventWriter<MonitoringSnapshot>,
    mut latest: ResMut<LatestSnapshots>,
) {
    if !sim.is_changed() {
        return;
    }
    let snapshot = MonitoringSnapshot::capture(&sim);
    latest.monitoring = Some(snapshot.clone());
    snapshots.send(snapshot);
}
