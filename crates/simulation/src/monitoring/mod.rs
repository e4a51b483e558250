//! Real-time monitoring feed.
//!
//! Holds the dashboard's monitoring categories (weather, geological,
//! hydrological, satellite) and simulates sensor updates: while the
//! monitoring view is mounted, one randomly chosen metric takes a bounded
//! random-walk step every feed period and its status is recomputed from
//! fixed thresholds.

pub mod seed;
pub mod state;
pub mod systems;
mod tests_types;
pub mod types;

pub use seed::seed_categories;
pub use state::{MetricUpdate, MonitoringSimulator};
pub use systems::{publish_monitoring_snapshot, tick_monitoring_feed, MonitoringSnapshot};
pub use types::{leading_number, Metric, MetricCategory, MetricKind, MetricStatus};

use bevy::prelude::*;

use crate::sim_config::SimulationConfig;
use crate::views::{AppViewFeedExt, DashboardView};

pub struct MonitoringPlugin;

impl Plugin for MonitoringPlugin {
    fn build(&self, app: &mut App) {
        let interval = app
            .world()
            .get_resource::<SimulationConfig>()
            .cloned()
            .unwrap_or_default()
            .monitoring_interval();

        app.init_resource::<MonitoringSimulator>()
            .add_event::<MonitoringSnapshot>()
            .register_view_feed(DashboardView::Monitoring, interval, tick_monitoring_feed)
            .add_systems(
                FixedUpdate,
                publish_monitoring_snapshot.in_set(crate::SimulationSet::PostSim),
            );
    }
}
