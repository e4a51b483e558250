//! Latest published state for UI consumers.
//!
//! Simulators publish a snapshot event whenever they change; the most recent
//! one is also kept here so a view that mounts late can render immediately.
//! `None` means nothing has been published yet and the view should show its
//! loading state.

use bevy::prelude::*;

use crate::monitoring::MonitoringSnapshot;
use crate::teams::TeamSnapshot;

#[derive(Resource, Default, Debug, Clone)]
pub struct LatestSnapshots {
    pub monitoring: Option<MonitoringSnapshot>,
    pub teams: Option<TeamSnapshot>,
}

impl LatestSnapshots {
    pub fn is_loading(&self) -> bool {
        self.monitoring.is_none() || self.teams.is_none()
    }
}
