//! Incident reports shown on the incident board, with their resource needs
//! and urgent cases. Status updates go through [`IncidentRegistry`].

pub mod registry;
pub mod seed;
pub mod types;

pub use registry::{IncidentError, IncidentRegistry};
pub use seed::seed_incidents;
pub use types::{
    CasePriority, Evidence, IncidentLocation, IncidentReport, IncidentStatus, ResourceNeed,
    ResourceStatus, ResourceType, Severity, UrgentCase, UrgentCaseStatus, UrgentCaseType,
};

use bevy::prelude::*;

pub struct IncidentsPlugin;

impl Plugin for IncidentsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<IncidentRegistry>();
    }
}
