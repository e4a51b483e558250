use std::fmt;

use bevy::prelude::*;

use super::seed::seed_incidents;
use super::types::{IncidentReport, IncidentStatus, ResourceStatus, UrgentCaseStatus};

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncidentError {
    UnknownIncident(String),
    UnknownResourceNeed {
        incident_id: String,
        resource_id: String,
    },
    UnknownUrgentCase {
        incident_id: String,
        case_id: String,
    },
}

impl fmt::Display for IncidentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncidentError::UnknownIncident(id) => write!(f, "Unknown incident: {id}"),
            IncidentError::UnknownResourceNeed {
                incident_id,
                resource_id,
            } => write!(f, "Incident {incident_id} has no resource need {resource_id}"),
            IncidentError::UnknownUrgentCase {
                incident_id,
                case_id,
            } => write!(f, "Incident {incident_id} has no urgent case {case_id}"),
        }
    }
}

impl std::error::Error for IncidentError {}

// =============================================================================
// Registry
// =============================================================================

/// Reported incidents, their resource needs and urgent cases.
#[derive(Resource, Debug, Clone)]
pub struct IncidentRegistry {
    incidents: Vec<IncidentReport>,
}

impl Default for IncidentRegistry {
    fn default() -> Self {
        Self::new(seed_incidents())
    }
}

impl IncidentRegistry {
    pub fn new(incidents: Vec<IncidentReport>) -> Self {
        Self { incidents }
    }

    pub fn incidents(&self) -> &[IncidentReport] {
        &self.incidents
    }

    pub fn incident(&self, id: &str) -> Option<&IncidentReport> {
        self.incidents.iter().find(|i| i.id == id)
    }

    /// Incidents that are not resolved.
    pub fn active_count(&self) -> usize {
        self.incidents.iter().filter(|i| i.is_active()).count()
    }

    pub fn update_incident_status(
        &mut self,
        id: &str,
        status: IncidentStatus,
    ) -> Result<(), IncidentError> {
        self.incident_mut(id)?.status = status;
        Ok(())
    }

    pub fn update_resource_status(
        &mut self,
        incident_id: &str,
        resource_id: &str,
        status: ResourceStatus,
    ) -> Result<(), IncidentError> {
        let need = self
            .incident_mut(incident_id)?
            .resource_needs
            .iter_mut()
            .find(|n| n.id == resource_id)
            .ok_or_else(|| IncidentError::UnknownResourceNeed {
                incident_id: incident_id.to_string(),
                resource_id: resource_id.to_string(),
            })?;
        need.status = status;
        Ok(())
    }

    pub fn update_urgent_case_status(
        &mut self,
        incident_id: &str,
        case_id: &str,
        status: UrgentCaseStatus,
    ) -> Result<(), IncidentError> {
        let case = self
            .incident_mut(incident_id)?
            .urgent_cases
            .iter_mut()
            .find(|c| c.id == case_id)
            .ok_or_else(|| IncidentError::UnknownUrgentCase {
                incident_id: incident_id.to_string(),
                case_id: case_id.to_string(),
            })?;
        case.status = status;
        Ok(())
    }

    fn incident_mut(&mut self, id: &str) -> Result<&mut IncidentReport, IncidentError> {
        self.incidents
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| IncidentError::UnknownIncident(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::incidents::types::{Severity, UrgentCaseType};

    #[test]
    fn test_seed_has_three_incidents() {
        let registry = IncidentRegistry::default();
        assert_eq!(registry.incidents().len(), 3);
        let ids: Vec<&str> = registry.incidents().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["INC-001", "INC-002", "INC-003"]);
    }

    #[test]
    fn test_active_count_excludes_resolved() {
        let registry = IncidentRegistry::default();
        assert_eq!(registry.active_count(), 2);
    }

    #[test]
    fn test_resolving_incident_lowers_active_count() {
        let mut registry = IncidentRegistry::default();
        registry
            .update_incident_status("INC-001", IncidentStatus::Resolved)
            .unwrap();
        assert_eq!(registry.active_count(), 1);
        assert_eq!(
            registry.incident("INC-001").unwrap().status,
            IncidentStatus::Resolved
        );
    }

    #[test]
    fn test_update_unknown_incident() {
        let mut registry = IncidentRegistry::default();
        let err = registry
            .update_incident_status("INC-404", IncidentStatus::Resolved)
            .unwrap_err();
        assert_eq!(err, IncidentError::UnknownIncident("INC-404".to_string()));
        assert_eq!(err.to_string(), "Unknown incident: INC-404");
    }

    #[test]
    fn test_update_resource_status() {
        let mut registry = IncidentRegistry::default();
        registry
            .update_resource_status("INC-001", "RN-002", ResourceStatus::Delivered)
            .unwrap();
        let incident = registry.incident("INC-001").unwrap();
        let need = incident
            .resource_needs
            .iter()
            .find(|n| n.id == "RN-002")
            .unwrap();
        assert_eq!(need.status, ResourceStatus::Delivered);
        assert_eq!(incident.outstanding_needs().count(), 2);
    }

    #[test]
    fn test_update_resource_on_wrong_incident() {
        let mut registry = IncidentRegistry::default();
        let err = registry
            .update_resource_status("INC-002", "RN-001", ResourceStatus::Delivered)
            .unwrap_err();
        assert!(matches!(err, IncidentError::UnknownResourceNeed { .. }));
        assert_eq!(err.to_string(), "Incident INC-002 has no resource need RN-001");
    }

    #[test]
    fn test_update_urgent_case_status() {
        let mut registry = IncidentRegistry::default();
        registry
            .update_urgent_case_status("INC-001", "UC-001", UrgentCaseStatus::Evacuated)
            .unwrap();
        let case = &registry.incident("INC-001").unwrap().urgent_cases[0];
        assert_eq!(case.case_type, UrgentCaseType::Pregnant);
        assert_eq!(case.status, UrgentCaseStatus::Evacuated);
    }

    #[test]
    fn test_update_unknown_urgent_case() {
        let mut registry = IncidentRegistry::default();
        let err = registry
            .update_urgent_case_status("INC-003", "UC-001", UrgentCaseStatus::Evacuated)
            .unwrap_err();
        assert!(matches!(err, IncidentError::UnknownUrgentCase { .. }));
    }

    #[test]
    fn test_update_unknown_incident_for_nested_updates() {
        let mut registry = IncidentRegistry::default();
        assert!(matches!(
            registry.update_resource_status("nope", "RN-001", ResourceStatus::Needed),
            Err(IncidentError::UnknownIncident(_))
        ));
        assert!(matches!(
            registry.update_urgent_case_status("nope", "UC-001", UrgentCaseStatus::Pending),
            Err(IncidentError::UnknownIncident(_))
        ));
    }

    #[test]
    fn test_severity_orders_most_severe_first() {
        let registry = IncidentRegistry::default();
        let mut severities: Vec<Severity> =
            registry.incidents().iter().map(|i| i.severity).collect();
        severities.reverse();
        severities.sort();
        assert_eq!(
            severities,
            [Severity::Critical, Severity::High, Severity::Medium]
        );
    }

    #[test]
    fn test_serializes_dashboard_field_spelling() {
        let registry = IncidentRegistry::default();
        let json = serde_json::to_value(registry.incident("INC-001").unwrap()).unwrap();
        assert_eq!(json["type"], "Severe Flooding");
        assert_eq!(json["reportedBy"], "Nguyen Van A");
        assert_eq!(json["severity"], "critical");
        assert_eq!(json["resourceNeeds"][0]["status"], "en-route");
        assert_eq!(json["resourceNeeds"][0]["type"], "boat");
    }
}
