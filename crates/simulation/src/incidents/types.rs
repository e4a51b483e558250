use serde::{Deserialize, Serialize};

use crate::geo::LatLng;

/// Incident severity, also used as resource-need priority. Most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncidentStatus {
    Pending,
    Responding,
    Resolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceType {
    Medical,
    Food,
    Water,
    Boat,
    Blanket,
    Fuel,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceStatus {
    Needed,
    EnRoute,
    Delivered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UrgentCaseType {
    Injured,
    Child,
    Infant,
    Pregnant,
    Elderly,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CasePriority {
    Critical,
    High,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UrgentCaseStatus {
    Pending,
    Evacuating,
    Evacuated,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentLocation {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

impl IncidentLocation {
    pub fn coordinates(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// References to media attached by the reporter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub photos: Vec<String>,
    pub videos: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceNeed {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub quantity: u32,
    pub priority: Severity,
    pub status: ResourceStatus,
    /// Minutes before startup the request was made.
    pub requested_minutes_ago: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrgentCase {
    pub id: String,
    #[serde(rename = "type")]
    pub case_type: UrgentCaseType,
    pub description: String,
    pub priority: CasePriority,
    pub status: UrgentCaseStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentReport {
    pub id: String,
    pub location: IncidentLocation,
    pub severity: Severity,
    #[serde(rename = "type")]
    pub incident_type: String,
    pub description: String,
    pub reported_by: String,
    /// Minutes before startup the incident was reported.
    pub reported_minutes_ago: u32,
    pub status: IncidentStatus,
    pub evidence: Evidence,
    pub resource_needs: Vec<ResourceNeed>,
    pub urgent_cases: Vec<UrgentCase>,
}

impl IncidentReport {
    pub fn is_active(&self) -> bool {
        self.status != IncidentStatus::Resolved
    }

    /// Resource needs not yet delivered.
    pub fn outstanding_needs(&self) -> impl Iterator<Item = &ResourceNeed> {
        self.resource_needs
            .iter()
            .filter(|n| n.status != ResourceStatus::Delivered)
    }
}
