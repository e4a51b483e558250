use super::types::{
    CasePriority, Evidence, IncidentLocation, IncidentReport, IncidentStatus, ResourceNeed,
    ResourceStatus, ResourceType, Severity, UrgentCase, UrgentCaseStatus, UrgentCaseType,
};

const PLACEHOLDER_MEDIA: &str = "/placeholder.svg";

fn media(count: usize) -> Vec<String> {
    vec![PLACEHOLDER_MEDIA.to_string(); count]
}

fn need(
    id: &str,
    resource_type: ResourceType,
    quantity: u32,
    priority: Severity,
    status: ResourceStatus,
    requested_minutes_ago: u32,
) -> ResourceNeed {
    ResourceNeed {
        id: id.to_string(),
        resource_type,
        quantity,
        priority,
        status,
        requested_minutes_ago,
    }
}

fn urgent(
    id: &str,
    case_type: UrgentCaseType,
    description: &str,
    priority: CasePriority,
    status: UrgentCaseStatus,
) -> UrgentCase {
    UrgentCase {
        id: id.to_string(),
        case_type,
        description: description.to_string(),
        priority,
        status,
    }
}

/// Startup incident reports.
pub fn seed_incidents() -> Vec<IncidentReport> {
    vec![
        IncidentReport {
            id: "INC-001".to_string(),
            location: IncidentLocation {
                lat: 10.7769,
                lng: 106.7009,
                address: "District 1, Ho Chi Minh City".to_string(),
            },
            severity: Severity::Critical,
            incident_type: "Severe Flooding".to_string(),
            description: "Water level rising rapidly, multiple families trapped on rooftops"
                .to_string(),
            reported_by: "Nguyen Van A".to_string(),
            reported_minutes_ago: 30,
            status: IncidentStatus::Responding,
            evidence: Evidence {
                photos: media(2),
                videos: Vec::new(),
            },
            resource_needs: vec![
                need("RN-001", ResourceType::Boat, 3, Severity::Critical, ResourceStatus::EnRoute, 20),
                need("RN-002", ResourceType::Medical, 1, Severity::High, ResourceStatus::Needed, 20),
                need("RN-003", ResourceType::Food, 50, Severity::Medium, ResourceStatus::Needed, 10),
            ],
            urgent_cases: vec![
                urgent(
                    "UC-001",
                    UrgentCaseType::Pregnant,
                    "Pregnant woman in labor, needs immediate medical attention",
                    CasePriority::Critical,
                    UrgentCaseStatus::Pending,
                ),
                urgent(
                    "UC-002",
                    UrgentCaseType::Infant,
                    "2 infants, 6 months old, need evacuation",
                    CasePriority::High,
                    UrgentCaseStatus::Pending,
                ),
            ],
        },
        IncidentReport {
            id: "INC-002".to_string(),
            location: IncidentLocation {
                lat: 10.7850,
                lng: 106.6950,
                address: "District 3, Ho Chi Minh City".to_string(),
            },
            severity: Severity::High,
            incident_type: "Flooding".to_string(),
            description: "Street flooding, 15 households affected".to_string(),
            reported_by: "Tran Thi B".to_string(),
            reported_minutes_ago: 60,
            status: IncidentStatus::Responding,
            evidence: Evidence {
                photos: media(1),
                videos: media(1),
            },
            resource_needs: vec![
                need("RN-004", ResourceType::Water, 100, Severity::High, ResourceStatus::EnRoute, 40),
                need("RN-005", ResourceType::Blanket, 30, Severity::Medium, ResourceStatus::Needed, 30),
            ],
            urgent_cases: vec![urgent(
                "UC-003",
                UrgentCaseType::Elderly,
                "3 elderly people with mobility issues",
                CasePriority::High,
                UrgentCaseStatus::Evacuating,
            )],
        },
        IncidentReport {
            id: "INC-003".to_string(),
            location: IncidentLocation {
                lat: 10.7700,
                lng: 106.7100,
                address: "District 4, Ho Chi Minh City".to_string(),
            },
            severity: Severity::Medium,
            incident_type: "Moderate Flooding".to_string(),
            description: "Road partially flooded, traffic disrupted".to_string(),
            reported_by: "Le Van C".to_string(),
            reported_minutes_ago: 120,
            status: IncidentStatus::Resolved,
            evidence: Evidence {
                photos: media(2),
                videos: Vec::new(),
            },
            resource_needs: Vec::new(),
            urgent_cases: Vec::new(),
        },
    ]
}
