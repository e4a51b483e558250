use std::collections::VecDeque;

use super::types::{Destination, RescueTeam, TeamStatus, TeamType};
use crate::geo::LatLng;

fn resources(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Startup roster. Routes list only the waypoints still ahead of each team.
pub fn seed_teams() -> Vec<RescueTeam> {
    vec![
        RescueTeam {
            status: TeamStatus::EnRoute,
            destination: Some(Destination {
                location: LatLng::new(10.7769, 106.7009),
                incident_id: "INC-001".to_string(),
            }),
            route: VecDeque::from([LatLng::new(10.7760, 106.6990), LatLng::new(10.7769, 106.7009)]),
            members: 8,
            resources: resources(&["3 boats", "Medical supplies", "Life jackets"]),
            eta: Some("15 minutes".to_string()),
            ..RescueTeam::new(
                "TEAM-001",
                "Rescue Team Alpha",
                TeamType::Rescue,
                LatLng::new(10.7750, 106.6980),
            )
        },
        RescueTeam {
            status: TeamStatus::OnSite,
            destination: Some(Destination {
                location: LatLng::new(10.7850, 106.6950),
                incident_id: "INC-002".to_string(),
            }),
            members: 5,
            resources: resources(&["Ambulance", "Medical equipment", "First aid kits"]),
            ..RescueTeam::new(
                "TEAM-002",
                "Medical Team Beta",
                TeamType::Medical,
                LatLng::new(10.7850, 106.6950),
            )
        },
        RescueTeam {
            status: TeamStatus::EnRoute,
            destination: Some(Destination {
                location: LatLng::new(10.7850, 106.6950),
                incident_id: "INC-002".to_string(),
            }),
            route: VecDeque::from([LatLng::new(10.7825, 106.6925), LatLng::new(10.7850, 106.6950)]),
            members: 4,
            resources: resources(&["100L water", "30 blankets", "Food supplies"]),
            eta: Some("25 minutes".to_string()),
            ..RescueTeam::new(
                "TEAM-003",
                "Supply Delivery Gamma",
                TeamType::Delivery,
                LatLng::new(10.7800, 106.6900),
            )
        },
    ]
}
