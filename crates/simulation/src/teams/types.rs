use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::geo::LatLng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TeamType {
    Rescue,
    Medical,
    Delivery,
}

impl TeamType {
    pub fn name(self) -> &'static str {
        match self {
            TeamType::Rescue => "rescue",
            TeamType::Medical => "medical",
            TeamType::Delivery => "delivery",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TeamStatus {
    #[default]
    Standby,
    EnRoute,
    OnSite,
    Returning,
}

impl TeamStatus {
    pub fn name(self) -> &'static str {
        match self {
            TeamStatus::Standby => "standby",
            TeamStatus::EnRoute => "en-route",
            TeamStatus::OnSite => "on-site",
            TeamStatus::Returning => "returning",
        }
    }

    /// Any status other than standby counts as deployed.
    pub fn is_deployed(self) -> bool {
        self != TeamStatus::Standby
    }
}

/// Where a team is headed and why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub location: LatLng,
    pub incident_id: String,
}

/// Outcome of advancing one team by one waypoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamStep {
    pub location: LatLng,
    pub arrived: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescueTeam {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub team_type: TeamType,
    pub status: TeamStatus,
    pub current_location: LatLng,
    pub destination: Option<Destination>,
    /// Waypoints not yet visited, nearest first.
    #[serde(default, skip_serializing_if = "VecDeque::is_empty")]
    pub route: VecDeque<LatLng>,
    pub members: u32,
    pub resources: Vec<String>,
    pub eta: Option<String>,
}

impl RescueTeam {
    /// A team on standby at `location` with no route.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        team_type: TeamType,
        location: LatLng,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            team_type,
            status: TeamStatus::Standby,
            current_location: location,
            destination: None,
            route: VecDeque::new(),
            members: 0,
            resources: Vec::new(),
            eta: None,
        }
    }

    /// Move to the next waypoint if en route.
    ///
    /// Teams that are not en route, or have no waypoints left, do not move.
    /// Consuming the last waypoint puts the team on site.
    pub fn advance(&mut self) -> Option<TeamStep> {
        if self.status != TeamStatus::EnRoute {
            return None;
        }
        let next = self.route.pop_front()?;
        self.current_location = next;
        let arrived = self.route.is_empty();
        if arrived {
            self.status = TeamStatus::OnSite;
            self.eta = None;
        }
        Some(TeamStep {
            location: next,
            arrived,
        })
    }
}
