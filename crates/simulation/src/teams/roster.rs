use std::collections::VecDeque;
use std::fmt;

use bevy::prelude::*;

use super::seed::seed_teams;
use super::types::{Destination, RescueTeam, TeamStatus, TeamStep};
use crate::geo::LatLng;

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// No team with this id.
    UnknownTeam(String),
    /// A dispatch needs at least one waypoint.
    EmptyRoute { team_id: String },
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::UnknownTeam(id) => write!(f, "Unknown rescue team: {id}"),
            DispatchError::EmptyRoute { team_id } => {
                write!(f, "Cannot dispatch {team_id} without a route")
            }
        }
    }
}

impl std::error::Error for DispatchError {}

// =============================================================================
// Simulator
// =============================================================================

/// A team that moved during a tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamMovement {
    pub team_id: String,
    pub step: TeamStep,
}

/// Rescue teams and their movement along assigned routes.
///
/// Each [`tick`](Self::tick) moves every en-route team to its next waypoint.
/// Teams on standby, on site or returning stay where they are.
#[derive(Resource, Debug, Clone)]
pub struct TeamMovementSimulator {
    teams: Vec<RescueTeam>,
    ticks: u64,
}

impl Default for TeamMovementSimulator {
    fn default() -> Self {
        Self::new(seed_teams())
    }
}

impl TeamMovementSimulator {
    pub fn new(teams: Vec<RescueTeam>) -> Self {
        Self { teams, ticks: 0 }
    }

    pub fn teams(&self) -> &[RescueTeam] {
        &self.teams
    }

    pub fn team(&self, id: &str) -> Option<&RescueTeam> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Teams not on standby.
    pub fn deployed_count(&self) -> usize {
        self.teams.iter().filter(|t| t.status.is_deployed()).count()
    }

    /// Advance every en-route team by one waypoint.
    pub fn tick(&mut self) -> Vec<TeamMovement> {
        self.ticks += 1;
        self.teams
            .iter_mut()
            .filter_map(|team| {
                team.advance().map(|step| TeamMovement {
                    team_id: team.id.clone(),
                    step,
                })
            })
            .collect()
    }

    /// Send a team along `route` toward `destination`.
    ///
    /// Replaces whatever route the team had. The team reaches the
    /// destination after `route.len()` ticks.
    pub fn dispatch(
        &mut self,
        team_id: &str,
        destination: Destination,
        route: impl IntoIterator<Item = LatLng>,
    ) -> Result<(), DispatchError> {
        let route: VecDeque<LatLng> = route.into_iter().collect();
        let team = self.team_mut(team_id)?;
        if route.is_empty() {
            return Err(DispatchError::EmptyRoute {
                team_id: team_id.to_string(),
            });
        }
        team.route = route;
        team.destination = Some(destination);
        team.status = TeamStatus::EnRoute;
        Ok(())
    }

    /// Pull a team off its assignment; it heads back to base.
    pub fn recall(&mut self, team_id: &str) -> Result<(), DispatchError> {
        let team = self.team_mut(team_id)?;
        team.route.clear();
        team.destination = None;
        team.eta = None;
        team.status = TeamStatus::Returning;
        Ok(())
    }

    /// Mark a team as back at base and available.
    pub fn stand_down(&mut self, team_id: &str) -> Result<(), DispatchError> {
        let team = self.team_mut(team_id)?;
        team.route.clear();
        team.destination = None;
        team.eta = None;
        team.status = TeamStatus::Standby;
        Ok(())
    }

    fn team_mut(&mut self, team_id: &str) -> Result<&mut RescueTeam, DispatchError> {
        self.teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or_else(|| DispatchError::UnknownTeam(team_id.to_string()))
    }
}
