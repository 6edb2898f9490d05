//! Team management endpoints
//!
//! Every route operates on the authenticated account's own teams; other
//! accounts' teams are invisible and answer 404.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::championship::Championship;
use crate::domain::enrollment::Enrollment;
use crate::domain::geo::Continent;
use crate::domain::team::{SkillSet, Team};
use crate::infrastructure::team::{CreateTeamRequest, UpdateTeamRequest};

/// Create the teams router
pub fn create_teams_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_teams))
        .route("/", post(create_team))
        .route("/{team_id}", get(get_team))
        .route("/{team_id}", put(update_team))
        .route("/{team_id}", delete(delete_team))
}

/// Request to create a new team
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamApiRequest {
    pub name: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub country: String,
    pub continent: Continent,
    pub attack: u8,
    pub midfield: u8,
    pub defense: u8,
    pub resistance: u8,
}

/// Request to update a team; replaces every editable field
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTeamApiRequest {
    pub name: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub country: String,
    pub continent: Continent,
    pub attack: u8,
    pub midfield: u8,
    pub defense: u8,
    pub resistance: u8,
}

/// Team response with the computed overall rating
#[derive(Debug, Clone, Serialize)]
pub struct TeamResponse {
    pub id: String,
    pub name: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub country: String,
    pub continent: Continent,
    pub attack: u8,
    pub midfield: u8,
    pub defense: u8,
    pub resistance: u8,
    pub overall: u8,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        let skills = team.skills();

        Self {
            id: team.id().as_str().to_string(),
            name: team.name().to_string(),
            primary_color: team.primary_color().to_string(),
            secondary_color: team.secondary_color().to_string(),
            country: team.country().to_string(),
            continent: team.continent(),
            attack: skills.attack,
            midfield: skills.midfield,
            defense: skills.defense,
            resistance: skills.resistance,
            overall: team.overall(),
            created_at: team.created_at().to_rfc3339(),
            updated_at: team.updated_at().to_rfc3339(),
        }
    }
}

/// List teams response
#[derive(Debug, Clone, Serialize)]
pub struct ListTeamsResponse {
    pub teams: Vec<TeamResponse>,
    pub total: usize,
}

/// Team detail: the team plus the championships it is enrolled in
#[derive(Debug, Clone, Serialize)]
pub struct TeamDetailResponse {
    pub team: TeamResponse,
    pub championships: Vec<TeamChampionshipResponse>,
}

/// A championship as seen from a team's enrollment list
#[derive(Debug, Clone, Serialize)]
pub struct TeamChampionshipResponse {
    pub id: String,
    pub name: String,
    pub level: String,
    pub enrolled_at: String,
}

impl TeamChampionshipResponse {
    fn from_enrollment(enrollment: &Enrollment, championship: &Championship) -> Self {
        Self {
            id: championship.id().as_str().to_string(),
            name: championship.name().to_string(),
            level: championship.scope().level().to_string(),
            enrolled_at: enrollment.enrolled_at().to_rfc3339(),
        }
    }
}

/// GET /api/teams
pub async fn list_teams(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<ListTeamsResponse>, ApiError> {
    debug!(owner_id = %user.id(), "Listing teams");

    let teams = state
        .team_service
        .list(user.id())
        .await
        .map_err(ApiError::from)?;

    let team_responses: Vec<TeamResponse> = teams.iter().map(TeamResponse::from).collect();
    let total = team_responses.len();

    Ok(Json(ListTeamsResponse {
        teams: team_responses,
        total,
    }))
}

/// POST /api/teams
pub async fn create_team(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(request): Json<CreateTeamApiRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    debug!(owner_id = %user.id(), name = %request.name, "Creating team");

    let service_request = CreateTeamRequest {
        name: request.name,
        primary_color: request.primary_color,
        secondary_color: request.secondary_color,
        country: request.country,
        continent: request.continent,
        skills: SkillSet {
            attack: request.attack,
            midfield: request.midfield,
            defense: request.defense,
            resistance: request.resistance,
        },
    };

    let team = state
        .team_service
        .create(user.id(), service_request)
        .await
        .map_err(ApiError::from)?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
}

/// GET /api/teams/:team_id
pub async fn get_team(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(team_id): Path<String>,
) -> Result<Json<TeamDetailResponse>, ApiError> {
    debug!(owner_id = %user.id(), team_id = %team_id, "Getting team");

    let team = state
        .team_service
        .get(user.id(), &team_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found(format!("Team '{}' not found", team_id)))?;

    let championships = state
        .enrollment_service
        .championships_for_team(team.id())
        .await
        .map_err(ApiError::from)?;

    let championship_responses = championships
        .iter()
        .map(|(enrollment, championship)| {
            TeamChampionshipResponse::from_enrollment(enrollment, championship)
        })
        .collect();

    Ok(Json(TeamDetailResponse {
        team: TeamResponse::from(&team),
        championships: championship_responses,
    }))
}

/// PUT /api/teams/:team_id
pub async fn update_team(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(team_id): Path<String>,
    Json(request): Json<UpdateTeamApiRequest>,
) -> Result<Json<TeamResponse>, ApiError> {
    debug!(owner_id = %user.id(), team_id = %team_id, "Updating team");

    let service_request = UpdateTeamRequest {
        name: request.name,
        primary_color: request.primary_color,
        secondary_color: request.secondary_color,
        country: request.country,
        continent: request.continent,
        skills: SkillSet {
            attack: request.attack,
            midfield: request.midfield,
            defense: request.defense,
            resistance: request.resistance,
        },
    };

    let team = state
        .team_service
        .update(user.id(), &team_id, service_request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(TeamResponse::from(&team)))
}

/// DELETE /api/teams/:team_id
pub async fn delete_team(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(team_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    debug!(owner_id = %user.id(), team_id = %team_id, "Deleting team");

    let deleted = state
        .team_service
        .delete(user.id(), &team_id)
        .await
        .map_err(ApiError::from)?;

    if !deleted {
        return Err(ApiError::not_found(format!(
            "Team '{}' not found",
            team_id
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}
