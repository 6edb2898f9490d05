//! Championship management and enrollment endpoints
//!
//! CRUD over the authenticated account's championships plus the roster
//! operations: eligible-team listing, enroll and remove.

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
use crate::api::teams::TeamResponse;
use crate::api::types::{ApiError, Json};
use crate::domain::championship::{Championship, ChampionshipScope};
use crate::domain::enrollment::Enrollment;
use crate::infrastructure::championship::{CreateChampionshipRequest, UpdateChampionshipRequest};

/// Create the championships router
pub fn create_championships_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_championships))
        .route("/", post(create_championship))
        .route("/{championship_id}", get(get_championship))
        .route("/{championship_id}", put(update_championship))
        .route("/{championship_id}", delete(delete_championship))
        .route("/{championship_id}/eligible-teams", get(eligible_teams))
        .route("/{championship_id}/teams", post(enroll_team))
        .route("/{championship_id}/teams/{team_id}", delete(remove_team))
}

/// Request to create a new championship.
///
/// The scope is tagged by `level` and flattened into the body:
/// `{"name": "...", "level": "national", "country": "Brazil", ...}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChampionshipApiRequest {
    pub name: String,
    #[serde(flatten)]
    pub scope: ChampionshipScope,
    pub min_teams: u32,
    pub max_teams: u32,
}

/// Request to update a championship; replaces every editable field
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateChampionshipApiRequest {
    pub name: String,
    #[serde(flatten)]
    pub scope: ChampionshipScope,
    pub min_teams: u32,
    pub max_teams: u32,
}

/// Championship response
#[derive(Debug, Clone, Serialize)]
pub struct ChampionshipResponse {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub scope: ChampionshipScope,
    pub min_teams: u32,
    pub max_teams: u32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Championship> for ChampionshipResponse {
    fn from(championship: &Championship) -> Self {
        Self {
            id: championship.id().as_str().to_string(),
            name: championship.name().to_string(),
            scope: championship.scope().clone(),
            min_teams: championship.min_teams(),
            max_teams: championship.max_teams(),
            created_at: championship.created_at().to_rfc3339(),
            updated_at: championship.updated_at().to_rfc3339(),
        }
    }
}

/// A championship in a listing, with its current roster size
#[derive(Debug, Clone, Serialize)]
pub struct ChampionshipListEntry {
    #[serde(flatten)]
    pub championship: ChampionshipResponse,
    pub enrolled_teams: u64,
}

/// List championships response
#[derive(Debug, Clone, Serialize)]
pub struct ListChampionshipsResponse {
    pub championships: Vec<ChampionshipListEntry>,
    pub total: usize,
}

/// Championship detail: the championship plus its enrolled teams
#[derive(Debug, Clone, Serialize)]
pub struct ChampionshipDetailResponse {
    pub championship: ChampionshipResponse,
    pub roster: Vec<RosterEntryResponse>,
}

/// An enrolled team with its enrollment timestamp
#[derive(Debug, Clone, Serialize)]
pub struct RosterEntryResponse {
    #[serde(flatten)]
    pub team: TeamResponse,
    pub enrolled_at: String,
}

/// Eligible teams response
#[derive(Debug, Clone, Serialize)]
pub struct EligibleTeamsResponse {
    pub teams: Vec<TeamResponse>,
    pub total: usize,
}

/// Request to enroll a team
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollTeamApiRequest {
    pub team_id: String,
}

/// A created enrollment
#[derive(Debug, Clone, Serialize)]
pub struct EnrollmentResponse {
    pub championship_id: String,
    pub team_id: String,
    pub enrolled_at: String,
}

impl From<&Enrollment> for EnrollmentResponse {
    fn from(enrollment: &Enrollment) -> Self {
        Self {
            championship_id: enrollment.championship_id().as_str().to_string(),
            team_id: enrollment.team_id().as_str().to_string(),
            enrolled_at: enrollment.enrolled_at().to_rfc3339(),
        }
    }
}

/// GET /api/championships
pub async fn list_championships(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<ListChampionshipsResponse>, ApiError> {
    debug!(owner_id = %user.id(), "Listing championships");

    let championships = state
        .championship_service
        .list(user.id())
        .await
        .map_err(ApiError::from)?;

    let mut entries = Vec::with_capacity(championships.len());

    for championship in &championships {
        let enrolled_teams = state
            .enrollment_service
            .roster_size(championship.id())
            .await
            .map_err(ApiError::from)?;

        entries.push(ChampionshipListEntry {
            championship: ChampionshipResponse::from(championship),
            enrolled_teams,
        });
    }

    let total = entries.len();

    Ok(Json(ListChampionshipsResponse {
        championships: entries,
        total,
    }))
}

/// POST /api/championships
pub async fn create_championship(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(request): Json<CreateChampionshipApiRequest>,
) -> Result<(StatusCode, Json<ChampionshipResponse>), ApiError> {
    debug!(owner_id = %user.id(), name = %request.name, "Creating championship");

    let service_request = CreateChampionshipRequest {
        name: request.name,
        scope: request.scope,
        min_teams: request.min_teams,
        max_teams: request.max_teams,
    };

    let championship = state
        .championship_service
        .create(user.id(), service_request)
        .await
        .map_err(ApiError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(ChampionshipResponse::from(&championship)),
    ))
}

/// GET /api/championships/:championship_id
pub async fn get_championship(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(championship_id): Path<String>,
) -> Result<Json<ChampionshipDetailResponse>, ApiError> {
    debug!(owner_id = %user.id(), championship_id = %championship_id, "Getting championship");

    let championship = state
        .championship_service
        .get(user.id(), &championship_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| {
            ApiError::not_found(format!("Championship '{}' not found", championship_id))
        })?;

    let roster = state
        .enrollment_service
        .roster(user.id(), &championship_id)
        .await
        .map_err(ApiError::from)?;

    let roster_responses = roster
        .iter()
        .map(|(enrollment, team)| RosterEntryResponse {
            team: TeamResponse::from(team),
            enrolled_at: enrollment.enrolled_at().to_rfc3339(),
        })
        .collect();

    Ok(Json(ChampionshipDetailResponse {
        championship: ChampionshipResponse::from(&championship),
        roster: roster_responses,
    }))
}

/// PUT /api/championships/:championship_id
pub async fn update_championship(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(championship_id): Path<String>,
    Json(request): Json<UpdateChampionshipApiRequest>,
) -> Result<Json<ChampionshipResponse>, ApiError> {
    debug!(owner_id = %user.id(), championship_id = %championship_id, "Updating championship");

    let service_request = UpdateChampionshipRequest {
        name: request.name,
        scope: request.scope,
        min_teams: request.min_teams,
        max_teams: request.max_teams,
    };

    let championship = state
        .championship_service
        .update(user.id(), &championship_id, service_request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ChampionshipResponse::from(&championship)))
}

/// DELETE /api/championships/:championship_id
pub async fn delete_championship(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(championship_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    debug!(owner_id = %user.id(), championship_id = %championship_id, "Deleting championship");

    let deleted = state
        .championship_service
        .delete(user.id(), &championship_id)
        .await
        .map_err(ApiError::from)?;

    if !deleted {
        return Err(ApiError::not_found(format!(
            "Championship '{}' not found",
            championship_id
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/championships/:championship_id/eligible-teams
pub async fn eligible_teams(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(championship_id): Path<String>,
) -> Result<Json<EligibleTeamsResponse>, ApiError> {
    debug!(owner_id = %user.id(), championship_id = %championship_id, "Listing eligible teams");

    let teams = state
        .enrollment_service
        .eligible_teams(user.id(), &championship_id)
        .await
        .map_err(ApiError::from)?;

    let team_responses: Vec<TeamResponse> = teams.iter().map(TeamResponse::from).collect();
    let total = team_responses.len();

    Ok(Json(EligibleTeamsResponse {
        teams: team_responses,
        total,
    }))
}

/// POST /api/championships/:championship_id/teams
pub async fn enroll_team(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(championship_id): Path<String>,
    Json(request): Json<EnrollTeamApiRequest>,
) -> Result<(StatusCode, Json<EnrollmentResponse>), ApiError> {
    debug!(
        owner_id = %user.id(),
        championship_id = %championship_id,
        team_id = %request.team_id,
        "Enrolling team"
    );

    let enrollment = state
        .enrollment_service
        .enroll(user.id(), &championship_id, &request.team_id)
        .await
        .map_err(ApiError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(EnrollmentResponse::from(&enrollment)),
    ))
}

/// DELETE /api/championships/:championship_id/teams/:team_id
///
/// Succeeds with 204 even when the pair was not enrolled; removal is
/// idempotent.
pub async fn remove_team(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path((championship_id, team_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    debug!(
        owner_id = %user.id(),
        championship_id = %championship_id,
        team_id = %team_id,
        "Removing team from championship"
    );

    state
        .enrollment_service
        .remove(user.id(), &championship_id, &team_id)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
