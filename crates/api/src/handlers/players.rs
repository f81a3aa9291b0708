//! Handlers for the `/players` resource.

use avalon_core::error::CoreError;
use avalon_core::player_input::validate_player_name;
use avalon_core::types::DbId;
use avalon_db::models::player::{CreatePlayer, Player};
use avalon_db::repositories::PlayerRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/players
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePlayer>,
) -> AppResult<(StatusCode, Json<DataResponse<Player>>)> {
    let name = validate_player_name(&input.name)?;
    let player = PlayerRepo::create(&state.pool, &CreatePlayer { name }).await?;
    tracing::info!(player_id = player.player_id, player_name = %player.name, "Player registered");
    Ok((StatusCode::CREATED, Json(DataResponse { data: player })))
}

/// GET /api/v1/players
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Player>>>> {
    let players = PlayerRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: players }))
}

/// GET /api/v1/players/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Player>>> {
    let player = PlayerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Player", id))?;
    Ok(Json(DataResponse { data: player }))
}
