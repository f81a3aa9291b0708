//! Handlers for the `/games` resource.
//!
//! Also hosts the seating helpers shared with the HTML lobby handlers.

use avalon_core::error::CoreError;
use avalon_core::game_state::GameState;
use avalon_core::player_input::{select_player, PlayerSelection};
use avalon_core::types::DbId;
use avalon_db::models::game::{Game, GameSummary, SetGameActive};
use avalon_db::models::player::{CreatePlayer, Player};
use avalon_db::repositories::{GameRepo, PlayerRepo, RosterRepo};
use avalon_db::DbPool;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of `POST /games/{id}/players`.
///
/// Either `player_id` (seat an existing player) or `player_name` (register
/// and seat a new one). Sending both is rejected.
#[derive(Debug, Deserialize)]
pub struct AddPlayerRequest {
    pub player_id: Option<DbId>,
    pub player_name: Option<String>,
}

impl AddPlayerRequest {
    fn selection(&self) -> Result<PlayerSelection, CoreError> {
        let player_id = self.player_id.map(|id| id.to_string());
        select_player(player_id.as_deref(), self.player_name.as_deref())
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Fail with `NotFound` unless the game exists.
pub(crate) async fn ensure_game_exists(pool: &DbPool, game_id: &str) -> AppResult<()> {
    if GameRepo::exists(pool, game_id).await? {
        Ok(())
    } else {
        Err(CoreError::not_found("Game", game_id).into())
    }
}

/// Resolve the selection to a player row (registering a new player if
/// asked) and append them to the game's roster.
pub(crate) async fn seat_player(
    pool: &DbPool,
    game_id: &str,
    selection: PlayerSelection,
) -> AppResult<(Player, GameState)> {
    // Checked first so a bad game id does not leave an orphan player behind.
    ensure_game_exists(pool, game_id).await?;

    let player = match selection {
        PlayerSelection::Existing(id) => PlayerRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| CoreError::not_found("Player", id))?,
        PlayerSelection::New(name) => PlayerRepo::create(pool, &CreatePlayer { name }).await?,
    };

    let state = GameRepo::add_player_to_game(pool, game_id, player.player_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Game", game_id))?;

    tracing::info!(
        game_id,
        player_id = player.player_id,
        player_name = %player.name,
        roster_size = state.player_count(),
        "Player seated",
    );
    Ok((player, state))
}

// ---------------------------------------------------------------------------
// Games
// ---------------------------------------------------------------------------

/// POST /api/v1/games
pub async fn create(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<DataResponse<Game>>)> {
    let game = GameRepo::create(&state.pool).await?;
    tracing::info!(game_id = %game.game_id, "Game created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: game })))
}

/// GET /api/v1/games
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<GameSummary>>>> {
    let games = GameRepo::list(&state.pool).await?;
    let data: Vec<GameSummary> = games.iter().map(GameSummary::from).collect();
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/games/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> AppResult<Json<DataResponse<Game>>> {
    let game = GameRepo::find_by_id(&state.pool, &game_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Game", &game_id))?;
    Ok(Json(DataResponse { data: game }))
}

/// PUT /api/v1/games/{id}/active
pub async fn set_active(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    Json(input): Json<SetGameActive>,
) -> AppResult<Json<DataResponse<Game>>> {
    let game = GameRepo::set_active(&state.pool, &game_id, input.active)
        .await?
        .ok_or_else(|| CoreError::not_found("Game", &game_id))?;
    tracing::info!(game_id = %game.game_id, active = game.active, "Game activity changed");
    Ok(Json(DataResponse { data: game }))
}

// ---------------------------------------------------------------------------
// Roster
// ---------------------------------------------------------------------------

/// GET /api/v1/games/{id}/players
pub async fn list_players(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> AppResult<Json<DataResponse<Vec<Player>>>> {
    let players = RosterRepo::players_in_game(&state.pool, &game_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Game", &game_id))?;
    Ok(Json(DataResponse { data: players }))
}

/// GET /api/v1/games/{id}/valid-players
pub async fn valid_players(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> AppResult<Json<DataResponse<Vec<Player>>>> {
    let players = RosterRepo::players_not_in_game(&state.pool, &game_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Game", &game_id))?;
    Ok(Json(DataResponse { data: players }))
}

/// POST /api/v1/games/{id}/players
pub async fn add_player(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    Json(input): Json<AddPlayerRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<GameState>>)> {
    let selection = input.selection()?;
    let (_, game_state) = seat_player(&state.pool, &game_id, selection).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: game_state })))
}

/// DELETE /api/v1/games/{id}/players/{player_id}
pub async fn remove_player(
    State(state): State<AppState>,
    Path((game_id, player_id)): Path<(String, DbId)>,
) -> AppResult<Json<DataResponse<GameState>>> {
    let game_state = GameRepo::remove_player_from_game(&state.pool, &game_id, player_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Game", &game_id))?;
    tracing::info!(game_id = %game_id, player_id, "Player removed from game");
    Ok(Json(DataResponse { data: game_state }))
}
