//! Handlers for the server-rendered lobby under `/avalon`.
//!
//! Failures render as flash pages (see [`PageError`](crate::error::PageError))
//! pointing back at the lobby or the game page.

use avalon_core::error::CoreError;
use avalon_core::player_input::{parse_player_id, select_player};
use avalon_db::models::game::GameSummary;
use avalon_db::repositories::{GameRepo, RosterRepo};
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;

use crate::error::{FlashExt, PageResult};
use crate::handlers::games::seat_player;
use crate::state::AppState;
use crate::views::{self, fragments, game_path, LOBBY_PATH};

/// Form body of `POST /avalon/game/{id}/add_player`.
#[derive(Debug, Deserialize)]
pub struct AddPlayerForm {
    pub player_name: Option<String>,
    pub player_id: Option<String>,
}

fn roster_fragment_path(game_id: &str) -> String {
    format!("{}/players/game_setup_players_in_game", game_path(game_id))
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// GET /
pub async fn root() -> Html<String> {
    Html(views::root_page())
}

/// GET /avalon
pub async fn landing() -> Html<String> {
    Html(views::landing_page())
}

/// GET /avalon/new_game
pub async fn new_game(State(state): State<AppState>) -> PageResult<Redirect> {
    let game = GameRepo::create(&state.pool).await.or_flash(LOBBY_PATH)?;
    tracing::info!(game_id = %game.game_id, "Game created");
    Ok(Redirect::to(&game_path(&game.game_id)))
}

/// GET /avalon/game/{id}
///
/// Active games show the setup view; archived games a placeholder.
pub async fn game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> PageResult<Html<String>> {
    let game = GameRepo::find_by_id(&state.pool, &game_id)
        .await
        .or_flash(LOBBY_PATH)?
        .ok_or_else(|| CoreError::not_found("Game", &game_id))
        .or_flash(LOBBY_PATH)?;

    tracing::debug!(game_id = %game.game_id, active = game.active, "Rendering game page");
    if !game.active {
        return Ok(Html(views::archived_placeholder().to_string()));
    }
    Ok(Html(views::setup_page(&game.game_id)))
}

/// POST /avalon/game/{id}/add_player
///
/// Seats an existing player (`player_id`) or registers and seats a new one
/// (`player_name`), then redirects to the roster fragment.
pub async fn add_player(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    Form(form): Form<AddPlayerForm>,
) -> PageResult<Redirect> {
    let back = game_path(&game_id);
    let selection =
        select_player(form.player_id.as_deref(), form.player_name.as_deref()).or_flash(&back)?;
    seat_player(&state.pool, &game_id, selection)
        .await
        .or_flash(&back)?;
    Ok(Redirect::to(&roster_fragment_path(&game_id)))
}

/// GET /avalon/game/{id}/remove_player/{player_id}
///
/// Removes the player and re-renders the roster fragment. The id segment is
/// parsed here so a malformed one still gets a flash page.
pub async fn remove_player(
    State(state): State<AppState>,
    Path((game_id, player_id)): Path<(String, String)>,
) -> PageResult<Html<String>> {
    let player_id = parse_player_id(&player_id).or_flash(&game_path(&game_id))?;
    GameRepo::remove_player_from_game(&state.pool, &game_id, player_id)
        .await
        .or_flash(LOBBY_PATH)?
        .ok_or_else(|| CoreError::not_found("Game", &game_id))
        .or_flash(LOBBY_PATH)?;
    tracing::info!(game_id = %game_id, player_id, "Player removed from game");

    render_players_in_game(&state, &game_id).await
}

// ---------------------------------------------------------------------------
// Fragments
// ---------------------------------------------------------------------------

/// GET /avalon/landing/games
pub async fn landing_games(State(state): State<AppState>) -> PageResult<Html<String>> {
    let games = GameRepo::list(&state.pool).await.or_flash(LOBBY_PATH)?;
    let summaries: Vec<GameSummary> = games.iter().map(GameSummary::from).collect();
    Ok(Html(fragments::landing_games(&summaries)))
}

/// GET /avalon/landing/game/{id}/players
pub async fn landing_game_players(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> PageResult<Html<String>> {
    let players = RosterRepo::players_in_game(&state.pool, &game_id)
        .await
        .or_flash(LOBBY_PATH)?
        .ok_or_else(|| CoreError::not_found("Game", &game_id))
        .or_flash(LOBBY_PATH)?;
    Ok(Html(fragments::landing_game_players(&players)))
}

/// GET /avalon/game/{id}/valid_players
pub async fn valid_players(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> PageResult<Html<String>> {
    let players = RosterRepo::players_not_in_game(&state.pool, &game_id)
        .await
        .or_flash(LOBBY_PATH)?
        .ok_or_else(|| CoreError::not_found("Game", &game_id))
        .or_flash(LOBBY_PATH)?;
    tracing::debug!(game_id = %game_id, count = players.len(), "Valid players");
    Ok(Html(fragments::valid_players(&game_id, &players)))
}

/// GET /avalon/game/{id}/players/game_setup_players_in_game
pub async fn players_in_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> PageResult<Html<String>> {
    render_players_in_game(&state, &game_id).await
}

async fn render_players_in_game(state: &AppState, game_id: &str) -> PageResult<Html<String>> {
    let players = RosterRepo::players_in_game(&state.pool, game_id)
        .await
        .or_flash(LOBBY_PATH)?
        .ok_or_else(|| CoreError::not_found("Game", game_id))
        .or_flash(LOBBY_PATH)?;
    Ok(Html(fragments::players_in_game(game_id, &players)))
}
