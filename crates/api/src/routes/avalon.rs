//! Route definitions for the server-rendered lobby.
//!
//! Paths are spelled out in full rather than nested so that both `/avalon`
//! and `/avalon/` reach the landing page.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// HTML routes, merged at the root.
///
/// ```text
/// GET  /                                                -> root
/// GET  /avalon                                          -> landing
/// GET  /avalon/new_game                                 -> new_game
/// GET  /avalon/game/{id}                                -> game
/// POST /avalon/game/{id}/add_player                     -> add_player
/// GET  /avalon/game/{id}/remove_player/{player_id}      -> remove_player
/// GET  /avalon/landing/games                            -> landing_games
/// GET  /avalon/landing/game/{id}/players                -> landing_game_players
/// GET  /avalon/game/{id}/valid_players                  -> valid_players
/// GET  /avalon/game/{id}/players/game_setup_players_in_game -> players_in_game
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::root))
        .route("/avalon", get(pages::landing))
        .route("/avalon/", get(pages::landing))
        .route("/avalon/new_game", get(pages::new_game))
        .route("/avalon/game/{id}", get(pages::game))
        .route("/avalon/game/{id}/add_player", post(pages::add_player))
        .route(
            "/avalon/game/{id}/remove_player/{player_id}",
            get(pages::remove_player),
        )
        .route("/avalon/landing/games", get(pages::landing_games))
        .route(
            "/avalon/landing/game/{id}/players",
            get(pages::landing_game_players),
        )
        .route("/avalon/game/{id}/valid_players", get(pages::valid_players))
        .route(
            "/avalon/game/{id}/players/game_setup_players_in_game",
            get(pages::players_in_game),
        )
}
