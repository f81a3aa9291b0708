//! Route definitions for the `/games` resource.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::games;
use crate::state::AppState;

/// Routes mounted at `/games`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /{id}                          -> get_by_id
/// PUT    /{id}/active                   -> set_active
///
/// GET    /{id}/players                  -> list_players
/// POST   /{id}/players                  -> add_player
/// DELETE /{id}/players/{player_id}      -> remove_player
/// GET    /{id}/valid-players            -> valid_players
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(games::list).post(games::create))
        .route("/{id}", get(games::get_by_id))
        .route("/{id}/active", put(games::set_active))
        .route(
            "/{id}/players",
            get(games::list_players).post(games::add_player),
        )
        .route("/{id}/players/{player_id}", delete(games::remove_player))
        .route("/{id}/valid-players", get(games::valid_players))
}
