pub mod avalon;
pub mod games;
pub mod health;
pub mod players;
pub mod roles;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /games     games, rosters
/// /players   player registry
/// /roles     role catalog
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/games", games::router())
        .nest("/players", players::router())
        .nest("/roles", roles::router())
}
