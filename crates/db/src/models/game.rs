//! Game entity model.

use avalon_core::game_state::GameState;
use avalon_core::types::{GameId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `games` table with its decoded state document.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Game {
    pub game_id: GameId,
    pub state: Json<GameState>,
    pub state_version: i64,
    pub start_time: Timestamp,
    pub active: bool,
}

impl Game {
    pub fn player_count(&self) -> usize {
        self.state.player_count()
    }
}

/// DTO for archiving or reactivating a game.
#[derive(Debug, Clone, Deserialize)]
pub struct SetGameActive {
    pub active: bool,
}

/// Listing view of a game: everything but the full state document.
#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    pub game_id: GameId,
    pub start_time: Timestamp,
    pub active: bool,
    pub player_count: usize,
}

impl From<&Game> for GameSummary {
    fn from(game: &Game) -> Self {
        Self {
            game_id: game.game_id.clone(),
            start_time: game.start_time,
            active: game.active,
            player_count: game.player_count(),
        }
    }
}
