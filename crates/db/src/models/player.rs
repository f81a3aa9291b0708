//! Player entity model and DTOs.

use avalon_core::roster::HasPlayerId;
use avalon_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `players` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Player {
    pub player_id: DbId,
    pub name: String,
    pub active: bool,
}

impl HasPlayerId for Player {
    fn player_id(&self) -> DbId {
        self.player_id
    }
}

/// DTO for registering a new player.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlayer {
    pub name: String,
}
