//! Repository for the `players` table.

use avalon_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::player::{CreatePlayer, Player};

const COLUMNS: &str = "player_id, name, active";

/// Provides create and lookup operations for players.
pub struct PlayerRepo;

impl PlayerRepo {
    /// Register a new active player, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreatePlayer) -> Result<Player, sqlx::Error> {
        let query = format!(
            "INSERT INTO players (name, active) VALUES (?, 1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Player>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM players WHERE player_id = ?");
        sqlx::query_as::<_, Player>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every player ordered by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Player>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM players ORDER BY player_id");
        sqlx::query_as::<_, Player>(&query).fetch_all(pool).await
    }
}
