//! Repository for the `games` table.
//!
//! The state document is always read and written whole. Mutations go
//! through [`GameRepo::modify_state`], which guards the write with the
//! `state_version` counter so a concurrent writer cannot silently discard
//! another writer's change.

use avalon_core::game_state::{self, GameState};
use avalon_core::types::{new_game_id, DbId, GameId};
use sqlx::types::Json;
use sqlx::SqlitePool;

use crate::error::StoreError;
use crate::models::game::Game;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "game_id, state, state_version, start_time, active";

/// How many times [`GameRepo::modify_state`] re-reads and retries after
/// losing a version race before giving up.
pub const MAX_STATE_WRITE_ATTEMPTS: u32 = 5;

/// Provides game creation, lookup, and state document persistence.
pub struct GameRepo;

impl GameRepo {
    /// Create an active game with an empty state document.
    pub async fn create(pool: &SqlitePool) -> Result<Game, sqlx::Error> {
        let query = format!(
            "INSERT INTO games (game_id, state, state_version, start_time, active)
             VALUES (?, ?, 0, ?, 1)
             RETURNING {COLUMNS}"
        );
        let game = sqlx::query_as::<_, Game>(&query)
            .bind(new_game_id())
            .bind(Json(GameState::new()))
            .bind(chrono::Utc::now())
            .fetch_one(pool)
            .await?;
        tracing::debug!(game_id = %game.game_id, "Created game");
        Ok(game)
    }

    pub async fn find_by_id(pool: &SqlitePool, game_id: &str) -> Result<Option<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE game_id = ?");
        sqlx::query_as::<_, Game>(&query)
            .bind(game_id)
            .fetch_optional(pool)
            .await
    }

    /// List all games, most recently started first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games ORDER BY start_time DESC");
        sqlx::query_as::<_, Game>(&query).fetch_all(pool).await
    }

    pub async fn exists(pool: &SqlitePool, game_id: &str) -> Result<bool, sqlx::Error> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM games WHERE game_id = ?")
            .bind(game_id)
            .fetch_optional(pool)
            .await?;
        Ok(row.is_some())
    }

    /// Number of games that have not been archived.
    pub async fn count_active(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM games WHERE active = 1")
            .fetch_one(pool)
            .await
    }

    /// Archive (`false`) or reactivate (`true`) a game.
    ///
    /// Returns `None` if no game with the given id exists.
    pub async fn set_active(
        pool: &SqlitePool,
        game_id: &str,
        active: bool,
    ) -> Result<Option<Game>, sqlx::Error> {
        let query = format!("UPDATE games SET active = ? WHERE game_id = ? RETURNING {COLUMNS}");
        sqlx::query_as::<_, Game>(&query)
            .bind(active)
            .bind(game_id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch and decode a game's state document.
    pub async fn read_state(
        pool: &SqlitePool,
        game_id: &str,
    ) -> Result<Option<GameState>, sqlx::Error> {
        Ok(Self::read_versioned_state(pool, game_id)
            .await?
            .map(|(state, _)| state))
    }

    /// Fetch a game's state document together with its current version.
    pub async fn read_versioned_state(
        pool: &SqlitePool,
        game_id: &str,
    ) -> Result<Option<(GameState, i64)>, sqlx::Error> {
        let row: Option<(Json<GameState>, i64)> =
            sqlx::query_as("SELECT state, state_version FROM games WHERE game_id = ?")
                .bind(game_id)
                .fetch_optional(pool)
                .await?;
        Ok(row.map(|(Json(state), version)| (state, version)))
    }

    /// Overwrite the state document unconditionally (last writer wins).
    ///
    /// Returns `false` if no game with the given id exists.
    pub async fn write_state(
        pool: &SqlitePool,
        game_id: &str,
        state: &GameState,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE games SET state = ?, state_version = state_version + 1 WHERE game_id = ?",
        )
        .bind(Json(state))
        .bind(game_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Overwrite the state document only if it is still at `expected_version`.
    ///
    /// Returns `false` if the game is missing or another write got there
    /// first.
    pub async fn compare_and_write_state(
        pool: &SqlitePool,
        game_id: &str,
        state: &GameState,
        expected_version: i64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE games SET state = ?, state_version = state_version + 1
             WHERE game_id = ? AND state_version = ?",
        )
        .bind(Json(state))
        .bind(game_id)
        .bind(expected_version)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Read the state, apply `f`, and write the result back.
    ///
    /// If another writer bumps the version in between, the state is re-read
    /// and `f` re-applied, up to [`MAX_STATE_WRITE_ATTEMPTS`] times. Returns
    /// the written state, or `None` if the game does not exist.
    pub async fn modify_state<F>(
        pool: &SqlitePool,
        game_id: &str,
        f: F,
    ) -> Result<Option<GameState>, StoreError>
    where
        F: Fn(GameState) -> GameState,
    {
        for attempt in 1..=MAX_STATE_WRITE_ATTEMPTS {
            let Some((state, version)) = Self::read_versioned_state(pool, game_id).await? else {
                return Ok(None);
            };

            let next = f(state);
            if Self::compare_and_write_state(pool, game_id, &next, version).await? {
                return Ok(Some(next));
            }

            tracing::debug!(game_id, attempt, version, "State write lost a race, retrying");
        }

        tracing::warn!(game_id, "Giving up on contended state write");
        Err(StoreError::Contended {
            game_id: GameId::from(game_id),
            attempts: MAX_STATE_WRITE_ATTEMPTS,
        })
    }

    /// Seat `player_id` in the game. Duplicates are not rejected.
    pub async fn add_player_to_game(
        pool: &SqlitePool,
        game_id: &str,
        player_id: DbId,
    ) -> Result<Option<GameState>, StoreError> {
        let state =
            Self::modify_state(pool, game_id, |s| game_state::add_player(s, player_id)).await?;
        if state.is_some() {
            tracing::debug!(game_id, player_id, "Added player to game");
        }
        Ok(state)
    }

    /// Remove every seat held by `player_id`. Absent players are a no-op.
    pub async fn remove_player_from_game(
        pool: &SqlitePool,
        game_id: &str,
        player_id: DbId,
    ) -> Result<Option<GameState>, StoreError> {
        let state =
            Self::modify_state(pool, game_id, |s| game_state::remove_player(s, player_id)).await?;
        if state.is_some() {
            tracing::debug!(game_id, player_id, "Removed player from game");
        }
        Ok(state)
    }
}
