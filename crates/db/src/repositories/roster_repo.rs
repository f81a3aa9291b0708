//! Read-only roster projections joining game state with the player table.

use avalon_core::roster::{players_in_roster, players_not_in_roster};
use sqlx::SqlitePool;

use crate::models::player::Player;
use crate::repositories::{GameRepo, PlayerRepo};

pub struct RosterRepo;

impl RosterRepo {
    /// Player rows for everyone seated in the game, in registration order.
    /// A player seated twice appears once.
    ///
    /// Returns `None` if the game does not exist.
    pub async fn players_in_game(
        pool: &SqlitePool,
        game_id: &str,
    ) -> Result<Option<Vec<Player>>, sqlx::Error> {
        let Some(state) = GameRepo::read_state(pool, game_id).await? else {
            return Ok(None);
        };
        let all_players = PlayerRepo::list(pool).await?;
        Ok(Some(players_in_roster(all_players, &state.player_ids())))
    }

    /// Every registered player not yet seated in the game.
    ///
    /// Returns `None` if the game does not exist.
    pub async fn players_not_in_game(
        pool: &SqlitePool,
        game_id: &str,
    ) -> Result<Option<Vec<Player>>, sqlx::Error> {
        let Some(state) = GameRepo::read_state(pool, game_id).await? else {
            return Ok(None);
        };
        let all_players = PlayerRepo::list(pool).await?;
        tracing::debug!(
            game_id,
            total = all_players.len(),
            seated = state.player_count(),
            "Computing players not in game",
        );
        Ok(Some(players_not_in_roster(all_players, &state.player_ids())))
    }
}
