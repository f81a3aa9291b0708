use avalon_core::types::GameId;

/// Failures from multi-statement store operations.
///
/// Single-statement repository methods return `sqlx::Error` directly; this
/// type only adds the outcomes that need more than one round trip.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Every optimistic write attempt lost to a concurrent writer.
    #[error("State of game {game_id} changed concurrently on all {attempts} write attempts")]
    Contended { game_id: GameId, attempts: u32 },
}
