/// Player primary keys are SQLite `INTEGER PRIMARY KEY` rowids.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Games are keyed by a random UUID v4 token stored as text.
pub type GameId = String;

/// Generate a fresh game identifier.
pub fn new_game_id() -> GameId {
    uuid::Uuid::new_v4().to_string()
}
