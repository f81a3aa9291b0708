//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument.

pub mod game_repo;
pub mod player_repo;
pub mod roster_repo;

pub use game_repo::GameRepo;
pub use player_repo::PlayerRepo;
pub use roster_repo::RosterRepo;
