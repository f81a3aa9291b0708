//! Domain types and pure logic for the Avalon lobby.
//!
//! Nothing in this crate touches the database or HTTP; the `db` and `api`
//! crates build on these types.

pub mod error;
pub mod game_state;
pub mod player_input;
pub mod roles;
pub mod roster;
pub mod types;
