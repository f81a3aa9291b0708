//! Row types and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! table row and, where rows can be created through the API, a
//! `Deserialize` create DTO.

pub mod game;
pub mod player;
