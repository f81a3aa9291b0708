//! Request handlers.
//!
//! `games`, `players` and `roles` serve the JSON API under `/api/v1`;
//! `pages` serves the server-rendered lobby under `/avalon`.

pub mod games;
pub mod pages;
pub mod players;
pub mod roles;
