//! Validation for "seat a player" requests.
//!
//! A request either names an existing player by id or supplies a display
//! name for a brand-new player. Blank values count as absent.

use crate::error::CoreError;
use crate::types::DbId;

/// Maximum length of a player display name, in characters.
pub const MAX_PLAYER_NAME_LEN: usize = 64;

/// Who should be seated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerSelection {
    /// An already-registered player.
    Existing(DbId),
    /// Register a new player with this (trimmed) name, then seat them.
    New(String),
}

/// Validate a display name: trimmed, non-empty, at most
/// [`MAX_PLAYER_NAME_LEN`] characters.
pub fn validate_player_name(name: &str) -> Result<String, CoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CoreError::Validation(
            "Player name cannot be empty.".to_string(),
        ));
    }
    if name.chars().count() > MAX_PLAYER_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Player name must be at most {MAX_PLAYER_NAME_LEN} characters."
        )));
    }
    Ok(name.to_string())
}

/// Parse a player identifier taken from a form field or URL segment.
pub fn parse_player_id(raw: &str) -> Result<DbId, CoreError> {
    raw.trim()
        .parse::<DbId>()
        .map_err(|_| CoreError::Validation(format!("Invalid player ID: {raw}")))
}

/// Resolve raw form values into a [`PlayerSelection`].
///
/// Exactly one of `player_id` and `player_name` must be present. A blank
/// name is rejected as empty; a blank id, or both fields at once, is an
/// invalid request.
pub fn select_player(
    player_id: Option<&str>,
    player_name: Option<&str>,
) -> Result<PlayerSelection, CoreError> {
    match (player_id, player_name) {
        (None, None) => Err(CoreError::Validation(
            "Player name or ID must be provided.".to_string(),
        )),
        (Some(raw), None) if !raw.trim().is_empty() => {
            parse_player_id(raw).map(PlayerSelection::Existing)
        }
        (None, Some(name)) => validate_player_name(name).map(PlayerSelection::New),
        _ => Err(CoreError::Validation(
            "Invalid player name or ID.".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_only_selects_existing() {
        assert_eq!(
            select_player(Some("3"), None).unwrap(),
            PlayerSelection::Existing(3)
        );
    }

    #[test]
    fn name_only_selects_new_trimmed() {
        assert_eq!(
            select_player(None, Some("  Alice ")).unwrap(),
            PlayerSelection::New("Alice".into())
        );
    }

    #[test]
    fn blank_id_alone_is_invalid() {
        assert!(matches!(
            select_player(Some("  "), None),
            Err(CoreError::Validation(msg)) if msg == "Invalid player name or ID."
        ));
    }

    #[test]
    fn id_and_name_together_are_invalid() {
        for (id, name) in [(Some("7"), Some("Carol")), (Some(""), Some("Bob"))] {
            assert!(matches!(
                select_player(id, name),
                Err(CoreError::Validation(msg)) if msg == "Invalid player name or ID."
            ));
        }
    }

    #[test]
    fn blank_name_is_empty() {
        assert!(matches!(
            select_player(None, Some("   ")),
            Err(CoreError::Validation(msg)) if msg == "Player name cannot be empty."
        ));
    }

    #[test]
    fn rejects_both_missing() {
        assert!(matches!(
            select_player(None, None),
            Err(CoreError::Validation(msg)) if msg.contains("must be provided")
        ));
    }

    #[test]
    fn rejects_non_numeric_id() {
        assert!(matches!(
            select_player(Some("abc"), None),
            Err(CoreError::Validation(msg)) if msg.contains("abc")
        ));
    }

    #[test]
    fn parse_player_id_trims_and_rejects_text() {
        assert_eq!(parse_player_id(" 12 ").unwrap(), 12);
        assert!(parse_player_id("abc").is_err());
    }

    #[test]
    fn rejects_overlong_name() {
        let name = "x".repeat(MAX_PLAYER_NAME_LEN + 1);
        assert!(validate_player_name(&name).is_err());
        assert!(validate_player_name(&name[..MAX_PLAYER_NAME_LEN]).is_ok());
    }
}
