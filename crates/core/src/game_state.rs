//! The per-game state document.
//!
//! A game's mutable state (roster, quests, roles) lives in a single JSON
//! document in the `games.state` column. This module defines its shape and
//! the pure roster edits applied to it. Serialization happens only at the
//! storage boundary.
//!
//! Quests and rounds are part of the document shape but nothing populates
//! them yet.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// One player's seat in a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub player_id: DbId,
    /// Assigned role name. Empty until roles are handed out.
    #[serde(default)]
    pub role: String,
}

/// A single team proposal within a quest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub team: Vec<DbId>,
    pub approvals: Vec<DbId>,
    pub fails: i32,
    pub king: DbId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub rounds: Vec<Round>,
}

/// The full state document of a game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    #[serde(default)]
    pub players: Vec<RosterEntry>,
    #[serde(default)]
    pub quests: Vec<Quest>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl GameState {
    /// An empty document: no players, quests, or roles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Roster identifiers in seating order (duplicates included).
    pub fn player_ids(&self) -> Vec<DbId> {
        self.players.iter().map(|p| p.player_id).collect()
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}

/// Append `player_id` to the roster with an empty role.
///
/// Membership is not deduplicated: adding the same id twice yields two
/// entries. There is no upper bound on roster size.
pub fn add_player(mut state: GameState, player_id: DbId) -> GameState {
    state.players.push(RosterEntry {
        player_id,
        role: String::new(),
    });
    state
}

/// Drop every roster entry for `player_id`. Absent ids are a no-op.
pub fn remove_player(mut state: GameState, player_id: DbId) -> GameState {
    state.players.retain(|p| p.player_id != player_id);
    state
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(ids: &[DbId]) -> GameState {
        ids.iter().fold(GameState::new(), |s, &id| add_player(s, id))
    }

    // -- add_player ----------------------------------------------------------

    #[test]
    fn add_player_appends_entry_with_empty_role() {
        let state = add_player(GameState::new(), 7);
        assert_eq!(
            state.players,
            vec![RosterEntry {
                player_id: 7,
                role: String::new()
            }]
        );
    }

    #[test]
    fn add_player_preserves_order() {
        let state = state_with(&[3, 1, 2]);
        assert_eq!(state.player_ids(), vec![3, 1, 2]);
    }

    #[test]
    fn add_player_twice_keeps_both_entries() {
        let state = state_with(&[4, 4]);
        assert_eq!(state.player_count(), 2);
        assert_eq!(state.player_ids(), vec![4, 4]);
    }

    #[test]
    fn add_player_leaves_quests_and_roles_alone() {
        let mut state = GameState::new();
        state.roles.push("MERLIN".into());
        state.quests.push(Quest::default());

        let state = add_player(state, 1);
        assert_eq!(state.roles, vec!["MERLIN".to_string()]);
        assert_eq!(state.quests.len(), 1);
    }

    // -- remove_player -------------------------------------------------------

    #[test]
    fn remove_after_add_leaves_no_entry() {
        for base in [vec![], vec![1], vec![1, 2, 3], vec![5, 5]] {
            let state = remove_player(add_player(state_with(&base), 5), 5);
            assert!(!state.player_ids().contains(&5), "base roster {base:?}");
        }
    }

    #[test]
    fn remove_player_drops_duplicates() {
        let state = remove_player(state_with(&[9, 1, 9]), 9);
        assert_eq!(state.player_ids(), vec![1]);
    }

    #[test]
    fn remove_absent_player_is_noop() {
        let before = state_with(&[1, 2]);
        let after = remove_player(before.clone(), 42);
        assert_eq!(before, after);
    }

    #[test]
    fn add_then_remove_scenario() {
        // Alice (id 1) joins, then existing player 3 joins and leaves.
        let state = add_player(GameState::new(), 1);
        assert_eq!(state.player_count(), 1);
        assert_eq!(state.players[0].role, "");

        let state = add_player(state, 3);
        assert_eq!(state.player_count(), 2);

        let state = remove_player(state, 3);
        assert_eq!(state.player_ids(), vec![1]);
    }

    // -- serialization -------------------------------------------------------

    #[test]
    fn empty_state_serializes_with_all_keys() {
        let json = serde_json::to_value(GameState::new()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "players": [], "quests": [], "roles": [] })
        );
    }

    #[test]
    fn legacy_document_without_role_field_parses() {
        let state: GameState =
            serde_json::from_str(r#"{"players":[{"player_id":2}],"quests":[],"roles":[]}"#)
                .unwrap();
        assert_eq!(state.players[0].role, "");
    }

    #[test]
    fn round_fields_use_document_names() {
        let round = Round {
            team: vec![1, 2],
            approvals: vec![1],
            fails: 0,
            king: 2,
        };
        let json = serde_json::to_value(&round).unwrap();
        assert_eq!(json["king"], 2);
        assert_eq!(json["team"], serde_json::json!([1, 2]));
    }
}
