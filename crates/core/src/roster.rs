//! Roster projections over the global player list.

use std::collections::HashSet;

use crate::types::DbId;

/// Anything carrying a player identifier.
pub trait HasPlayerId {
    fn player_id(&self) -> DbId;
}

/// Players that can still join a game: every player whose id does not
/// appear in `roster_ids`. Input order is preserved.
pub fn players_not_in_roster<P: HasPlayerId>(all_players: Vec<P>, roster_ids: &[DbId]) -> Vec<P> {
    let taken: HashSet<DbId> = roster_ids.iter().copied().collect();
    all_players
        .into_iter()
        .filter(|p| !taken.contains(&p.player_id()))
        .collect()
}

/// Players that are in the roster, in the order of `all_players`.
///
/// Duplicate roster entries do not duplicate the output.
pub fn players_in_roster<P: HasPlayerId>(all_players: Vec<P>, roster_ids: &[DbId]) -> Vec<P> {
    let taken: HashSet<DbId> = roster_ids.iter().copied().collect();
    all_players
        .into_iter()
        .filter(|p| taken.contains(&p.player_id()))
        .collect()
}
