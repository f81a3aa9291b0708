//! Catalog of known Avalon roles.
//!
//! Ordered by how often each role sees play, so the common ones come first
//! when listed. Nothing assigns these yet; the catalog is reference data for
//! clients building a role selection.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleName {
    Merlin,
    Percival,
    Mordred,
    Morgana,
    Untrustworthy,
    SeniorMessenger,
    JuniorMessenger,
    EvilMessenger,
    GoodSorcerer,
    EvilSorcerer,
    Troublemaker,
    Trickster,
    Cleric,
    GoodLancelot,
    EvilLancelot,
    Oberon,
    Lunatic,
    Brute,
    Revealer,
    GoodRogue,
    EvilRogue,
    Assassin,
    Minion,
    LoyalServant,
}

/// Every role, most commonly played first.
pub const ROLE_CATALOG: [RoleName; 24] = [
    RoleName::Merlin,
    RoleName::Percival,
    RoleName::Mordred,
    RoleName::Morgana,
    RoleName::Untrustworthy,
    RoleName::SeniorMessenger,
    RoleName::JuniorMessenger,
    RoleName::EvilMessenger,
    RoleName::GoodSorcerer,
    RoleName::EvilSorcerer,
    RoleName::Troublemaker,
    RoleName::Trickster,
    RoleName::Cleric,
    RoleName::GoodLancelot,
    RoleName::EvilLancelot,
    RoleName::Oberon,
    RoleName::Lunatic,
    RoleName::Brute,
    RoleName::Revealer,
    RoleName::GoodRogue,
    RoleName::EvilRogue,
    RoleName::Assassin,
    RoleName::Minion,
    RoleName::LoyalServant,
];

impl RoleName {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Merlin => "Merlin",
            Self::Percival => "Percival",
            Self::Mordred => "Mordred",
            Self::Morgana => "Morgana",
            Self::Untrustworthy => "Untrustworthy Servant",
            Self::SeniorMessenger => "Senior Messenger",
            Self::JuniorMessenger => "Junior Messenger",
            Self::EvilMessenger => "Evil Messenger",
            Self::GoodSorcerer => "Good Sorcerer",
            Self::EvilSorcerer => "Evil Sorcerer",
            Self::Troublemaker => "Troublemaker",
            Self::Trickster => "Trickster",
            Self::Cleric => "Cleric",
            Self::GoodLancelot => "Good Lancelot",
            Self::EvilLancelot => "Evil Lancelot",
            Self::Oberon => "Oberon",
            Self::Lunatic => "Lunatic",
            Self::Brute => "Brute",
            Self::Revealer => "Revealer",
            Self::GoodRogue => "Good Rogue",
            Self::EvilRogue => "Evil Rogue",
            Self::Assassin => "Assassin",
            Self::Minion => "Minion of Mordred",
            Self::LoyalServant => "Loyal Servant of Arthur",
        }
    }

    /// Whether the role plays for Mordred's side.
    pub fn is_evil(self) -> bool {
        matches!(
            self,
            Self::Mordred
                | Self::Morgana
                | Self::EvilMessenger
                | Self::EvilSorcerer
                | Self::Trickster
                | Self::EvilLancelot
                | Self::Oberon
                | Self::Lunatic
                | Self::Brute
                | Self::Revealer
                | Self::EvilRogue
                | Self::Assassin
                | Self::Minion
        )
    }
}

/// Serializable catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct RoleInfo {
    pub role_name: RoleName,
    pub display_name: &'static str,
    pub evil: bool,
}

impl From<RoleName> for RoleInfo {
    fn from(role: RoleName) -> Self {
        Self {
            role_name: role,
            display_name: role.display_name(),
            evil: role.is_evil(),
        }
    }
}

/// The whole catalog as serializable entries.
pub fn catalog() -> Vec<RoleInfo> {
    ROLE_CATALOG.iter().copied().map(RoleInfo::from).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_has_no_duplicates() {
        let unique: HashSet<_> = ROLE_CATALOG.iter().collect();
        assert_eq!(unique.len(), ROLE_CATALOG.len());
    }

    #[test]
    fn standard_roles_come_first() {
        assert_eq!(
            &ROLE_CATALOG[..4],
            &[
                RoleName::Merlin,
                RoleName::Percival,
                RoleName::Mordred,
                RoleName::Morgana
            ]
        );
    }

    #[test]
    fn alignment_matches_table() {
        assert!(!RoleName::Merlin.is_evil());
        assert!(RoleName::Assassin.is_evil());
        assert!(!RoleName::LoyalServant.is_evil());
        assert!(RoleName::Oberon.is_evil());
    }

    #[test]
    fn evil_count() {
        let evil = ROLE_CATALOG.iter().filter(|r| r.is_evil()).count();
        assert_eq!(evil, 13);
    }

    #[test]
    fn role_name_serializes_screaming_snake() {
        let json = serde_json::to_value(RoleInfo::from(RoleName::SeniorMessenger)).unwrap();
        assert_eq!(json["role_name"], "SENIOR_MESSENGER");
        assert_eq!(json["display_name"], "Senior Messenger");
        assert_eq!(json["evil"], false);
    }
}
