//! HTML fragments composed into the lobby pages.

use avalon_core::types::Timestamp;
use avalon_db::models::game::GameSummary;
use avalon_db::models::player::Player;

use super::{escape_html, game_path, LOBBY_PATH};

/// Human-readable start time, e.g. `October 18, 2026 at 3:04 PM`.
pub fn format_start_time(start: &Timestamp) -> String {
    start.format("%B %-d, %Y at %-I:%M %p").to_string()
}

/// `GET /avalon/landing/games`
pub fn landing_games(games: &[GameSummary]) -> String {
    if games.is_empty() {
        return "<p>No games yet.</p>".to_string();
    }

    let mut html = String::from("<ul class=\"games\">\n");
    for game in games {
        let id = escape_html(&game.game_id);
        let status = if game.active { "" } else { " (archived)" };
        html.push_str(&format!(
            "<li><a href=\"{path}\">{started}</a>{status} \u{2013} {count} player{plural}\
             <div hx-get=\"{LOBBY_PATH}/landing/game/{id}/players\" hx-trigger=\"load\"></div></li>\n",
            path = escape_html(&game_path(&game.game_id)),
            started = escape_html(&format_start_time(&game.start_time)),
            count = game.player_count,
            plural = if game.player_count == 1 { "" } else { "s" },
        ));
    }
    html.push_str("</ul>");
    html
}

/// `GET /avalon/landing/game/{id}/players`
pub fn landing_game_players(players: &[Player]) -> String {
    let mut html = String::from("<ul class=\"player-names\">\n");
    for player in players {
        html.push_str(&format!("<li>{}</li>\n", escape_html(&player.name)));
    }
    html.push_str("</ul>");
    html
}

/// `GET /avalon/game/{id}/valid_players`: picker for registered players
/// not yet seated.
pub fn valid_players(game_id: &str, players: &[Player]) -> String {
    if players.is_empty() {
        return "<p>No other registered players.</p>".to_string();
    }

    let game = escape_html(&game_path(game_id));
    let mut html = format!(
        "<form method=\"post\" action=\"{game}/add_player\" \
         hx-post=\"{game}/add_player\" hx-target=\"#players\">\n\
         <select name=\"player_id\">\n"
    );
    for player in players {
        html.push_str(&format!(
            "<option value=\"{}\">{}</option>\n",
            player.player_id,
            escape_html(&player.name)
        ));
    }
    html.push_str("</select>\n<button type=\"submit\">Add existing</button>\n</form>");
    html
}

/// `GET /avalon/game/{id}/players/game_setup_players_in_game`: roster with
/// remove links.
pub fn players_in_game(game_id: &str, players: &[Player]) -> String {
    if players.is_empty() {
        return "<p>No players yet.</p>".to_string();
    }

    let game = escape_html(&game_path(game_id));
    let mut html = String::from("<ul class=\"roster\">\n");
    for player in players {
        html.push_str(&format!(
            "<li>{name} <a href=\"{game}/remove_player/{id}\" \
             hx-get=\"{game}/remove_player/{id}\" hx-target=\"#players\">remove</a></li>\n",
            name = escape_html(&player.name),
            id = player.player_id,
        ));
    }
    html.push_str("</ul>");
    html
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn player(id: i64, name: &str) -> Player {
        Player {
            player_id: id,
            name: name.to_string(),
            active: true,
        }
    }

    #[test]
    fn start_time_format() {
        let t = chrono::Utc.with_ymd_and_hms(2026, 10, 18, 15, 4, 0).unwrap();
        assert_eq!(format_start_time(&t), "October 18, 2026 at 3:04 PM");
    }

    #[test]
    fn roster_has_remove_links() {
        let html = players_in_game("g1", &[player(3, "Alice")]);
        assert!(html.contains("Alice"));
        assert!(html.contains("/avalon/game/g1/remove_player/3"));
    }

    #[test]
    fn valid_players_lists_options() {
        let html = valid_players("g1", &[player(1, "A"), player(2, "<B>")]);
        assert!(html.contains("<option value=\"1\">A</option>"));
        assert!(html.contains("<option value=\"2\">&lt;B&gt;</option>"));
    }

    #[test]
    fn empty_lists_render_placeholders() {
        assert!(landing_games(&[]).contains("No games yet"));
        assert!(players_in_game("g", &[]).contains("No players yet"));
        assert!(valid_players("g", &[]).contains("No other registered players"));
    }

    #[test]
    fn landing_games_shows_count_and_link() {
        let game = GameSummary {
            game_id: "g1".into(),
            start_time: chrono::Utc.with_ymd_and_hms(2026, 1, 2, 9, 30, 0).unwrap(),
            active: true,
            player_count: 1,
        };
        let html = landing_games(&[game]);
        assert!(html.contains("href=\"/avalon/game/g1\""));
        assert!(html.contains("January 2, 2026 at 9:30 AM"));
        assert!(html.contains("1 player<"));
    }
}
