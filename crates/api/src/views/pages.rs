//! Full HTML pages.

use super::{document, escape_html, game_path, LOBBY_PATH};

/// `GET /`: a link into the lobby.
pub fn root_page() -> String {
    format!("<a href='{LOBBY_PATH}'>Avalon</a>")
}

/// `GET /avalon`: new-game link plus the list of games.
pub fn landing_page() -> String {
    let body = format!(
        "<h1>Avalon</h1>\n\
         <p><a href=\"{LOBBY_PATH}/new_game\">New game</a></p>\n\
         <section id=\"games\" hx-get=\"{LOBBY_PATH}/landing/games\" hx-trigger=\"load\">\n\
         <a href=\"{LOBBY_PATH}/landing/games\">Games</a>\n\
         </section>"
    );
    document("Avalon", &body)
}

/// Setup view of an active game: add-new form, add-existing picker, roster.
pub fn setup_page(game_id: &str) -> String {
    let game = escape_html(&game_path(game_id));
    let id = escape_html(game_id);
    let body = format!(
        "<h1>Game {id}</h1>\n\
         <form method=\"post\" action=\"{game}/add_player\" \
         hx-post=\"{game}/add_player\" hx-target=\"#players\">\n\
         <label>New player <input type=\"text\" name=\"player_name\" required></label>\n\
         <button type=\"submit\">Add</button>\n\
         </form>\n\
         <section id=\"valid-players\" hx-get=\"{game}/valid_players\" hx-trigger=\"load\">\n\
         <a href=\"{game}/valid_players\">Existing players</a>\n\
         </section>\n\
         <section id=\"players\" hx-get=\"{game}/players/game_setup_players_in_game\" \
         hx-trigger=\"load\">\n\
         <a href=\"{game}/players/game_setup_players_in_game\">Players in game</a>\n\
         </section>\n\
         <p><a href=\"{LOBBY_PATH}\">Back to lobby</a></p>"
    );
    document(&format!("Avalon game {game_id}"), &body)
}

/// Shown for games that are no longer active.
pub fn archived_placeholder() -> &'static str {
    "WIP"
}

/// Error page carrying a user-visible message and a link onward.
pub fn flash_page(message: &str, category: &str, location: &str) -> String {
    let body = format!(
        "<div class=\"alert alert-{category}\" role=\"alert\">{message}</div>\n\
         <p><a href=\"{location}\">Continue</a></p>",
        category = escape_html(category),
        message = escape_html(message),
        location = escape_html(location),
    );
    document("Avalon", &body)
}
