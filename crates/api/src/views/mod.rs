//! Server-rendered HTML.
//!
//! Pages are full documents; fragments are small snippets the pages pull in
//! with htmx (`hx-get` on load) so each list can refresh independently.
//! Every piece of user-supplied text passes through [`escape_html`].

pub mod fragments;
pub mod pages;

pub use pages::{archived_placeholder, flash_page, landing_page, root_page, setup_page};

/// Path prefix of the HTML lobby.
pub const LOBBY_PATH: &str = "/avalon";

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// `/avalon/game/{id}`
pub fn game_path(game_id: &str) -> String {
    format!("{LOBBY_PATH}/game/{game_id}")
}

/// Wrap `body` in a minimal HTML document.
fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <script src=\"https://unpkg.com/htmx.org@2.0.4\"></script>\n\
         </head>\n\
         <body>\n{body}\n</body>\n\
         </html>\n",
        title = escape_html(title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;"
        );
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(escape_html("Alice"), "Alice");
    }

    #[test]
    fn document_escapes_title() {
        let html = document("<x>", "");
        assert!(html.contains("<title>&lt;x&gt;</title>"));
    }
}
