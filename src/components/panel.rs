//! Stats card component

use maud::{Markup, PreEscaped, html};

/// Container marker the front end scripts look up.
pub const STATS_CONTENT_ROLE: &str = "stats-content";

/// Renders the stats card
///
/// The card body is the stats container. Its content is inserted without
/// escaping, so callers must pass markup produced by the markdown renderer
/// or an already escaped fallback message.
///
/// # Arguments
///
/// * `title`: Card header text
/// * `content_html`: Rendered panel content
///
/// # Returns
///
/// Card markup with the stats container
pub fn stats_card(title: &str, content_html: &str) -> Markup {
    html! {
        div class="card" {
            h5 class="card-header" { (title) }
            div class="card-body" data-role=(STATS_CONTENT_ROLE) {
                (PreEscaped(content_html))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stats_card_inserts_content_unescaped() {
        // Arrange
        let content = "<h1>Stats</h1>";

        // Act
        let html = stats_card("Weekly & Monthly", content).into_string();

        // Assert
        assert_eq!(
            html,
            "<div class=\"card\"><h5 class=\"card-header\">Weekly &amp; Monthly</h5>\
             <div class=\"card-body\" data-role=\"stats-content\"><h1>Stats</h1></div></div>"
        );
    }
}
