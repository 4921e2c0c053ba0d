//! Stats page generation

use maud::{Markup, html};

use crate::components::layout::document;
use crate::components::panel::stats_card;

/// Stylesheet path relative to the generated page.
pub const STATS_STYLESHEET: &str = "assets/stats.css";

/// Generates stats page HTML
///
/// # Arguments
///
/// * `title`: Page and card title
/// * `content_html`: Rendered panel content (markdown output or fallback message)
///
/// # Returns
///
/// Complete HTML document markup
///
/// # Examples
///
/// ```
/// use stylx_stats::pages::stats::generate;
///
/// let page = generate("Statistics", "<p>Ready</p>").into_string();
/// assert!(page.contains("data-role=\"stats-content\"><p>Ready</p>"));
/// ```
pub fn generate(title: &str, content_html: &str) -> Markup {
    document(
        title,
        STATS_STYLESHEET,
        html! {
            main class="content-wrapper" {
                (stats_card(title, content_html))
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_contains_card_and_stylesheet() {
        // Arrange
        let content = "<ul><li>a</li></ul>";

        // Act
        let page = generate("Trends", content).into_string();

        // Assert
        assert!(page.contains("<title>Trends - STYLX</title>"), "{}", page);
        assert!(page.contains("href=\"assets/stats.css\""));
        assert!(page.contains("<h5 class=\"card-header\">Trends</h5>"));
        assert!(page.contains("data-role=\"stats-content\"><ul><li>a</li></ul></div>"));
    }
}
