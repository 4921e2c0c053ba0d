//! Document shell for generated pages

use maud::{DOCTYPE, Markup, html};

use super::footer::footer;

/// Title suffix shared by every generated page.
const TITLE_SUFFIX: &str = " - STYLX";

/// Wraps body markup in a standalone HTML document linking one stylesheet.
pub fn document(title: &str, stylesheet: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) (TITLE_SUFFIX) }
                link rel="stylesheet" href=(stylesheet);
            }
            body class="layout-wrapper" {
                div class="container" { (body) }
                (footer())
            }
        }
    }
}
