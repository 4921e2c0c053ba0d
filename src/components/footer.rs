//! Page footer component

use maud::{Markup, html};

/// Renders the page footer.
pub fn footer() -> Markup {
    html! {
        footer class="footer" {
            p { "Generated by stylx-stats" }
        }
    }
}
