//! Inline markup: escaping plus bold and italic spans.

use regex::Regex;
use std::sync::LazyLock;

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("BOLD: hardcoded regex is valid"));

static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.+?)\*").expect("ITALIC: hardcoded regex is valid"));

/// Escapes HTML special characters.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with their entity forms. The
/// ampersand goes first so entities produced by later substitutions are
/// not escaped twice.
///
/// # Arguments
///
/// * `text`: Plain text to escape
///
/// # Returns
///
/// HTML safe string
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Renders leaf text of a block to HTML.
///
/// Escapes the text, then turns `**text**` into `<strong>` and, on the
/// result, `*text*` into `<em>`. Both patterns match the shortest span
/// starting at the leftmost asterisk. Unmatched asterisks stay literal.
///
/// # Arguments
///
/// * `text`: Raw text taken from a markdown line
///
/// # Returns
///
/// Escaped HTML with strong and em tags applied
pub fn render_inline(text: &str) -> String {
    let escaped = escape_html(text);
    let bold = BOLD.replace_all(&escaped, "<strong>${1}</strong>");
    ITALIC.replace_all(&bold, "<em>${1}</em>").into_owned()
}
