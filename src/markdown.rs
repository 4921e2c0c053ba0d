//! Markdown rendering for the stats panel.
//!
//! This module implements a small, line oriented markdown dialect: paragraphs,
//! headings up to level three, flat ordered and unordered lists, and pipe
//! tables with column alignment. Inline markup is limited to bold and italic,
//! and every piece of text is HTML escaped before markup is applied, so the
//! output is safe to insert into a page as is.

mod block;
mod inline;
mod renderer;
mod table;

pub use inline::{escape_html, render_inline};
pub use renderer::{render, render_opt};
pub use table::Alignment;
