//! Markdown stats panel renderer for the STYLX admin front end.

mod assets;
pub mod components;
mod config;
mod generators;
mod markdown;
pub mod pages;
mod stats;

pub use assets::write_css_assets;
pub use config::Config;
pub use generators::{FRAGMENT_FILE, PAGE_FILE, generate};
pub use markdown::{Alignment, escape_html, render, render_inline, render_opt};
pub use stats::{
    DEFAULT_FAILED_MESSAGE, DEFAULT_UNAVAILABLE_MESSAGE, StatsMessages, StatsSource,
    message_html, panel_content,
};
