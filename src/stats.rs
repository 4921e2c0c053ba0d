//! Stats panel content.
//!
//! Loads the raw stats markdown, renders it, and substitutes a user facing
//! message when the source cannot be read or renders to nothing. The
//! renderer only ever receives successfully loaded text.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::markdown::{escape_html, render};

/// Message shown when the source loads but holds no content.
pub const DEFAULT_UNAVAILABLE_MESSAGE: &str = "Statistics are not available.";

/// Message shown when the source cannot be loaded.
pub const DEFAULT_FAILED_MESSAGE: &str = "Could not load statistics. Please try again later.";

/// Where stats markdown is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsSource {
    File(PathBuf),
    Stdin,
}

impl StatsSource {
    /// Builds source from a command line argument; `-` means standard input.
    pub fn from_arg(arg: impl AsRef<Path>) -> Self {
        let path = arg.as_ref();
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path.to_path_buf())
        }
    }

    /// Reads the whole source as UTF8 text.
    ///
    /// # Errors
    ///
    /// Returns error if the source cannot be read or is not valid UTF8
    pub fn load(&self) -> Result<String> {
        match self {
            Self::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read stats file: {}", path.display())),
            Self::Stdin => {
                let mut content = String::new();
                std::io::stdin()
                    .read_to_string(&mut content)
                    .context("Failed to read stats from standard input")?;
                Ok(content)
            }
        }
    }
}

impl std::fmt::Display for StatsSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => f.write_str("<stdin>"),
        }
    }
}

/// User facing fallback texts for the stats panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsMessages {
    pub unavailable: String,
    pub failed: String,
}

impl Default for StatsMessages {
    fn default() -> Self {
        Self {
            unavailable: DEFAULT_UNAVAILABLE_MESSAGE.to_string(),
            failed: DEFAULT_FAILED_MESSAGE.to_string(),
        }
    }
}

/// Wraps a plain message in an escaped paragraph.
pub fn message_html(message: &str) -> String {
    format!("<p>{}</p>", escape_html(message))
}

/// Builds the HTML placed inside the stats container.
///
/// # Arguments
///
/// * `loaded`: Result of loading the stats source
/// * `messages`: Fallback texts
///
/// # Returns
///
/// Rendered markdown, or an escaped fallback paragraph when loading failed
/// or the markdown rendered to nothing
pub fn panel_content(loaded: Result<String>, messages: &StatsMessages) -> String {
    match loaded {
        Ok(markdown) => {
            let rendered = render(&markdown);
            if rendered.is_empty() {
                info!("Stats source is empty, showing unavailable message");
                message_html(&messages.unavailable)
            } else {
                rendered
            }
        }
        Err(e) => {
            warn!("Failed to load stats: {:#}", e);
            message_html(&messages.failed)
        }
    }
}
