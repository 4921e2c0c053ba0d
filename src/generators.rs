//! Output generation for the stats panel.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::assets::write_css_assets;
use crate::config::Config;
use crate::pages;
use crate::stats::panel_content;

/// File name of the standalone page.
pub const PAGE_FILE: &str = "index.html";

/// File name of the bare fragment written with `--fragment`.
pub const FRAGMENT_FILE: &str = "stats.html";

/// Generates stats output into the configured directory.
///
/// Loads the stats source, renders it (falling back to the configured
/// messages when loading fails or the content is empty), and writes either
/// a complete page with its stylesheet or just the panel fragment.
///
/// # Arguments
///
/// * `config`: Validated configuration
///
/// # Returns
///
/// Path of the written HTML file
///
/// # Errors
///
/// Returns error if output directories or files cannot be written. Source
/// read failures are not errors; they produce the failure message.
///
/// # Examples
///
/// ```no_run
/// use stylx_stats::{Config, generate};
///
/// let path = generate(&Config::parse())?;
/// println!("{}", path.display());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn generate(config: &Config) -> Result<PathBuf> {
    fs::create_dir_all(&config.output).context("Failed to create output directory")?;

    let source = config.source();
    info!(source = %source, "Loading stats");
    let content = panel_content(source.load(), &config.messages());

    if config.fragment {
        let path = config.output.join(FRAGMENT_FILE);
        fs::write(&path, &content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "Wrote stats fragment");
        return Ok(path);
    }

    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    write_css_assets(&assets_dir).context("Failed to write CSS assets")?;

    let page = pages::stats::generate(&config.title, &content);
    let path = config.output.join(PAGE_FILE);
    fs::write(&path, page.into_string())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), "Wrote stats page");

    Ok(path)
}
