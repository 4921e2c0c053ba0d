//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::stats::{StatsMessages, StatsSource};

/// Command line configuration for stylx-stats.
#[derive(Debug, Clone, Parser)]
#[command(name = "stylx-stats", version, about, long_about = None)]
pub struct Config {
    /// Stats markdown file, or "-" for standard input
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Panel title
    #[arg(long, default_value = "Statistics")]
    pub title: String,

    /// Write only the rendered fragment (stats.html) instead of a full page
    #[arg(long)]
    pub fragment: bool,

    /// Message shown when the stats source is empty
    #[arg(long)]
    pub unavailable_message: Option<String>,

    /// Message shown when the stats source cannot be read
    #[arg(long)]
    pub error_message: Option<String>,

    /// Do not open the generated file
    #[arg(long)]
    pub no_open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// A missing input file is not a configuration error: it is reported
    /// through the panel's failure message instead.
    ///
    /// # Errors
    ///
    /// Returns error if output path is an existing file or title is blank.
    pub fn validate(&self) -> Result<()> {
        if self.output.exists() && !self.output.is_dir() {
            bail!(
                "Output path exists and is not a directory: {}",
                self.output.display()
            );
        }

        if self.title.trim().is_empty() {
            bail!("Title must not be empty");
        }

        Ok(())
    }

    /// Returns source the stats markdown is read from.
    pub fn source(&self) -> StatsSource {
        StatsSource::from_arg(&self.input)
    }

    /// Returns fallback messages with command line overrides applied.
    pub fn messages(&self) -> StatsMessages {
        let mut messages = StatsMessages::default();
        if let Some(unavailable) = &self.unavailable_message {
            messages.unavailable = unavailable.clone();
        }
        if let Some(failed) = &self.error_message {
            messages.failed = failed.clone();
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::DEFAULT_UNAVAILABLE_MESSAGE;

    fn base_config() -> Config {
        Config {
            input: PathBuf::from("-"),
            output: PathBuf::from("dist"),
            title: "Statistics".to_string(),
            fragment: false,
            unavailable_message: None,
            error_message: None,
            no_open: true,
        }
    }

    #[test]
    fn test_config_defaults_from_args() {
        // Arrange & Act
        let config = <Config as Parser>::try_parse_from(["stylx-stats"])
            .expect("Default arguments should parse");

        // Assert
        assert_eq!(config.input, PathBuf::from("-"));
        assert_eq!(config.output, PathBuf::from("dist"));
        assert_eq!(config.title, "Statistics");
        assert!(!config.fragment);
        assert!(!config.no_open);
    }

    #[test]
    fn test_config_parses_all_flags() {
        // Arrange & Act
        let config = <Config as Parser>::try_parse_from([
            "stylx-stats",
            "stats.md",
            "-o",
            "out",
            "--title",
            "Trends",
            "--fragment",
            "--unavailable-message",
            "Nothing yet",
            "--error-message",
            "Broken",
            "--no-open",
        ])
        .expect("Arguments should parse");

        // Assert
        assert_eq!(config.input, PathBuf::from("stats.md"));
        assert_eq!(config.output, PathBuf::from("out"));
        assert_eq!(config.title, "Trends");
        assert!(config.fragment);
        assert!(config.no_open);
        assert_eq!(config.unavailable_message.as_deref(), Some("Nothing yet"));
        assert_eq!(config.error_message.as_deref(), Some("Broken"));
    }

    #[test]
    fn test_validate_default_config() {
        // Arrange
        let config = base_config();

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_ok(), "Default configuration should be valid");
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        // Arrange
        let config = Config {
            title: "   ".to_string(),
            ..base_config()
        };

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_err(), "Blank title should fail validation");
    }

    #[test]
    fn test_validate_rejects_file_output() {
        // Arrange: Cargo.toml is a file, not a directory
        let config = Config {
            output: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml"),
            ..base_config()
        };

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_err(), "File output path should fail validation");
    }

    #[test]
    fn test_messages_overrides() {
        // Arrange
        let config = Config {
            error_message: Some("Try later".to_string()),
            ..base_config()
        };

        // Act
        let messages = config.messages();

        // Assert
        assert_eq!(messages.unavailable, DEFAULT_UNAVAILABLE_MESSAGE);
        assert_eq!(messages.failed, "Try later");
    }

    #[test]
    fn test_source_from_input() {
        // Arrange
        let config = Config {
            input: PathBuf::from("stats.md"),
            ..base_config()
        };

        // Act & Assert
        assert_eq!(
            config.source(),
            StatsSource::File(PathBuf::from("stats.md"))
        );
    }
}
