use anyhow::{Context, Result};
use stylx_stats::Config;
use tracing::warn;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let path = stylx_stats::generate(&config).context("Failed to generate stats output")?;
    println!("Generated: {}", path.display());

    if !config.no_open
        && let Err(e) = open::that(&path)
    {
        warn!("Failed to open {}: {}", path.display(), e);
    }

    Ok(())
}
