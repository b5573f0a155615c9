//! CLI definition.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use relnotes_config::{Config, Settings, load_config};
use tracing::info;

/// Render categorized Markdown release notes from a JSON change list.
#[derive(Debug, Parser)]
#[command(name = "relnotes")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// JSON file with an array of {"type", "description"} records
    pub input: PathBuf,

    /// Markdown file to create or overwrite
    pub output: PathBuf,

    /// Repository used in pull request links (owner/name)
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// Base URL of the GitHub server
    #[arg(long, env = "GITHUB_SERVER_URL")]
    pub server_url: Option<String>,

    /// Settings file (e.g. relnotes.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Runs the conversion.
    pub fn run(self) -> Result<()> {
        let config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("failed to load configuration {}", path.display()))?,
            None => Config::default(),
        };
        let settings = Settings::resolve(config, self.repository, self.server_url);

        let summary = relnotes_core::generate(&self.input, &self.output, &settings)
            .context("failed to generate release notes")?;

        info!(entries = summary.total(), "done");
        Ok(())
    }
}
