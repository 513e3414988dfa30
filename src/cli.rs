//! CLI glue for resume-pages: argument parsing, subcommand routing and the
//! async [`run`] entrypoint used by both `main` and integration tests.
//!
//! All business logic lives in the library modules; this file only wires
//! loaded config, environment credentials and the publisher together.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::github::GitHubClient;
use crate::load_config::{load_resume, save_resume};
use crate::publish::Publisher;
use crate::render;

/// CLI for resume-pages: render a structured resume and publish it to
/// GitHub Pages without touching git.
#[derive(Parser)]
#[clap(
    name = "resume-pages",
    version,
    about = "Render a resume YAML file to HTML and publish it as a GitHub Pages site"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the resume to a local HTML file (offline preview)
    Render {
        /// Path to the resume YAML file
        #[clap(long)]
        config: PathBuf,
        /// Where to write the generated HTML
        #[clap(long, default_value = "index.html")]
        out: PathBuf,
    },
    /// Render and deploy the resume to the owner's GitHub Pages site
    Publish {
        /// Path to the resume YAML file
        #[clap(long)]
        config: PathBuf,
        /// GitHub username; defaults to personal_info.github_username
        #[clap(long)]
        owner: Option<String>,
    },
}

/// Extracted async CLI logic entrypoint for integration tests and main().
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render { config, out } => {
            let resume = load_resume(&config)?;
            let html = render::render(&resume, resume.template, &resume.colors);
            std::fs::write(&out, html)
                .with_context(|| format!("Failed to write {}", out.display()))?;
            info!(out = %out.display(), "Rendered resume");
            Ok(())
        }
        Commands::Publish { config, owner } => {
            let mut resume = load_resume(&config)?;
            let owner = match owner {
                Some(owner) => owner,
                None if !resume.personal_info.github_username.is_empty() => {
                    resume.personal_info.github_username.clone()
                }
                None => bail!(
                    "No owner given: pass --owner or set personal_info.github_username"
                ),
            };
            let token = std::env::var("GITHUB_TOKEN").unwrap_or_default();

            let publisher = Publisher::new(GitHubClient::new());
            let outcome = publisher
                .publish(&mut resume, &owner, &token)
                .await
                .with_context(|| format!("Publish failed for {owner}"))?;

            // Persist publication state so repeated runs see it.
            save_resume(&config, &resume)?;
            info!(url = %outcome.url, "Site published");
            println!("{}", outcome.url);
            Ok(())
        }
    }
}
