use anyhow::Result;
use clap::Parser;
use resume_pages::cli::{run, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment (GITHUB_TOKEN may live in a .env file).
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let result = run(cli).await;
    match &result {
        Ok(_) => tracing::info!("Done"),
        Err(e) => tracing::error!(error = %e, "Exited with error"),
    }
    result
}
