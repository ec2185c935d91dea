//! cocktaildex CLI — localized drinks-catalog builder.
//!
//! Fetches the public drinks database letter by letter and writes a
//! localized catalog artifact for the site to serve.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
