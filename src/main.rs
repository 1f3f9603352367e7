use anyhow::{Context, Result};
use clap::Parser;
use github_api_auth::cli::Args;

fn main() -> Result<()> {
    pretty_env_logger::init();

    let args = Args::parse();
    let token = args.run().context("failed to build credential")?;

    log::info!("token: {}", token);
    Ok(())
}
