//! cft-refresh - one refresh pass over the Chrome for Testing version
//! registries.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cft_dashboard::{store, ChannelSnapshot, Refresh, RefreshOptions};

#[derive(Parser, Debug)]
#[clap(
    name = "cft-refresh",
    about = "Refresh the Chrome for Testing version registries from a channel snapshot",
    version
)]
struct Cli {
    /// Path to the channel snapshot document.
    #[clap(long)]
    snapshot: PathBuf,

    /// Directory holding the persisted registry documents.
    #[clap(long, default_value = ".")]
    data_dir: PathBuf,

    /// Object-store host used when building download URLs.
    #[clap(long)]
    host: Option<String>,

    /// Seed empty registries into the data directory before running.
    #[clap(long)]
    init: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let snapshot: ChannelSnapshot = store::read_document(&cli.snapshot)
        .await
        .context("failed to load the channel snapshot")?;

    let mut builder = RefreshOptions::builder().with_data_dir(cli.data_dir);
    if let Some(host) = cli.host.as_deref() {
        builder = builder.with_host(host);
    }
    let refresh = Refresh::new(builder.build());

    let now = Utc::now();
    if cli.init {
        refresh.init(now).await?;
    }
    let summary = refresh.run(&snapshot, now).await?;

    info!(
        channels = summary.channels_updated,
        catalog = summary.catalog_updated,
        milestones = summary.milestones_updated,
        manifests = summary.manifests_written,
        failed = summary.manifests_failed,
        "refresh complete"
    );
    Ok(())
}
