//! Glyphsync — keeps the published Lucide icon package in sync with upstream.
//!
//! Runs once per invocation, driven by an external scheduler: clone the
//! package and upstream repositories, compare the upstream content hash
//! against the stored marker, and when they differ copy the icons, build and
//! publish the package, then commit the new marker. Exits zero on
//! "up to date", "published" and the soft-stop build failure; non-zero on
//! any hard failure or cancellation.
//!
//! Required environment (read at the step that needs each value):
//! `BUILD_VERSION`, `NUGET__TOKEN`, `GIT__NAME`, `GIT__EMAIL`,
//! `GH__USERNAME`, `GH__TOKEN`.

use anyhow::Result;
use clap::Parser;
use tokio_util::sync::CancellationToken;

use glyphsync_core::types::{RunOutcome, RunSummary};
use glyphsync_dotnet::DotnetCli;
use glyphsync_git::GitCli;
use glyphsync_sync::{runner, RunOptions};

/// Package repository that receives the synchronized icons.
const PACKAGE_REPO_URL: &str = "https://github.com/glyphsync/lucide-icons-package";

/// Upstream icon repository.
const UPSTREAM_REPO_URL: &str = "https://github.com/lucide-icons/lucide";

/// Library name: names the project file and the packed artifact.
const LIBRARY: &str = "LucideIcons";

/// Proceed even when the stored and fresh hashes are equal. Default off.
const FORCE_UPDATE: bool = false;

#[derive(Parser, Debug)]
#[command(
    name = "glyphsync",
    version,
    about = "Synchronize the published icon package with the upstream Lucide icons"
)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let _cli = Cli::parse();

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("interrupt received, cancelling run");
                cancel.cancel();
            }
        });
    }

    let opts = RunOptions {
        package_repo_url: PACKAGE_REPO_URL.to_string(),
        upstream_repo_url: UPSTREAM_REPO_URL.to_string(),
        library: LIBRARY.to_string(),
        force_update: FORCE_UPDATE,
    };

    let started_at = chrono::Utc::now();
    let start = std::time::Instant::now();

    let outcome = runner::run(&GitCli, &DotnetCli, &opts, &cancel).await?;
    match &outcome {
        RunOutcome::UpToDate => tracing::info!("icon package is up to date"),
        RunOutcome::BuildFailed => {
            tracing::warn!("run ended early after a failed build; next run will retry")
        }
        RunOutcome::Published {
            icons_copied,
            version,
        } => tracing::info!("published version {version} with {icons_copied} icons"),
    }

    let summary = RunSummary {
        outcome,
        started_at,
        duration_ms: start.elapsed().as_millis(),
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
