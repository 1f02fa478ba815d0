//! # glyphsync-dotnet
//!
//! Package toolchain collaborator: restore, build, pack and publish via the
//! `dotnet` binary. The [`PackageToolchain`] trait is the seam the workflow
//! depends on; [`DotnetCli`] is the real implementation.

pub mod error;

pub use error::DotnetError;

use std::path::{Path, PathBuf};

use tokio::process::Command;
use tokio_util::sync::CancellationToken;

use glyphsync_core::process;

/// NuGet v3 endpoint the packed artifact is published to.
const NUGET_SOURCE: &str = "https://api.nuget.org/v3/index.json";

/// Narrow interface over the package toolchain.
#[allow(async_fn_in_trait)]
pub trait PackageToolchain {
    /// Restore dependencies for the project.
    async fn restore(&self, project: &Path, cancel: &CancellationToken)
        -> Result<(), DotnetError>;

    /// Build the project in release configuration.
    ///
    /// `Ok(false)` means the build itself failed; `Err` means the toolchain
    /// could not be run at all.
    async fn build(&self, project: &Path, cancel: &CancellationToken)
        -> Result<bool, DotnetError>;

    /// Pack the built project as `version` into `output_dir`.
    async fn pack(
        &self,
        project: &Path,
        version: &str,
        output_dir: &Path,
        cancel: &CancellationToken,
    ) -> Result<(), DotnetError>;

    /// Publish the packed artifact to the registry.
    async fn nuget_push(
        &self,
        package: &Path,
        api_key: &str,
        cancel: &CancellationToken,
    ) -> Result<(), DotnetError>;
}

/// [`PackageToolchain`] implementation backed by the system `dotnet` binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct DotnetCli;

impl PackageToolchain for DotnetCli {
    async fn restore(
        &self,
        project: &Path,
        cancel: &CancellationToken,
    ) -> Result<(), DotnetError> {
        let mut cmd = Command::new("dotnet");
        cmd.arg("restore").arg(project);
        process::run(&mut cmd, cancel).await?;
        Ok(())
    }

    async fn build(
        &self,
        project: &Path,
        cancel: &CancellationToken,
    ) -> Result<bool, DotnetError> {
        let mut cmd = Command::new("dotnet");
        cmd.arg("build")
            .arg(project)
            .args(["--configuration", "Release", "--no-restore"]);
        Ok(process::run_status(&mut cmd, cancel).await?)
    }

    async fn pack(
        &self,
        project: &Path,
        version: &str,
        output_dir: &Path,
        cancel: &CancellationToken,
    ) -> Result<(), DotnetError> {
        let mut cmd = Command::new("dotnet");
        cmd.arg("pack")
            .arg(project)
            .args(["--configuration", "Release", "--no-build", "--no-restore"])
            .arg("--output")
            .arg(output_dir)
            .arg(format!("-p:PackageVersion={version}"));
        process::run(&mut cmd, cancel).await?;
        tracing::info!("packed version {version} into {}", output_dir.display());
        Ok(())
    }

    async fn nuget_push(
        &self,
        package: &Path,
        api_key: &str,
        cancel: &CancellationToken,
    ) -> Result<(), DotnetError> {
        let mut cmd = Command::new("dotnet");
        cmd.args(["nuget", "push"])
            .arg(package)
            .args(["--api-key", api_key, "--source", NUGET_SOURCE]);
        process::run(&mut cmd, cancel).await?;
        tracing::info!("published {}", package.display());
        Ok(())
    }
}

/// Path of the packed artifact: `<output_dir>/<library>.<version>.nupkg`.
pub fn artifact_path(output_dir: &Path, library: &str, version: &str) -> PathBuf {
    output_dir.join(format!("{library}.{version}.nupkg"))
}

/// Path of the project file: `<repo>/src/<library>.csproj`.
pub fn project_path(repo: &Path, library: &str) -> PathBuf {
    repo.join("src").join(format!("{library}.csproj"))
}
