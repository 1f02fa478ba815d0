//! Cancellable subprocess execution shared by the git and dotnet wrappers.
//!
//! Every external tool call races completion against a
//! [`CancellationToken`]; on cancellation the child is killed (via
//! `kill_on_drop`) and [`ProcessError::Cancelled`] is returned.

use std::process::{Output, Stdio};

use tokio::process::Command;
use tokio_util::sync::CancellationToken;

use crate::error::ProcessError;

/// Run `cmd` to completion with captured output.
///
/// A non-zero exit status is an error ([`ProcessError::Failed`]); callers
/// that treat the exit status as data use [`run_status`] instead.
pub async fn run(cmd: &mut Command, cancel: &CancellationToken) -> Result<Output, ProcessError> {
    let output = run_unchecked(cmd, cancel).await?;
    if !output.status.success() {
        return Err(ProcessError::Failed {
            program: program_name(cmd),
            status: output.status,
            stderr: stderr_text(&output),
        });
    }
    Ok(output)
}

/// Run `cmd` and report only whether it exited successfully.
pub async fn run_status(cmd: &mut Command, cancel: &CancellationToken) -> Result<bool, ProcessError> {
    let output = run_unchecked(cmd, cancel).await?;
    if !output.status.success() {
        tracing::debug!(
            "{} exited with {}: {}",
            program_name(cmd),
            output.status,
            stderr_text(&output)
        );
    }
    Ok(output.status.success())
}

async fn run_unchecked(
    cmd: &mut Command,
    cancel: &CancellationToken,
) -> Result<Output, ProcessError> {
    let program = program_name(cmd);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let child = cmd.spawn().map_err(|e| ProcessError::Spawn {
        program: program.clone(),
        source: e,
    })?;

    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(ProcessError::Cancelled { program }),
        result = child.wait_with_output() => {
            result.map_err(|e| ProcessError::Spawn { program, source: e })
        }
    }
}

fn program_name(cmd: &Command) -> String {
    cmd.as_std().get_program().to_string_lossy().into_owned()
}

fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim().to_string()
}
