//! Process launcher backed by `tokio::process`.

use std::io;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::debug;

use super::Launcher;
use super::types::{CommandLine, Exit, LaunchError, OutputMode};

/// Launches real processes on the host.
///
/// The child is killed when its timeout elapses; without a timeout the
/// launcher waits for as long as the process runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
  async fn launch(
    &self,
    command: &CommandLine,
    output: OutputMode,
    timeout: Option<Duration>,
  ) -> Result<Exit, LaunchError> {
    if command.program.is_empty() {
      return Err(LaunchError::EmptyCommand);
    }

    let mut process = Command::new(&command.program);
    process.args(&command.args).kill_on_drop(true);

    match output {
      OutputMode::Inherit => {
        process.stdout(Stdio::inherit()).stderr(Stdio::inherit());
      }
      OutputMode::Capture => {
        process.stdin(Stdio::null()).stdout(Stdio::piped()).stderr(Stdio::piped());
      }
    }

    debug!(command = %command, ?timeout, "spawning process");

    let child = process.spawn().map_err(|e| spawn_error(&command.program, e))?;
    let wait = child.wait_with_output();

    let result = match timeout {
      Some(limit) => tokio::time::timeout(limit, wait)
        .await
        .map_err(|_| LaunchError::TimedOut {
          program: command.program.clone(),
          timeout: limit,
        })?,
      None => wait.await,
    };

    let finished = result.map_err(|source| LaunchError::Io {
      program: command.program.clone(),
      source,
    })?;

    let stdout = String::from_utf8_lossy(&finished.stdout);
    let stderr = String::from_utf8_lossy(&finished.stderr);
    if !stdout.trim().is_empty() {
      debug!(stdout = %stdout.trim(), "command stdout");
    }
    if !stderr.trim().is_empty() {
      debug!(stderr = %stderr.trim(), "command stderr");
    }

    let exit = Exit {
      code: finished.status.code(),
    };
    debug!(command = %command, code = ?exit.code, "process exited");
    Ok(exit)
  }
}

fn spawn_error(program: &str, error: io::Error) -> LaunchError {
  if error.kind() == io::ErrorKind::NotFound {
    LaunchError::NotFound {
      program: program.to_string(),
    }
  } else {
    LaunchError::Io {
      program: program.to_string(),
      source: error,
    }
  }
}
