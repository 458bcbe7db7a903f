//! Host probes: short, time-boxed commands that answer yes/no questions.
//!
//! The command used for each question depends on the OS family and is chosen
//! once from the [`PlatformProfile`].

use std::time::Duration;

use tracing::{debug, warn};

use crate::consts::PROBE_TIMEOUT;
use crate::execute::{CommandLine, Launcher, OutputMode};
use crate::platform::PlatformProfile;

/// Platform-specific command lines for the supported probes.
pub trait ProbeCommands: Send + Sync {
  /// Command that exits 0 when `tool` resolves on the execution path.
  fn locate(&self, tool: &str) -> CommandLine;

  /// Command that exits 0 when `path` exists.
  fn path_exists(&self, path: &str) -> CommandLine;
}

/// `which` and `test -e`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnixProbes;

impl ProbeCommands for UnixProbes {
  fn locate(&self, tool: &str) -> CommandLine {
    CommandLine::new("which").arg(tool)
  }

  fn path_exists(&self, path: &str) -> CommandLine {
    CommandLine::new("test").arg("-e").arg(path)
  }
}

/// `where` and `cmd /c if exist`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsProbes;

impl ProbeCommands for WindowsProbes {
  fn locate(&self, tool: &str) -> CommandLine {
    CommandLine::new("where").arg(tool)
  }

  fn path_exists(&self, path: &str) -> CommandLine {
    CommandLine::new("cmd")
      .arg("/c")
      .arg(format!("if exist \"{}\" (exit 0) else (exit 1)", path))
  }
}

/// Select the probe commands for a host.
pub fn probe_commands(profile: &PlatformProfile) -> &'static dyn ProbeCommands {
  static UNIX: UnixProbes = UnixProbes;
  static WINDOWS: WindowsProbes = WindowsProbes;

  if profile.os.is_windows() { &WINDOWS } else { &UNIX }
}

/// Runs probes through a [`Launcher`], folding every failure into `false`.
pub struct Prober<L> {
  launcher: L,
  commands: &'static dyn ProbeCommands,
  timeout: Duration,
}

impl<L: Launcher> Prober<L> {
  pub fn new(profile: &PlatformProfile, launcher: L) -> Self {
    Self {
      launcher,
      commands: probe_commands(profile),
      timeout: PROBE_TIMEOUT,
    }
  }

  /// Override the per-probe time limit.
  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }

  pub fn timeout(&self) -> Duration {
    self.timeout
  }

  /// Whether `tool` can be located on the execution path.
  pub async fn locate(&self, tool: &str) -> bool {
    self.run(&self.commands.locate(tool), tool).await
  }

  /// Whether `path` exists on the host.
  pub async fn path_exists(&self, path: &str) -> bool {
    self.run(&self.commands.path_exists(path), path).await
  }

  async fn run(&self, command: &CommandLine, subject: &str) -> bool {
    match self
      .launcher
      .launch(command, OutputMode::Capture, Some(self.timeout))
      .await
    {
      Ok(exit) if exit.success() => {
        debug!(subject, command = %command, "probe succeeded");
        true
      }
      Ok(exit) => {
        debug!(subject, command = %command, code = ?exit.code, "probe returned non-zero");
        false
      }
      Err(error) => {
        warn!(subject, command = %command, %error, "probe failed");
        false
      }
    }
  }
}
