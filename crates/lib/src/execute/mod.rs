//! External process execution.
//!
//! Every probe and build stage goes through a [`Launcher`], so the checker and
//! the orchestrator can be driven by a scripted launcher in tests.

pub mod launcher;
pub mod types;

use std::time::Duration;

pub use launcher::SystemLauncher;
pub use types::{CommandLine, Exit, LaunchError, OutputMode};

/// Capability to run an external command to completion.
#[allow(async_fn_in_trait)]
pub trait Launcher {
  /// Run `command` and wait for it to exit.
  ///
  /// With `timeout` set, a process still running when it elapses is killed and
  /// [`LaunchError::TimedOut`] is returned. `None` waits indefinitely.
  async fn launch(
    &self,
    command: &CommandLine,
    output: OutputMode,
    timeout: Option<Duration>,
  ) -> Result<Exit, LaunchError>;
}

impl<L: Launcher> Launcher for &L {
  async fn launch(
    &self,
    command: &CommandLine,
    output: OutputMode,
    timeout: Option<Duration>,
  ) -> Result<Exit, LaunchError> {
    (**self).launch(command, output, timeout).await
  }
}
