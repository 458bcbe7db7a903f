//! Test utilities for leafbuild-lib.
//!
//! [`FakeLauncher`] stands in for real processes: it records every command it
//! is asked to run and answers from a script keyed on the command line.

use std::cell::RefCell;
use std::time::Duration;

use crate::execute::{CommandLine, Exit, LaunchError, Launcher, OutputMode};

/// Scripted answer for a command.
#[derive(Clone, Copy)]
pub enum Scripted {
  Exit(i32),
  Error(fn() -> LaunchError),
}

/// Records launches and replies from a script; unscripted commands exit 0.
#[derive(Default)]
pub struct FakeLauncher {
  script: Vec<(String, Scripted)>,
  calls: RefCell<Vec<(CommandLine, OutputMode, Option<Duration>)>>,
}

impl FakeLauncher {
  pub fn new() -> Self {
    Self::default()
  }

  /// Script the answer for commands whose rendered form is `command` or
  /// starts with `command` followed by more arguments.
  pub fn on(mut self, command: &str, answer: Scripted) -> Self {
    self.script.push((command.to_string(), answer));
    self
  }

  /// Rendered command lines, in launch order.
  pub fn calls(&self) -> Vec<String> {
    self.calls.borrow().iter().map(|(cmd, _, _)| cmd.to_string()).collect()
  }

  pub fn output_modes(&self) -> Vec<OutputMode> {
    self.calls.borrow().iter().map(|(_, mode, _)| *mode).collect()
  }

  pub fn timeouts(&self) -> Vec<Option<Duration>> {
    self.calls.borrow().iter().map(|(_, _, timeout)| *timeout).collect()
  }

  fn answer(&self, rendered: &str) -> Scripted {
    self
      .script
      .iter()
      .find(|(pattern, _)| {
        rendered == pattern
          || rendered
            .strip_prefix(pattern.as_str())
            .is_some_and(|rest| rest.starts_with(' '))
      })
      .map(|(_, answer)| *answer)
      .unwrap_or(Scripted::Exit(0))
  }
}

impl Launcher for FakeLauncher {
  async fn launch(
    &self,
    command: &CommandLine,
    output: OutputMode,
    timeout: Option<Duration>,
  ) -> Result<Exit, LaunchError> {
    self.calls.borrow_mut().push((command.clone(), output, timeout));
    match self.answer(&command.to_string()) {
      Scripted::Exit(code) => Ok(Exit::with_code(code)),
      Scripted::Error(make) => Err(make()),
    }
  }
}

/// A launch error as produced for a program missing from PATH.
pub fn not_found() -> LaunchError {
  LaunchError::NotFound {
    program: "missing".to_string(),
  }
}
