//! Types for launching external processes.
//!
//! This module defines the command representation, the exit result, and the
//! error type shared by probes and build stages.

use std::fmt;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

/// A program and its argument vector.
///
/// Arguments are passed to the program verbatim; no shell is involved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandLine {
  pub program: String,
  pub args: Vec<String>,
}

impl CommandLine {
  pub fn new(program: impl Into<String>) -> Self {
    Self {
      program: program.into(),
      args: Vec::new(),
    }
  }

  pub fn arg(mut self, arg: impl Into<String>) -> Self {
    self.args.push(arg.into());
    self
  }

  pub fn args<I, S>(mut self, args: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.args.extend(args.into_iter().map(Into::into));
    self
  }
}

impl fmt::Display for CommandLine {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.program)?;
    for arg in &self.args {
      if arg.is_empty() || arg.contains(char::is_whitespace) {
        write!(f, " \"{}\"", arg)?;
      } else {
        write!(f, " {}", arg)?;
      }
    }
    Ok(())
  }
}

/// Where a child's stdout and stderr go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
  /// Share the parent's streams, so tool output reaches the user.
  Inherit,
  /// Capture both streams; they are only surfaced through debug logs.
  Capture,
}

/// How a launched process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exit {
  /// Exit code, `None` when the process was terminated by a signal.
  pub code: Option<i32>,
}

impl Exit {
  pub fn with_code(code: i32) -> Self {
    Self { code: Some(code) }
  }

  pub fn success(&self) -> bool {
    self.code == Some(0)
  }
}

/// Errors that prevent a process from producing an exit status.
#[derive(Debug, Error)]
pub enum LaunchError {
  /// The command line has no program.
  #[error("cannot launch an empty command")]
  EmptyCommand,

  /// The program could not be located on PATH.
  #[error("program not found: {program}. Make sure it's available from the PATH")]
  NotFound { program: String },

  /// The process outlived its time limit and was killed.
  #[error("{program} timed out after {}s", .timeout.as_secs_f32())]
  TimedOut { program: String, timeout: Duration },

  /// Any other I/O failure while spawning or waiting.
  #[error("failed to run {program}: {source}")]
  Io {
    program: String,
    #[source]
    source: std::io::Error,
  },
}
