//! Implementation of the `leafbuild build` command (also the default).
//!
//! Runs the pre-flight checks, then installs dependencies, configures and
//! compiles the project, aborting at the first failure.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;

use leafbuild_lib::check::AvailabilityReport;
use leafbuild_lib::execute::SystemLauncher;
use leafbuild_lib::orchestrator::CommandFailure;
use leafbuild_lib::pipeline::StageCommand;
use leafbuild_lib::{BuildStage, PlatformProfile, Progress, run_build};

use super::doctor::print_verdict;
use crate::output::{format_duration, print_command, print_error, print_info, print_success, print_warning};

/// Renders pipeline progress on the terminal.
struct TerminalProgress;

impl Progress for TerminalProgress {
  fn checks_started(&self) {
    print_info("Performing pre-build checks...");
  }

  fn checks_finished(&self, report: &AvailabilityReport) {
    print_verdict(report, "All required tools are installed. Proceeding with build...");
  }

  fn stage_started(&self, stage: &BuildStage) {
    print_info(stage.kind.start_message());
  }

  fn command_started(&self, command: &StageCommand) {
    print_command(&command.command.to_string());
  }

  fn best_effort_failed(&self, command: &StageCommand, failure: &CommandFailure) {
    print_warning(&format!("'{}' {}, continuing", command.command, failure));
  }

  fn stage_succeeded(&self, stage: &BuildStage, elapsed: Duration) {
    print_success(&format!("{} ({})", stage.kind.success_message(), format_duration(elapsed)));
  }

  fn stage_failed(&self, stage: &BuildStage, failure: &CommandFailure) {
    print_error(&format!("{}: {}", stage.kind, failure));
    print_error(stage.kind.failure_message());
  }
}

pub fn cmd_build() -> Result<ExitCode> {
  let rt = super::runtime()?;
  let profile = *PlatformProfile::current();

  let outcome = rt.block_on(run_build(profile, &SystemLauncher, TerminalProgress));

  Ok(ExitCode::from(outcome.exit_code()))
}
