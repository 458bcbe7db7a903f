//! Fail-fast execution of the build plan.
//!
//! The orchestrator only runs when the pre-flight report succeeded. Stages run
//! strictly in plan order; the first failing required command ends the run.
//! Nothing is retried or rolled back.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};

use crate::check::{AvailabilityReport, ToolAvailabilityChecker};
use crate::execute::{Exit, LaunchError, Launcher, OutputMode};
use crate::pipeline::{BuildStage, Gate, PipelinePlan, StageCommand, StageKind};
use crate::platform::PlatformProfile;

/// Result of running one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageOutcome {
  Success,
  Failure(StageKind),
}

/// Result of a whole invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
  Succeeded,
  /// Pre-flight failed; no stage was started.
  ToolsMissing(Vec<String>),
  StageFailed(StageKind),
}

impl PipelineOutcome {
  pub fn is_success(&self) -> bool {
    matches!(self, Self::Succeeded)
  }

  /// Process exit status for this outcome.
  pub fn exit_code(&self) -> u8 {
    if self.is_success() { 0 } else { 1 }
  }
}

/// Why a stage command did not succeed.
#[derive(Debug)]
pub enum CommandFailure {
  Exit(Exit),
  Launch(LaunchError),
}

impl fmt::Display for CommandFailure {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Exit(Exit { code: Some(code) }) => write!(f, "exited with code {}", code),
      Self::Exit(Exit { code: None }) => write!(f, "terminated by signal"),
      Self::Launch(error) => write!(f, "{}", error),
    }
  }
}

/// Observer for human-readable progress. Has no influence on control flow.
pub trait Progress {
  fn checks_started(&self) {}
  fn checks_finished(&self, _report: &AvailabilityReport) {}
  fn stage_started(&self, _stage: &BuildStage) {}
  fn command_started(&self, _command: &StageCommand) {}
  fn best_effort_failed(&self, _command: &StageCommand, _failure: &CommandFailure) {}
  fn stage_succeeded(&self, _stage: &BuildStage, _elapsed: Duration) {}
  fn stage_failed(&self, _stage: &BuildStage, _failure: &CommandFailure) {}
}

/// Progress observer that reports nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Progress for Silent {}

impl<P: Progress> Progress for &P {
  fn checks_started(&self) {
    (**self).checks_started()
  }
  fn checks_finished(&self, report: &AvailabilityReport) {
    (**self).checks_finished(report)
  }
  fn stage_started(&self, stage: &BuildStage) {
    (**self).stage_started(stage)
  }
  fn command_started(&self, command: &StageCommand) {
    (**self).command_started(command)
  }
  fn best_effort_failed(&self, command: &StageCommand, failure: &CommandFailure) {
    (**self).best_effort_failed(command, failure)
  }
  fn stage_succeeded(&self, stage: &BuildStage, elapsed: Duration) {
    (**self).stage_succeeded(stage, elapsed)
  }
  fn stage_failed(&self, stage: &BuildStage, failure: &CommandFailure) {
    (**self).stage_failed(stage, failure)
  }
}

/// Runs a [`PipelinePlan`] through a [`Launcher`].
pub struct BuildOrchestrator<L, P = Silent> {
  launcher: L,
  progress: P,
  plan: PipelinePlan,
}

impl<L: Launcher, P: Progress> BuildOrchestrator<L, P> {
  /// Orchestrator for the release plan.
  pub fn new(launcher: L, progress: P) -> Self {
    Self {
      launcher,
      progress,
      plan: PipelinePlan::release(),
    }
  }

  pub fn with_plan(mut self, plan: PipelinePlan) -> Self {
    self.plan = plan;
    self
  }

  /// Run every stage if `report` succeeded, stopping at the first failure.
  pub async fn run(&self, report: &AvailabilityReport) -> PipelineOutcome {
    if !report.is_success() {
      let missing = report.missing_names();
      error!(missing = ?missing, "required tools are missing, not starting build");
      return PipelineOutcome::ToolsMissing(missing);
    }

    for stage in &self.plan.stages {
      if let StageOutcome::Failure(kind) = self.run_stage(stage).await {
        return PipelineOutcome::StageFailed(kind);
      }
    }

    info!("build pipeline completed");
    PipelineOutcome::Succeeded
  }

  /// Run the commands of one stage in order.
  pub async fn run_stage(&self, stage: &BuildStage) -> StageOutcome {
    info!(stage = %stage.kind, "starting stage");
    self.progress.stage_started(stage);
    let started = Instant::now();

    for step in &stage.commands {
      self.progress.command_started(step);
      debug!(stage = %stage.kind, command = %step.command, gate = ?step.gate, "running stage command");

      let failure = match self.launcher.launch(&step.command, OutputMode::Inherit, None).await {
        Ok(exit) if exit.success() => continue,
        Ok(exit) => CommandFailure::Exit(exit),
        Err(error) => CommandFailure::Launch(error),
      };

      match step.gate {
        Gate::BestEffort => {
          warn!(stage = %stage.kind, command = %step.command, %failure, "best-effort command failed, continuing");
          self.progress.best_effort_failed(step, &failure);
        }
        Gate::Required => {
          error!(stage = %stage.kind, command = %step.command, %failure, "stage failed");
          self.progress.stage_failed(stage, &failure);
          return StageOutcome::Failure(stage.kind);
        }
      }
    }

    let elapsed = started.elapsed();
    info!(stage = %stage.kind, elapsed_ms = elapsed.as_millis() as u64, "stage finished");
    self.progress.stage_succeeded(stage, elapsed);
    StageOutcome::Success
  }
}

/// Pre-flight checks followed by the release pipeline.
///
/// The same launcher drives probes and stages.
pub async fn run_build<L, P>(profile: PlatformProfile, launcher: &L, progress: P) -> PipelineOutcome
where
  L: Launcher,
  P: Progress,
{
  progress.checks_started();
  let report = ToolAvailabilityChecker::new(profile, launcher).check().await;
  progress.checks_finished(&report);

  BuildOrchestrator::new(launcher, progress).run(&report).await
}
