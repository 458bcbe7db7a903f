//! leafbuild-lib: pre-flight checks and the fail-fast build pipeline
//!
//! This crate provides:
//! - `check`: verifies the required external tools are installed
//! - `pipeline`: the fixed install → configure → compile plan
//! - `orchestrator`: runs the plan, stopping at the first failure
//! - `execute`: the process launcher shared by probes and stages

pub mod check;
pub mod consts;
pub mod execute;
pub mod orchestrator;
pub mod pipeline;
pub mod platform;
pub mod probe;

#[cfg(test)]
pub mod testutil;

pub use check::{AvailabilityReport, CompilerSuiteAdvisory, ToolAvailabilityChecker, ToolRequirement};
pub use orchestrator::{BuildOrchestrator, PipelineOutcome, Progress, StageOutcome, run_build};
pub use pipeline::{BuildStage, PipelinePlan, StageKind};
pub use platform::PlatformProfile;
