//! Implementation of the `leafbuild plan` command.
//!
//! Prints the stages and exact command lines of the build without running
//! anything.

use anyhow::Result;

use leafbuild_lib::PipelinePlan;
use leafbuild_lib::pipeline::Gate;

use crate::output::{OutputFormat, print_command, print_info, print_json};

pub fn cmd_plan(output: OutputFormat) -> Result<()> {
  let plan = PipelinePlan::release();

  if output.is_json() {
    return print_json(&plan);
  }

  for (index, stage) in plan.stages.iter().enumerate() {
    print_info(&format!("{}. {}", index + 1, stage.kind));
    for step in &stage.commands {
      match step.gate {
        Gate::Required => print_command(&step.command.to_string()),
        Gate::BestEffort => print_command(&format!("{} (best-effort)", step.command)),
      }
    }
  }

  Ok(())
}
