//! Implementation of the `leafbuild doctor` command.
//!
//! Runs only the pre-flight checks and reports which required tools are
//! installed, without starting a build.

use std::process::ExitCode;

use anyhow::Result;

use leafbuild_lib::check::AvailabilityReport;
use leafbuild_lib::execute::SystemLauncher;
use leafbuild_lib::{PlatformProfile, ToolAvailabilityChecker};

use crate::output::{
  OutputFormat, print_error, print_json, print_stat, print_success, print_warning, symbols,
};

pub fn cmd_doctor(output: OutputFormat) -> Result<ExitCode> {
  let rt = super::runtime()?;
  let profile = *PlatformProfile::current();
  let report = rt.block_on(ToolAvailabilityChecker::new(profile, SystemLauncher).check());

  if output.is_json() {
    print_json(&report)?;
  } else {
    print_stat("Platform", report.platform.os.as_str());
    println!();
    for status in &report.tools {
      let mark = if status.found { symbols::SUCCESS } else { symbols::ERROR };
      println!("  {} {}", mark, status.tool);
    }
    println!();
    print_verdict(&report, "All required tools are installed.");
  }

  Ok(if report.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Print the advisory, if any, and the pass/fail summary of a report.
pub fn print_verdict(report: &AvailabilityReport, success_message: &str) {
  if let Some(advisory) = &report.advisory {
    print_warning(&format!("Warning: {}", advisory.message));
    print_warning(&advisory.remediation);
    print_warning(&format!("You can download from: {}", advisory.download_url));
  }

  if report.is_success() {
    print_success(success_message);
  } else {
    print_error(&format!(
      "Error: The following required tools are not installed: {}",
      report.missing_names().join(", ")
    ));
    print_error("Please install the missing tools and try again.");
  }
}
