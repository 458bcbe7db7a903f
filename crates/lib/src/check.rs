//! Pre-flight tool availability checks.
//!
//! Every required tool is looked up through a platform probe. The result is an
//! [`AvailabilityReport`]: the per-tool verdicts, the derived list of missing
//! tools, and on Windows an optional advisory when no Visual Studio
//! installation could be found. The advisory never affects the verdict.

use std::fmt;
use std::time::Duration;

use serde::Serialize;
use tracing::{info, warn};

use crate::consts::{REQUIRED_TOOLS, VISUAL_STUDIO_DOWNLOAD_URL, VISUAL_STUDIO_PATHS};
use crate::execute::Launcher;
use crate::platform::PlatformProfile;
use crate::probe::Prober;

/// Name of an executable that must be locatable on the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ToolRequirement(pub String);

impl ToolRequirement {
  pub fn name(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for ToolRequirement {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for ToolRequirement {
  fn from(name: &str) -> Self {
    Self(name.to_string())
  }
}

/// Build an ordered requirement list, keeping the first occurrence of duplicates.
pub fn requirements<I, S>(names: I) -> Vec<ToolRequirement>
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  let mut out: Vec<ToolRequirement> = Vec::new();
  for name in names {
    let name = name.as_ref();
    if !out.iter().any(|r| r.name() == name) {
      out.push(ToolRequirement::from(name));
    }
  }
  out
}

/// Probe verdict for one requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolStatus {
  pub tool: ToolRequirement,
  pub found: bool,
}

/// Warning raised when no known compiler suite installation is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompilerSuiteAdvisory {
  pub message: String,
  pub remediation: String,
  pub download_url: String,
}

impl CompilerSuiteAdvisory {
  pub fn visual_studio() -> Self {
    Self {
      message: "Visual Studio is not detected.".to_string(),
      remediation: "Please download and install Visual C++ Build Tools or Visual Studio Community Edition."
        .to_string(),
      download_url: VISUAL_STUDIO_DOWNLOAD_URL.to_string(),
    }
  }
}

/// Aggregated result of the pre-flight checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityReport {
  pub platform: PlatformProfile,
  pub tools: Vec<ToolStatus>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub advisory: Option<CompilerSuiteAdvisory>,
}

impl AvailabilityReport {
  /// Requirements that were not found, in requirement order.
  pub fn missing(&self) -> Vec<&ToolRequirement> {
    self.tools.iter().filter(|s| !s.found).map(|s| &s.tool).collect()
  }

  /// Names of missing requirements, in requirement order.
  pub fn missing_names(&self) -> Vec<String> {
    self.missing().into_iter().map(|t| t.0.clone()).collect()
  }

  /// True when every required tool was found.
  pub fn is_success(&self) -> bool {
    self.tools.iter().all(|s| s.found)
  }
}

/// Checks that the external tools the pipeline invokes are installed.
pub struct ToolAvailabilityChecker<L> {
  profile: PlatformProfile,
  prober: Prober<L>,
  requirements: Vec<ToolRequirement>,
}

impl<L: Launcher> ToolAvailabilityChecker<L> {
  /// Checker for the built-in tool list.
  pub fn new(profile: PlatformProfile, launcher: L) -> Self {
    Self {
      profile,
      prober: Prober::new(&profile, launcher),
      requirements: requirements(REQUIRED_TOOLS),
    }
  }

  /// Replace the tool list. Duplicate names are probed once.
  pub fn with_requirements<I, S>(mut self, names: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    self.requirements = requirements(names);
    self
  }

  /// Override the per-probe time limit.
  pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
    self.prober = self.prober.with_timeout(timeout);
    self
  }

  pub fn requirements(&self) -> &[ToolRequirement] {
    &self.requirements
  }

  /// Probe every requirement and, where applicable, the compiler suite.
  ///
  /// Probes run one at a time in requirement order. A failing probe only
  /// marks its own tool as missing.
  pub async fn check(&self) -> AvailabilityReport {
    info!(platform = %self.profile, tools = self.requirements.len(), "performing pre-build checks");

    let mut tools = Vec::with_capacity(self.requirements.len());
    for tool in &self.requirements {
      let found = self.prober.locate(tool.name()).await;
      if !found {
        warn!(tool = %tool, "required tool not found");
      }
      tools.push(ToolStatus {
        tool: tool.clone(),
        found,
      });
    }

    let advisory = if self.profile.probes_compiler_suite() {
      self.check_compiler_suite().await
    } else {
      None
    };

    AvailabilityReport {
      platform: self.profile,
      tools,
      advisory,
    }
  }

  async fn check_compiler_suite(&self) -> Option<CompilerSuiteAdvisory> {
    for path in VISUAL_STUDIO_PATHS {
      if self.prober.path_exists(path).await {
        info!(path, "found Visual Studio installation");
        return None;
      }
    }
    warn!("Visual Studio is not detected");
    Some(CompilerSuiteAdvisory::visual_studio())
  }
}
