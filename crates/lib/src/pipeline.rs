//! The fixed build plan: install dependencies, configure, compile.
//!
//! Stages are plain data. The orchestrator walks [`PipelinePlan::stages`] in
//! order and applies each command's [`Gate`].

use std::fmt;

use serde::Serialize;

use crate::consts::{INSTALL_OUTPUT_DIR, RELEASE_BUILD_DIR, RELEASE_PRESET};
use crate::execute::CommandLine;

/// Pinned settings passed to `conan install`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallSettings {
  pub build_type: String,
  pub compiler: String,
  pub compiler_version: String,
  pub cppstd: String,
  pub generator: String,
  pub build_app: bool,
}

impl InstallSettings {
  /// Release build with clang 20, C++20 and the Ninja generator.
  pub fn release() -> Self {
    Self {
      build_type: "Release".to_string(),
      compiler: "clang".to_string(),
      compiler_version: "20".to_string(),
      cppstd: "20".to_string(),
      generator: "Ninja".to_string(),
      build_app: true,
    }
  }

  /// The `conan install` invocation for these settings.
  pub fn install_command(&self) -> CommandLine {
    let build_app = if self.build_app { "True" } else { "False" };
    CommandLine::new("conan").args([
      "install".to_string(),
      ".".to_string(),
      "-of".to_string(),
      INSTALL_OUTPUT_DIR.to_string(),
      "-b".to_string(),
      "missing".to_string(),
      "-o".to_string(),
      format!("&:build_app={}", build_app),
      "-s".to_string(),
      format!("&:compiler={}", self.compiler),
      "-s".to_string(),
      format!("&:compiler.version={}", self.compiler_version),
      "-s".to_string(),
      format!("compiler.cppstd={}", self.cppstd),
      "-s".to_string(),
      format!("build_type={}", self.build_type),
      "-c".to_string(),
      format!("tools.cmake.cmaketoolchain:generator={}", self.generator),
    ])
  }
}

/// Identifies a stage of the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StageKind {
  InstallDependencies,
  Configure,
  Compile,
}

impl StageKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::InstallDependencies => "install-dependencies",
      Self::Configure => "configure",
      Self::Compile => "compile",
    }
  }

  /// Status line shown before the stage starts.
  pub fn start_message(&self) -> &'static str {
    match self {
      Self::InstallDependencies => "Installing conan dependencies...",
      Self::Configure => "Configuring CMake...",
      Self::Compile => "Building the project...",
    }
  }

  /// Status line shown after the stage exits 0.
  pub fn success_message(&self) -> &'static str {
    match self {
      Self::InstallDependencies => "Conan dependencies installed.",
      Self::Configure => "CMake configured.",
      Self::Compile => "Build completed successfully.",
    }
  }

  /// Diagnostic shown when the stage fails and the build is aborted.
  pub fn failure_message(&self) -> &'static str {
    match self {
      Self::InstallDependencies => "Failed to install conan dependencies. Aborting build.",
      Self::Configure => "Failed to configure CMake. Aborting build.",
      Self::Compile => "Build failed. Aborting.",
    }
  }
}

impl fmt::Display for StageKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Whether a command's failure stops the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gate {
  /// Non-zero exit or launch error fails the stage.
  Required,
  /// Failure is logged and ignored.
  BestEffort,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageCommand {
  pub command: CommandLine,
  pub gate: Gate,
}

impl StageCommand {
  pub fn required(command: CommandLine) -> Self {
    Self {
      command,
      gate: Gate::Required,
    }
  }

  pub fn best_effort(command: CommandLine) -> Self {
    Self {
      command,
      gate: Gate::BestEffort,
    }
  }
}

/// One step of the pipeline: its commands run in order, without a timeout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildStage {
  pub kind: StageKind,
  pub commands: Vec<StageCommand>,
}

impl BuildStage {
  pub fn new(kind: StageKind, commands: Vec<StageCommand>) -> Self {
    Self { kind, commands }
  }
}

/// Ordered list of stages for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelinePlan {
  pub stages: Vec<BuildStage>,
}

impl PipelinePlan {
  /// The release pipeline.
  ///
  /// `conan profile detect` is best-effort: it fails harmlessly once a default
  /// profile exists.
  pub fn release() -> Self {
    Self::with_settings(&InstallSettings::release())
  }

  pub fn with_settings(settings: &InstallSettings) -> Self {
    Self {
      stages: vec![
        BuildStage::new(
          StageKind::InstallDependencies,
          vec![
            StageCommand::best_effort(CommandLine::new("conan").args(["profile", "detect"])),
            StageCommand::required(settings.install_command()),
          ],
        ),
        BuildStage::new(
          StageKind::Configure,
          vec![StageCommand::required(
            CommandLine::new("cmake").args(["--preset", RELEASE_PRESET]),
          )],
        ),
        BuildStage::new(
          StageKind::Compile,
          vec![StageCommand::required(
            CommandLine::new("cmake").args(["--build", RELEASE_BUILD_DIR]),
          )],
        ),
      ],
    }
  }

  pub fn kinds(&self) -> Vec<StageKind> {
    self.stages.iter().map(|s| s.kind).collect()
  }
}
