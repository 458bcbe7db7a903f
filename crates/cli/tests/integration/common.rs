//! Shared test helpers for CLI integration tests.
//!
//! Each test gets a private `bin/` directory that becomes the whole `PATH` of
//! the leafbuild process. Stand-in tools are small `/bin/sh` scripts that
//! append their invocation to a log file and exit with a chosen status.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Isolated test environment.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  /// Environment with a `which` stand-in and no other tools.
  pub fn empty() -> Self {
    let env = Self {
      temp: TempDir::new().unwrap(),
    };
    fs::create_dir_all(env.bin_dir()).unwrap();
    fs::create_dir_all(env.project_dir()).unwrap();
    // Succeeds when an executable of that name sits next to this script.
    env.write_script("which", "[ -x \"${0%/*}/$1\" ]");
    env
  }

  /// Environment where every required tool exists and every command exits 0.
  pub fn with_all_tools() -> Self {
    let env = Self::empty();
    for tool in ["cmake", "conan", "clang", "ninja"] {
      env.install_tool(tool, "exit 0");
    }
    env
  }

  pub fn bin_dir(&self) -> PathBuf {
    self.temp.path().join("bin")
  }

  pub fn project_dir(&self) -> PathBuf {
    self.temp.path().join("project")
  }

  pub fn log_path(&self) -> PathBuf {
    self.temp.path().join("calls.log")
  }

  /// Install a tool that logs its arguments, then runs `body`.
  pub fn install_tool(&self, name: &str, body: &str) {
    let script = format!(
      "echo \"{} $*\" >> '{}'\n{}",
      name,
      self.log_path().display(),
      body
    );
    self.write_script(name, &script);
  }

  pub fn remove_tool(&self, name: &str) {
    fs::remove_file(self.bin_dir().join(name)).unwrap();
  }

  fn write_script(&self, name: &str, body: &str) {
    let path = self.bin_dir().join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
  }

  /// Logged tool invocations, in order.
  pub fn calls(&self) -> Vec<String> {
    fs::read_to_string(self.log_path())
      .map(|s| s.lines().map(str::to_string).collect())
      .unwrap_or_default()
  }

  /// Get a pre-configured Command for the leafbuild binary.
  ///
  /// `PATH` contains only the stand-in tools and the working directory is
  /// the scratch project.
  pub fn leafbuild_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("leafbuild");
    cmd.env("PATH", self.bin_dir());
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(self.project_dir());
    cmd
  }
}
