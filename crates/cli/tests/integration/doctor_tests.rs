use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn doctor_passes_with_all_tools() {
  let env = TestEnv::with_all_tools();

  env
    .leafbuild_cmd()
    .arg("doctor")
    .assert()
    .success()
    .stdout(predicate::str::contains("All required tools are installed."));

  // Only probes, never stages.
  assert!(env.calls().is_empty());
}

#[test]
fn doctor_reports_missing_tools() {
  let env = TestEnv::with_all_tools();
  env.remove_tool("clang");

  env
    .leafbuild_cmd()
    .arg("doctor")
    .assert()
    .code(1)
    .stderr(predicate::str::contains("not installed: clang"));
}

#[test]
fn doctor_json_lists_every_tool() {
  let env = TestEnv::with_all_tools();
  env.remove_tool("clang");

  let output = env
    .leafbuild_cmd()
    .args(["doctor", "--output", "json"])
    .assert()
    .code(1)
    .get_output()
    .stdout
    .clone();

  let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
  let tools = report["tools"].as_array().unwrap();
  assert_eq!(tools.len(), 4);
  assert_eq!(tools[2]["tool"], "clang");
  assert_eq!(tools[2]["found"], false);
  assert_eq!(tools[0]["found"], true);
}

#[test]
fn doctor_without_which_reports_everything_missing() {
  let env = TestEnv::with_all_tools();
  env.remove_tool("which");

  env
    .leafbuild_cmd()
    .arg("doctor")
    .assert()
    .code(1)
    .stderr(predicate::str::contains("not installed: cmake, conan, clang, ninja"));
}

#[test]
fn doctor_without_which_explains_why_probes_failed() {
  let env = TestEnv::with_all_tools();
  env.remove_tool("which");

  env
    .leafbuild_cmd()
    .arg("doctor")
    .assert()
    .code(1)
    .stderr(predicate::str::contains("probe failed"))
    .stderr(predicate::str::contains("program not found: which"));
}

#[test]
fn doctor_stays_quiet_when_everything_is_found() {
  let env = TestEnv::with_all_tools();

  env
    .leafbuild_cmd()
    .arg("doctor")
    .assert()
    .success()
    .stderr(predicate::str::contains("WARN").not());
}
