use predicates::prelude::*;

use super::common::TestEnv;

const INSTALL: &str = "conan install . -of .install -b missing -o &:build_app=True -s &:compiler=clang \
                       -s &:compiler.version=20 -s compiler.cppstd=20 -s build_type=Release \
                       -c tools.cmake.cmaketoolchain:generator=Ninja";

#[test]
fn build_runs_all_stages_in_order() {
  let env = TestEnv::with_all_tools();

  env
    .leafbuild_cmd()
    .assert()
    .success()
    .stdout(predicate::str::contains("All required tools are installed"))
    .stdout(predicate::str::contains("Build completed successfully."))
    .stderr(predicate::str::contains("Aborting").not());

  assert_eq!(
    env.calls(),
    vec![
      "conan profile detect",
      INSTALL,
      "cmake --preset release",
      "cmake --build .build/release",
    ]
  );
}

#[test]
fn explicit_build_subcommand_matches_default() {
  let env = TestEnv::with_all_tools();

  env.leafbuild_cmd().arg("build").assert().success();

  assert_eq!(env.calls().len(), 4);
}

#[test]
fn missing_tool_aborts_before_any_stage() {
  let env = TestEnv::with_all_tools();
  env.remove_tool("ninja");

  env
    .leafbuild_cmd()
    .assert()
    .code(1)
    .stderr(predicate::str::contains(
      "The following required tools are not installed: ninja",
    ))
    .stderr(predicate::str::contains("Please install the missing tools and try again."));

  assert!(env.calls().is_empty());
}

#[test]
fn missing_tools_are_listed_in_requirement_order() {
  let env = TestEnv::empty();
  env.install_tool("conan", "exit 0");

  env
    .leafbuild_cmd()
    .assert()
    .code(1)
    .stderr(predicate::str::contains("not installed: cmake, clang, ninja"));
}

#[test]
fn install_failure_skips_configure_and_compile() {
  let env = TestEnv::with_all_tools();
  env.install_tool("conan", "if [ \"$1\" = install ]; then exit 2; fi\nexit 0");

  env
    .leafbuild_cmd()
    .assert()
    .code(1)
    .stderr(predicate::str::contains(
      "Failed to install conan dependencies. Aborting build.",
    ));

  let calls = env.calls();
  assert_eq!(calls, vec!["conan profile detect", INSTALL]);
}

#[test]
fn configure_failure_skips_compile() {
  let env = TestEnv::with_all_tools();
  env.install_tool("cmake", "if [ \"$1\" = --preset ]; then exit 1; fi\nexit 0");

  env
    .leafbuild_cmd()
    .assert()
    .code(1)
    .stderr(predicate::str::contains("Failed to configure CMake. Aborting build."));

  assert_eq!(env.calls().last().map(String::as_str), Some("cmake --preset release"));
}

#[test]
fn compile_failure_exits_non_zero() {
  let env = TestEnv::with_all_tools();
  env.install_tool("cmake", "if [ \"$1\" = --build ]; then exit 1; fi\nexit 0");

  env
    .leafbuild_cmd()
    .assert()
    .code(1)
    .stderr(predicate::str::contains("Build failed. Aborting."))
    .stdout(predicate::str::contains("Build completed successfully.").not());
}

#[test]
fn profile_detect_failure_does_not_stop_the_build() {
  let env = TestEnv::with_all_tools();
  env.install_tool("conan", "if [ \"$1\" = profile ]; then exit 1; fi\nexit 0");

  env
    .leafbuild_cmd()
    .assert()
    .success()
    .stderr(predicate::str::contains("continuing"));

  assert_eq!(env.calls().len(), 4);
}
