//! Compile-time configuration for the build pipeline.

use std::time::Duration;

/// Executables that must be on PATH before any stage runs, in report order.
pub const REQUIRED_TOOLS: [&str; 4] = ["cmake", "conan", "clang", "ninja"];

/// Upper bound for a single probe (tool lookup or path check).
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Well-known Visual Studio installation roots, probed in order on Windows.
pub const VISUAL_STUDIO_PATHS: [&str; 2] = [
  r"C:\Program Files\Microsoft Visual Studio",
  r"C:\Program Files (x86)\Microsoft Visual Studio",
];

pub const VISUAL_STUDIO_DOWNLOAD_URL: &str = "https://visualstudio.microsoft.com/downloads/";

/// Output folder for `conan install`.
pub const INSTALL_OUTPUT_DIR: &str = ".install";

/// CMake preset used for configure.
pub const RELEASE_PRESET: &str = "release";

/// Build tree produced by the release preset.
pub const RELEASE_BUILD_DIR: &str = ".build/release";
