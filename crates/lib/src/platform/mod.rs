pub mod os;

use std::fmt;
use std::sync::OnceLock;

use os::Os;
use serde::Serialize;

/// Host description used to pick probe commands and optional checks.
///
/// The live profile is read once per process through [`PlatformProfile::current`];
/// tests build their own with [`PlatformProfile::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PlatformProfile {
  pub os: Os,
}

impl PlatformProfile {
  pub fn new(os: Os) -> Self {
    Self { os }
  }

  /// The profile of the running host, detected on first use
  pub fn current() -> &'static PlatformProfile {
    static PROFILE: OnceLock<PlatformProfile> = OnceLock::new();
    PROFILE.get_or_init(|| Self::new(Os::current()))
  }

  /// Whether the Visual Studio installation probe applies on this host
  pub fn probes_compiler_suite(&self) -> bool {
    self.os.is_windows()
  }
}

impl fmt::Display for PlatformProfile {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.os)
  }
}
