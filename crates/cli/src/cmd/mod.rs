mod build;
mod doctor;
mod plan;

pub use build::cmd_build;
pub use doctor::cmd_doctor;
pub use plan::cmd_plan;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;

/// Single-threaded runtime: probes and stages run one at a time.
fn runtime() -> Result<Runtime> {
  tokio::runtime::Builder::new_current_thread()
    .enable_all()
    .build()
    .context("Failed to create async runtime")
}
