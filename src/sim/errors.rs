//! Simulator selection error types.

use thiserror::Error;

/// Error during simulator selection.
///
/// Both variants are precondition failures: retrying without changing the
/// environment cannot succeed, so callers surface them and stop. Probe,
/// directory-provisioning, and backend-construction failures are not part
/// of this taxonomy - they pass through from the layer that raised them.
#[derive(Debug, Error)]
pub enum SelectError {
    #[error(
        "no available simulator detected; \
         simulator executables must be available in the PATH environment variable"
    )]
    NoSimulatorAvailable,

    #[error(
        "simulator `{requested}` is not supported; supported simulators are: {}",
        .supported.join(", ")
    )]
    UnsupportedSimulator {
        requested: String,
        supported: Vec<String>,
    },
}
