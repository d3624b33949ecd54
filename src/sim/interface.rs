//! Simulator trait definition and the opaque backend handle.
//!
//! The Simulator trait is the capability contract every backend satisfies.
//! Operations only - the selection policy lives in `registry` and the
//! lifecycle management in `factory`.

use std::path::Path;

use anyhow::Result;
use clap::{ArgMatches, Command};

/// Capability contract for one simulator backend type.
///
/// Descriptors are compiled-in, process-wide values: stateless, immutable,
/// and not owned by any particular run.
pub trait Simulator: Send + Sync {
    /// Unique, stable name of this simulator.
    ///
    /// Doubles as the `VUNIT_SIMULATOR` override token and as the name of
    /// the per-simulator output sub-directory.
    fn name(&self) -> &'static str;

    /// Check whether the simulator executable is currently reachable.
    ///
    /// May run executable lookups against `PATH` and should be called
    /// lazily when the backend is actually needed. Must be idempotent and
    /// free of side effects. A probe error is a fatal configuration
    /// problem and propagates uncaught.
    fn is_available(&self) -> Result<bool>;

    /// Register this simulator's own options into the shared CLI schema.
    fn add_arguments(&self, cmd: Command) -> Command;

    /// Construct a live backend instance from the parsed run configuration.
    ///
    /// `output_path` is the simulator-specific output directory, already
    /// provisioned by the factory. Construction errors propagate unwrapped.
    fn from_args(&self, output_path: &Path, args: &ArgMatches)
        -> Result<Box<dyn SimulatorHandle>>;
}

impl std::fmt::Debug for dyn Simulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulator").field("name", &self.name()).finish()
    }
}

/// A live, constructed simulator backend.
///
/// Opaque to the selection core; the test runner drives it. Only identity
/// and the output location are exposed here.
pub trait SimulatorHandle {
    /// Name of the simulator this handle drives.
    fn simulator_name(&self) -> &'static str;

    /// The simulator-specific output directory.
    fn output_path(&self) -> &Path;
}

impl std::fmt::Debug for dyn SimulatorHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatorHandle")
            .field("simulator_name", &self.simulator_name())
            .field("output_path", &self.output_path())
            .finish()
    }
}
