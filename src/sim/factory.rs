//! Simulator factory - lifecycle of the chosen backend for one run.
//!
//! The factory binds a parsed run configuration to exactly one simulator,
//! chosen eagerly at construction time. Once constructed the choice never
//! changes: one factory per run, used once.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{ArgMatches, Command};
use tracing::debug;

use crate::sim::interface::{Simulator, SimulatorHandle};
use crate::sim::registry::{requested_from_env, select_simulator, supported_simulators};
use crate::util::fs::ensure_dir;

/// Creates simulator backend instances for a test run.
#[derive(Debug)]
pub struct SimulatorFactory {
    args: ArgMatches,
    output_path: PathBuf,
    simulator: &'static dyn Simulator,
}

impl SimulatorFactory {
    /// Bind the parsed run configuration to a simulator.
    ///
    /// Selection happens here, honoring the `VUNIT_SIMULATOR` override.
    /// The configuration must carry the run's base `output-path` option.
    pub fn new(args: ArgMatches) -> Result<Self> {
        let simulator = select_simulator(&supported_simulators(), requested_from_env().as_deref())?;
        Self::with_simulator(args, simulator)
    }

    fn with_simulator(args: ArgMatches, simulator: &'static dyn Simulator) -> Result<Self> {
        let output_path = args
            .try_get_one::<PathBuf>("output-path")
            .context("run configuration does not define `output-path`")?
            .cloned()
            .ok_or_else(|| anyhow!("run configuration has no output path"))?;

        Ok(SimulatorFactory {
            args,
            output_path,
            simulator,
        })
    }

    /// Let the simulator that will be used contribute its own CLI options.
    ///
    /// Runs before any factory exists, so it performs its own selection
    /// from the same `VUNIT_SIMULATOR` environment lookup and delegates to
    /// that simulator's argument hook.
    pub fn add_arguments(cmd: Command) -> Result<Command> {
        let simulator = select_simulator(&supported_simulators(), requested_from_env().as_deref())?;
        Ok(simulator.add_arguments(cmd))
    }

    /// Name of the simulator chosen for this run.
    pub fn simulator_name(&self) -> &'static str {
        self.simulator.name()
    }

    /// The simulator-specific output directory, `<output-path>/<name>`.
    ///
    /// Pure accessor; nothing is created until [`create`](Self::create).
    pub fn simulator_output_path(&self) -> PathBuf {
        self.output_path.join(self.simulator.name())
    }

    /// Provision the output directory and construct the backend instance.
    ///
    /// Directory creation is idempotent; a pre-existing directory is not an
    /// error. Construction errors from the simulator propagate unwrapped.
    pub fn create(&self) -> Result<Box<dyn SimulatorHandle>> {
        let output_path = self.simulator_output_path();
        ensure_dir(&output_path)?;
        debug!(
            "provisioned `{}` output directory at {}",
            self.simulator.name(),
            output_path.display()
        );

        self.simulator.from_args(&output_path, &self.args)
    }
}
