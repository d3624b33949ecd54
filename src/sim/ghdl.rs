//! GHDL simulator backend descriptor.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{ArgMatches, Command};
use which::which;

use crate::sim::interface::{Simulator, SimulatorHandle};

/// GHDL descriptor. Probes for `ghdl` on `PATH`.
pub struct Ghdl;

impl Simulator for Ghdl {
    fn name(&self) -> &'static str {
        "ghdl"
    }

    fn is_available(&self) -> Result<bool> {
        Ok(which("ghdl").is_ok())
    }

    // GHDL contributes no options of its own
    fn add_arguments(&self, cmd: Command) -> Command {
        cmd
    }

    fn from_args(
        &self,
        output_path: &Path,
        _args: &ArgMatches,
    ) -> Result<Box<dyn SimulatorHandle>> {
        Ok(Box::new(GhdlHandle {
            output_path: output_path.to_path_buf(),
        }))
    }
}

/// A provisioned GHDL session.
pub struct GhdlHandle {
    output_path: PathBuf,
}

impl SimulatorHandle for GhdlHandle {
    fn simulator_name(&self) -> &'static str {
        "ghdl"
    }

    fn output_path(&self) -> &Path {
        &self.output_path
    }
}
