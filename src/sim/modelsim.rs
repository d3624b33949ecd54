//! ModelSim simulator backend descriptor.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use which::which;

use crate::sim::interface::{Simulator, SimulatorHandle};

/// ModelSim descriptor. Probes for `vsim` on `PATH`.
pub struct ModelSim;

impl Simulator for ModelSim {
    fn name(&self) -> &'static str {
        "modelsim"
    }

    fn is_available(&self) -> Result<bool> {
        Ok(which("vsim").is_ok())
    }

    fn add_arguments(&self, cmd: Command) -> Command {
        cmd.arg(
            Arg::new("gui")
                .long("gui")
                .action(ArgAction::SetTrue)
                .help("Open the ModelSim GUI instead of running in batch mode"),
        )
    }

    fn from_args(
        &self,
        output_path: &Path,
        args: &ArgMatches,
    ) -> Result<Box<dyn SimulatorHandle>> {
        Ok(Box::new(ModelSimHandle {
            output_path: output_path.to_path_buf(),
            gui: args.get_flag("gui"),
        }))
    }
}

/// A provisioned ModelSim session.
pub struct ModelSimHandle {
    output_path: PathBuf,
    gui: bool,
}

impl ModelSimHandle {
    /// Whether simulations run in the ModelSim GUI.
    pub fn gui(&self) -> bool {
        self.gui
    }
}

impl SimulatorHandle for ModelSimHandle {
    fn simulator_name(&self) -> &'static str {
        "modelsim"
    }

    fn output_path(&self) -> &Path {
        &self.output_path
    }
}
