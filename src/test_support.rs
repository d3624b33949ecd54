//! Fake simulator descriptors for selection and factory unit tests.
//!
//! The real descriptors probe `PATH`, which makes their outcome depend on
//! the machine running the tests. The fakes answer their probe from a
//! compiled-in flag instead, so selection and factory behavior can be
//! tested deterministically.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{ArgMatches, Command};

use crate::sim::interface::{Simulator, SimulatorHandle};

/// A simulator descriptor with scripted probe and construction outcomes.
pub struct FakeSimulator {
    name: &'static str,
    available: bool,
    probe_fails: bool,
    construction_fails: bool,
}

impl FakeSimulator {
    /// A simulator whose probe always answers true.
    pub const fn available(name: &'static str) -> Self {
        FakeSimulator {
            name,
            available: true,
            probe_fails: false,
            construction_fails: false,
        }
    }

    /// A simulator whose probe always answers false.
    pub const fn unavailable(name: &'static str) -> Self {
        FakeSimulator {
            name,
            available: false,
            probe_fails: false,
            construction_fails: false,
        }
    }

    /// A simulator whose probe itself errors.
    pub const fn broken_probe(name: &'static str) -> Self {
        FakeSimulator {
            name,
            available: false,
            probe_fails: true,
            construction_fails: false,
        }
    }

    /// An available simulator whose `from_args` errors.
    pub const fn broken_construction(name: &'static str) -> Self {
        FakeSimulator {
            name,
            available: true,
            probe_fails: false,
            construction_fails: true,
        }
    }
}

impl Simulator for FakeSimulator {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_available(&self) -> Result<bool> {
        if self.probe_fails {
            bail!("availability probe failed for `{}`", self.name);
        }
        Ok(self.available)
    }

    fn add_arguments(&self, cmd: Command) -> Command {
        cmd
    }

    fn from_args(
        &self,
        output_path: &Path,
        _args: &ArgMatches,
    ) -> Result<Box<dyn SimulatorHandle>> {
        if self.construction_fails {
            bail!("could not construct `{}` backend", self.name);
        }
        Ok(Box::new(FakeHandle {
            name: self.name,
            output_path: output_path.to_path_buf(),
        }))
    }
}

/// Handle produced by [`FakeSimulator::from_args`].
pub struct FakeHandle {
    name: &'static str,
    output_path: PathBuf,
}

impl SimulatorHandle for FakeHandle {
    fn simulator_name(&self) -> &'static str {
        self.name
    }

    fn output_path(&self) -> &Path {
        &self.output_path
    }
}
