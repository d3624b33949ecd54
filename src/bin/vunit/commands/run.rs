//! Default command: select a simulator and provision its workspace.

use anyhow::Result;
use clap::ArgMatches;

use vunit::SimulatorFactory;

pub fn execute(matches: ArgMatches) -> Result<()> {
    let factory = SimulatorFactory::new(matches)?;
    println!("Selected simulator: {}", factory.simulator_name());

    let handle = factory.create()?;
    println!("Simulator output path: {}", handle.output_path().display());

    Ok(())
}
