//! `vunit --list-simulators`
//!
//! Survey the supported simulators and their availability.

use anyhow::Result;

use vunit::supported_simulators;

pub fn execute() -> Result<()> {
    println!("Supported simulators:");
    println!();

    for simulator in supported_simulators() {
        let status = if simulator.is_available()? {
            "available"
        } else {
            "not found on PATH"
        };

        println!("  {:<10} {}", simulator.name(), status);
    }

    Ok(())
}
