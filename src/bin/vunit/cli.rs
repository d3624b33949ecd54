//! Base CLI schema, before simulator-specific options are registered.

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

/// Build the base `vunit` command.
///
/// The chosen simulator contributes its own options on top of this schema
/// via `SimulatorFactory::add_arguments`.
pub fn base_command() -> Command {
    Command::new("vunit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Unit testing for HDL designs, driving an external simulator")
        .arg(
            Arg::new("output-path")
                .short('o')
                .long("output-path")
                .value_parser(value_parser!(PathBuf))
                .default_value("vunit_out")
                .help("Directory where test outputs are stored"),
        )
        .arg(
            Arg::new("list-simulators")
                .long("list-simulators")
                .action(ArgAction::SetTrue)
                .help("List supported simulators and whether they are available"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Enable verbose output"),
        )
}
