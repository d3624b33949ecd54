//! VUnit CLI - selects and provisions an HDL simulator backend.

use anyhow::Result;
use clap::ArgMatches;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let base = cli::base_command();

    // The chosen simulator registers its options before parsing, which
    // requires a successful selection. Listing must keep working when no
    // simulator can be selected, so in that case fall back to a lenient
    // parse of the base schema and surface the selection error otherwise.
    let matches = match vunit::SimulatorFactory::add_arguments(base.clone()) {
        Ok(cmd) => cmd.get_matches(),
        Err(err) => {
            let matches = base.ignore_errors(true).get_matches();
            if matches.get_flag("list-simulators") {
                init_logging(&matches);
                return commands::simulators::execute();
            }
            return Err(err);
        }
    };

    init_logging(&matches);

    if matches.get_flag("list-simulators") {
        return commands::simulators::execute();
    }

    commands::run::execute(matches)
}

fn init_logging(matches: &ArgMatches) {
    let filter = if matches.get_flag("verbose") {
        EnvFilter::new("vunit=debug")
    } else {
        EnvFilter::new("vunit=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
