//! Registry of supported simulators and the selection policy.
//!
//! The registry always constructs successfully - it lists the compiled-in
//! backends without checking whether they are actually installed.
//! Availability is probed lazily when a simulator is selected.

use std::env;

use anyhow::Result;
use tracing::debug;

use crate::sim::errors::SelectError;
use crate::sim::ghdl::Ghdl;
use crate::sim::interface::Simulator;
use crate::sim::modelsim::ModelSim;

/// Environment variable that forces a specific simulator.
///
/// Its value must exactly match a supported simulator's name.
pub const SIMULATOR_ENV_VAR: &str = "VUNIT_SIMULATOR";

static MODELSIM: ModelSim = ModelSim;
static GHDL: Ghdl = Ghdl;

/// All supported simulators, in default-selection priority order.
///
/// The list is fixed at build time and returned unchanged on every call.
/// Registry order is the tie-break when no explicit override is given.
/// Names are unique within the list.
pub fn supported_simulators() -> [&'static dyn Simulator; 2] {
    [&MODELSIM, &GHDL]
}

/// Subsequence of `supported` whose executables are currently reachable.
///
/// Preserves registry order. Probes may run executable lookups; a probe
/// error propagates unchanged.
pub fn available_simulators<'a>(
    supported: &[&'a dyn Simulator],
) -> Result<Vec<&'a dyn Simulator>> {
    let mut available = Vec::new();
    for simulator in supported {
        if simulator.is_available()? {
            available.push(*simulator);
        } else {
            debug!("simulator `{}` is not available", simulator.name());
        }
    }
    Ok(available)
}

/// Select exactly one simulator from `supported`.
///
/// `requested` is the explicit override token, normally the value of
/// [`SIMULATOR_ENV_VAR`]; passing it in keeps selection deterministic and
/// testable without touching real process state. With no override the
/// first available simulator in registry order wins.
///
/// An override token is validated against the supported set, not the
/// available set: a supported but currently unavailable simulator is still
/// selected when named explicitly, on the assumption that the user knows
/// their environment better than the probe does. Construction will fail
/// later if the executable really is missing.
pub fn select_simulator<'a>(
    supported: &[&'a dyn Simulator],
    requested: Option<&str>,
) -> Result<&'a dyn Simulator> {
    let available = available_simulators(supported)?;
    if available.is_empty() {
        return Err(SelectError::NoSimulatorAvailable.into());
    }

    let selected = match requested {
        Some(token) => *supported
            .iter()
            .find(|simulator| simulator.name() == token)
            .ok_or_else(|| SelectError::UnsupportedSimulator {
                requested: token.to_string(),
                supported: supported.iter().map(|s| s.name().to_string()).collect(),
            })?,
        None => available[0],
    };

    debug!("selected simulator `{}`", selected.name());
    Ok(selected)
}

/// Read the override token from the process environment.
pub(crate) fn requested_from_env() -> Option<String> {
    env::var(SIMULATOR_ENV_VAR).ok()
}
