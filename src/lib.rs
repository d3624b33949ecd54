//! VUnit - a unit testing front end for HDL designs
//!
//! This crate provides the simulator selection core: the registry of
//! supported simulator backends, availability probing, the selection
//! policy, and the factory that provisions a working directory and
//! constructs the backend instance a test run drives.

pub mod sim;
pub mod util;

/// Fake simulator descriptors for selection and factory unit tests.
#[cfg(test)]
pub mod test_support;

pub use sim::{
    available_simulators, select_simulator, supported_simulators, SelectError, Simulator,
    SimulatorFactory, SimulatorHandle, SIMULATOR_ENV_VAR,
};
