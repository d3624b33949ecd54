//! Simulator backend abstraction system.
//!
//! Every supported simulator implements the [`Simulator`] trait: a stable
//! name, an availability probe, an argument-registration hook, and a
//! construction hook. The registry is a fixed, ordered list of descriptors;
//! availability is probed lazily when selection actually happens.
//!
//! # Architecture
//!
//! ```text
//!   supported_simulators()          fixed registry, order = priority
//!             │
//!             ▼
//!   available_simulators()          probe filter (PATH lookups)
//!             │
//!             ▼
//!   select_simulator()              override token, else first available
//!             │
//!             ▼
//!   SimulatorFactory::create()      provision directory, from_args()
//! ```
//!
//! Selection honors the `VUNIT_SIMULATOR` environment variable as an
//! explicit override; with no override the first available simulator in
//! registry order wins.

pub mod errors;
pub mod factory;
pub mod ghdl;
pub mod interface;
pub mod modelsim;
pub mod registry;

// Re-export commonly used types
pub use errors::SelectError;
pub use factory::SimulatorFactory;
pub use ghdl::Ghdl;
pub use interface::{Simulator, SimulatorHandle};
pub use modelsim::ModelSim;
pub use registry::{
    available_simulators, select_simulator, supported_simulators, SIMULATOR_ENV_VAR,
};
