//! Interactive simulation state and command handling

pub mod command;
pub mod controller;

pub use command::{Command, CONTROLS};
pub use controller::{RunState, SimulationController, Status, DEFAULT_DENSITY, MIN_DIMENSION};
