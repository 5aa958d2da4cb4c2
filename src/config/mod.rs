//! Configuration management for the Game of Life simulator

pub mod settings;

pub use settings::{BoardConfig, CliOverrides, PatternConfig, Settings, SimulationConfig};
