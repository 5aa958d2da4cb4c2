//! Conway's Game of Life on a bounded grid
//!
//! This library provides a sparse live-cell board, a plain-text pattern
//! format and a controller that steps, runs, randomizes, clears, saves and
//! loads the simulation.

pub mod config;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{Board, LifeError, LiveSet, PatternStore};
pub use simulation::{Command, SimulationController};

use anyhow::{Context, Result};
use std::path::Path;

/// Load a pattern onto a fresh board and advance it `generations` steps
pub fn evolve_pattern(settings: &Settings, pattern: &Path, generations: u64) -> Result<SimulationController> {
    let mut controller = settings.build_controller()?;
    controller
        .load_existing(pattern)
        .with_context(|| format!("Failed to load pattern from {}", pattern.display()))?;
    for _ in 0..generations {
        controller.step_once();
    }
    Ok(controller)
}
