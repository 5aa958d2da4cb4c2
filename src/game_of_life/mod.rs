//! Game of Life core functionality

pub mod board;
pub mod error;
pub mod pattern;
pub mod rules;

pub use board::{Board, Cell, LiveSet};
pub use error::{LifeError, Result};
pub use pattern::{create_example_patterns, PatternStore, DEFAULT_LABEL, DEFAULT_PATTERN_FILE};
pub use rules::GameOfLifeRules;
