//! Configuration settings for the Game of Life simulator

use crate::game_of_life::{DEFAULT_LABEL, DEFAULT_PATTERN_FILE};
use crate::simulation::{SimulationController, DEFAULT_DENSITY};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub board: BoardConfig,
    pub simulation: SimulationConfig,
    pub patterns: PatternConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub target_fps: u32,
    pub density: f64,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternConfig {
    pub default_file: PathBuf,
    pub label: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board: BoardConfig {
                width: 60,
                height: 30,
            },
            simulation: SimulationConfig {
                target_fps: 10,
                density: DEFAULT_DENSITY,
                seed: None,
            },
            patterns: PatternConfig {
                default_file: PathBuf::from(DEFAULT_PATTERN_FILE),
                label: DEFAULT_LABEL.to_string(),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            log::warn!("Config file {} not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.board.width <= 0 || self.board.height <= 0 {
            anyhow::bail!(
                "Board dimensions must be positive, got {}x{}",
                self.board.width,
                self.board.height
            );
        }

        if self.simulation.target_fps == 0 {
            anyhow::bail!("Target frame rate must be positive");
        }

        if !(0.0..=1.0).contains(&self.simulation.density) {
            anyhow::bail!(
                "Density must be between 0 and 1, got {}",
                self.simulation.density
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(width) = cli_overrides.width {
            self.board.width = width;
        }
        if let Some(height) = cli_overrides.height {
            self.board.height = height;
        }
        if let Some(fps) = cli_overrides.fps {
            self.simulation.target_fps = fps;
        }
        if let Some(seed) = cli_overrides.seed {
            self.simulation.seed = Some(seed);
        }
    }

    /// Build a paused controller from these settings
    pub fn build_controller(&self) -> Result<SimulationController> {
        let controller = SimulationController::new(
            self.board.width,
            self.board.height,
            self.simulation.target_fps,
        )
        .context("Failed to create simulation")?
        .with_density(self.simulation.density)
        .with_pattern_file(&self.patterns.default_file, &self.patterns.label);

        Ok(match self.simulation.seed {
            Some(seed) => controller.with_seed(seed),
            None => controller,
        })
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub fps: Option<u32>,
    pub seed: Option<u64>,
}
