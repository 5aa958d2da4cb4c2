//! Simulation controller: owns the board, generation counter and run state

use super::command::Command;
use crate::game_of_life::{
    Board, LifeError, LiveSet, PatternStore, Result, DEFAULT_LABEL, DEFAULT_PATTERN_FILE,
};
use itertools::iproduct;
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Smallest width or height the controller will resize to
pub const MIN_DIMENSION: i32 = 20;

/// Density used by randomize when none is given
pub const DEFAULT_DENSITY: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Paused,
    Running,
}

/// Read-only snapshot for renderers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Status {
    pub generation: u64,
    pub live_cells: usize,
    pub fps: f64,
    pub state: RunState,
    pub width: i32,
    pub height: i32,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Gen: {} | Live: {} | FPS: {}",
            self.generation, self.live_cells, self.fps as u32
        )?;
        if self.state == RunState::Paused {
            write!(f, " | Paused")?;
        }
        Ok(())
    }
}

/// Drives a [`Board`] through generations
#[derive(Debug, Clone)]
pub struct SimulationController {
    board: Board,
    generation: u64,
    state: RunState,
    target_fps: u32,
    density: f64,
    since_last_step: Duration,
    pattern_file: PathBuf,
    label: String,
    rng: ChaCha8Rng,
}

impl SimulationController {
    /// Create a paused controller with an empty board
    pub fn new(width: i32, height: i32, target_fps: u32) -> Result<Self> {
        if target_fps == 0 {
            return Err(LifeError::InvalidFrameRate(target_fps));
        }
        Ok(Self {
            board: Board::new(width, height)?,
            generation: 0,
            state: RunState::Paused,
            target_fps,
            density: DEFAULT_DENSITY,
            since_last_step: Duration::ZERO,
            pattern_file: PathBuf::from(DEFAULT_PATTERN_FILE),
            label: DEFAULT_LABEL.to_string(),
            rng: ChaCha8Rng::from_entropy(),
        })
    }

    /// Use a fixed seed so randomize is reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    /// Density used by `Command::Randomize(None)`
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// File and header label used when save/load get no explicit file
    pub fn with_pattern_file<P: Into<PathBuf>>(mut self, path: P, label: &str) -> Self {
        self.pattern_file = path.into();
        self.label = label.to_string();
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn run_state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// Time between automatic steps
    pub fn step_interval(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps
    }

    pub fn status(&self, measured_fps: f64) -> Status {
        Status {
            generation: self.generation,
            live_cells: self.board.live_count(),
            fps: measured_fps,
            state: self.state,
            width: self.board.width(),
            height: self.board.height(),
        }
    }

    pub fn toggle_run(&mut self) {
        self.state = match self.state {
            RunState::Paused => RunState::Running,
            RunState::Running => RunState::Paused,
        };
        debug!("Simulation {:?} at generation {}", self.state, self.generation);
    }

    pub fn set_running(&mut self, running: bool) {
        self.state = if running {
            RunState::Running
        } else {
            RunState::Paused
        };
    }

    /// Advance one generation regardless of run state
    pub fn step_once(&mut self) {
        let next = self.board.next_generation();
        self.board.replace_cells(next);
        self.generation += 1;
    }

    /// Feed elapsed wall time from the driving loop.
    ///
    /// While running, performs at most one step once a full step interval
    /// has accumulated; missed steps are not made up. Returns whether a
    /// step happened.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        self.since_last_step = self.since_last_step.saturating_add(elapsed);
        if self.state != RunState::Running || self.since_last_step < self.step_interval() {
            return false;
        }
        self.step_once();
        self.since_last_step = Duration::ZERO;
        true
    }

    /// Replace the board with an independent Bernoulli draw per cell.
    /// Resets the generation counter and pauses.
    pub fn randomize(&mut self, density: f64) {
        let p = if density.is_nan() {
            0.0
        } else {
            density.clamp(0.0, 1.0)
        };
        let (width, height) = (self.board.width(), self.board.height());
        let rng = &mut self.rng;
        let cells: LiveSet = iproduct!(0..width, 0..height)
            .filter(|_| rng.gen_bool(p))
            .collect();

        self.board.replace_cells(cells);
        self.generation = 0;
        self.state = RunState::Paused;
        info!(
            "Randomized {}x{} board at density {:.2}: {} live cell(s)",
            width,
            height,
            p,
            self.board.live_count()
        );
    }

    pub fn clear(&mut self) {
        self.board.replace_cells(LiveSet::new());
        self.generation = 0;
        self.state = RunState::Paused;
    }

    /// Resize the board, clamping each dimension to at least [`MIN_DIMENSION`].
    /// Generation and run state are kept.
    pub fn resize(&mut self, new_width: i32, new_height: i32) -> Result<()> {
        let width = new_width.max(MIN_DIMENSION);
        let height = new_height.max(MIN_DIMENSION);
        self.board.resize(width, height)?;
        info!("Resized board to {}x{}", width, height);
        Ok(())
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        PatternStore::save(self.board.cells(), path, &self.label)
    }

    /// Load cells bounded by the current board. Resets the generation and pauses.
    /// A missing file clears the board.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let cells = PatternStore::load(path, self.board.width(), self.board.height())?;
        self.install_loaded(cells);
        Ok(())
    }

    /// Load a file the caller named explicitly; a missing file is an error
    /// and leaves the board as it was.
    pub fn load_existing<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let cells = PatternStore::load_existing(path, self.board.width(), self.board.height())?;
        self.install_loaded(cells);
        Ok(())
    }

    fn install_loaded(&mut self, cells: LiveSet) {
        self.board.replace_cells(cells);
        self.generation = 0;
        self.state = RunState::Paused;
    }

    /// Dispatch a user command. `Quit` is left to the caller.
    pub fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::TogglePlay => self.toggle_run(),
            Command::Step => self.step_once(),
            Command::Clear => self.clear(),
            Command::Randomize(density) => self.randomize(density.unwrap_or(self.density)),
            Command::Save(file) => {
                let path = file.unwrap_or_else(|| self.pattern_file.clone());
                self.save(path)?;
            }
            Command::Load(file) => {
                let path = file.unwrap_or_else(|| self.pattern_file.clone());
                self.load(path)?;
            }
            Command::Resize(width, height) => self.resize(width, height)?,
            Command::Tick(elapsed) => {
                self.tick(elapsed);
            }
            Command::Quit => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn controller() -> SimulationController {
        SimulationController::new(30, 25, 10).unwrap().with_seed(7)
    }

    fn blinker() -> LiveSet {
        [(2, 1), (2, 2), (2, 3)].into_iter().collect()
    }

    #[test]
    fn test_new_rejects_bad_parameters() {
        assert!(matches!(
            SimulationController::new(0, 10, 10),
            Err(LifeError::InvalidDimension { .. })
        ));
        assert!(matches!(
            SimulationController::new(10, 10, 0),
            Err(LifeError::InvalidFrameRate(0))
        ));
    }

    #[test]
    fn test_toggle_run() {
        let mut sim = controller();
        assert_eq!(sim.run_state(), RunState::Paused);
        sim.toggle_run();
        assert!(sim.is_running());
        sim.toggle_run();
        assert!(!sim.is_running());
    }

    #[test]
    fn test_step_once_keeps_run_state() {
        let mut sim = controller();
        sim.board.replace_cells(blinker());
        sim.step_once();
        assert_eq!(sim.generation(), 1);
        assert!(sim.board().is_alive(1, 2));
        assert_eq!(sim.run_state(), RunState::Paused);

        sim.toggle_run();
        sim.step_once();
        assert_eq!(sim.generation(), 2);
        assert!(sim.is_running());
        assert_eq!(sim.board().cells(), &blinker());
    }

    #[test]
    fn test_tick_paces_steps() {
        let mut sim = controller();
        sim.board.replace_cells(blinker());

        assert!(!sim.tick(Duration::from_millis(500)));
        assert_eq!(sim.generation(), 0);

        sim.toggle_run();
        // 500ms already accumulated while paused
        assert!(sim.tick(Duration::ZERO));
        assert_eq!(sim.generation(), 1);

        assert!(!sim.tick(Duration::from_millis(60)));
        assert!(sim.tick(Duration::from_millis(40)));
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn test_tick_never_catches_up() {
        let mut sim = controller();
        sim.toggle_run();
        assert!(sim.tick(Duration::from_secs(10)));
        assert_eq!(sim.generation(), 1);
        assert!(!sim.tick(Duration::from_millis(1)));
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_randomize_resets_and_pauses() {
        let mut sim = controller();
        sim.step_once();
        sim.toggle_run();
        sim.randomize(DEFAULT_DENSITY);

        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.run_state(), RunState::Paused);
        assert!(!sim.board().is_empty());
        assert!(sim
            .board()
            .cells()
            .iter()
            .all(|&(x, y)| sim.board().in_bounds(x, y)));
    }

    #[test]
    fn test_randomize_density_extremes() {
        let mut sim = controller();
        sim.randomize(1.0);
        assert_eq!(sim.board().live_count(), 30 * 25);
        sim.randomize(0.0);
        assert!(sim.board().is_empty());
        sim.randomize(7.5);
        assert_eq!(sim.board().live_count(), 30 * 25);
        sim.randomize(f64::NAN);
        assert!(sim.board().is_empty());
    }

    #[test]
    fn test_same_seed_same_board() {
        let mut a = controller();
        let mut b = controller();
        a.randomize(0.3);
        b.randomize(0.3);
        assert_eq!(a.board(), b.board());
    }

    #[test]
    fn test_clear() {
        let mut sim = controller();
        sim.randomize(0.5);
        sim.step_once();
        sim.toggle_run();
        sim.clear();
        assert!(sim.board().is_empty());
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.run_state(), RunState::Paused);
    }

    #[test]
    fn test_resize_clamps_and_keeps_state() {
        let mut sim = SimulationController::new(60, 30, 10).unwrap();
        sim.step_once();
        sim.toggle_run();
        sim.board.replace_cells([(1, 1), (50, 5), (5, 25)].into_iter().collect());

        sim.resize(5, 22).unwrap();
        assert_eq!(sim.board().width(), MIN_DIMENSION);
        assert_eq!(sim.board().height(), 22);
        assert_eq!(sim.generation(), 1);
        assert!(sim.is_running());
        assert_eq!(sim.board().sorted_cells(), vec![(1, 1)]);

        sim.resize(-4, -4).unwrap();
        assert_eq!(sim.board().height(), MIN_DIMENSION);
    }

    #[test]
    fn test_save_and_load_reset_state() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("patterns.txt");

        let mut sim = controller();
        sim.randomize(0.3);
        let saved = sim.board().clone();
        sim.save(&path).unwrap();

        sim.step_once();
        sim.step_once();
        sim.toggle_run();
        sim.load(&path).unwrap();

        assert_eq!(sim.board(), &saved);
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.run_state(), RunState::Paused);
    }

    #[test]
    fn test_load_existing_keeps_board_when_file_missing() {
        let temp_dir = tempdir().unwrap();
        let mut sim = controller();
        sim.randomize(0.3);
        sim.step_once();
        let before = sim.board().clone();

        let result = sim.load_existing(temp_dir.path().join("typo.txt"));
        assert!(matches!(result, Err(LifeError::Io { .. })));
        assert_eq!(sim.board(), &before);
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_failed_save_leaves_board_untouched() {
        let temp_dir = tempdir().unwrap();
        let mut sim = controller();
        sim.randomize(0.3);
        let before = sim.board().clone();

        let result = sim.save(temp_dir.path().join("no_such_dir").join("p.txt"));
        assert!(matches!(result, Err(LifeError::Io { .. })));
        assert_eq!(sim.board(), &before);
    }

    #[test]
    fn test_apply_uses_default_pattern_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("default.txt");
        let mut sim = controller().with_pattern_file(&path, "Test");
        sim.board.replace_cells(blinker());

        sim.apply(Command::Save(None)).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "# Pattern: Test\n2,1\n2,2\n2,3\n");

        sim.apply(Command::Clear).unwrap();
        sim.apply(Command::Load(None)).unwrap();
        assert_eq!(sim.board().cells(), &blinker());
    }

    #[test]
    fn test_status_line() {
        let mut sim = controller();
        sim.board.replace_cells(blinker());
        sim.step_once();
        let status = sim.status(9.7);
        assert_eq!(status.generation, 1);
        assert_eq!(status.live_cells, 3);
        assert_eq!(status.to_string(), "Gen: 1 | Live: 3 | FPS: 9 | Paused");

        sim.toggle_run();
        assert_eq!(sim.status(10.0).to_string(), "Gen: 1 | Live: 3 | FPS: 10");
    }
}
