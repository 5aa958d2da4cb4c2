//! Plain-text pattern files.
//!
//! A pattern file starts with a `# Pattern: <label>` comment and then lists
//! one live cell per line as `x,y`. Cells are written sorted by `(x, y)` so
//! the output is reproducible.

use super::board::{Cell, LiveSet};
use super::error::{LifeError, Result};
use itertools::Itertools;
use log::{debug, info, warn};
use std::path::Path;

/// File used by save and load when no name is given
pub const DEFAULT_PATTERN_FILE: &str = "patterns.txt";

/// Label written in the header when none is given
pub const DEFAULT_LABEL: &str = "Custom";

const COMMENT_MARKER: char = '#';

/// Reads and writes live-cell sets as coordinate lists
pub struct PatternStore;

impl PatternStore {
    /// Render a live set in the pattern file format
    pub fn pattern_to_string(cells: &LiveSet, label: &str) -> String {
        let mut result = String::with_capacity(16 + cells.len() * 8);
        result.push_str(&format!("{} Pattern: {}\n", COMMENT_MARKER, label));
        for (x, y) in cells.iter().sorted() {
            result.push_str(&format!("{},{}\n", x, y));
        }
        result
    }

    /// Parse pattern text, keeping only cells inside `width` x `height`.
    ///
    /// Comment lines are skipped and any line that is not exactly two
    /// comma-separated integers is ignored.
    pub fn parse(content: &str, width: i32, height: i32) -> LiveSet {
        let mut cells = LiveSet::new();
        let mut malformed = 0usize;
        let mut outside = 0usize;

        for line in content.lines() {
            if line.starts_with(COMMENT_MARKER) {
                continue;
            }
            match parse_cell(line) {
                Some((x, y)) if (0..width).contains(&x) && (0..height).contains(&y) => {
                    cells.insert((x, y));
                }
                Some(_) => outside += 1,
                None => malformed += 1,
            }
        }

        if malformed > 0 {
            debug!("Skipped {} malformed pattern line(s)", malformed);
        }
        if outside > 0 {
            debug!(
                "Discarded {} cell(s) outside the {}x{} board",
                outside, width, height
            );
        }
        cells
    }

    /// Write a live set to `path`
    pub fn save<P: AsRef<Path>>(cells: &LiveSet, path: P, label: &str) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, Self::pattern_to_string(cells, label))
            .map_err(|e| LifeError::io(path, e))?;
        info!("Saved {} live cell(s) to {}", cells.len(), path.display());
        Ok(())
    }

    /// Read a live set from `path`, bounded by the current board dimensions.
    ///
    /// A missing file loads as an empty set. Other read failures are errors;
    /// bytes that are not valid UTF-8 only spoil the lines they sit on.
    pub fn load<P: AsRef<Path>>(path: P, width: i32, height: i32) -> Result<LiveSet> {
        Self::read(path.as_ref(), width, height, true)
    }

    /// Like [`PatternStore::load`], but a missing file is an error
    pub fn load_existing<P: AsRef<Path>>(path: P, width: i32, height: i32) -> Result<LiveSet> {
        Self::read(path.as_ref(), width, height, false)
    }

    fn read(path: &Path, width: i32, height: i32, missing_is_empty: bool) -> Result<LiveSet> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if missing_is_empty && e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Pattern file {} not found, loading empty board", path.display());
                return Ok(LiveSet::new());
            }
            Err(e) => return Err(LifeError::io(path, e)),
        };

        let cells = Self::parse(&String::from_utf8_lossy(&bytes), width, height);
        info!("Loaded {} live cell(s) from {}", cells.len(), path.display());
        Ok(cells)
    }
}

fn parse_cell(line: &str) -> Option<Cell> {
    let (x, y) = line.trim().split(',').collect_tuple()?;
    Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
}

/// Write a few well-known patterns into `output_dir`
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|e| LifeError::io(dir, e))?;

    let examples: [(&str, &[Cell]); 4] = [
        ("glider", &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]),
        ("blinker", &[(2, 1), (2, 2), (2, 3)]),
        ("block", &[(1, 1), (2, 1), (1, 2), (2, 2)]),
        ("beacon", &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)]),
    ];

    for (name, cells) in examples {
        let cells: LiveSet = cells.iter().copied().collect();
        let mut label = name.to_string();
        if let Some(first) = label.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        PatternStore::save(&cells, dir.join(format!("{}.txt", name)), &label)?;
    }

    Ok(())
}
