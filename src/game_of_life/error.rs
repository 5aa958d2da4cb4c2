//! Error types for the Game of Life engine

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the board, pattern store and controller
#[derive(Error, Debug)]
pub enum LifeError {
    /// Width or height was zero or negative
    #[error("Invalid board dimensions {width}x{height}: both must be positive")]
    InvalidDimension { width: i32, height: i32 },

    /// Target frame rate was zero
    #[error("Invalid target frame rate {0}: must be positive")]
    InvalidFrameRate(u32),

    /// Reading or writing a pattern file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A command line could not be interpreted
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

pub type Result<T> = std::result::Result<T, LifeError>;

impl LifeError {
    pub fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LifeError::InvalidDimension { width: 0, height: 5 };
        assert_eq!(
            err.to_string(),
            "Invalid board dimensions 0x5: both must be positive"
        );
    }

    #[test]
    fn test_io_error_keeps_path() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = LifeError::io("/nope/patterns.txt", source);
        let message = err.to_string();
        assert!(message.contains("/nope/patterns.txt"));
        assert!(message.contains("denied"));
    }
}
