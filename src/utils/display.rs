//! Display and output formatting utilities

use crate::game_of_life::Board;
use crate::simulation::{Status, CONTROLS};

/// Renders a board and its status as text
pub struct BoardFormatter;

impl BoardFormatter {
    /// Format a board in compact form
    pub fn format_board_compact(board: &Board) -> String {
        let mut output = String::with_capacity(compact_capacity(board.width(), board.height()));
        for y in 0..board.height() {
            for x in 0..board.width() {
                output.push(if board.is_alive(x, y) { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a board with coordinates
    pub fn format_board_with_coords(board: &Board) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for x in 0..board.width() {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        for y in 0..board.height() {
            output.push_str(&format!("{:2} ", y));
            for x in 0..board.width() {
                output.push_str(if board.is_alive(x, y) { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// Board, status line and key bindings, as one frame
    pub fn format_frame(board: &Board, status: &Status) -> String {
        let mut output = Self::format_board_compact(board);
        output.push_str(&status.to_string());
        output.push('\n');
        output.push_str(CONTROLS);
        output.push('\n');
        output
    }

    /// ANSI sequence that clears the terminal and homes the cursor
    pub fn clear_screen() -> &'static str {
        "\x1b[2J\x1b[H"
    }
}

/// Bytes needed for a compact rendering: up to 3 per glyph plus a newline per row
fn compact_capacity(width: i32, height: i32) -> usize {
    let (width, height) = (width.max(0) as usize, height.max(0) as usize);
    (width + 1).saturating_mul(height).saturating_mul(3)
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Blue => 34,
        }
    }
}
