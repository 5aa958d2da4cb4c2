//! Console rendering and frame pacing helpers

pub mod display;
pub mod frame_clock;

pub use display::{BoardFormatter, ColorOutput};
pub use frame_clock::FrameClock;
