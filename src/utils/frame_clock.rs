//! Frame pacing for the driving loop

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Number of recent frames averaged for the measured rate
const WINDOW: usize = 30;

/// Sleeps between frames to hold a target rate and measures the rate achieved
pub struct FrameClock {
    frame_time: Duration,
    last_frame: Instant,
    recent: VecDeque<Duration>,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        Self {
            frame_time: Duration::from_secs(1) / target_fps.max(1),
            last_frame: Instant::now(),
            recent: VecDeque::with_capacity(WINDOW),
        }
    }

    /// Wait out the remainder of the current frame and return the time
    /// elapsed since the previous call.
    pub fn tick(&mut self) -> Duration {
        let busy = self.last_frame.elapsed();
        if busy < self.frame_time {
            std::thread::sleep(self.frame_time - busy);
        }
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.record(elapsed);
        elapsed
    }

    fn record(&mut self, elapsed: Duration) {
        if self.recent.len() == WINDOW {
            self.recent.pop_front();
        }
        self.recent.push_back(elapsed);
    }

    /// Average frames per second over the recent window, 0 before any frame
    pub fn measured_fps(&self) -> f64 {
        let total: Duration = self.recent.iter().sum();
        if total.is_zero() {
            return 0.0;
        }
        self.recent.len() as f64 / total.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measured_fps_starts_at_zero() {
        let clock = FrameClock::new(10);
        assert_eq!(clock.measured_fps(), 0.0);
    }

    #[test]
    fn test_measured_fps_from_recorded_frames() {
        let mut clock = FrameClock::new(10);
        for _ in 0..4 {
            clock.record(Duration::from_millis(50));
        }
        assert!((clock.measured_fps() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_window_is_bounded() {
        let mut clock = FrameClock::new(10);
        for _ in 0..(WINDOW * 2) {
            clock.record(Duration::from_millis(10));
        }
        assert_eq!(clock.recent.len(), WINDOW);
    }

    #[test]
    fn test_tick_waits_for_frame_time() {
        let mut clock = FrameClock::new(50);
        let elapsed = clock.tick();
        assert!(elapsed >= Duration::from_millis(20));
    }
}
