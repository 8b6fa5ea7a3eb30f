use std::thread;
use std::time::{Duration, Instant};

/// Caps the frame loop at a target rate by sleeping off whatever is left of each frame.
pub struct FrameLimiter {
    frame: Duration,
    last: Instant,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            last: Instant::now(),
        }
    }

    pub fn frame(&self) -> Duration {
        self.frame
    }

    /// Time still owed to the current frame after `elapsed` has passed, if any.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.frame.checked_sub(elapsed).filter(|d| !d.is_zero())
    }

    /// Sleeps until one frame has passed since the previous tick.
    pub fn tick(&mut self) {
        if let Some(wait) = self.remaining(self.last.elapsed()) {
            thread::sleep(wait);
        }

        self.last = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_fps_frame_length() {
        let limiter = FrameLimiter::new(60);
        assert_eq!(limiter.frame(), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn remaining_covers_rest_of_frame() {
        let limiter = FrameLimiter::new(50);

        assert_eq!(
            limiter.remaining(Duration::from_millis(5)),
            Some(Duration::from_millis(15))
        );
        assert_eq!(limiter.remaining(Duration::from_millis(20)), None);
        assert_eq!(limiter.remaining(Duration::from_millis(35)), None);
    }

    #[test]
    fn tick_waits_out_the_frame() {
        let mut limiter = FrameLimiter::new(100);
        let start = Instant::now();

        limiter.tick();
        limiter.tick();

        assert!(start.elapsed() >= Duration::from_millis(10));
    }
}
