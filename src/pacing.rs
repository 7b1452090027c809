use std::time::{Duration, Instant};

/// Holds the loop to a target frame rate by sleeping out the rest of each frame.
///
/// Macroquad only offers vsync, which may run faster than the tick rate the
/// animation cadences assume.
pub struct FrameLimiter {
    frame: Duration,
    last: Instant,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        FrameLimiter {
            frame: Duration::from_secs(1) / fps.max(1),
            last: Instant::now(),
        }
    }

    #[inline]
    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Time still owed to the current frame after `elapsed` has passed.
    #[inline]
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.frame.saturating_sub(elapsed)
    }

    /// Sleep until one frame has passed since the previous call.
    pub fn wait(&mut self) {
        let rest = self.remaining(self.last.elapsed());
        if !rest.is_zero() {
            std::thread::sleep(rest);
        }
        self.last = Instant::now();
    }
}
