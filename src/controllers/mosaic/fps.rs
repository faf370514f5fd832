use std::thread;
use std::time::{Duration, Instant};

/// Frames per `interval`, updated once per interval.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    interval: Duration,
    window_start: Option<Instant>,
    frames: u32,
    last: Option<u32>,
}

impl FpsCounter {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            window_start: None,
            frames: 0,
            last: None,
        }
    }

    /// Counts a frame finished at `now`. Returns the frame count of the window
    /// that just closed, if this frame closed one.
    pub fn record_frame(&mut self, now: Instant) -> Option<u32> {
        let window_start = *self.window_start.get_or_insert(now);
        self.frames += 1;

        if now.duration_since(window_start) < self.interval {
            return None;
        }

        let fps = self.frames;
        self.frames = 0;
        self.window_start = Some(now);
        self.last = Some(fps);

        Some(fps)
    }

    #[must_use]
    pub fn last(&self) -> Option<u32> {
        self.last
    }
}

/// Time left of `frame_interval` for a frame that started at `frame_start`.
#[must_use]
pub fn frame_time_remaining(frame_start: Instant, now: Instant, frame_interval: Duration) -> Option<Duration> {
    frame_interval
        .checked_sub(now.duration_since(frame_start))
        .filter(|remaining| !remaining.is_zero())
}

/// Sleeps out the rest of the frame when it finished early.
pub fn pace_frame(frame_start: Instant, frame_interval: Duration) {
    if let Some(remaining) = frame_time_remaining(frame_start, Instant::now(), frame_interval) {
        thread::sleep(remaining);
    }
}
