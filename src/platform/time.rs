//! Frame timestamp sources
//!
//! The browser hands us `requestAnimationFrame` timestamps; tests and the
//! native runner use a synthetic clock instead.

/// Supplies frame timestamps (ms), `None` when the host stops producing frames
pub trait FrameSource {
    fn next_frame(&mut self) -> Option<f64>;
}

impl<I: Iterator<Item = f64>> FrameSource for I {
    fn next_frame(&mut self) -> Option<f64> {
        self.next()
    }
}

/// Evenly spaced frames, e.g. a 60 Hz display. Frame `i` lands at
/// `start + i * period`, so rounding never accumulates.
#[derive(Debug, Clone)]
pub struct FixedFrames {
    start: f64,
    period: f64,
    index: usize,
    count: usize,
}

impl FixedFrames {
    pub fn new(start: f64, period: f64, count: usize) -> Self {
        Self {
            start,
            period,
            index: 0,
            count,
        }
    }
}

impl Iterator for FixedFrames {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.count {
            return None;
        }
        let t = self.start + self.index as f64 * self.period;
        self.index += 1;
        Some(t)
    }
}
