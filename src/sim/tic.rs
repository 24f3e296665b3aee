use std::time::{Duration, Instant};

/// How often [`FrameStats`] emits a report.
pub const REPORT_EVERY: Duration = Duration::from_secs(3);

/// Wall-clock budget of one frame at `fps`.
#[inline]
pub fn frame_budget(fps: usize) -> Duration {
    Duration::from_micros(1_000_000 / fps.max(1) as u64)
}

/// Averages over one reporting window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub frames: usize,
    pub avg_ms: f64,
    pub fps: f64,
}

/// Rolling frame-time accumulator; hands back a [`FrameReport`] once per
/// window and starts over.
pub struct FrameStats {
    acc_time: Duration,
    acc_frames: usize,
    last_report: Instant,
    every: Duration,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new(REPORT_EVERY)
    }
}

impl FrameStats {
    pub fn new(every: Duration) -> Self {
        Self {
            acc_time: Duration::ZERO,
            acc_frames: 0,
            last_report: Instant::now(),
            every,
        }
    }

    /// Add one frame that took `frame_time` of work.
    pub fn record(&mut self, frame_time: Duration) -> Option<FrameReport> {
        self.record_at(frame_time, Instant::now())
    }

    fn record_at(&mut self, frame_time: Duration, now: Instant) -> Option<FrameReport> {
        self.acc_time += frame_time;
        self.acc_frames += 1;

        if now.duration_since(self.last_report) < self.every {
            return None;
        }

        let avg_ms = self.acc_time.as_secs_f64() * 1000.0 / self.acc_frames as f64;
        let report = FrameReport {
            frames: self.acc_frames,
            avg_ms,
            fps: if avg_ms > 0.0 { 1000.0 / avg_ms } else { 0.0 },
        };
        self.acc_time = Duration::ZERO;
        self.acc_frames = 0;
        self.last_report = now;
        Some(report)
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
