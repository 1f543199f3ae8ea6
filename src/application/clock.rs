/// FrameClock turns display-refresh callbacks into fixed-rate logical ticks.
///
/// At most one tick is reported per poll. Time that passes beyond the
/// interval is dropped, never banked for later polls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameClock {
    last_tick: Option<f64>,
    frame_interval_ms: f64,
}

impl FrameClock {
    pub fn new(frame_interval_ms: u32) -> Self {
        Self {
            last_tick: None,
            frame_interval_ms: frame_interval_ms.max(1) as f64,
        }
    }

    pub fn frame_interval_ms(&self) -> f64 {
        self.frame_interval_ms
    }

    pub fn last_tick(&self) -> Option<f64> {
        self.last_tick
    }

    /// Use `now` as the reference point for the next interval
    pub fn arm(&mut self, now_ms: f64) {
        self.last_tick = Some(now_ms);
    }

    /// True when a full interval has elapsed since the last tick.
    /// An unarmed clock arms itself and reports no tick.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        let Some(last) = self.last_tick else {
            self.arm(now_ms);
            return false;
        };

        if now_ms - last >= self.frame_interval_ms {
            self.last_tick = Some(now_ms);
            true
        } else {
            false
        }
    }
}
