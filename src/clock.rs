/// Fixed-rate gate for simulation steps.
///
/// The frame loop runs at whatever rate the display allows; the snake only
/// moves when the ticker says so. Steps are scheduled on a fixed cadence so
/// frame timing does not drag the rate down.
#[derive(Clone, Debug)]
pub struct Ticker {
    interval: f64,
    last_step_at: Option<f64>,
}

// Absorbs float error when a frame lands exactly on a step boundary.
const TOLERANCE: f64 = 1e-6;

impl Ticker {
    /// `rate` steps per second. Config validation keeps it above zero.
    pub fn new(rate: u32) -> Self {
        Self {
            interval: 1.0 / f64::from(rate.max(1)),
            last_step_at: None,
        }
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// True if a step is due at `now` (seconds); the step is then recorded.
    pub fn ready(&mut self, now: f64) -> bool {
        let Some(last) = self.last_step_at else {
            self.last_step_at = Some(now);
            return true;
        };
        if now - last + TOLERANCE < self.interval {
            return false;
        }
        let scheduled = last + self.interval;
        // After a stall, restart from now instead of replaying missed steps.
        self.last_step_at = Some(if now - scheduled >= self.interval {
            now
        } else {
            scheduled
        });
        true
    }
}
