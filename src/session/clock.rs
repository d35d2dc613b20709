/// Authoritative simulation time, advanced once per tick.
///
/// Every cooldown and deferred action compares against this value instead of
/// reading the wall clock, which keeps ticks reproducible in tests.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimClock {
    now: f64,
}

impl SimClock {
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Advance by `dt` seconds and return the step actually applied.
    /// Negative or non-finite steps count as zero.
    pub fn advance(&mut self, dt: f32) -> f32 {
        let step = sanitize_dt(dt);
        self.now += f64::from(step);
        step
    }
}

pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
}
