use std::time::Duration;

use crate::animation::ease::Ease;

/// Result of sampling a [`Tween`] at some point in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TweenSample {
    /// Still inside the start delay; the driven field must not be touched.
    Pending,
    /// Interpolated value for an in-progress phase.
    Running(f64),
    /// Phase finished; carries the exact end value.
    Done(f64),
}

/// One interpolation phase: `from -> to` over `length`, starting `delay` after `start`.
///
/// `start` is an absolute timestamp on the owner's clock; everything else is relative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start: Duration,
    pub delay: Duration,
    pub length: Duration,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: f64, to: f64, length: Duration, ease: Ease) -> Self {
        Self {
            from,
            to,
            start: Duration::ZERO,
            delay: Duration::ZERO,
            length,
            ease,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn started_at(mut self, now: Duration) -> Self {
        self.start = now;
        self
    }

    /// Timestamp at which this phase reaches its end value.
    pub fn end_time(&self) -> Duration {
        self.start + self.delay + self.length
    }

    /// Sample relative to the moment the phase was started.
    pub fn value_at(&self, elapsed: Duration) -> TweenSample {
        let Some(run) = elapsed.checked_sub(self.delay) else {
            return TweenSample::Pending;
        };
        if run >= self.length {
            return TweenSample::Done(self.to);
        }
        let t = run.as_secs_f64() / self.length.as_secs_f64();
        let te = self.ease.apply(t);
        TweenSample::Running(self.from + (self.to - self.from) * te)
    }

    /// Sample at an absolute clock value. Times before `start` read as pending.
    pub fn sample(&self, now: Duration) -> TweenSample {
        match now.checked_sub(self.start) {
            Some(elapsed) => self.value_at(elapsed),
            None => TweenSample::Pending,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
