use std::time::Duration;

use crate::{
    animation::tween::{Tween, TweenSample},
    config::model::Timing,
    geometry::point::PointGeometry,
};

/// Pulse opacity of a point at rest.
pub const PULSE_BASELINE_ALPHA: u8 = 0x80;

/// Coarse animation state of a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointState {
    Idle,
    Selecting,
    /// Includes a transit pulse still waiting out its start delay.
    TransitPulsing,
}

/// Animated state of a single point.
///
/// Each concurrent phase owns its own handle. Dropping a handle cancels the phase; the
/// driven field keeps whatever value it last received, except for the transit phase, which
/// always resets the point when it ends or is cancelled.
#[derive(Clone, Debug)]
pub struct PointAnimator {
    index: usize,
    geometry: PointGeometry,
    pulse_radius: f64,
    outer_radius: f64,
    inner_radius: f64,
    pulse_alpha: u8,
    main: Option<Tween>,
    inner_grow: Option<Tween>,
    inner_settle: Option<Tween>,
    transit: Option<Tween>,
    dirty: bool,
}

impl PointAnimator {
    pub fn new(index: usize, geometry: PointGeometry) -> Self {
        Self {
            index,
            geometry,
            pulse_radius: 0.0,
            outer_radius: geometry.end_outer,
            inner_radius: geometry.end_inner,
            pulse_alpha: PULSE_BASELINE_ALPHA,
            main: None,
            inner_grow: None,
            inner_settle: None,
            transit: None,
            dirty: true,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn geometry(&self) -> &PointGeometry {
        &self.geometry
    }

    pub fn pulse_radius(&self) -> f64 {
        self.pulse_radius
    }

    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    pub fn pulse_alpha(&self) -> u8 {
        self.pulse_alpha
    }

    pub fn state(&self) -> PointState {
        if self.main.is_some() || self.inner_grow.is_some() || self.inner_settle.is_some() {
            PointState::Selecting
        } else if self.transit.is_some() {
            PointState::TransitPulsing
        } else {
            PointState::Idle
        }
    }

    pub fn is_animating(&self) -> bool {
        self.state() != PointState::Idle
    }

    /// Grow into the selected look: pulse and outer ring ramp up over one duration while
    /// the inner circle overshoots and settles over two.
    pub fn start_select_animation(&mut self, now: Duration, timing: &Timing) {
        self.cancel_all_animations();

        let g = self.geometry;
        let d = timing.duration;
        let easing = timing.easing;
        self.main = Some(Tween::new(0.0, 1.0, d, easing.main).started_at(now));
        self.inner_grow = Some(
            Tween::new(g.start_inner, g.middle_inner, d, easing.inner_grow).started_at(now),
        );
        self.inner_settle = Some(
            Tween::new(g.middle_inner, g.end_inner, d, easing.inner_settle)
                .with_delay(d)
                .started_at(now),
        );
        tracing::trace!(index = self.index, "select animation started");
    }

    /// Fade-and-expand pulse for a point skipped over by a jump.
    pub fn start_transit_animation(&mut self, now: Duration, delay: Duration, timing: &Timing) {
        self.cancel_all_animations();

        self.transit = Some(
            Tween::new(0.0, 1.0, timing.duration, timing.easing.transit)
                .with_delay(delay)
                .started_at(now),
        );
        tracing::trace!(index = self.index, ?delay, "transit animation scheduled");
    }

    /// Stop every phase. Safe to call when nothing is running.
    pub fn cancel_all_animations(&mut self) {
        self.main = None;
        self.inner_grow = None;
        self.inner_settle = None;
        if self.transit.take().is_some() {
            self.reset_to_default();
        }
    }

    pub fn reset_to_default(&mut self) {
        let g = self.geometry;
        self.set_values(PULSE_BASELINE_ALPHA, 0.0, g.end_outer, g.end_inner);
    }

    /// Rest in the selected look: pulse ring at full size, baseline alpha.
    pub fn rest_selected(&mut self) {
        let g = self.geometry;
        self.set_values(PULSE_BASELINE_ALPHA, g.end_pulse, g.end_outer, g.end_inner);
    }

    /// Cancel, swap in new bounds, and come back to rest with them.
    pub fn set_geometry(&mut self, geometry: PointGeometry) {
        self.cancel_all_animations();
        self.geometry = geometry;
        self.reset_to_default();
    }

    /// Apply every live phase at clock value `now`.
    pub fn sample(&mut self, now: Duration) {
        let g = self.geometry;

        match advance(&mut self.main, now) {
            Some(TweenSample::Running(v)) => {
                self.pulse_radius = lerp(g.start_pulse, g.end_pulse, v);
                self.outer_radius = lerp(g.start_outer, g.end_outer, v);
                self.dirty = true;
            }
            Some(TweenSample::Done(_)) => {
                self.pulse_radius = g.end_pulse;
                self.outer_radius = g.end_outer;
                self.dirty = true;
            }
            _ => {}
        }

        // Grow first so a frame that crosses the midpoint ends on the settle value.
        for slot in [&mut self.inner_grow, &mut self.inner_settle] {
            if let Some(TweenSample::Running(v) | TweenSample::Done(v)) = advance(slot, now) {
                self.inner_radius = v;
                self.dirty = true;
            }
        }

        match advance(&mut self.transit, now) {
            Some(TweenSample::Running(v)) => {
                self.pulse_alpha = ((1.0 - v) * 255.0) as u8;
                self.pulse_radius = lerp(g.end_outer, g.end_pulse, v);
                self.dirty = true;
            }
            Some(TweenSample::Done(_)) => self.reset_to_default(),
            _ => {}
        }
    }

    /// Whether anything visible changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn set_values(&mut self, alpha: u8, pulse: f64, outer: f64, inner: f64) {
        if self.pulse_alpha != alpha
            || self.pulse_radius != pulse
            || self.outer_radius != outer
            || self.inner_radius != inner
        {
            self.dirty = true;
        }
        self.pulse_alpha = alpha;
        self.pulse_radius = pulse;
        self.outer_radius = outer;
        self.inner_radius = inner;
    }
}

/// Sample a phase slot, clearing it once the phase has finished.
fn advance(slot: &mut Option<Tween>, now: Duration) -> Option<TweenSample> {
    let sample = slot.as_ref()?.sample(now);
    match sample {
        TweenSample::Pending => None,
        TweenSample::Running(_) => Some(sample),
        TweenSample::Done(_) => {
            *slot = None;
            Some(sample)
        }
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
#[path = "../../tests/unit/engine/point.rs"]
mod tests;
