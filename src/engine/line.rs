use std::time::Duration;

use crate::{
    animation::tween::{Tween, TweenSample},
    config::model::Timing,
    geometry::line::LineGeometry,
};

/// Sweep position of the connecting line.
#[derive(Clone, Debug)]
pub struct LineAnimator {
    geometry: LineGeometry,
    sweep: f64,
    tween: Option<Tween>,
    dirty: bool,
}

impl LineAnimator {
    pub fn new(geometry: LineGeometry) -> Self {
        Self {
            geometry,
            sweep: 0.0,
            tween: None,
            dirty: true,
        }
    }

    pub fn geometry(&self) -> &LineGeometry {
        &self.geometry
    }

    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Sweep straight from the current position to point `target`'s offset.
    pub fn start_animation(&mut self, now: Duration, target: usize, timing: &Timing) {
        self.cancel();
        let to = self.geometry.position(target);
        self.tween = Some(
            Tween::new(self.sweep, to, timing.duration, timing.easing.sweep).started_at(now),
        );
        tracing::trace!(index = target, from = self.sweep, to, "line sweep started");
    }

    pub fn cancel(&mut self) {
        self.tween = None;
    }

    /// Jump to point `target` without animating.
    pub fn snap_to(&mut self, target: usize) {
        self.cancel();
        let to = self.geometry.position(target);
        if self.sweep != to {
            self.sweep = to;
            self.dirty = true;
        }
    }

    /// Replace the geometry. Returns whether a sweep was cancelled by the swap, so the
    /// caller can restart it against the new table.
    pub fn set_geometry(&mut self, geometry: LineGeometry) -> bool {
        let was_running = self.tween.take().is_some();
        self.geometry = geometry;
        self.dirty = true;
        was_running
    }

    pub fn sample(&mut self, now: Duration) {
        let Some(tween) = self.tween else {
            return;
        };
        match tween.sample(now) {
            TweenSample::Pending => {}
            TweenSample::Running(v) => {
                self.sweep = v;
                self.dirty = true;
            }
            TweenSample::Done(v) => {
                self.sweep = v;
                self.tween = None;
                self.dirty = true;
            }
        }
    }

    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/line.rs"]
mod tests;
