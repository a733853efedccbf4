use std::{fmt, time::Duration};

use crate::{
    config::model::{SliderConfig, SliderStyle},
    engine::{
        line::LineAnimator,
        point::{PointAnimator, PointState},
        transit::transit_schedule,
    },
    foundation::core::{Orientation, Size},
    foundation::error::{SliderError, SliderResult},
    geometry::{line::LineGeometry, point::PointGeometry},
    render::frame::{Frame, LineFrame, PointFrame},
};

/// Receives the new index synchronously whenever the selection changes.
pub trait SelectionListener {
    fn on_selection_changed(&mut self, index: usize);
}

impl<F: FnMut(usize)> SelectionListener for F {
    fn on_selection_changed(&mut self, index: usize) {
        self(index)
    }
}

/// What changed during one [`Slider::tick`].
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct TickReport {
    /// Points whose drawn values changed, in index order.
    pub dirty_points: Vec<usize>,
    pub line_dirty: bool,
    /// Something is still running or a transition is waiting for the next tick.
    pub animating: bool,
}

impl TickReport {
    pub fn needs_redraw(&self) -> bool {
        self.line_dirty || !self.dirty_points.is_empty()
    }
}

/// Step indicator: owns the selection and drives every point and the line.
///
/// Selection changes take effect logically at once, while the visual transition is
/// deferred to the next [`tick`](Self::tick). Requests made between two ticks coalesce
/// into a single transition from the last recorded previous index to the latest one.
pub struct Slider {
    config: SliderConfig,
    points: Vec<PointAnimator>,
    line: LineAnimator,
    current: usize,
    previous: usize,
    pending: bool,
    clock: Duration,
    point_size: Option<Size>,
    line_size: Option<Size>,
    listener: Option<Box<dyn SelectionListener>>,
}

impl fmt::Debug for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("config", &self.config)
            .field("current", &self.current)
            .field("previous", &self.previous)
            .field("pending", &self.pending)
            .field("clock", &self.clock)
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

impl Slider {
    pub fn new(config: SliderConfig) -> SliderResult<Self> {
        config.validate()?;
        let count = config.point_count;
        let points = (0..count)
            .map(|i| PointAnimator::new(i, PointGeometry::default()))
            .collect();
        Ok(Self {
            current: config.initial_position,
            previous: config.initial_position,
            points,
            line: LineAnimator::new(LineGeometry::zeroed(count)),
            config,
            pending: false,
            clock: Duration::ZERO,
            point_size: None,
            line_size: None,
            listener: None,
        })
    }

    pub fn set_listener(&mut self, listener: impl SelectionListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn duration(&self) -> Duration {
        self.config.duration()
    }

    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    pub fn current_position(&self) -> usize {
        self.current
    }

    pub fn previous_position(&self) -> usize {
        self.previous
    }

    pub fn clock(&self) -> Duration {
        self.clock
    }

    pub fn points(&self) -> &[PointAnimator] {
        &self.points
    }

    pub fn point(&self, index: usize) -> Option<&PointAnimator> {
        self.points.get(index)
    }

    pub fn line(&self) -> &LineAnimator {
        &self.line
    }

    pub fn has_pending_transition(&self) -> bool {
        self.pending
    }

    pub fn is_animating(&self) -> bool {
        self.line.is_animating() || self.points.iter().any(PointAnimator::is_animating)
    }

    /// Select `index`. The listener fires before this returns; the animation starts on the
    /// next tick.
    #[tracing::instrument(skip(self))]
    pub fn set_position(&mut self, index: usize) -> SliderResult<()> {
        let count = self.point_count();
        if index >= count {
            return Err(SliderError::invalid_index(index, count));
        }
        if index == self.current {
            return Ok(());
        }

        self.previous = self.current;
        self.current = index;
        tracing::debug!(
            previous = self.previous,
            current = self.current,
            "selection changed"
        );

        if let Some(listener) = self.listener.as_mut() {
            listener.on_selection_changed(index);
        }
        self.pending = true;
        Ok(())
    }

    /// Advance the clock by `dt`, start a pending transition, and sample every animator.
    pub fn tick(&mut self, dt: Duration) -> TickReport {
        self.clock += dt;
        if std::mem::take(&mut self.pending) {
            self.run_transition();
        }

        let now = self.clock;
        let mut dirty_points = Vec::new();
        for point in &mut self.points {
            point.sample(now);
            if point.take_dirty() {
                dirty_points.push(point.index());
            }
        }
        self.line.sample(now);

        TickReport {
            dirty_points,
            line_dirty: self.line.take_dirty(),
            animating: self.pending || self.is_animating(),
        }
    }

    /// Replace the whole configuration.
    ///
    /// Validation happens first; a rejected config leaves everything untouched. An accepted
    /// one cancels all animations, rebuilds the point set when the count changes (clamping
    /// the selection into range), and restarts a transition that was pending or running.
    /// `initial_position` is only honored by [`Slider::new`].
    #[tracing::instrument(
        skip(self, config),
        fields(point_count = config.point_count, duration_ms = config.duration_ms)
    )]
    pub fn configure(&mut self, config: SliderConfig) -> SliderResult<()> {
        config.validate()?;

        let restart = self.pending || self.is_animating();
        let ringed = self.current_has_ring();
        for point in &mut self.points {
            point.cancel_all_animations();
        }
        self.line.cancel();

        if config.point_count != self.points.len() {
            let geometry = self.point_geometry();
            self.points = (0..config.point_count)
                .map(|i| PointAnimator::new(i, geometry))
                .collect();
            let last = config.point_count - 1;
            self.current = self.current.min(last);
            self.previous = self.previous.min(last);
        }
        self.config = config;

        for point in &mut self.points {
            point.reset_to_default();
        }
        self.line.set_geometry(self.line_geometry());

        self.pending = restart && self.previous != self.current;
        if !self.pending {
            self.line.snap_to(self.current);
            if ringed {
                self.rest_current_selected();
            }
        }
        tracing::debug!(restart = self.pending, "slider reconfigured");
        Ok(())
    }

    /// Durations are configured in whole milliseconds; anything finer is rejected.
    pub fn set_duration(&mut self, duration: Duration) -> SliderResult<()> {
        if duration.subsec_nanos() % 1_000_000 != 0 {
            return Err(SliderError::configuration(format!(
                "duration must be a whole number of milliseconds, got {duration:?}"
            )));
        }
        let duration_ms = u64::try_from(duration.as_millis())
            .map_err(|_| SliderError::configuration("duration does not fit in u64 ms"))?;
        self.configure(SliderConfig {
            duration_ms,
            ..self.config.clone()
        })
    }

    pub fn set_orientation(&mut self, orientation: Orientation) -> SliderResult<()> {
        self.configure(SliderConfig {
            orientation,
            ..self.config.clone()
        })
    }

    /// Colors only affect draw ops, so running animations are left alone.
    pub fn set_style(&mut self, style: SliderStyle) {
        self.config.style = style;
    }

    /// Render-size notification for the points: recompute bounds and rest every point.
    ///
    /// A transition that was pending or running is restarted on the next tick against the
    /// new bounds. A settled selected point keeps its pulse ring.
    pub fn resize_points(&mut self, size: Size) {
        let restart = self.pending || self.is_animating();
        let ringed = self.current_has_ring();
        self.point_size = Some(size);
        let geometry = PointGeometry::from_size(size);
        tracing::trace!(?size, end_outer = geometry.end_outer, "point geometry recomputed");
        for point in &mut self.points {
            point.set_geometry(geometry);
        }
        self.pending = restart && self.previous != self.current;
        if !self.pending && ringed {
            self.rest_current_selected();
        }
    }

    /// Render-size notification for the line: rebuild the position table, then restart a
    /// running sweep against it or, when idle, snap to the current point.
    pub fn resize_line(&mut self, size: Size) {
        self.line_size = Some(size);
        let geometry = self.line_geometry();
        tracing::trace!(?size, positions = ?geometry.positions, "line geometry recomputed");
        if self.line.set_geometry(geometry) {
            let timing = self.config.timing();
            self.line.start_animation(self.clock, self.current, &timing);
        } else if !self.pending {
            self.line.snap_to(self.current);
        }
    }

    /// Snapshot of every animated value for a renderer.
    pub fn frame(&self) -> Frame {
        Frame {
            clock_ms: self.clock.as_nanos() as f64 / 1e6,
            orientation: self.config.orientation,
            current: self.current,
            previous: self.previous,
            points: self.points.iter().map(PointFrame::from_animator).collect(),
            line: LineFrame::from_animator(&self.line),
        }
    }

    /// Number of points currently in `state`.
    pub fn count_in_state(&self, state: PointState) -> usize {
        self.points.iter().filter(|p| p.state() == state).count()
    }

    fn run_transition(&mut self) {
        let now = self.clock;
        let timing = self.config.timing();

        for point in &mut self.points {
            point.cancel_all_animations();
        }
        self.line.cancel();
        for point in &mut self.points {
            point.reset_to_default();
        }

        let schedule = transit_schedule(self.previous, self.current, timing.duration);
        tracing::debug!(
            previous = self.previous,
            current = self.current,
            skipped = schedule.len(),
            "starting transition"
        );
        for step in &schedule {
            if let Some(point) = self.points.get_mut(step.index) {
                point.start_transit_animation(now, step.delay, &timing);
            }
        }
        if let Some(point) = self.points.get_mut(self.current) {
            point.start_select_animation(now, &timing);
        }
        self.line.start_animation(now, self.current, &timing);
    }

    fn current_has_ring(&self) -> bool {
        self.points
            .get(self.current)
            .is_some_and(|p| p.pulse_radius() > 0.0)
    }

    fn rest_current_selected(&mut self) {
        if let Some(point) = self.points.get_mut(self.current) {
            point.rest_selected();
        }
    }

    fn point_geometry(&self) -> PointGeometry {
        self.point_size
            .map(PointGeometry::from_size)
            .unwrap_or_default()
    }

    fn line_geometry(&self) -> LineGeometry {
        let count = self.points.len();
        match self.line_size {
            Some(size) => LineGeometry::from_size(size, count, self.config.orientation),
            None => LineGeometry::zeroed(count),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/slider.rs"]
mod tests;
