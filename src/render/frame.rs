use crate::{
    config::model::SliderStyle,
    engine::{
        line::LineAnimator,
        point::{PointAnimator, PointState},
    },
    foundation::core::{Orientation, Point, Size},
    render::draw::{DrawOp, line_ops, point_ops},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Every animated value of the slider at one clock value.
pub struct Frame {
    /// Slider clock in milliseconds.
    pub clock_ms: f64,
    pub orientation: Orientation,
    pub current: usize,
    pub previous: usize,
    pub points: Vec<PointFrame>,
    pub line: LineFrame,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// One point, in the point's own local coordinates.
pub struct PointFrame {
    pub index: usize,
    pub state: PointState,
    pub center: Point,
    pub pulse_radius: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub pulse_alpha: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// The line, in the line's own local coordinates.
pub struct LineFrame {
    pub size: Size,
    /// Offset along the axis reached by the sweep.
    pub sweep: f64,
    pub direction_width: f64,
    pub inner_width: f64,
    pub outer_width: f64,
}

impl PointFrame {
    pub fn from_animator(point: &PointAnimator) -> Self {
        Self {
            index: point.index(),
            state: point.state(),
            center: point.geometry().center,
            pulse_radius: point.pulse_radius(),
            outer_radius: point.outer_radius(),
            inner_radius: point.inner_radius(),
            pulse_alpha: point.pulse_alpha(),
        }
    }
}

impl LineFrame {
    pub fn from_animator(line: &LineAnimator) -> Self {
        let g = line.geometry();
        Self {
            size: g.size,
            sweep: line.sweep(),
            direction_width: g.direction_width,
            inner_width: g.inner_width,
            outer_width: g.outer_width,
        }
    }
}

impl Frame {
    /// Draw ops for point `index`; empty when the index is out of range.
    pub fn point_ops(&self, index: usize, style: &SliderStyle) -> Vec<DrawOp> {
        self.points
            .get(index)
            .map(|p| point_ops(p, style))
            .unwrap_or_default()
    }

    pub fn line_ops(&self, style: &SliderStyle) -> Vec<DrawOp> {
        line_ops(&self.line, self.orientation, style)
    }
}
