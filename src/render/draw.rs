use crate::{
    config::model::SliderStyle,
    foundation::core::{Circle, Line, Orientation, Rgba8},
    render::frame::{LineFrame, PointFrame},
};

#[derive(Clone, Debug, PartialEq)]
/// Backend-agnostic draw operation, in painter's order.
pub enum DrawOp {
    /// Filled circle.
    Circle { circle: Circle, color: Rgba8 },
    /// Stroked segment with butt caps.
    Stroke { line: Line, width: f64, color: Rgba8 },
}

/// Pulse ring, outer circle, inner circle. Zero-radius circles are skipped.
pub fn point_ops(point: &PointFrame, style: &SliderStyle) -> Vec<DrawOp> {
    let layers = [
        (
            point.pulse_radius,
            style.pulse_color.with_alpha(point.pulse_alpha),
        ),
        (point.outer_radius, style.outer_color.with_alpha(0xFF)),
        (point.inner_radius, style.inner_color),
    ];

    layers
        .into_iter()
        .filter(|(radius, _)| *radius > 0.0)
        .map(|(radius, color)| DrawOp::Circle {
            circle: Circle::new(point.center, radius),
            color,
        })
        .collect()
}

/// Thin direction line across the full axis, then the outer and inner sweep strokes.
pub fn line_ops(line: &LineFrame, orientation: Orientation, style: &SliderStyle) -> Vec<DrawOp> {
    let (length, thickness) = orientation.split(line.size);
    if length <= 0.0 {
        return Vec::new();
    }
    let across = thickness * 0.5;
    let start = orientation.point(0.0, across);

    let mut ops = vec![DrawOp::Stroke {
        line: Line::new(start, orientation.point(length, across)),
        width: line.direction_width,
        color: style.line_inner_color,
    }];

    if line.sweep > 0.0 {
        let swept = Line::new(start, orientation.point(line.sweep, across));
        ops.push(DrawOp::Stroke {
            line: swept,
            width: line.outer_width,
            color: style.line_outer_color,
        });
        ops.push(DrawOp::Stroke {
            line: swept,
            width: line.inner_width,
            color: style.line_inner_color,
        });
    }
    ops
}

#[cfg(test)]
#[path = "../../tests/unit/render/draw.rs"]
mod tests;
