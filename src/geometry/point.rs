use crate::foundation::core::{Point, Size};

const PULSE_RATIO: f64 = 0.44;
const OUTER_RATIO: f64 = 0.26;
const INNER_RATIO: f64 = 0.11;
const MIDDLE_INNER_RATIO: f64 = 0.85;

/// Radius bounds for one point, derived from its rendered size.
///
/// All values are zero until the first size notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct PointGeometry {
    pub center: Point,
    pub end_pulse: f64,
    pub end_outer: f64,
    pub end_inner: f64,
    pub start_pulse: f64,
    pub start_outer: f64,
    pub start_inner: f64,
    /// Overshoot target of the inner circle during a select animation.
    pub middle_inner: f64,
}

impl PointGeometry {
    pub fn from_size(size: Size) -> Self {
        let base = size.width.min(size.height).max(0.0);
        let end_pulse = base * PULSE_RATIO;
        let end_outer = base * OUTER_RATIO;
        let end_inner = base * INNER_RATIO;
        Self {
            center: Point::new(size.width / 2.0, size.height / 2.0),
            end_pulse,
            end_outer,
            end_inner,
            start_pulse: end_outer / 2.0,
            start_outer: end_outer / 2.0,
            start_inner: end_inner / 2.0,
            middle_inner: end_outer * MIDDLE_INNER_RATIO,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/point.rs"]
mod tests;
