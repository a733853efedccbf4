use crate::foundation::core::{Orientation, Size};

const DIRECTION_WIDTH_RATIO: f64 = 0.187;
const INNER_WIDTH_RATIO: f64 = 0.35;

/// Position table and stroke widths of the connecting line.
///
/// `positions` always holds one entry per point. Before the first size notification every
/// entry is zero.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LineGeometry {
    pub size: Size,
    pub positions: Vec<f64>,
    pub direction_width: f64,
    pub inner_width: f64,
    pub outer_width: f64,
}

impl LineGeometry {
    pub fn zeroed(point_count: usize) -> Self {
        Self {
            size: Size::ZERO,
            positions: vec![0.0; point_count],
            direction_width: 0.0,
            inner_width: 0.0,
            outer_width: 0.0,
        }
    }

    /// `point_count` must be at least 2; callers validate it through the slider config.
    pub fn from_size(size: Size, point_count: usize, orientation: Orientation) -> Self {
        let (length, thickness) = orientation.split(size);
        let last = point_count.saturating_sub(1).max(1);
        // The last entry is pinned so the table always reaches the full axis length.
        let positions = (0..point_count)
            .map(|i| {
                if i == last {
                    length
                } else {
                    length * i as f64 / last as f64
                }
            })
            .collect();
        Self {
            size,
            positions,
            direction_width: thickness * DIRECTION_WIDTH_RATIO,
            inner_width: thickness * INNER_WIDTH_RATIO,
            outer_width: thickness,
        }
    }

    /// Offset of point `index` along the axis. Out-of-range indices clamp to the last point.
    pub fn position(&self, index: usize) -> f64 {
        let idx = index.min(self.positions.len().saturating_sub(1));
        self.positions.get(idx).copied().unwrap_or(0.0)
    }

    pub fn axis_length(&self, orientation: Orientation) -> f64 {
        orientation.split(self.size).0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/line.rs"]
mod tests;
