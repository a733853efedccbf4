/// Easing curve applied to a normalized progress value.
///
/// `Accelerate` and `Decelerate` are power curves parameterized by a factor `f`:
/// `t^(2f)` and `1 - (1 - t)^(2f)`. A factor of 1 matches `InQuad` / `OutQuad`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    Accelerate(f64),
    Decelerate(f64),
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::Accelerate(factor) => t.powf(2.0 * factor),
            Self::Decelerate(factor) => 1.0 - (1.0 - t).powf(2.0 * factor),
        }
    }

    /// Power-curve factor, when this ease has one.
    pub fn factor(self) -> Option<f64> {
        match self {
            Self::Accelerate(f) | Self::Decelerate(f) => Some(f),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
