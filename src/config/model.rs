use std::{path::Path, time::Duration};

use anyhow::Context as _;

use crate::{
    animation::ease::Ease,
    foundation::core::{MAX_POINT_COUNT, MIN_POINT_COUNT, Orientation, Rgba8},
    foundation::error::{SliderError, SliderResult},
};

/// Default length of every animation phase, in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 500;
/// Default number of points.
pub const DEFAULT_POINT_COUNT: usize = 3;

/// Full slider configuration. Every field has a default so partial JSON documents load.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SliderConfig {
    pub point_count: usize,
    pub duration_ms: u64,
    pub orientation: Orientation,
    pub initial_position: usize,
    pub style: SliderStyle,
    pub easing: EasingConfig,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            point_count: DEFAULT_POINT_COUNT,
            duration_ms: DEFAULT_DURATION_MS,
            orientation: Orientation::Horizontal,
            initial_position: 0,
            style: SliderStyle::default(),
            easing: EasingConfig::default(),
        }
    }
}

impl SliderConfig {
    /// Default configuration with `point_count` points.
    pub fn with_points(point_count: usize) -> Self {
        Self {
            point_count,
            ..Self::default()
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn timing(&self) -> Timing {
        Timing {
            duration: self.duration(),
            easing: self.easing,
        }
    }

    pub fn validate(&self) -> SliderResult<()> {
        if !(MIN_POINT_COUNT..=MAX_POINT_COUNT).contains(&self.point_count) {
            return Err(SliderError::configuration(format!(
                "point_count must be in {MIN_POINT_COUNT}..={MAX_POINT_COUNT}, got {}",
                self.point_count
            )));
        }
        if self.duration_ms == 0 {
            return Err(SliderError::configuration("duration_ms must be > 0"));
        }
        if self.initial_position >= self.point_count {
            return Err(SliderError::configuration(format!(
                "initial_position {} is outside 0..{}",
                self.initial_position, self.point_count
            )));
        }
        self.easing.validate()
    }

    pub fn from_json_str(s: &str) -> SliderResult<Self> {
        let config: Self =
            serde_json::from_str(s).map_err(|e| SliderError::serde(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> SliderResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read slider config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> SliderResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SliderError::serde(e.to_string()))
    }
}

/// Colors used by the draw ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SliderStyle {
    pub pulse_color: Rgba8,
    pub outer_color: Rgba8,
    pub inner_color: Rgba8,
    pub line_outer_color: Rgba8,
    pub line_inner_color: Rgba8,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            pulse_color: Rgba8::from_argb(0xFF4F_C3F7),
            outer_color: Rgba8::from_argb(0xFFFF_FFFF),
            inner_color: Rgba8::from_argb(0xFF03_9BE5),
            line_outer_color: Rgba8::from_argb(0xFFFF_FFFF),
            line_inner_color: Rgba8::from_argb(0xFF03_9BE5),
        }
    }
}

/// Easing curve per animation phase.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EasingConfig {
    /// Pulse and outer radius ramp of the select animation.
    pub main: Ease,
    /// Inner radius growth toward its overshoot.
    pub inner_grow: Ease,
    /// Inner radius settling back to rest.
    pub inner_settle: Ease,
    pub transit: Ease,
    pub sweep: Ease,
}

impl Default for EasingConfig {
    fn default() -> Self {
        Self {
            main: Ease::Linear,
            inner_grow: Ease::Accelerate(1.2),
            inner_settle: Ease::Decelerate(2.0),
            transit: Ease::Decelerate(1.0),
            sweep: Ease::Linear,
        }
    }
}

impl EasingConfig {
    fn validate(&self) -> SliderResult<()> {
        let phases = [
            ("main", self.main),
            ("inner_grow", self.inner_grow),
            ("inner_settle", self.inner_settle),
            ("transit", self.transit),
            ("sweep", self.sweep),
        ];
        for (name, ease) in phases {
            if let Some(f) = ease.factor()
                && !(f.is_finite() && f > 0.0)
            {
                return Err(SliderError::configuration(format!(
                    "easing.{name} factor must be finite and > 0, got {f}"
                )));
            }
        }
        Ok(())
    }
}

/// Timing values threaded into every animation start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub duration: Duration,
    pub easing: EasingConfig,
}

impl Default for Timing {
    fn default() -> Self {
        SliderConfig::default().timing()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
