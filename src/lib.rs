//! Animation engine for a discrete-position step indicator.
//!
//! A slider is a fixed row (or column) of 2 to 8 points joined by a line. Exactly one point
//! is selected. Moving the selection plays a timed transition instead of jumping:
//!
//! 1. the newly selected point grows in (pulse ring and outer circle ramp up while the inner
//!    circle overshoots and settles),
//! 2. every point skipped by a multi-step jump fires a short fade-and-expand pulse, staggered
//!    in travel order,
//! 3. the line sweeps directly to the new point.
//!
//! Everything is driven by [`Slider::tick`]: the engine never owns a timer or a thread. A
//! renderer calls `tick` once per frame and draws the [`Frame`] (or its [`DrawOp`]s).
//!
//! ```
//! use std::time::Duration;
//! use step_slider::{Size, Slider, SliderConfig};
//!
//! let mut slider = Slider::new(SliderConfig::with_points(5))?;
//! slider.resize_points(Size::new(48.0, 48.0));
//! slider.resize_line(Size::new(480.0, 8.0));
//!
//! slider.set_position(3)?;
//! while slider.tick(Duration::from_millis(16)).animating {}
//! assert_eq!(slider.line().sweep(), 360.0);
//! # Ok::<(), step_slider::SliderError>(())
//! ```
#![forbid(unsafe_code)]

mod animation;
mod config;
mod engine;
mod foundation;
mod geometry;
mod render;

pub use animation::ease::Ease;
pub use animation::tween::{Tween, TweenSample};
pub use config::model::{
    DEFAULT_DURATION_MS, DEFAULT_POINT_COUNT, EasingConfig, SliderConfig, SliderStyle, Timing,
};
pub use engine::line::LineAnimator;
pub use engine::point::{PULSE_BASELINE_ALPHA, PointAnimator, PointState};
pub use engine::slider::{SelectionListener, Slider, TickReport};
pub use engine::transit::{TransitStep, transit_schedule};
pub use foundation::core::{
    Circle, Line, MAX_POINT_COUNT, MIN_POINT_COUNT, Orientation, Point, Rgba8, Size,
};
pub use foundation::error::{SliderError, SliderResult};
pub use geometry::line::LineGeometry;
pub use geometry::point::PointGeometry;
pub use render::draw::{DrawOp, line_ops, point_ops};
pub use render::frame::{Frame, LineFrame, PointFrame};
