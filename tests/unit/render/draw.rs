use super::*;
use crate::{
    engine::point::PointState,
    foundation::core::{Point, Size},
};

fn point_frame(pulse: f64, alpha: u8) -> PointFrame {
    PointFrame {
        index: 0,
        state: PointState::Idle,
        center: Point::new(20.0, 20.0),
        pulse_radius: pulse,
        outer_radius: 10.4,
        inner_radius: 4.4,
        pulse_alpha: alpha,
    }
}

fn line_frame(sweep: f64) -> LineFrame {
    LineFrame {
        size: Size::new(300.0, 10.0),
        sweep,
        direction_width: 1.87,
        inner_width: 3.5,
        outer_width: 10.0,
    }
}

#[test]
fn resting_point_skips_empty_pulse() {
    let ops = point_ops(&point_frame(0.0, 0x80), &SliderStyle::default());
    assert_eq!(ops.len(), 2);
}

#[test]
fn pulse_uses_animated_alpha_and_comes_first() {
    let style = SliderStyle::default();
    let ops = point_ops(&point_frame(17.6, 0x33), &style);
    assert_eq!(ops.len(), 3);
    let DrawOp::Circle { circle, color } = &ops[0] else {
        panic!("expected circle");
    };
    assert_eq!(circle.radius, 17.6);
    assert_eq!(circle.center, Point::new(20.0, 20.0));
    assert_eq!(color.a, 0x33);
    assert_eq!(color.r, style.pulse_color.r);
}

#[test]
fn outer_circle_is_always_opaque() {
    let style = SliderStyle {
        outer_color: Rgba8::new(10, 20, 30, 5),
        ..SliderStyle::default()
    };
    let ops = point_ops(&point_frame(0.0, 0x80), &style);
    let DrawOp::Circle { color, .. } = &ops[0] else {
        panic!("expected circle");
    };
    assert_eq!(*color, Rgba8::new(10, 20, 30, 0xFF));
}

#[test]
fn horizontal_line_runs_along_center() {
    let ops = line_ops(&line_frame(120.0), Orientation::Horizontal, &SliderStyle::default());
    assert_eq!(ops.len(), 3);
    let DrawOp::Stroke { line, width, .. } = &ops[0] else {
        panic!("expected stroke");
    };
    assert_eq!(line.p0, Point::new(0.0, 5.0));
    assert_eq!(line.p1, Point::new(300.0, 5.0));
    assert_eq!(*width, 1.87);

    let DrawOp::Stroke { line, width, .. } = &ops[1] else {
        panic!("expected stroke");
    };
    assert_eq!(line.p1, Point::new(120.0, 5.0));
    assert_eq!(*width, 10.0);
}

#[test]
fn vertical_line_runs_down() {
    let mut frame = line_frame(50.0);
    frame.size = Size::new(10.0, 300.0);
    let ops = line_ops(&frame, Orientation::Vertical, &SliderStyle::default());
    let DrawOp::Stroke { line, .. } = &ops[2] else {
        panic!("expected stroke");
    };
    assert_eq!(line.p0, Point::new(5.0, 0.0));
    assert_eq!(line.p1, Point::new(5.0, 50.0));
}

#[test]
fn unswept_line_draws_only_direction() {
    let style = SliderStyle::default();
    let ops = line_ops(&line_frame(0.0), Orientation::Horizontal, &style);
    assert_eq!(ops.len(), 1);

    let unsized_line = LineFrame {
        size: Size::ZERO,
        ..line_frame(0.0)
    };
    assert!(line_ops(&unsized_line, Orientation::Horizontal, &style).is_empty());
}
