use super::*;
use crate::foundation::core::Size;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn timing() -> Timing {
    Timing {
        duration: ms(500),
        ..Timing::default()
    }
}

fn point() -> PointAnimator {
    PointAnimator::new(2, PointGeometry::from_size(Size::new(100.0, 100.0)))
}

#[test]
fn new_point_is_idle_at_rest() {
    let p = point();
    assert_eq!(p.state(), PointState::Idle);
    assert_eq!(p.pulse_alpha(), PULSE_BASELINE_ALPHA);
    assert_eq!(p.pulse_radius(), 0.0);
    assert_eq!(p.outer_radius(), p.geometry().end_outer);
    assert_eq!(p.inner_radius(), p.geometry().end_inner);
}

#[test]
fn select_starts_from_half_sizes() {
    let mut p = point();
    p.start_select_animation(ms(1000), &timing());
    p.sample(ms(1000));
    let g = *p.geometry();
    assert_eq!(p.state(), PointState::Selecting);
    assert_eq!(p.pulse_radius(), g.start_pulse);
    assert_eq!(p.outer_radius(), g.start_outer);
    assert_eq!(p.inner_radius(), g.start_inner);
}

#[test]
fn select_inner_radius_overshoots_then_settles() {
    let mut p = point();
    let t = timing();
    p.start_select_animation(ms(0), &t);

    p.sample(ms(500));
    let g = *p.geometry();
    assert_eq!(p.state(), PointState::Selecting);
    assert_eq!(p.pulse_radius(), g.end_pulse);
    assert_eq!(p.outer_radius(), g.end_outer);
    assert!((p.inner_radius() - g.middle_inner).abs() < 1e-9);

    p.sample(ms(750));
    assert!(p.inner_radius() < g.middle_inner);
    assert!(p.inner_radius() > g.end_inner);
}

#[test]
fn select_completion_lands_on_exact_end_values() {
    let mut p = point();
    p.start_select_animation(ms(0), &timing());
    for step in 1..=70u64 {
        p.sample(ms(step * 16));
    }
    let g = *p.geometry();
    assert_eq!(p.state(), PointState::Idle);
    assert_eq!(p.outer_radius(), g.end_outer);
    assert_eq!(p.inner_radius(), g.end_inner);
    assert_eq!(p.pulse_radius(), g.end_pulse);
    // Alpha is left wherever it was; the main phase never touches it.
    assert_eq!(p.pulse_alpha(), PULSE_BASELINE_ALPHA);
}

#[test]
fn transit_waits_for_its_delay() {
    let mut p = point();
    p.start_transit_animation(ms(0), ms(125), &timing());
    p.sample(ms(100));
    assert_eq!(p.state(), PointState::TransitPulsing);
    assert_eq!(p.pulse_radius(), 0.0);
    assert_eq!(p.pulse_alpha(), PULSE_BASELINE_ALPHA);
}

#[test]
fn transit_fades_and_expands() {
    let mut p = point();
    p.start_transit_animation(ms(0), ms(0), &timing());
    let g = *p.geometry();

    p.sample(ms(0));
    assert_eq!(p.pulse_alpha(), 255);
    assert_eq!(p.pulse_radius(), g.end_outer);

    p.sample(ms(250));
    // Decelerate(1.0) at t = 0.5 is 0.75.
    assert_eq!(p.pulse_alpha(), 63);
    assert!((p.pulse_radius() - (g.end_outer + 0.75 * (g.end_pulse - g.end_outer))).abs() < 1e-9);
}

#[test]
fn transit_completion_resets_point() {
    let mut p = point();
    p.start_transit_animation(ms(0), ms(100), &timing());
    p.sample(ms(300));
    assert!(p.pulse_radius() > 0.0);
    p.sample(ms(600));
    assert_eq!(p.state(), PointState::Idle);
    assert_eq!(p.pulse_alpha(), PULSE_BASELINE_ALPHA);
    assert_eq!(p.pulse_radius(), 0.0);
}

#[test]
fn cancel_mid_transit_resets_immediately() {
    let mut p = point();
    p.start_transit_animation(ms(0), ms(0), &timing());
    p.sample(ms(200));
    assert_ne!(p.pulse_alpha(), PULSE_BASELINE_ALPHA);

    p.cancel_all_animations();
    assert_eq!(p.state(), PointState::Idle);
    assert_eq!(p.pulse_alpha(), PULSE_BASELINE_ALPHA);
    assert_eq!(p.pulse_radius(), 0.0);

    // Later samples must not revive the cancelled pulse.
    p.sample(ms(300));
    assert_eq!(p.pulse_radius(), 0.0);
}

#[test]
fn cancel_is_idempotent_when_idle() {
    let mut p = point();
    p.cancel_all_animations();
    p.cancel_all_animations();
    assert_eq!(p.state(), PointState::Idle);
}

#[test]
fn cancel_select_freezes_fields_and_stops_updates() {
    let mut p = point();
    p.start_select_animation(ms(0), &timing());
    p.sample(ms(250));
    let frozen = p.outer_radius();
    p.cancel_all_animations();
    p.sample(ms(400));
    assert_eq!(p.outer_radius(), frozen);
    assert_eq!(p.state(), PointState::Idle);
}

#[test]
fn geometry_change_cancels_and_rests_on_new_bounds() {
    let mut p = point();
    p.start_select_animation(ms(0), &timing());
    p.sample(ms(100));
    let g = PointGeometry::from_size(Size::new(40.0, 40.0));
    p.set_geometry(g);
    assert_eq!(p.state(), PointState::Idle);
    assert_eq!(p.outer_radius(), g.end_outer);
    assert_eq!(p.inner_radius(), g.end_inner);
}

#[test]
fn rest_selected_shows_full_pulse_ring() {
    let mut p = point();
    p.rest_selected();
    let g = *p.geometry();
    assert_eq!(p.state(), PointState::Idle);
    assert_eq!(p.pulse_radius(), g.end_pulse);
    assert_eq!(p.outer_radius(), g.end_outer);
    assert_eq!(p.pulse_alpha(), PULSE_BASELINE_ALPHA);
}

#[test]
fn dirty_flag_tracks_changes() {
    let mut p = point();
    assert!(p.take_dirty());
    assert!(!p.take_dirty());
    p.reset_to_default();
    assert!(!p.take_dirty());
    p.start_select_animation(ms(0), &timing());
    p.sample(ms(10));
    assert!(p.take_dirty());
}
