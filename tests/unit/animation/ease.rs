use super::*;

const ALL: [Ease; 9] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::Accelerate(1.2),
    Ease::Decelerate(2.0),
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::Decelerate(1.0).apply(-3.0), 0.0);
    assert_eq!(Ease::Accelerate(1.2).apply(7.0), 1.0);
}

#[test]
fn unit_factor_power_curves_match_quadratics() {
    for t in [0.1, 0.3, 0.6, 0.9] {
        assert!((Ease::Accelerate(1.0).apply(t) - Ease::InQuad.apply(t)).abs() < 1e-12);
        assert!((Ease::Decelerate(1.0).apply(t) - Ease::OutQuad.apply(t)).abs() < 1e-12);
    }
}

#[test]
fn accelerate_lags_and_decelerate_leads_linear() {
    assert!(Ease::Accelerate(1.2).apply(0.5) < 0.5);
    assert!(Ease::Decelerate(2.0).apply(0.5) > 0.5);
}

#[test]
fn serde_uses_snake_case_tags() {
    let json = serde_json::to_string(&Ease::Decelerate(2.0)).unwrap();
    assert_eq!(json, r#"{"decelerate":2.0}"#);
    let back: Ease = serde_json::from_str(r#""in_out_cubic""#).unwrap();
    assert_eq!(back, Ease::InOutCubic);
}
