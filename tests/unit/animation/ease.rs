use super::*;

const ALL: [Ease; 6] = [
    Ease::Linear,
    Ease::EASE,
    Ease::EASE_OUT,
    Ease::EASE_IN_OUT,
    Ease::DOCK,
    Ease::SLIDE,
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
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn out_of_range_input_is_clamped() {
    for ease in ALL {
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(7.0), 1.0);
        assert_eq!(ease.apply(f64::NAN), 0.0);
    }
}

#[test]
fn linear_bezier_is_identity() {
    let ease = Ease::bezier(0.0, 0.0, 1.0, 1.0);
    for t in [0.1, 0.3, 0.5, 0.9] {
        assert!((ease.apply(t) - t).abs() < 1e-5);
    }
}

#[test]
fn symmetric_bezier_hits_midpoint() {
    assert!((Ease::EASE_IN_OUT.apply(0.5) - 0.5).abs() < 1e-5);
    assert!((Ease::SLIDE.apply(0.5) - 0.5).abs() < 1e-5);
}

#[test]
fn dock_curve_front_loads_motion() {
    // Most of the travel happens early.
    assert!(Ease::DOCK.apply(0.3) > 0.7);
}
