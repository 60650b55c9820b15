use super::*;

#[test]
fn window_clamps_outside_stops() {
    let m = Mapping::window(800.0, 1150.0, 1.0, 0.0);
    assert_eq!(m.sample(-50.0), 1.0);
    assert_eq!(m.sample(800.0), 1.0);
    assert_eq!(m.sample(1150.0), 0.0);
    assert_eq!(m.sample(9_000.0), 0.0);
    assert_eq!(m.sample(f64::INFINITY), 0.0);
    assert_eq!(m.sample(f64::NAN), 1.0);
}

#[test]
fn window_interpolates_linearly() {
    let m = Mapping::window(0.0, 300.0, 1.0, 0.0);
    assert!((m.sample(150.0) - 0.5).abs() < 1e-12);
    assert!((m.sample(75.0) - 0.75).abs() < 1e-12);
}

#[test]
fn reversed_window_is_normalized() {
    let m = Mapping::window(10.0, 0.0, 100.0, 0.0);
    assert_eq!(m.start(), 0.0);
    assert_eq!(m.end(), 10.0);
    assert_eq!(m.sample(0.0), 0.0);
    assert_eq!(m.sample(10.0), 100.0);
}

#[test]
fn multi_stop_mapping_uses_segment_ease() {
    let m = Mapping::new(vec![0.0, 0.5, 1.0], vec![0.4, 0.8, 0.4])
        .unwrap()
        .with_ease(Ease::EASE_IN_OUT);
    assert!((m.sample(0.5) - 0.8).abs() < 1e-9);
    assert!((m.sample(0.25) - 0.6).abs() < 1e-9);
    assert!((m.sample(0.75) - 0.6).abs() < 1e-9);
    // Eased segments move slower than linear near stops.
    assert!(m.sample(0.05) < 0.4 + 0.4 * 0.1);
}

#[test]
fn validation_rejects_bad_tables() {
    assert!(Mapping::new(vec![0.0], vec![1.0]).is_err());
    assert!(Mapping::new(vec![0.0, 1.0], vec![1.0]).is_err());
    assert!(Mapping::new(vec![1.0, 0.0], vec![1.0, 0.0]).is_err());
    assert!(Mapping::new(vec![0.0, f64::NAN], vec![1.0, 0.0]).is_err());
    assert!(
        Mapping::new(
            vec![0.0, 1.0],
            vec![Length::Px(0.0), Length::Percent(5.0)]
        )
        .is_err()
    );
}

#[test]
fn length_mapping_keeps_unit() {
    let m = Mapping::window(1200.0, 2500.0, Length::Percent(0.0), Length::Percent(-15.0));
    assert_eq!(m.sample(1850.0), Length::Percent(-7.5));
    assert_eq!(m.sample(3000.0), Length::Percent(-15.0));
}

#[test]
fn duplicate_stops_jump_without_dividing_by_zero() {
    let m = Mapping::new(vec![0.0, 1.0, 1.0, 2.0], vec![0.0, 1.0, 5.0, 6.0]).unwrap();
    assert_eq!(m.sample(1.5), 5.5);
    assert!(m.sample(1.0).is_finite());
}

#[test]
fn steps_are_strict() {
    assert!(Step::Below(1000.0).test(999.9));
    assert!(!Step::Below(1000.0).test(1000.0));
    assert!(Step::Above(1000.0).test(1000.1));
    assert!(!Step::Above(1000.0).test(1000.0));
    assert!(Step::Below(1000.0).test(f64::NAN));
}
