use super::*;

fn vp() -> Viewport {
    Viewport::new(1000.0, 800.0).unwrap()
}

#[test]
fn smoothed_lags_raw_then_converges() {
    let mut t = PointerTracker::new(SpringConfig::default());
    t.on_pointer_move(Point::new(1000.0, 800.0), vp());
    assert_eq!(t.raw(), PointerOffset { x: 0.5, y: 0.5 });
    assert_eq!(t.smoothed(), PointerOffset::NEUTRAL);

    t.tick(Duration::from_millis(16));
    let early = t.smoothed();
    assert!(early.x > 0.0 && early.x < 0.5);

    for _ in 0..120 {
        t.tick(Duration::from_millis(16));
    }
    assert!(t.is_settled());
    assert_eq!(t.smoothed(), PointerOffset { x: 0.5, y: 0.5 });
}

#[test]
fn unavailable_pointer_stays_neutral() {
    let mut t = PointerTracker::new(SpringConfig::default());
    t.set_available(false);
    t.on_pointer_move(Point::new(0.0, 0.0), vp());
    t.tick(Duration::from_millis(500));
    assert_eq!(t.smoothed(), PointerOffset::NEUTRAL);
    assert!(!t.is_available());
}

#[test]
fn losing_availability_resets_motion() {
    let mut t = PointerTracker::new(SpringConfig::default());
    t.on_pointer_move(Point::new(0.0, 0.0), vp());
    t.tick(Duration::from_millis(100));
    assert_ne!(t.smoothed(), PointerOffset::NEUTRAL);

    t.set_available(false);
    t.set_available(true);
    assert_eq!(t.smoothed(), PointerOffset::NEUTRAL);
    assert!(t.is_settled());
}
