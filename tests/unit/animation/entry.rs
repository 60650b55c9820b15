use super::*;

fn nav() -> EntryTransition {
    EntryTransition::new(
        Duration::from_millis(2800),
        Duration::from_millis(1000),
        Ease::Linear,
    )
}

#[test]
fn untriggered_is_hidden() {
    assert_eq!(nav().progress(None), 0.0);
    assert!(!nav().is_done(None));
}

#[test]
fn delay_holds_at_zero() {
    assert_eq!(nav().progress(Some(Duration::from_millis(2799))), 0.0);
    assert_eq!(nav().progress(Some(Duration::from_millis(2800))), 0.0);
}

#[test]
fn progresses_then_holds_at_one() {
    let p = nav().progress(Some(Duration::from_millis(3300)));
    assert!((p - 0.5).abs() < 1e-9);
    assert_eq!(nav().progress(Some(Duration::from_millis(3800))), 1.0);
    assert_eq!(nav().progress(Some(Duration::from_secs(60))), 1.0);
    assert!(nav().is_done(Some(Duration::from_millis(3800))));
}

#[test]
fn zero_duration_snaps_after_delay() {
    let t = EntryTransition::new(Duration::from_millis(100), Duration::ZERO, Ease::Linear);
    assert_eq!(t.progress(Some(Duration::from_millis(99))), 0.0);
    assert_eq!(t.progress(Some(Duration::from_millis(100))), 1.0);
}
