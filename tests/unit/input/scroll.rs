use super::*;

#[test]
fn passthrough_keeps_latest_sample() {
    let mut t = ScrollTracker::new();
    assert_eq!(t.sample(), ScrollOffset::ZERO);
    t.on_scroll(120.0);
    t.on_scroll(940.5);
    assert_eq!(t.sample().px(), 940.5);
    assert_eq!(t.events(), 2);
}

#[test]
fn host_noise_is_sanitized() {
    let mut t = ScrollTracker::new();
    t.on_scroll(-25.0);
    assert_eq!(t.sample(), ScrollOffset::ZERO);
    t.on_scroll(f64::NAN);
    assert_eq!(t.sample(), ScrollOffset::ZERO);
}
