use super::*;

#[test]
fn normalized_clamps_ranges() {
    let s = LayerStyle {
        opacity: 1.7,
        blur_px: -3.0,
        scale: 0.0,
        translate: Translate {
            x: Length::Px(f64::INFINITY),
            y: Length::Percent(f64::NAN),
        },
        pointer_interactive: true,
        visible: true,
    }
    .normalized();

    assert_eq!(s.opacity, 1.0);
    assert_eq!(s.blur_px, 0.0);
    assert_eq!(s.scale, MIN_SCALE);
    assert_eq!(s.translate.x, Length::Px(0.0));
    assert_eq!(s.translate.y, Length::Percent(0.0));
    assert!(s.pointer_interactive);
}

#[test]
fn nan_opacity_is_hidden() {
    assert_eq!(LayerStyle::faded(f64::NAN).opacity, 0.0);
    assert_eq!(LayerStyle::faded(-0.2).opacity, 0.0);
}

#[test]
fn fade_by_multiplies() {
    let s = LayerStyle::faded(0.5).fade_by(0.5);
    assert!((s.opacity - 0.25).abs() < 1e-12);
    assert_eq!(LayerStyle::IDENTITY.fade_by(3.0).opacity, 1.0);
}
