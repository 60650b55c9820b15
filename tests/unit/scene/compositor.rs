use super::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn desktop() -> Viewport {
    Viewport::new(1440.0, 900.0).unwrap()
}

fn phone() -> Viewport {
    Viewport::new(390.0, 844.0).unwrap()
}

fn input(now: Duration, scroll: f64) -> CompositeInput {
    CompositeInput {
        now,
        scroll: ScrollOffset(scroll),
        pointer: PointerOffset::new(0.5, 0.0),
        viewport: desktop(),
        logo: LogoRender::Frame(7),
    }
}

fn compositor() -> SceneCompositor {
    let mut c = SceneCompositor::new(DEFAULT_MOBILE_BREAKPOINT_PX, false).unwrap();
    c.set_viewport(desktop());
    c
}

fn ids(frame: &SceneFrame) -> Vec<LayerId> {
    frame.layers.iter().map(|l| l.id).collect()
}

#[test]
fn loading_frame_hides_chrome_and_locks_scroll() {
    let mut c = compositor();
    c.set_progress(LoadProgress::from_percent(42));
    let f = c.compose(&input(ms(3000), 0.0));

    assert!(f.scene3d.is_none());
    assert!(f.layer(LayerId::Gate3D).is_none());
    assert!(f.layer(LayerId::Navigation).is_none());
    assert_eq!(f.layer(LayerId::HeaderLogo).unwrap().style.opacity, 0.0);
    assert_eq!(f.layer(LayerId::HeroText).unwrap().style.opacity, 0.0);

    assert_eq!(f.logo.render, LogoRender::Static);
    assert_eq!(f.logo.progress_label, Some(42));
    assert_eq!(f.logo.reveal_inset_top_pct, 58.0);
    assert_eq!(f.logo.dock, 0.0);
    assert_eq!(f.logo.placement.width_px, 300.0);

    assert_eq!(
        f.document,
        DocumentLayout {
            height_vh: 1.0,
            scroll_locked: true
        }
    );
}

#[test]
fn entry_fades_are_keyed_to_ready_instant() {
    let mut c = compositor();
    c.set_progress(LoadProgress::COMPLETE);
    c.mark_ready(ms(1000));
    c.mark_ready(ms(9000));
    assert_eq!(c.ready_at(), Some(ms(1000)));

    let f = c.compose(&input(ms(1400), 0.0));
    assert_eq!(f.layer(LayerId::HeaderLogo).unwrap().style.opacity, 0.0);
    assert_eq!(f.layer(LayerId::Navigation).unwrap().style.opacity, 0.0);
    assert!(f.layer(LayerId::Gate3D).is_some());
    assert!(f.scene3d.is_some());
    assert_eq!(f.logo.progress_label, None);
    assert_eq!(f.logo.render, LogoRender::Frame(7));

    let f = c.compose(&input(ms(10_000), 0.0));
    assert_eq!(f.layer(LayerId::HeaderLogo).unwrap().style.opacity, 1.0);
    assert_eq!(f.layer(LayerId::HeroText).unwrap().style.opacity, 1.0);
    assert_eq!(f.layer(LayerId::Navigation).unwrap().style.opacity, 1.0);
    assert_eq!(f.logo.dock, 1.0);
    assert_eq!(f.logo.placement.width_px, 75.0);
    assert_eq!(f.logo.placement.top, Length::Percent(4.0));
    assert_eq!(f.document.height_vh, 2.5);
}

#[test]
fn phase1_children_leave_the_tree_at_1200() {
    let mut c = compositor();
    c.mark_ready(ms(0));

    let f = c.compose(&input(ms(5000), 1199.0));
    assert!(f.layer(LayerId::Sky).is_some());
    assert!(f.scene3d.is_some());

    let f = c.compose(&input(ms(5000), 1200.0));
    let root = f.layer(LayerId::Phase1Root).unwrap();
    assert!(!root.style.visible);
    assert_eq!(
        f.layers.iter().filter(|l| l.group == LayerGroup::Phase1).count(),
        1
    );
    assert!(f.scene3d.is_none());
    assert_eq!(f.layer(LayerId::Phase2Root).unwrap().style.opacity, 1.0);
}

#[test]
fn both_phases_mounted_during_crossfade() {
    let mut c = compositor();
    c.mark_ready(ms(0));
    let f = c.compose(&input(ms(5000), 1000.0));
    assert!(f.layer(LayerId::Volcano).is_some());
    assert!(f.layer(LayerId::Water).is_some());
    let p1 = f.layer(LayerId::Phase1Root).unwrap().style;
    let p2 = f.layer(LayerId::Phase2Root).unwrap().style;
    assert!(p1.opacity > 0.0 && p1.opacity < 1.0);
    assert!(p2.opacity > 0.0 && p2.opacity < 1.0);
    assert!(!(p1.pointer_interactive && p2.pointer_interactive));
}

#[test]
fn layers_are_grouped_deepest_first() {
    let mut c = compositor();
    c.mark_ready(ms(0));
    let f = c.compose(&input(ms(5000), 500.0));
    assert!(f.layers.windows(2).all(|w| w[0].group <= w[1].group));
    for group in [LayerGroup::Phase1, LayerGroup::Phase2, LayerGroup::Chrome] {
        let zs: Vec<i32> = f
            .layers
            .iter()
            .filter(|l| l.group == group && l.id != LayerId::Phase1Root && l.id != LayerId::Phase2Root)
            .map(|l| l.z)
            .collect();
        assert!(zs.windows(2).all(|w| w[0] <= w[1]), "{group:?}: {zs:?}");
    }
    let order = ids(&f);
    let pos = |id| order.iter().position(|x| *x == id).unwrap();
    assert!(pos(LayerId::Sky) < pos(LayerId::Foreground));
    assert!(pos(LayerId::Sand) < pos(LayerId::Water));
}

#[test]
fn parallax_applies_only_while_phase1_interactive() {
    let mut c = compositor();
    c.mark_ready(ms(0));

    let f = c.compose(&input(ms(5000), 0.0));
    let sky = f.layer(LayerId::Sky).unwrap().style.translate;
    assert_eq!(sky.x, Length::Px(-15.0));
    assert_eq!(
        f.layer(LayerId::Gate3D).unwrap().style.translate.x,
        Length::Px(-60.0)
    );
    assert_eq!(f.scene3d.unwrap().pointer, PointerOffset::new(0.5, 0.0));

    let f = c.compose(&input(ms(5000), 1100.0));
    assert_eq!(f.parallax, ParallaxOffsets::NEUTRAL);
    assert_eq!(
        f.layer(LayerId::Sky).unwrap().style.translate,
        Translate::px(kurbo::Vec2::ZERO)
    );
    assert_eq!(f.scene3d.unwrap().pointer, PointerOffset::NEUTRAL);
}

#[test]
fn ambient_loops_ride_on_glow_and_water() {
    let c = compositor();
    let f = c.compose(&input(ms(1500), 0.0));
    let glow = f.layer(LayerId::VolcanoGlow).unwrap().ambient.unwrap();
    assert!((glow.opacity - 0.8).abs() < 1e-9);
    let water = f.layer(LayerId::Water).unwrap();
    assert!(water.ambient.is_some());
    assert_eq!(water.style.scale, 1.0);
}

#[test]
fn menu_needs_ready_mobile_layout() {
    let mut c = SceneCompositor::new(DEFAULT_MOBILE_BREAKPOINT_PX, false).unwrap();
    c.set_viewport(phone());
    assert!(c.ui().is_mobile());
    assert!(!c.toggle_menu(ms(0)));

    c.mark_ready(ms(0));
    assert!(c.toggle_menu(ms(100)));
    assert!(c.ui().menu_open());

    let f = c.compose(&CompositeInput {
        viewport: phone(),
        ..input(ms(2000), 0.0)
    });
    assert!(f.layer(LayerId::MenuButton).is_some());
    assert!(f.layer(LayerId::MenuOverlay).is_some());
    assert!(f.menu.open);
    assert_eq!(f.scroll.nav.top, Length::Percent(20.0));

    assert!(c.toggle_menu(ms(3000)));
    assert!(!c.ui().menu_open());
}

#[test]
fn desktop_has_no_menu_button() {
    let mut c = compositor();
    c.mark_ready(ms(0));
    let f = c.compose(&input(ms(5000), 0.0));
    assert!(f.layer(LayerId::MenuButton).is_none());
    assert!(!c.clone().toggle_menu(ms(10)));
}

#[test]
fn distortion_mount_follows_layout() {
    let mut c = SceneCompositor::new(DEFAULT_MOBILE_BREAKPOINT_PX, true).unwrap();
    c.set_viewport(desktop());
    let f = c.compose(&input(ms(0), 0.0));
    assert_eq!(
        f.distortion,
        Some(DistortionMount {
            width: 720.0,
            height: 900.0
        })
    );
    assert!(f.layer(LayerId::DistortionSurface).is_some());
    assert!(compositor().compose(&input(ms(0), 0.0)).distortion.is_none());
}

#[test]
fn progress_in_ui_state_is_monotonic() {
    let mut c = compositor();
    c.set_progress(LoadProgress::from_percent(80));
    c.set_progress(LoadProgress::from_percent(10));
    assert_eq!(c.ui().progress().percent(), 80);
}

#[test]
fn rejects_bad_breakpoint() {
    assert!(SceneCompositor::new(0.0, false).is_err());
    assert!(SceneCompositor::new(f64::NAN, false).is_err());
}
