use std::time::Duration;

use crate::{
    animation::{ease::Ease, entry::EntryTransition, interp::Lerp},
    foundation::core::{Length, PointerOffset, ScrollOffset, Translate, Viewport},
    foundation::error::{OdysseyError, OdysseyResult},
    gate::loading::LoadingState,
    logo::animator::{LogoRender, reveal_inset_top_pct},
    preload::manifest::{
        HERO_FOREGROUND, HERO_MOUNTAINS, HERO_SKY, HERO_VOLCANO, LOGO_IMAGE, NOISE, SHORE_SAND,
        SHORE_WATER, WORDMARK,
    },
    preload::progress::LoadProgress,
    scene::ambient::AmbientLoops,
    scene::external::{DistortionMount, Scene3DInput},
    scene::layer::{LayerGroup, LayerId, LayerNode},
    scene::mapper::{PhaseTransitionMapper, ScrollStyles},
    scene::menu::{MenuFrame, MenuState},
    scene::parallax::{ParallaxEngine, ParallaxOffsets},
    scene::style::LayerStyle,
};

/// Width below which the narrow layout applies.
pub const DEFAULT_MOBILE_BREAKPOINT_PX: f64 = 768.0;

const NOISE_OPACITY: f64 = 0.2;
const GHOST_LOGO_OPACITY: f64 = 0.2;

/// One-shot chrome fades, all measured from the instant the loading gate opened.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChromeTiming {
    /// Header wordmark.
    pub header_logo: EntryTransition,
    /// Hero copy block.
    pub hero_text: EntryTransition,
    /// Navigation links.
    pub navigation: EntryTransition,
    /// Mobile menu button.
    pub menu_button: EntryTransition,
    /// Loading logo moving into the header.
    pub logo_dock: EntryTransition,
}

impl Default for ChromeTiming {
    fn default() -> Self {
        let ms = Duration::from_millis;
        Self {
            header_logo: EntryTransition::new(ms(500), ms(1000), Ease::EASE),
            hero_text: EntryTransition::new(ms(1500), ms(2000), Ease::EASE_OUT),
            navigation: EntryTransition::new(ms(2800), ms(1000), Ease::EASE),
            menu_button: EntryTransition::new(Duration::ZERO, ms(500), Ease::EASE),
            logo_dock: EntryTransition::new(ms(100), ms(1500), Ease::DOCK),
        }
    }
}

/// Shared UI state. Each field has exactly one writer on [`SceneCompositor`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct UiState {
    loading: LoadingState,
    progress: LoadProgress,
    menu_open: bool,
    is_mobile: bool,
}

impl UiState {
    /// Gate state as last reported.
    pub fn loading(&self) -> LoadingState {
        self.loading
    }

    /// Whether the gate has opened.
    pub fn is_ready(&self) -> bool {
        self.loading == LoadingState::Ready
    }

    /// Highest preload progress reported.
    pub fn progress(&self) -> LoadProgress {
        self.progress
    }

    /// Whether the mobile menu is open.
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Narrow layout flag.
    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }
}

/// Position and size of the loading logo.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LogoPlacement {
    /// Offset from the top of the viewport.
    pub top: Length,
    /// Vertical self-translation.
    pub translate_y: Length,
    /// Box width in pixels.
    pub width_px: f64,
    /// Box height in pixels.
    pub height_px: f64,
}

impl LogoPlacement {
    fn centered(is_mobile: bool) -> Self {
        let side = if is_mobile { 180.0 } else { 300.0 };
        Self {
            top: Length::Percent(50.0),
            translate_y: Length::Percent(-50.0),
            width_px: side,
            height_px: side,
        }
    }

    fn docked(is_mobile: bool) -> Self {
        let (width_px, height_px) = if is_mobile { (90.0, 35.0) } else { (75.0, 38.0) };
        Self {
            top: Length::Percent(4.0),
            translate_y: Length::Percent(0.0),
            width_px,
            height_px,
        }
    }

    fn between(a: Self, b: Self, t: f64) -> Self {
        Self {
            top: Length::lerp(&a.top, &b.top, t),
            translate_y: Length::lerp(&a.translate_y, &b.translate_y, t),
            width_px: f64::lerp(&a.width_px, &b.width_px, t),
            height_px: f64::lerp(&a.height_px, &b.height_px, t),
        }
    }
}

/// The loading logo for this tick.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LogoFrame {
    /// Static image or animation frame.
    pub render: LogoRender,
    /// Top clip inset of the fill image, in percent.
    pub reveal_inset_top_pct: f64,
    /// Opacity of the ghost image behind the fill.
    pub ghost_opacity: f64,
    /// Percentage label, shown only while loading.
    pub progress_label: Option<u8>,
    /// Docking progress in `[0, 1]`.
    pub dock: f64,
    /// Current box.
    pub placement: LogoPlacement,
}

/// Scroll extent of the host document.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DocumentLayout {
    /// Height in viewport heights.
    pub height_vh: f64,
    /// Whether scrolling is disabled.
    pub scroll_locked: bool,
}

/// Everything the host needs to paint one tick.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneFrame {
    /// View-clock instant of this frame.
    pub at: Duration,
    /// Scroll-derived styles.
    pub scroll: ScrollStyles,
    /// Pointer-derived offsets.
    pub parallax: ParallaxOffsets,
    /// Paint list, deepest first.
    pub layers: Vec<LayerNode>,
    /// 3D renderer input; `None` means it should be unmounted.
    pub scene3d: Option<Scene3DInput>,
    /// Distortion renderer container; `None` means it should be unmounted.
    pub distortion: Option<DistortionMount>,
    /// Loading logo.
    pub logo: LogoFrame,
    /// Mobile menu.
    pub menu: MenuFrame,
    /// Document extent.
    pub document: DocumentLayout,
    /// UI state the frame was built from.
    pub ui: UiState,
}

impl SceneFrame {
    /// First node with `id`.
    pub fn layer(&self, id: LayerId) -> Option<&LayerNode> {
        self.layers.iter().find(|l| l.id == id)
    }
}

/// Per-tick samples the compositor combines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompositeInput {
    /// View-clock instant.
    pub now: Duration,
    /// Scroll sample.
    pub scroll: ScrollOffset,
    /// Smoothed pointer offset.
    pub pointer: PointerOffset,
    /// Current viewport.
    pub viewport: Viewport,
    /// Logo image from the animator.
    pub logo: LogoRender,
}

/// Owns the UI state and assembles the z-ordered layer tree for each tick.
#[derive(Clone, Debug)]
pub struct SceneCompositor {
    mapper: PhaseTransitionMapper,
    parallax: ParallaxEngine,
    ambient: AmbientLoops,
    timing: ChromeTiming,
    ui: UiState,
    menu: MenuState,
    ready_at: Option<Duration>,
    mobile_breakpoint_px: f64,
    distortion_enabled: bool,
}

impl SceneCompositor {
    /// Compositor with default timings.
    pub fn new(mobile_breakpoint_px: f64, distortion_enabled: bool) -> OdysseyResult<Self> {
        if !mobile_breakpoint_px.is_finite() || mobile_breakpoint_px <= 0.0 {
            return Err(OdysseyError::validation(
                "mobile breakpoint must be finite and > 0",
            ));
        }
        Ok(Self {
            mapper: PhaseTransitionMapper::new(),
            parallax: ParallaxEngine::new(),
            ambient: AmbientLoops::new()?,
            timing: ChromeTiming::default(),
            ui: UiState::default(),
            menu: MenuState::new(),
            ready_at: None,
            mobile_breakpoint_px,
            distortion_enabled,
        })
    }

    /// Replace the chrome timings.
    pub fn with_timing(mut self, timing: ChromeTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Current UI state.
    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Instant the gate opened, if it has.
    pub fn ready_at(&self) -> Option<Duration> {
        self.ready_at
    }

    /// Sole writer of `is_mobile`.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        let is_mobile = viewport.is_mobile(self.mobile_breakpoint_px);
        if is_mobile != self.ui.is_mobile {
            tracing::debug!(is_mobile, width = viewport.width, "layout changed");
            self.ui.is_mobile = is_mobile;
        }
    }

    /// Sole writer of `progress`; never moves backward.
    pub fn set_progress(&mut self, progress: LoadProgress) {
        self.ui.progress = self.ui.progress.max(progress);
    }

    /// Sole writer of `loading`; the first call wins and later calls are ignored.
    pub fn mark_ready(&mut self, at: Duration) {
        if self.ui.loading == LoadingState::Ready {
            return;
        }
        self.ui.loading = LoadingState::Ready;
        self.ready_at = Some(at);
    }

    /// Sole writer of `menu_open`. Opening needs the menu button: ready and mobile.
    pub fn set_menu_open(&mut self, open: bool, now: Duration) -> bool {
        if open && !(self.ui.is_ready() && self.ui.is_mobile) {
            return false;
        }
        let changed = self.menu.set_open(open, now);
        self.ui.menu_open = self.menu.is_open();
        changed
    }

    /// Open a closed menu or close an open one.
    pub fn toggle_menu(&mut self, now: Duration) -> bool {
        self.set_menu_open(!self.menu.is_open(), now)
    }

    /// Build the frame for `input`. Pure with respect to `self`.
    pub fn compose(&self, input: &CompositeInput) -> SceneFrame {
        let ready = self.ui.is_ready();
        let is_mobile = self.ui.is_mobile;
        let since_ready = self.ready_at.map(|at| input.now.saturating_sub(at));

        let scroll = self.mapper.map_scroll(input.scroll, is_mobile);
        let parallax = self
            .parallax
            .map_pointer(input.pointer, scroll.phase1.pointer_interactive);
        let menu = self.menu.frame(input.now);

        let mut layers = Vec::with_capacity(26);
        self.push_phase1(&mut layers, &scroll, &parallax, input.now, since_ready);
        self.push_phase2(&mut layers, &scroll, input.now);
        self.push_chrome(&mut layers, &menu, since_ready);

        let scene3d = (ready && scroll.phase1.visible).then_some(Scene3DInput {
            pointer: parallax.scene_rotation,
            is_mobile,
        });
        let distortion = self
            .distortion_enabled
            .then(|| DistortionMount::for_viewport(input.viewport, is_mobile));

        let dock = self.timing.logo_dock.progress(since_ready);
        let logo = LogoFrame {
            render: if ready { input.logo } else { LogoRender::Static },
            reveal_inset_top_pct: reveal_inset_top_pct(self.ui.progress, ready),
            ghost_opacity: GHOST_LOGO_OPACITY,
            progress_label: (!ready).then_some(self.ui.progress.percent()),
            dock,
            placement: LogoPlacement::between(
                LogoPlacement::centered(is_mobile),
                LogoPlacement::docked(is_mobile),
                dock,
            ),
        };

        SceneFrame {
            at: input.now,
            scroll,
            parallax,
            layers,
            scene3d,
            distortion,
            logo,
            menu,
            document: DocumentLayout {
                height_vh: if ready { 2.5 } else { 1.0 },
                scroll_locked: !ready,
            },
            ui: self.ui,
        }
    }

    fn push_phase1(
        &self,
        out: &mut Vec<LayerNode>,
        scroll: &ScrollStyles,
        parallax: &ParallaxOffsets,
        now: Duration,
        since_ready: Option<Duration>,
    ) {
        use LayerId::*;
        let node = |id, z, style| LayerNode::new(id, LayerGroup::Phase1, z, style);
        out.push(node(Phase1Root, 0, scroll.phase1));
        if !scroll.phase1.visible {
            return;
        }

        let backdrop = LayerStyle::IDENTITY.with_translate(Translate::px(parallax.background));
        out.push(node(Backdrop, -10, LayerStyle::IDENTITY));
        out.push(node(Noise, 5, LayerStyle::faded(NOISE_OPACITY)).with_asset(NOISE));
        out.push(node(Sky, 10, backdrop).with_asset(HERO_SKY));
        out.push(node(Mountains, 20, backdrop).with_asset(HERO_MOUNTAINS));
        out.push(node(VolcanoGlow, 30, backdrop).with_ambient(self.ambient.glow(now)));
        out.push(node(Volcano, 30, backdrop).with_asset(HERO_VOLCANO));
        if since_ready.is_some() {
            let gate = LayerStyle {
                pointer_interactive: scroll.phase1.pointer_interactive,
                ..LayerStyle::IDENTITY.with_translate(Translate::px(parallax.gate))
            };
            out.push(node(Gate3D, 40, gate));
        }
        out.push(node(Foreground, 50, backdrop).with_asset(HERO_FOREGROUND));
        out.push(node(Vignette, 55, LayerStyle::IDENTITY));

        let hero = LayerStyle::faded(self.timing.hero_text.progress(since_ready));
        out.push(node(HeroText, 60, hero));
        out.push(node(HeroTitle, 60, scroll.title));
        out.push(node(HeroSubtitleMiddle, 60, scroll.subtitle_middle));
        out.push(node(HeroSubtitleLast, 60, scroll.subtitle_last));
    }

    fn push_phase2(&self, out: &mut Vec<LayerNode>, scroll: &ScrollStyles, now: Duration) {
        use LayerId::*;
        let node = |id, z, style| LayerNode::new(id, LayerGroup::Phase2, z, style);
        out.push(node(Phase2Root, 100, scroll.phase2));
        out.push(node(Sand, 10, scroll.sand).with_asset(SHORE_SAND));
        out.push(
            node(Water, 20, scroll.water)
                .with_asset(SHORE_WATER)
                .with_ambient(self.ambient.sway(now)),
        );
        out.push(node(WaterShade, 30, LayerStyle::IDENTITY));
        if self.distortion_enabled {
            out.push(node(DistortionSurface, 35, LayerStyle::IDENTITY));
        }
        out.push(node(RevealPanel, 40, LayerStyle::IDENTITY));
        out.push(node(RevealText, 40, scroll.text_reveal));
    }

    fn push_chrome(
        &self,
        out: &mut Vec<LayerNode>,
        menu: &MenuFrame,
        since_ready: Option<Duration>,
    ) {
        use LayerId::*;
        let node = |id, z, style| LayerNode::new(id, LayerGroup::Chrome, z, style);
        let fade = |t: &EntryTransition, interactive: bool| LayerStyle {
            pointer_interactive: interactive,
            ..LayerStyle::faded(t.progress(since_ready))
        };

        out.push(node(HeaderLogo, 0, fade(&self.timing.header_logo, false)).with_asset(WORDMARK));
        if since_ready.is_some() {
            if self.ui.is_mobile {
                out.push(node(MenuButton, 0, fade(&self.timing.menu_button, true)));
            }
            out.push(node(Navigation, 0, fade(&self.timing.navigation, true)));
        }
        let logo = LayerStyle {
            pointer_interactive: true,
            ..LayerStyle::IDENTITY
        };
        out.push(node(LoadingLogo, 101, logo).with_asset(LOGO_IMAGE));
        if menu.mounted {
            out.push(node(MenuOverlay, 200, menu.overlay));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/compositor.rs"]
mod tests;
