use crate::{
    foundation::core::Length,
    scene::style::LayerStyle,
};

/// Top-level stacking context a layer belongs to, deepest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub enum LayerGroup {
    /// The gate scene.
    Phase1,
    /// The shore scene, stacked over phase-1.
    Phase2,
    /// Header, navigation, loading logo and menu, above both scenes.
    Chrome,
}

/// Every paintable node of the intro.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum LayerId {
    /// Phase-1 group; carries the crossfade style and the visibility cut.
    Phase1Root,
    /// Solid backdrop.
    Backdrop,
    /// Film grain overlay.
    Noise,
    /// Sky plate.
    Sky,
    /// Distant mountains.
    Mountains,
    /// Pulsing glow behind the volcano.
    VolcanoGlow,
    /// Volcano plate.
    Volcano,
    /// Mount point of the external 3D gate renderer.
    Gate3D,
    /// Nearest rock plate.
    Foreground,
    /// Readability gradient.
    Vignette,
    /// Hero copy block (entry fade).
    HeroText,
    /// Hero title line.
    HeroTitle,
    /// Hero middle line.
    HeroSubtitleMiddle,
    /// Hero last line.
    HeroSubtitleLast,
    /// Phase-2 group; carries the fade-in and pointer handoff.
    Phase2Root,
    /// Slow sand plate.
    Sand,
    /// Fast, zooming water plate.
    Water,
    /// Gradient over the water.
    WaterShade,
    /// Mount point of the external distortion renderer.
    DistortionSurface,
    /// Solid copy panel.
    RevealPanel,
    /// Shore copy rising into place.
    RevealText,
    /// Wordmark in the header.
    HeaderLogo,
    /// Mobile menu button.
    MenuButton,
    /// Navigation links.
    Navigation,
    /// Loading logo, docking into the header once ready.
    LoadingLogo,
    /// Full-screen mobile menu.
    MenuOverlay,
}

/// Wall-clock loop applied on top of a layer's style (multiplied opacity and scale, added
/// horizontal translation).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct AmbientMotion {
    /// Opacity factor.
    pub opacity: f64,
    /// Scale factor.
    pub scale: f64,
    /// Extra horizontal translation.
    pub translate_x: Length,
}

/// One entry in the z-ordered layer list.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LayerNode {
    /// Which layer.
    pub id: LayerId,
    /// Stacking context.
    pub group: LayerGroup,
    /// Stack order inside the group; equal values paint in list order.
    pub z: i32,
    /// Scroll/pointer/entry-derived style.
    pub style: LayerStyle,
    /// Image painted by this layer, as a manifest path.
    pub asset: Option<&'static str>,
    /// Looping motion layered over `style`.
    pub ambient: Option<AmbientMotion>,
}

impl LayerNode {
    pub(crate) fn new(id: LayerId, group: LayerGroup, z: i32, style: LayerStyle) -> Self {
        Self {
            id,
            group,
            z,
            style: style.normalized(),
            asset: None,
            ambient: None,
        }
    }

    pub(crate) fn with_asset(mut self, path: &'static str) -> Self {
        self.asset = Some(path);
        self
    }

    pub(crate) fn with_ambient(mut self, motion: AmbientMotion) -> Self {
        self.ambient = Some(motion);
        self
    }
}
