use crate::{
    animation::interp::{Mapping, Step},
    foundation::core::{Length, ScrollOffset, Translate},
    scene::phase::{
        DEEP_SCROLL_END, NAV_DOCK, PHASE1_DECAY_END, PHASE2_FADE_START, POINTER_HANDOFF, Phase,
        SUBTITLE_LAST_FADE, SUBTITLE_MIDDLE_FADE, TEXT_REVEAL_END, TEXT_REVEAL_START, TITLE_FADE,
        TRANSITION_END, TRANSITION_START,
    },
    scene::style::LayerStyle,
};

/// Whether phase-1 accepts pointer input at `scroll`.
pub fn phase1_pointer_interactive(scroll: ScrollOffset) -> bool {
    Step::Below(POINTER_HANDOFF).test(scroll.px())
}

/// Whether phase-2 accepts pointer input at `scroll`.
pub fn phase2_pointer_interactive(scroll: ScrollOffset) -> bool {
    Step::Above(POINTER_HANDOFF).test(scroll.px())
}

/// Whether phase-1 is painted at all at `scroll`.
pub fn phase1_visible(scroll: ScrollOffset) -> bool {
    Step::Below(TRANSITION_END).test(scroll.px())
}

/// Placement of the navigation block, docking from center to the left edge on desktop.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NavPlacement {
    /// Offset from the top of the viewport.
    pub top: Length,
    /// Offset from the left of the viewport.
    pub left: Length,
    /// Horizontal self-translation.
    pub translate_x: Length,
    /// Uniform scale around the top-left corner.
    pub scale: f64,
}

/// Every scroll-derived style for one tick, all computed from the same sample.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollStyles {
    /// The sample these styles were computed from.
    pub scroll: ScrollOffset,
    /// Region the sample falls in.
    pub phase: Phase,
    /// Phase-1 group.
    pub phase1: LayerStyle,
    /// Phase-2 group.
    pub phase2: LayerStyle,
    /// Hero title line.
    pub title: LayerStyle,
    /// Hero middle line.
    pub subtitle_middle: LayerStyle,
    /// Hero last line.
    pub subtitle_last: LayerStyle,
    /// Slow background of the shore.
    pub sand: LayerStyle,
    /// Fast, zooming foreground of the shore.
    pub water: LayerStyle,
    /// Shore copy rising into place.
    pub text_reveal: LayerStyle,
    /// Navigation placement.
    pub nav: NavPlacement,
}

#[derive(Clone, Debug)]
struct NavMappings {
    top: Mapping<Length>,
    left: Mapping<Length>,
    translate_x: Mapping<Length>,
}

impl NavMappings {
    fn percent(top: (f64, f64), left: (f64, f64), translate_x: (f64, f64)) -> Self {
        let window = |(from, to): (f64, f64)| {
            Mapping::window(
                NAV_DOCK.0,
                NAV_DOCK.1,
                Length::Percent(from),
                Length::Percent(to),
            )
        };
        Self {
            top: window(top),
            left: window(left),
            translate_x: window(translate_x),
        }
    }
}

/// Pure map from a scroll sample to every scroll-driven layer style.
#[derive(Clone, Debug)]
pub struct PhaseTransitionMapper {
    phase1_opacity: Mapping<f64>,
    phase1_blur: Mapping<f64>,
    phase1_scale: Mapping<f64>,
    phase2_opacity: Mapping<f64>,
    title: Mapping<f64>,
    subtitle_middle: Mapping<f64>,
    subtitle_last: Mapping<f64>,
    sand_y: Mapping<Length>,
    water_y: Mapping<Length>,
    water_scale: Mapping<f64>,
    reveal_y: Mapping<f64>,
    reveal_opacity: Mapping<f64>,
    nav_scale: Mapping<f64>,
    nav_desktop: NavMappings,
    nav_mobile: NavMappings,
}

impl Default for PhaseTransitionMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseTransitionMapper {
    /// Build every window from the shared breakpoints.
    pub fn new() -> Self {
        let fade_out = |(a, b): (f64, f64)| Mapping::window(a, b, 1.0, 0.0);
        let deep = |from, to| Mapping::window(TRANSITION_END, DEEP_SCROLL_END, from, to);
        Self {
            phase1_opacity: Mapping::window(TRANSITION_START, PHASE1_DECAY_END, 1.0, 0.0),
            phase1_blur: Mapping::window(TRANSITION_START, PHASE1_DECAY_END, 0.0, 10.0),
            phase1_scale: Mapping::window(TRANSITION_START, PHASE1_DECAY_END, 1.0, 1.05),
            phase2_opacity: Mapping::window(PHASE2_FADE_START, TRANSITION_END, 0.0, 1.0),
            title: fade_out(TITLE_FADE),
            subtitle_middle: fade_out(SUBTITLE_MIDDLE_FADE),
            subtitle_last: fade_out(SUBTITLE_LAST_FADE),
            sand_y: deep(Length::Percent(0.0), Length::Percent(-5.0)),
            water_y: deep(Length::Percent(0.0), Length::Percent(-15.0)),
            water_scale: Mapping::window(TRANSITION_END, DEEP_SCROLL_END, 1.0, 1.1),
            reveal_y: Mapping::window(TEXT_REVEAL_START, TEXT_REVEAL_END, 50.0, 0.0),
            reveal_opacity: Mapping::window(TEXT_REVEAL_START, TEXT_REVEAL_END, 0.0, 1.0),
            nav_scale: Mapping::window(NAV_DOCK.0, NAV_DOCK.1, 1.0, 0.8),
            nav_desktop: NavMappings::percent((40.0, 50.0), (50.0, 5.0), (-50.0, 0.0)),
            nav_mobile: NavMappings::percent((20.0, 20.0), (0.0, 0.0), (0.0, 0.0)),
        }
    }

    /// Map one scroll sample. Never fails; out-of-range input clamps to the window ends.
    pub fn map_scroll(&self, scroll: ScrollOffset, is_mobile: bool) -> ScrollStyles {
        let s = scroll.px();

        let phase1 = LayerStyle {
            opacity: self.phase1_opacity.sample(s),
            blur_px: self.phase1_blur.sample(s),
            scale: self.phase1_scale.sample(s),
            translate: Translate::ZERO,
            pointer_interactive: phase1_pointer_interactive(scroll),
            visible: phase1_visible(scroll),
        };
        let phase2 = LayerStyle {
            pointer_interactive: phase2_pointer_interactive(scroll),
            ..LayerStyle::faded(self.phase2_opacity.sample(s))
        };

        let sand = LayerStyle::IDENTITY.with_translate(Translate::y(self.sand_y.sample(s)));
        let water = LayerStyle::IDENTITY
            .with_translate(Translate::y(self.water_y.sample(s)))
            .with_scale(self.water_scale.sample(s));
        let text_reveal = LayerStyle::IDENTITY
            .with_translate(Translate::y(Length::Px(self.reveal_y.sample(s))))
            .with_opacity(self.reveal_opacity.sample(s));

        let nav = if is_mobile {
            &self.nav_mobile
        } else {
            &self.nav_desktop
        };

        ScrollStyles {
            scroll,
            phase: Phase::from_offset(scroll),
            phase1: phase1.normalized(),
            phase2: phase2.normalized(),
            title: LayerStyle::faded(self.title.sample(s)),
            subtitle_middle: LayerStyle::faded(self.subtitle_middle.sample(s)),
            subtitle_last: LayerStyle::faded(self.subtitle_last.sample(s)),
            sand: sand.normalized(),
            water: water.normalized(),
            text_reveal: text_reveal.normalized(),
            nav: NavPlacement {
                top: nav.top.sample(s),
                left: nav.left.sample(s),
                translate_x: nav.translate_x.sample(s),
                scale: self.nav_scale.sample(s),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/mapper.rs"]
mod tests;
