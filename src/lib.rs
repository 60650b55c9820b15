//! Odyssey is the state engine behind a scroll-driven cinematic intro.
//!
//! It turns three host inputs (scroll position, pointer position and a monotonic clock) into a
//! fully resolved paint description ([`SceneFrame`]) for a two-phase landing scene: a volcanic
//! hero that dissolves into a shoreline as the page scrolls.
//!
//! # Frame pipeline
//!
//! 1. **Sample**: [`ScrollTracker`] and [`PointerTracker`] record host events; the pointer is
//!    smoothed by a critically damped spring.
//! 2. **Map**: [`PhaseTransitionMapper`] maps scroll to per-layer styles, [`ParallaxEngine`] maps
//!    the smoothed pointer to depth offsets.
//! 3. **Gate**: [`AssetPreloader`] loads the manifest in parallel and feeds [`LoadingGate`], which
//!    opens once, a settle delay after progress reaches 100.
//! 4. **Compose**: [`SceneCompositor`] assembles the z-ordered layer tree, entry fades, the
//!    loading logo and the mobile menu.
//!
//! [`IntroView`] wires these together against a [`HostEnvironment`].
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Host-owned clock**: every instant is a [`std::time::Duration`] since mount, so frames are
//!   reproducible for a given input trace.
//! - **Total mapping**: any `f64` scroll or pointer sample yields a valid frame.
//! - **No IO after preload**: asset bytes are decoded up front into an [`AssetCache`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod config;
mod foundation;
mod gate;
mod host;
mod input;
mod logo;
mod preload;
mod scene;
mod view;

pub use animation::ease::Ease;
pub use animation::entry::EntryTransition;
pub use animation::interp::{Lerp, Mapping, Step};
pub use animation::sequence::{LoopKeyframes, PingPong};
pub use animation::spring::{SpringConfig, SpringState};
pub use config::{IntroConfig, LogoConfig};
pub use foundation::core::{Length, Point, PointerOffset, ScrollOffset, Translate, Vec2, Viewport};
pub use foundation::error::{OdysseyError, OdysseyResult};
pub use gate::loading::{DEFAULT_SETTLE_DELAY, LoadingGate, LoadingState, SettleTimer};
pub use host::{HostEnvironment, HostEvent, SubscriptionId, Subscriptions};
pub use input::pointer::PointerTracker;
pub use input::scroll::ScrollTracker;
pub use logo::animator::{LogoAnimState, LogoAnimator, LogoRender, reveal_inset_top_pct};
pub use preload::decode::{decode_image, parse_svg};
pub use preload::loader::{
    AssetCache, AssetLoader, FsAssetLoader, PreparedAsset, PreparedImage, PreparedSvg,
};
pub use preload::manifest::{
    AssetId, AssetKind, AssetManifest, AssetRef, AssetRole, HERO_FOREGROUND, HERO_MOUNTAINS,
    HERO_SKY, HERO_VOLCANO, INTRO_CRITICAL_ASSETS, INTRO_FRAME_DIR, LOGO_IMAGE, NOISE,
    SHORE_SAND, SHORE_WATER, WORDMARK, normalize_rel_path,
};
pub use preload::preloader::{AssetPreloader, PreloadEvent, PreloadHandle, PreloadReport};
pub use preload::progress::{LoadProgress, PreloadBarrier};
pub use scene::ambient::AmbientLoops;
pub use scene::compositor::{
    ChromeTiming, CompositeInput, DEFAULT_MOBILE_BREAKPOINT_PX, DocumentLayout, LogoFrame,
    LogoPlacement, SceneCompositor, SceneFrame, UiState,
};
pub use scene::external::{
    CollaboratorSync, DistortionMount, DistortionRenderer, Scene3DInput, SceneRenderer,
};
pub use scene::layer::{AmbientMotion, LayerGroup, LayerId, LayerNode};
pub use scene::mapper::{
    NavPlacement, PhaseTransitionMapper, ScrollStyles, phase1_pointer_interactive,
    phase1_visible, phase2_pointer_interactive,
};
pub use scene::menu::{MENU_ITEMS, MenuFrame, MenuItemFrame, MenuState};
pub use scene::parallax::{ParallaxEngine, ParallaxOffsets};
pub use scene::phase::{
    DEEP_SCROLL_END, NAV_DOCK, PHASE1_DECAY_END, PHASE2_FADE_START, POINTER_HANDOFF, Phase,
    SUBTITLE_LAST_FADE, SUBTITLE_MIDDLE_FADE, TEXT_REVEAL_END, TEXT_REVEAL_START, TITLE_FADE,
    TRANSITION_END, TRANSITION_START,
};
pub use scene::style::{LayerStyle, MIN_SCALE};
pub use view::IntroView;
