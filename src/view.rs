use std::time::Duration;

use crate::{
    config::IntroConfig,
    foundation::core::{Point, Viewport},
    foundation::error::OdysseyResult,
    gate::loading::LoadingGate,
    host::{HostEnvironment, HostEvent, Subscriptions},
    input::pointer::PointerTracker,
    input::scroll::ScrollTracker,
    logo::animator::{LogoAnimState, LogoAnimator},
    preload::loader::{AssetCache, FsAssetLoader},
    preload::preloader::{AssetPreloader, PreloadHandle},
    preload::progress::LoadProgress,
    scene::compositor::{CompositeInput, SceneCompositor, SceneFrame, UiState},
};

/// The mounted intro: owns every tracker and state machine and turns host events plus a clock
/// into one [`SceneFrame`] per tick.
///
/// All times are view-clock offsets since mount, supplied by the host. Unmounting consumes the
/// view, so no handler can run after teardown.
#[derive(Debug)]
pub struct IntroView {
    config: IntroConfig,
    viewport: Viewport,
    scroll: ScrollTracker,
    pointer: PointerTracker,
    gate: LoadingGate,
    logo: LogoAnimator,
    compositor: SceneCompositor,
    subscriptions: Subscriptions,
    preload: Option<PreloadHandle>,
    assets: Option<AssetCache>,
    last_tick: Option<Duration>,
}

impl IntroView {
    /// Validate `config`, subscribe to host events and build the initial state.
    ///
    /// A host without pointer support leaves parallax neutral instead of failing.
    #[tracing::instrument(skip(host, config), fields(width = viewport.width, height = viewport.height))]
    pub fn mount(
        host: &mut dyn HostEnvironment,
        config: IntroConfig,
        viewport: Viewport,
    ) -> OdysseyResult<Self> {
        config.validate()?;
        let mut compositor =
            SceneCompositor::new(config.mobile_breakpoint_px, config.distortion_enabled)?;
        compositor.set_viewport(viewport);

        let mut subscriptions = Subscriptions::new();
        let mut pointer = PointerTracker::new(config.pointer_spring);
        subscriptions.acquire(host, HostEvent::Scroll);
        subscriptions.acquire(host, HostEvent::Resize);
        if !subscriptions.acquire(host, HostEvent::PointerMove) {
            pointer.set_available(false);
        }

        Ok(Self {
            viewport,
            scroll: ScrollTracker::new(),
            pointer,
            gate: LoadingGate::new(config.settle_delay()),
            logo: LogoAnimator::new(config.logo_sequence()?),
            compositor,
            subscriptions,
            preload: None,
            assets: None,
            last_tick: None,
            config,
        })
    }

    /// Preload the configured manifest from `asset_root` on a background thread.
    pub fn start_preload(&mut self) -> OdysseyResult<()> {
        let preloader = AssetPreloader::new(self.config.manifest()?)
            .with_threads(self.config.load_threads)?;
        let loader = FsAssetLoader::new(self.config.asset_root.clone());
        self.attach_preload(preloader.spawn(loader));
        Ok(())
    }

    /// Follow an already running preload; progress is drained on every tick.
    pub fn attach_preload(&mut self, handle: PreloadHandle) {
        self.preload = Some(handle);
    }

    /// Report preload progress from a host-driven loader.
    pub fn on_progress(&mut self, progress: LoadProgress, now: Duration) {
        self.gate.observe(progress, now);
        self.compositor.set_progress(self.gate.progress());
    }

    /// Host scroll event.
    pub fn on_scroll(&mut self, px: f64) {
        self.scroll.on_scroll(px);
    }

    /// Host pointer-move event in client coordinates.
    pub fn on_pointer_move(&mut self, client: Point) {
        self.pointer.on_pointer_move(client, self.viewport);
    }

    /// Host resize event. Unusable sizes are ignored.
    pub fn on_resize(&mut self, viewport: Viewport) {
        if !viewport.is_usable() {
            return;
        }
        self.viewport = viewport;
        self.compositor.set_viewport(viewport);
    }

    /// Pointer entered the logo.
    pub fn on_logo_enter(&mut self, now: Duration) {
        self.logo.pointer_enter(self.gate.is_ready(), now);
    }

    /// Pointer left the logo.
    pub fn on_logo_leave(&mut self, now: Duration) {
        self.logo.pointer_leave(now);
    }

    /// Menu button or menu item pressed. Returns whether the menu changed.
    pub fn toggle_menu(&mut self, now: Duration) -> bool {
        self.compositor.toggle_menu(now)
    }

    /// Advance every clock-driven machine to `now` and build the frame.
    pub fn tick(&mut self, now: Duration) -> SceneFrame {
        let dt = self
            .last_tick
            .map_or(Duration::ZERO, |prev| now.saturating_sub(prev));
        self.last_tick = Some(now);

        self.drain_preload(now);
        if let Some(at) = self.gate.poll(now) {
            self.compositor.mark_ready(at);
        }

        self.pointer.tick(dt);
        self.logo.advance(now);

        let ready = self.gate.is_ready();
        self.compositor.compose(&CompositeInput {
            now,
            scroll: self.scroll.sample(),
            pointer: self.pointer.smoothed(),
            viewport: self.viewport,
            logo: self.logo.render(ready, now),
        })
    }

    fn drain_preload(&mut self, now: Duration) {
        let Some(handle) = self.preload.as_mut() else {
            return;
        };
        if let Some(progress) = handle.poll() {
            self.gate.observe(progress, now);
            self.compositor.set_progress(self.gate.progress());
        }
        if let Some(report) = handle.take_report() {
            self.assets = Some(report.cache);
            self.preload = None;
        }
    }

    /// Loading gate.
    pub fn gate(&self) -> &LoadingGate {
        &self.gate
    }

    /// Shared UI state.
    pub fn ui(&self) -> &UiState {
        self.compositor.ui()
    }

    /// Logo hover state.
    pub fn logo_state(&self) -> LogoAnimState {
        self.logo.state()
    }

    /// Assets resident after a completed [`start_preload`](Self::start_preload) run.
    pub fn assets(&self) -> Option<&AssetCache> {
        self.assets.as_ref()
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Whether the host pointer is feeding parallax.
    pub fn pointer_available(&self) -> bool {
        self.pointer.is_available()
    }

    /// Active host subscriptions.
    pub fn subscriptions(&self) -> &Subscriptions {
        &self.subscriptions
    }

    /// Release every subscription, cancel pending timers and cancel any running preload.
    #[tracing::instrument(skip_all)]
    pub fn unmount(mut self, host: &mut dyn HostEnvironment) {
        self.subscriptions.release_all(host);
        self.gate.cancel();
        self.pointer.reset();
        if let Some(handle) = self.preload.take() {
            handle.cancel();
        }
        tracing::debug!("intro view unmounted");
    }
}

#[cfg(test)]
#[path = "../tests/unit/view.rs"]
mod tests;
