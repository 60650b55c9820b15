use std::{
    sync::{
        Arc, Mutex, PoisonError,
        atomic::{AtomicBool, Ordering},
        mpsc,
    },
    thread::JoinHandle,
};

use rayon::prelude::*;

use crate::{
    foundation::error::{OdysseyError, OdysseyResult},
    preload::loader::{AssetCache, AssetLoader},
    preload::manifest::{AssetManifest, AssetRef},
    preload::progress::{LoadProgress, PreloadBarrier},
};

/// Outcome of a full preload run. Failures are listed but never abort the run.
#[derive(Clone, Debug)]
pub struct PreloadReport {
    /// Manifest size.
    pub total: usize,
    /// Resources that loaded successfully.
    pub loaded: usize,
    /// Normalized paths of resources that failed, in settlement order.
    pub failed: Vec<String>,
    /// Resident assets.
    pub cache: AssetCache,
}

impl PreloadReport {
    /// Final progress; 100 once a run returns, unless it was cancelled.
    pub fn progress(&self) -> LoadProgress {
        LoadProgress::from_counts(self.loaded + self.failed.len(), self.total)
    }
}

/// Message published by a background preload.
#[derive(Clone, Debug)]
pub enum PreloadEvent {
    /// A resource settled and the percentage changed (or repeated).
    Progress(LoadProgress),
    /// Every resource settled.
    Complete(PreloadReport),
}

/// Loads every manifest entry concurrently and reports aggregate progress.
#[derive(Clone, Debug)]
pub struct AssetPreloader {
    manifest: Arc<AssetManifest>,
    threads: Option<usize>,
}

struct Shared<F> {
    barrier: PreloadBarrier,
    cache: AssetCache,
    failed: Vec<String>,
    on_progress: F,
}

impl AssetPreloader {
    /// Preloader over `manifest` using rayon's default thread count.
    pub fn new(manifest: AssetManifest) -> Self {
        Self {
            manifest: Arc::new(manifest),
            threads: None,
        }
    }

    /// Use a dedicated pool of `threads` workers (`None` for the rayon default).
    pub fn with_threads(mut self, threads: Option<usize>) -> OdysseyResult<Self> {
        if let Some(n) = threads
            && n == 0
        {
            return Err(OdysseyError::validation(
                "preload 'threads' must be >= 1 when set",
            ));
        }
        self.threads = threads;
        Ok(self)
    }

    /// Resources this preloader settles.
    pub fn manifest(&self) -> &AssetManifest {
        &self.manifest
    }

    /// Load everything, blocking until every resource settled.
    ///
    /// `on_progress` runs once per settled resource, serialized, with non-decreasing values; the
    /// last call carries 100. A failed resource is logged and counted as settled.
    pub fn run<L, F>(&self, loader: &L, on_progress: F) -> PreloadReport
    where
        L: AssetLoader + ?Sized,
        F: FnMut(LoadProgress) + Send,
    {
        self.run_until(loader, &AtomicBool::new(false), on_progress)
    }

    /// Like [`run`](Self::run), but resources not yet started when `cancel` is set are skipped.
    ///
    /// Skipped resources are never loaded and never settle, so a cancelled report stays below 100.
    #[tracing::instrument(skip_all, fields(total = self.manifest.len()))]
    pub fn run_until<L, F>(
        &self,
        loader: &L,
        cancel: &AtomicBool,
        on_progress: F,
    ) -> PreloadReport
    where
        L: AssetLoader + ?Sized,
        F: FnMut(LoadProgress) + Send,
    {
        let shared = Mutex::new(Shared {
            barrier: PreloadBarrier::new(self.manifest.len()),
            cache: AssetCache::new(),
            failed: Vec::new(),
            on_progress,
        });

        let settle_one = |asset: &AssetRef| {
            if cancel.load(Ordering::Acquire) {
                return;
            }
            let result = loader.load(asset);
            let mut guard = shared.lock().unwrap_or_else(PoisonError::into_inner);
            let s = &mut *guard;
            let ok = match result {
                Ok(prepared) => {
                    s.cache.insert(asset, prepared);
                    true
                }
                Err(e) => {
                    tracing::warn!(path = %asset.path, error = %e, "asset failed to load");
                    s.failed.push(asset.path.clone());
                    false
                }
            };
            if let Some(p) = s.barrier.settle(asset.index, ok) {
                (s.on_progress)(p);
            }
        };

        match build_thread_pool(self.threads) {
            Ok(pool) => pool.install(|| self.manifest.assets().par_iter().for_each(settle_one)),
            Err(e) => {
                tracing::warn!(error = %e, "preload pool unavailable, loading sequentially");
                self.manifest.assets().iter().for_each(settle_one);
            }
        }

        let s = shared.into_inner().unwrap_or_else(PoisonError::into_inner);
        if cancel.load(Ordering::Acquire) {
            tracing::debug!(settled = s.barrier.completed(), "preload cancelled");
        }
        let report = PreloadReport {
            total: s.barrier.total(),
            loaded: s.barrier.completed() - s.barrier.failed(),
            failed: s.failed,
            cache: s.cache,
        };
        tracing::info!(
            loaded = report.loaded,
            failed = report.failed.len(),
            "preload complete"
        );
        report
    }

    /// Run on a background thread, publishing [`PreloadEvent`]s to the returned handle.
    pub fn spawn<L>(self, loader: L) -> PreloadHandle
    where
        L: AssetLoader + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let cancel = Arc::new(AtomicBool::new(false));
        let worker_cancel = Arc::clone(&cancel);
        let worker = std::thread::spawn(move || {
            let progress_tx = tx.clone();
            let report = self.run_until(&loader, &worker_cancel, move |p| {
                // The receiver may be gone after unmount; nothing to do then.
                let _ = progress_tx.send(PreloadEvent::Progress(p));
            });
            let _ = tx.send(PreloadEvent::Complete(report));
        });
        PreloadHandle {
            rx,
            worker: Some(worker),
            cancel,
            latest: LoadProgress::ZERO,
            report: None,
        }
    }
}

fn build_thread_pool(threads: Option<usize>) -> OdysseyResult<rayon::ThreadPool> {
    let mut builder =
        rayon::ThreadPoolBuilder::new().thread_name(|i| format!("odyssey-preload-{i}"));
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| OdysseyError::asset(format!("failed to build preload thread pool: {e}")))
}

/// Receiving end of [`AssetPreloader::spawn`]. Dropping it cancels the run and detaches the
/// worker; resources already in flight finish, nothing new is loaded.
#[derive(Debug)]
pub struct PreloadHandle {
    rx: mpsc::Receiver<PreloadEvent>,
    worker: Option<JoinHandle<()>>,
    cancel: Arc<AtomicBool>,
    latest: LoadProgress,
    report: Option<PreloadReport>,
}

impl PreloadHandle {
    /// Drain pending events without blocking. Returns the newest progress if any arrived.
    pub fn poll(&mut self) -> Option<LoadProgress> {
        let mut newest = None;
        while let Ok(event) = self.rx.try_recv() {
            newest = Some(self.absorb(event));
        }
        newest
    }

    /// Block until the run completes.
    pub fn wait(mut self) -> OdysseyResult<PreloadReport> {
        while self.report.is_none() {
            match self.rx.recv() {
                Ok(event) => {
                    self.absorb(event);
                }
                Err(_) => break,
            }
        }
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
        self.report
            .take()
            .ok_or_else(|| OdysseyError::asset("preload worker exited without a report"))
    }

    /// Stop the worker from starting any further resources.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Release);
    }

    /// Whether [`cancel`](Self::cancel) was called or the handle is being dropped.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Acquire)
    }

    /// Most recent progress seen by [`poll`](Self::poll) or [`wait`](Self::wait).
    pub fn latest(&self) -> LoadProgress {
        self.latest
    }

    /// Whether the completion report has been received.
    pub fn is_finished(&self) -> bool {
        self.report.is_some()
    }

    /// Completion report, once received.
    pub fn report(&self) -> Option<&PreloadReport> {
        self.report.as_ref()
    }

    /// Move the completion report out, once received.
    pub fn take_report(&mut self) -> Option<PreloadReport> {
        self.report.take()
    }

    fn absorb(&mut self, event: PreloadEvent) -> LoadProgress {
        let p = match event {
            PreloadEvent::Progress(p) => p,
            PreloadEvent::Complete(report) => {
                let p = report.progress();
                self.report = Some(report);
                p
            }
        };
        self.latest = self.latest.max(p);
        self.latest
    }
}

impl Drop for PreloadHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/preload/preloader.rs"]
mod tests;
