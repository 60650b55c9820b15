use std::{
    collections::HashSet,
    sync::Arc,
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
    time::Duration,
};

use super::*;
use crate::preload::loader::{PreparedAsset, PreparedImage};

struct FakeLoader {
    fail: HashSet<usize>,
    calls: AtomicUsize,
}

impl FakeLoader {
    fn failing(indices: &[usize]) -> Self {
        Self {
            fail: indices.iter().copied().collect(),
            calls: AtomicUsize::new(0),
        }
    }
}

impl AssetLoader for FakeLoader {
    fn load(&self, asset: &AssetRef) -> OdysseyResult<PreparedAsset> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.contains(&asset.index) {
            return Err(OdysseyError::asset(format!("boom {}", asset.path)));
        }
        Ok(PreparedAsset::Image(PreparedImage {
            width: 1,
            height: 1,
            rgba8_premul: Arc::new(vec![255; 4]),
        }))
    }
}

#[test]
fn run_settles_every_asset_and_reaches_100() {
    let pre = AssetPreloader::new(AssetManifest::intro(39).unwrap())
        .with_threads(Some(4))
        .unwrap();
    let loader = FakeLoader::failing(&[1, 12, 20]);

    let mut seen = Vec::new();
    let report = pre.run(&loader, |p| seen.push(p));

    assert_eq!(loader.calls.load(Ordering::SeqCst), 48);
    assert_eq!(seen.len(), 48);
    assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(seen.last().copied(), Some(LoadProgress::COMPLETE));

    assert_eq!(report.total, 48);
    assert_eq!(report.loaded, 45);
    assert_eq!(report.failed.len(), 3);
    assert!(report.failed.contains(&"assets/logo-text.svg".to_string()));
    assert_eq!(report.cache.len(), 45);
    assert_eq!(report.progress(), LoadProgress::COMPLETE);
}

#[test]
fn all_failures_still_complete() {
    let manifest = AssetManifest::new(&["a.png", "b.png"], "f", 0).unwrap();
    let report = AssetPreloader::new(manifest).run(&FakeLoader::failing(&[0, 1]), |_| {});
    assert_eq!(report.loaded, 0);
    assert!(report.cache.is_empty());
    assert_eq!(report.progress(), LoadProgress::COMPLETE);
}

#[test]
fn zero_threads_is_rejected() {
    let pre = AssetPreloader::new(AssetManifest::intro(1).unwrap());
    assert!(pre.with_threads(Some(0)).is_err());
}

#[test]
fn spawned_run_reports_through_handle() {
    let pre = AssetPreloader::new(AssetManifest::intro(4).unwrap());
    let handle = pre.spawn(FakeLoader::failing(&[2]));
    let report = handle.wait().unwrap();
    assert_eq!(report.total, 13);
    assert_eq!(report.loaded, 12);
}

#[test]
fn poll_drains_to_completion() {
    let pre = AssetPreloader::new(AssetManifest::intro(2).unwrap());
    let mut handle = pre.spawn(FakeLoader::failing(&[]));

    let deadline = std::time::Instant::now() + std::time::Duration::from_secs(10);
    while !handle.is_finished() && std::time::Instant::now() < deadline {
        handle.poll();
        std::thread::yield_now();
    }
    assert!(handle.is_finished());
    assert_eq!(handle.latest(), LoadProgress::COMPLETE);
    assert_eq!(handle.take_report().unwrap().cache.len(), 11);
    assert!(handle.report().is_none());
}

/// Trips `cancel` once `trip_after` loads have started; sleeps `delay` per load.
struct TrippingLoader {
    cancel: Arc<AtomicBool>,
    trip_after: usize,
    delay: Duration,
    calls: Arc<AtomicUsize>,
}

impl AssetLoader for TrippingLoader {
    fn load(&self, _asset: &AssetRef) -> OdysseyResult<PreparedAsset> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if n >= self.trip_after {
            self.cancel.store(true, Ordering::SeqCst);
        }
        std::thread::sleep(self.delay);
        Ok(PreparedAsset::Image(PreparedImage {
            width: 1,
            height: 1,
            rgba8_premul: Arc::new(vec![255; 4]),
        }))
    }
}

#[test]
fn cancelled_run_stops_loading_new_assets() {
    let pre = AssetPreloader::new(AssetManifest::intro(39).unwrap())
        .with_threads(Some(1))
        .unwrap();
    let cancel = Arc::new(AtomicBool::new(false));
    let calls = Arc::new(AtomicUsize::new(0));
    let loader = TrippingLoader {
        cancel: Arc::clone(&cancel),
        trip_after: 3,
        delay: Duration::ZERO,
        calls: Arc::clone(&calls),
    };

    let mut seen = Vec::new();
    let report = pre.run_until(&loader, &cancel, |p| seen.push(p));

    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(report.loaded, 3);
    assert_eq!(report.cache.len(), 3);
    assert_eq!(seen.len(), 3);
    assert!(report.progress() < LoadProgress::COMPLETE);
}

#[test]
fn cancelling_the_handle_stops_the_worker() {
    let pre = AssetPreloader::new(AssetManifest::intro(39).unwrap())
        .with_threads(Some(1))
        .unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    let loader = TrippingLoader {
        cancel: Arc::new(AtomicBool::new(false)),
        trip_after: usize::MAX,
        delay: Duration::from_millis(20),
        calls: Arc::clone(&calls),
    };

    let mut handle = pre.spawn(loader);
    let deadline = std::time::Instant::now() + Duration::from_secs(10);
    while handle.poll().is_none() && std::time::Instant::now() < deadline {
        std::thread::yield_now();
    }
    handle.cancel();
    assert!(handle.is_cancelled());

    let report = handle.wait().unwrap();
    assert!(report.loaded < report.total, "loaded {} of {}", report.loaded, report.total);
    assert_eq!(calls.load(Ordering::SeqCst), report.loaded);
}
