use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;

use crate::{
    foundation::error::{OdysseyError, OdysseyResult},
    preload::decode,
    preload::manifest::{AssetId, AssetKind, AssetRef},
};

#[derive(Clone, Debug)]
/// Decoded bitmap in premultiplied RGBA8.
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major premultiplied RGBA8 bytes.
    pub rgba8_premul: Arc<Vec<u8>>,
}

#[derive(Clone, Debug)]
/// Parsed SVG document.
pub struct PreparedSvg {
    /// Intrinsic width.
    pub width: f32,
    /// Intrinsic height.
    pub height: f32,
    /// Parsed tree.
    pub tree: Arc<usvg::Tree>,
}

#[derive(Clone, Debug)]
/// A resource that finished loading and is resident in memory.
pub enum PreparedAsset {
    /// Raster image.
    Image(PreparedImage),
    /// Vector image.
    Svg(PreparedSvg),
}

impl PreparedAsset {
    /// Intrinsic `(width, height)` in pixels.
    pub fn size(&self) -> (f64, f64) {
        match self {
            Self::Image(img) => (f64::from(img.width), f64::from(img.height)),
            Self::Svg(svg) => (f64::from(svg.width), f64::from(svg.height)),
        }
    }
}

/// Fetches and decodes one manifest entry.
///
/// Implementations are shared across the preload pool, hence `Sync`. A returned error marks the
/// resource as failed; the preloader still counts it as settled.
pub trait AssetLoader: Sync {
    /// Load `asset` into memory.
    fn load(&self, asset: &AssetRef) -> OdysseyResult<PreparedAsset>;
}

/// Loads manifest paths relative to a filesystem root.
#[derive(Clone, Debug)]
pub struct FsAssetLoader {
    root: PathBuf,
}

impl FsAssetLoader {
    /// Resolve manifest paths against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Filesystem root for relative asset paths.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_bytes(&self, norm_path: &str) -> OdysseyResult<Vec<u8>> {
        let path = self.root.join(Path::new(norm_path));
        std::fs::read(&path)
            .with_context(|| format!("read asset bytes from '{}'", path.display()))
            .map_err(OdysseyError::from)
    }
}

impl AssetLoader for FsAssetLoader {
    fn load(&self, asset: &AssetRef) -> OdysseyResult<PreparedAsset> {
        let bytes = self.read_bytes(&asset.path)?;
        match asset.kind {
            AssetKind::Raster => decode::decode_image(&bytes).map(PreparedAsset::Image),
            AssetKind::Svg => {
                let abs = self.root.join(Path::new(&asset.path));
                decode::parse_svg(&bytes, abs.parent()).map(PreparedAsset::Svg)
            }
        }
    }
}

/// Loaded resources keyed by [`AssetId`]. Failed resources are simply absent.
#[derive(Clone, Debug, Default)]
pub struct AssetCache {
    ids_by_path: HashMap<String, AssetId>,
    assets_by_id: HashMap<AssetId, PreparedAsset>,
}

impl AssetCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, asset: &AssetRef, prepared: PreparedAsset) {
        self.ids_by_path.insert(asset.path.clone(), asset.id);
        self.assets_by_id.insert(asset.id, prepared);
    }

    /// Lookup by id.
    pub fn get(&self, id: AssetId) -> Option<&PreparedAsset> {
        self.assets_by_id.get(&id)
    }

    /// Lookup by normalized manifest path.
    pub fn get_path(&self, path: &str) -> Option<&PreparedAsset> {
        self.ids_by_path
            .get(path)
            .and_then(|id| self.assets_by_id.get(id))
    }

    /// Id assigned to `path`, if it loaded.
    pub fn id_for_path(&self, path: &str) -> OdysseyResult<AssetId> {
        self.ids_by_path
            .get(path)
            .copied()
            .ok_or_else(|| OdysseyError::asset(format!("asset '{path}' is not resident")))
    }

    /// Number of resident assets.
    pub fn len(&self) -> usize {
        self.assets_by_id.len()
    }

    /// Whether nothing loaded.
    pub fn is_empty(&self) -> bool {
        self.assets_by_id.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/preload/loader.rs"]
mod tests;
