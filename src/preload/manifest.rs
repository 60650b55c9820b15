use std::collections::HashSet;

use crate::{
    foundation::error::{OdysseyError, OdysseyResult},
    foundation::math::Fnv1a64,
};

/// Static logo image (also the loading fill).
pub const LOGO_IMAGE: &str = "assets/logo-man.webp";
/// Header wordmark.
pub const WORDMARK: &str = "assets/logo-text.svg";
/// Film grain texture.
pub const NOISE: &str = "assets/noise.png";
/// Phase-1 sky plate.
pub const HERO_SKY: &str = "assets/hero/bg.webp";
/// Phase-1 mountains plate.
pub const HERO_MOUNTAINS: &str = "assets/hero/mountains_back.webp";
/// Phase-1 volcano plate.
pub const HERO_VOLCANO: &str = "assets/hero/volcano-main.webp";
/// Phase-1 foreground plate.
pub const HERO_FOREGROUND: &str = "assets/hero/foreground.webp";
/// Phase-2 sand plate.
pub const SHORE_SAND: &str = "assets/beach/sand_base.webp";
/// Phase-2 water plate.
pub const SHORE_WATER: &str = "assets/beach/water_overlay.webp";

/// Images that must be resident before the intro can paint.
pub const INTRO_CRITICAL_ASSETS: [&str; 9] = [
    LOGO_IMAGE,
    WORDMARK,
    NOISE,
    HERO_SKY,
    HERO_MOUNTAINS,
    HERO_VOLCANO,
    HERO_FOREGROUND,
    SHORE_SAND,
    SHORE_WATER,
];

/// Directory holding the numbered logo frames (`1.webp`, `2.webp`, ...).
pub const INTRO_FRAME_DIR: &str = "assets/logo-animation";

/// Decoder family for an asset, derived from its extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum AssetKind {
    /// Bitmap image (webp, png, jpeg, ...).
    Raster,
    /// SVG document.
    Svg,
}

/// Why an asset is in the manifest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AssetRole {
    /// Single image needed for first paint.
    Critical,
    /// 1-based frame of the logo sequence.
    Frame(u32),
}

/// Stable hashed identifier for a manifest entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AssetId(pub(crate) u64);

impl AssetId {
    /// Access the raw 64-bit identifier.
    pub fn as_u64(self) -> u64 {
        self.0
    }

    fn for_path(kind: AssetKind, norm_path: &str) -> Self {
        let mut hasher = Fnv1a64::new_default();
        hasher.write_u8(match kind {
            AssetKind::Raster => b'R',
            AssetKind::Svg => b'S',
        });
        hasher.write_bytes(norm_path.as_bytes());
        Self(hasher.finish())
    }
}

/// One resource to preload.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AssetRef {
    /// Position in the manifest; the barrier settles each index exactly once.
    pub index: usize,
    /// Hashed identity of the normalized path.
    pub id: AssetId,
    /// Normalized relative path.
    pub path: String,
    /// Decoder family.
    pub kind: AssetKind,
    /// Critical image or animation frame.
    pub role: AssetRole,
}

/// Fixed, ordered list of resources resolved at construction.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AssetManifest {
    assets: Vec<AssetRef>,
    frame_count: u32,
}

impl AssetManifest {
    /// The intro's manifest: every critical image, then `frame_count` logo frames.
    pub fn intro(frame_count: u32) -> OdysseyResult<Self> {
        Self::new(&INTRO_CRITICAL_ASSETS, INTRO_FRAME_DIR, frame_count)
    }

    /// Critical images followed by `frame_dir/1.webp ..= frame_dir/{frame_count}.webp`.
    pub fn new<S: AsRef<str>>(
        critical: &[S],
        frame_dir: &str,
        frame_count: u32,
    ) -> OdysseyResult<Self> {
        let mut assets = Vec::with_capacity(critical.len() + frame_count as usize);
        let mut seen = HashSet::new();

        let mut push = |raw: &str, role: AssetRole| -> OdysseyResult<()> {
            let path = normalize_rel_path(raw)?;
            if !seen.insert(path.clone()) {
                return Err(OdysseyError::validation(format!(
                    "duplicate manifest entry '{path}'"
                )));
            }
            let kind = kind_for_path(&path);
            assets.push(AssetRef {
                index: assets.len(),
                id: AssetId::for_path(kind, &path),
                path,
                kind,
                role,
            });
            Ok(())
        };

        for c in critical {
            push(c.as_ref(), AssetRole::Critical)?;
        }
        for n in 1..=frame_count {
            push(&format!("{frame_dir}/{n}.webp"), AssetRole::Frame(n))?;
        }

        if assets.is_empty() {
            return Err(OdysseyError::validation("asset manifest must not be empty"));
        }
        Ok(Self {
            assets,
            frame_count,
        })
    }

    /// Total number of resources (the barrier's N).
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Always false for a constructed manifest.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Number of logo frames.
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Entries in load order.
    pub fn iter(&self) -> impl Iterator<Item = &AssetRef> {
        self.assets.iter()
    }

    /// Entries as a slice.
    pub fn assets(&self) -> &[AssetRef] {
        &self.assets
    }

    /// Entry at `index`.
    pub fn get(&self, index: usize) -> Option<&AssetRef> {
        self.assets.get(index)
    }

    /// Path of 1-based logo frame `n`.
    pub fn frame_path(&self, n: u32) -> Option<&str> {
        self.assets
            .iter()
            .find(|a| a.role == AssetRole::Frame(n))
            .map(|a| a.path.as_str())
    }
}

fn kind_for_path(path: &str) -> AssetKind {
    let is_svg = path
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("svg"));
    if is_svg {
        AssetKind::Svg
    } else {
        AssetKind::Raster
    }
}

/// Normalize and validate manifest-relative asset paths.
///
/// A single leading `/` is accepted (site-absolute URLs) and stripped. The result uses `/`
/// separators, drops `.` segments, and rejects parent traversals (`..`).
pub fn normalize_rel_path(source: &str) -> OdysseyResult<String> {
    let s = source.replace('\\', "/");
    let s = s.strip_prefix('/').unwrap_or(&s);
    if s.is_empty() {
        return Err(OdysseyError::validation("asset path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(OdysseyError::validation("asset paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(OdysseyError::validation(
            "asset path must contain a file name",
        ));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/preload/manifest.rs"]
mod tests;
