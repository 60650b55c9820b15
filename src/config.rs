use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{
    animation::sequence::PingPong,
    animation::spring::SpringConfig,
    foundation::error::{OdysseyError, OdysseyResult},
    preload::manifest::AssetManifest,
};

/// Logo frame sequence settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogoConfig {
    /// Number of numbered frames (`1.webp ..= N.webp`).
    pub frame_count: u32,
    /// One forward-then-reverse sweep, in milliseconds.
    pub cycle_ms: u64,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            frame_count: 39,
            cycle_ms: 2000,
        }
    }
}

/// Runtime settings of the intro. Every field has a default, so `{}` is a valid document.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntroConfig {
    /// Wait between progress 100 and the gate opening.
    pub settle_delay_ms: u64,
    /// Viewport width below which the narrow layout applies.
    pub mobile_breakpoint_px: f64,
    /// Pointer smoothing spring.
    pub pointer_spring: SpringConfig,
    /// Logo frame sequence.
    pub logo: LogoConfig,
    /// Directory that manifest paths are resolved against.
    pub asset_root: PathBuf,
    /// Preload worker count (`None` for the pool default).
    pub load_threads: Option<usize>,
    /// Mount the water-distortion renderer in the shore panel.
    pub distortion_enabled: bool,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 500,
            mobile_breakpoint_px: 768.0,
            pointer_spring: SpringConfig::default(),
            logo: LogoConfig::default(),
            asset_root: PathBuf::from("public"),
            load_threads: None,
            distortion_enabled: false,
        }
    }
}

impl IntroConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> OdysseyResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| OdysseyError::serde(format!("parse intro config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> OdysseyResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| OdysseyError::serde(format!("parse intro config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> OdysseyResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            OdysseyError::config(format!("open intro config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> OdysseyResult<()> {
        if !self.mobile_breakpoint_px.is_finite() || self.mobile_breakpoint_px <= 0.0 {
            return Err(OdysseyError::config(
                "mobile_breakpoint_px must be finite and > 0",
            ));
        }
        if self.logo.frame_count == 0 {
            return Err(OdysseyError::config("logo.frame_count must be >= 1"));
        }
        if self.logo.cycle_ms == 0 {
            return Err(OdysseyError::config("logo.cycle_ms must be > 0"));
        }
        if self.load_threads == Some(0) {
            return Err(OdysseyError::config("load_threads must be >= 1 when set"));
        }
        self.pointer_spring
            .validate()
            .map_err(|e| OdysseyError::config(format!("pointer_spring: {e}")))
    }

    /// Settle delay as a duration.
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Logo frame sequence.
    pub fn logo_sequence(&self) -> OdysseyResult<PingPong> {
        PingPong::new(
            self.logo.frame_count,
            Duration::from_millis(self.logo.cycle_ms),
        )
    }

    /// Preload manifest for the configured frame count.
    pub fn manifest(&self) -> OdysseyResult<AssetManifest> {
        AssetManifest::intro(self.logo.frame_count)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
