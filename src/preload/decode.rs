use std::{path::Path, sync::Arc};

use anyhow::Context;

use crate::{
    foundation::error::OdysseyResult,
    preload::loader::{PreparedImage, PreparedSvg},
};

/// Decode an encoded bitmap (webp, png, ...) into premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> OdysseyResult<PreparedImage> {
    let rgba = image::load_from_memory(bytes)
        .context("decode raster asset")?
        .to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut pixels = rgba.into_raw();
    premultiply(&mut pixels);

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(pixels),
    })
}

/// Parse an SVG document. Relative `href`s resolve against `resources_dir` when given.
pub fn parse_svg(bytes: &[u8], resources_dir: Option<&Path>) -> OdysseyResult<PreparedSvg> {
    let opts = usvg::Options {
        resources_dir: resources_dir.map(Path::to_path_buf),
        ..Default::default()
    };
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg asset")?;
    let size = tree.size();
    Ok(PreparedSvg {
        width: size.width(),
        height: size.height(),
        tree: Arc::new(tree),
    })
}

fn premultiply(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * a + 127) / 255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/preload/decode.rs"]
mod tests;
