use std::io::Cursor;

use super::*;
use crate::preload::manifest::AssetManifest;

fn temp_root(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "odyssey_loader_{tag}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_png(path: &Path) {
    let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, buf).unwrap();
}

#[test]
fn fs_loader_reads_rasters_and_svgs() {
    let root = temp_root("ok");
    write_png(&root.join("img/a.png"));
    std::fs::write(
        root.join("logo.svg"),
        br#"<svg xmlns="http://www.w3.org/2000/svg" width="8" height="4"></svg>"#,
    )
    .unwrap();

    let manifest = AssetManifest::new(&["img/a.png", "logo.svg"], "frames", 0).unwrap();
    let loader = FsAssetLoader::new(&root);
    assert_eq!(loader.root(), root.as_path());

    let png = loader.load(manifest.get(0).unwrap()).unwrap();
    assert!(matches!(png, PreparedAsset::Image(_)));
    assert_eq!(png.size(), (3.0, 2.0));

    let svg = loader.load(manifest.get(1).unwrap()).unwrap();
    assert!(matches!(svg, PreparedAsset::Svg(_)));
    assert_eq!(svg.size(), (8.0, 4.0));

    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn missing_file_error_names_the_path() {
    let root = temp_root("missing");
    let manifest = AssetManifest::new(&["nope.webp"], "frames", 0).unwrap();
    let err = FsAssetLoader::new(&root)
        .load(manifest.get(0).unwrap())
        .unwrap_err();
    assert!(err.to_string().contains("nope.webp"));
    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn cache_lookups_by_id_and_path() {
    let manifest = AssetManifest::new(&["a.png", "b.png"], "frames", 0).unwrap();
    let a = manifest.get(0).unwrap();
    let mut cache = AssetCache::new();
    assert!(cache.is_empty());

    cache.insert(
        a,
        PreparedAsset::Image(PreparedImage {
            width: 1,
            height: 1,
            rgba8_premul: Arc::new(vec![0; 4]),
        }),
    );
    assert_eq!(cache.len(), 1);
    assert!(cache.get(a.id).is_some());
    assert!(cache.get_path("a.png").is_some());
    assert_eq!(cache.id_for_path("a.png").unwrap(), a.id);
    assert!(cache.get_path("b.png").is_none());
    assert!(cache.id_for_path("b.png").is_err());
}
