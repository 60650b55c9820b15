use std::io::Cursor;

use super::*;

fn png_bytes(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba(rgba));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn raster_is_premultiplied() {
    let prepared = decode_image(&png_bytes(2, 1, [100, 50, 200, 128])).unwrap();
    assert_eq!((prepared.width, prepared.height), (2, 1));
    let expected = [
        ((100u16 * 128 + 127) / 255) as u8,
        ((50u16 * 128 + 127) / 255) as u8,
        ((200u16 * 128 + 127) / 255) as u8,
        128u8,
    ];
    assert_eq!(&prepared.rgba8_premul[..4], &expected);
    assert_eq!(&prepared.rgba8_premul[4..], &expected);
}

#[test]
fn transparent_pixels_clear_color() {
    let prepared = decode_image(&png_bytes(1, 1, [255, 255, 255, 0])).unwrap();
    assert_eq!(prepared.rgba8_premul.as_slice(), &[0, 0, 0, 0]);
}

#[test]
fn garbage_bytes_fail_to_decode() {
    assert!(decode_image(b"not an image").is_err());
}

#[test]
fn svg_reports_intrinsic_size() {
    let ok = br#"<svg xmlns="http://www.w3.org/2000/svg" width="120" height="40"></svg>"#;
    let svg = parse_svg(ok, None).unwrap();
    assert_eq!((svg.width, svg.height), (120.0, 40.0));

    assert!(parse_svg(br#"<svg"#, None).is_err());
}
