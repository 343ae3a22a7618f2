//! SVG rasterization through resvg.

use eyre::{eyre, WrapErr};
use image::{Rgba, RgbaImage};
use resvg::{tiny_skia, usvg};

pub fn parse_svg(svg: &[u8]) -> eyre::Result<usvg::Tree> {
    usvg::Tree::from_data(svg, &usvg::Options::default()).wrap_err("failed to parse SVG")
}

/// Intrinsic width and height of an SVG document.
pub fn svg_size(svg: &[u8]) -> eyre::Result<(f32, f32)> {
    let size = parse_svg(svg)?.size();
    Ok((size.width(), size.height()))
}

/// Width of an SVG scaled to `height`, keeping its aspect ratio.
pub fn scaled_width(svg_width: f32, svg_height: f32, height: u32) -> u32 {
    ((svg_width * height as f32 / svg_height).round() as u32).max(1)
}

/// Renders an SVG at the given pixel height, width following the aspect ratio.
pub fn rasterize_svg(svg: &[u8], height: u32) -> eyre::Result<RgbaImage> {
    let tree = parse_svg(svg)?;
    let size = tree.size();
    let width = scaled_width(size.width(), size.height(), height);
    let scale = height as f32 / size.height();

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| eyre!("failed to create {}x{} pixmap", width, height))?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    Ok(pixmap_to_image(&pixmap))
}

fn pixmap_to_image(pixmap: &tiny_skia::Pixmap) -> RgbaImage {
    let mut image = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
        let color = src.demultiply();
        *dst = Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
    }
    image
}
