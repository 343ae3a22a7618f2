use crate::{
    badge::{BadgeDescriptor, BadgeDimensions},
    raster::rasterize_svg,
};
use eyre::WrapErr;
use image::{imageops, RgbaImage};

/// Top-left position of a `badge_size` badge on a `canvas_size` canvas.
pub fn badge_position(
    canvas_size: (u32, u32),
    badge_size: (u32, u32),
    dimensions: &BadgeDimensions,
) -> (i64, i64) {
    let (x, y) = (i64::from(dimensions.x), i64::from(dimensions.y));
    if dimensions.reverse_origin {
        (
            i64::from(canvas_size.0) - i64::from(badge_size.0) - x,
            i64::from(canvas_size.1) - i64::from(badge_size.1) - y,
        )
    } else {
        (x, y)
    }
}

/// Alpha-blends each badge onto a copy of `base`, in order.
pub fn assemble_icon(base: &RgbaImage, badges: &[BadgeDescriptor]) -> eyre::Result<RgbaImage> {
    let mut icon = base.clone();
    for badge in badges {
        let badge_image = rasterize_svg(badge.svg, badge.dimensions.height)
            .wrap_err_with(|| format!("failed to render {}px badge", badge.dimensions.height))?;
        let (x, y) = badge_position(
            icon.dimensions(),
            badge_image.dimensions(),
            &badge.dimensions,
        );
        imageops::overlay(&mut icon, &badge_image, x, y);
    }
    Ok(icon)
}

/// Rasterizes the master SVG at `size` pixels and applies the badges.
pub fn compose_icon(svg: &[u8], size: u32, badges: &[BadgeDescriptor]) -> eyre::Result<RgbaImage> {
    let base = rasterize_svg(svg, size)
        .wrap_err_with(|| format!("failed to render {}px icon", size))?;
    assemble_icon(&base, badges)
}
