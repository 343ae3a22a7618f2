use crate::{
    badge::{status_badge_dimensions, BadgeDimensions, IconSources},
    compose::compose_icon,
    platform::{write_file, write_png},
    raster::{scaled_width, svg_size},
    BuildStatus,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use std::{fmt::Write, path::Path};
use xshell::Shell;

pub const SIZES: [u32; 10] = [256, 192, 128, 96, 64, 48, 32, 24, 22, 16];

/// Geometry table entry used for the scalable variant.
const SVG_BADGE_SIZE: u32 = 1024;

/// Builds an SVG document of the master's size drawing the master and, optionally, a
/// badge on top. Both stay vector artwork.
pub fn badged_svg(master: &[u8], badge: Option<(&[u8], BadgeDimensions)>) -> eyre::Result<String> {
    let (width, height) = svg_size(master)?;

    let mut svg = String::new();
    writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = width,
        h = height
    )?;
    write_image(&mut svg, master, 0, 0, width, height)?;
    if let Some((badge, dimensions)) = badge {
        let (badge_width, badge_height) = svg_size(badge)?;
        let width = scaled_width(badge_width, badge_height, dimensions.height);
        write_image(
            &mut svg,
            badge,
            dimensions.x,
            dimensions.y,
            width as f32,
            dimensions.height as f32,
        )?;
    }
    writeln!(svg, "</svg>")?;
    Ok(svg)
}

fn write_image(
    svg: &mut String,
    data: &[u8],
    x: u32,
    y: u32,
    width: f32,
    height: f32,
) -> std::fmt::Result {
    writeln!(
        svg,
        r#"  <image x="{}" y="{}" width="{}" height="{}" xlink:href="data:image/svg+xml;base64,{}"/>"#,
        x,
        y,
        width,
        height,
        STANDARD.encode(data)
    )
}

/// Writes the scalable `blazium_<status>.svg` and the fixed-size PNGs into `out_dir`.
pub fn compose_linux_icons(
    sh: &Shell,
    sources: &IconSources,
    status: BuildStatus,
    out_dir: &Path,
) -> eyre::Result<()> {
    let master = sources.master_svg(sh)?;
    let status_badges = sources.status_badges(sh, status)?;

    let svg_badge = match &status_badges {
        Some(badges) => Some((
            badges.full.as_slice(),
            status_badge_dimensions(SVG_BADGE_SIZE)?,
        )),
        None => None,
    };
    write_file(
        sh,
        &out_dir.join(format!("blazium_{}.svg", status)),
        badged_svg(&master, svg_badge)?,
    )?;

    for size in SIZES {
        let badges = match &status_badges {
            Some(badges) => vec![badges.for_size(size)?],
            None => vec![],
        };
        let icon = compose_icon(&master, size, &badges)?;
        write_png(
            sh,
            &out_dir.join(format!("blazium_{}_{}px.png", status, size)),
            &icon,
        )?;
    }

    Ok(())
}
