//! Legacy and adaptive launcher icons for the Android `mipmap-*` resource directories.

use crate::{
    badge::{BadgeDescriptor, IconSources},
    compose::compose_icon,
    platform::write_png,
    BuildStatus,
};
use eyre::{eyre, WrapErr};
use image::{imageops, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::Path;
use xshell::Shell;

const FOREGROUND_SIZE: u32 = 108;
const FOREGROUND_CONTENT_SIZE: u32 = 66;
const MONOCHROME_THRESHOLD: u8 = 128;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Density {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl Density {
    pub const ALL: [Density; 5] = [
        Density::Mdpi,
        Density::Hdpi,
        Density::Xhdpi,
        Density::Xxhdpi,
        Density::Xxxhdpi,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Density::Mdpi => "mdpi",
            Density::Hdpi => "hdpi",
            Density::Xhdpi => "xhdpi",
            Density::Xxhdpi => "xxhdpi",
            Density::Xxxhdpi => "xxxhdpi",
        }
    }

    /// Size of the legacy square icon.
    pub fn icon_size(&self) -> u32 {
        match self {
            Density::Mdpi => 48,
            Density::Hdpi => 64,
            Density::Xhdpi => 96,
            Density::Xxhdpi => 128,
            Density::Xxxhdpi => 192,
        }
    }

    /// Scale relative to mdpi, in halves.
    fn half_multiplier(&self) -> u32 {
        match self {
            Density::Mdpi => 2,
            Density::Hdpi => 3,
            Density::Xhdpi => 4,
            Density::Xxhdpi => 6,
            Density::Xxxhdpi => 8,
        }
    }

    fn scale(&self, mdpi_size: u32) -> u32 {
        mdpi_size * self.half_multiplier() / 2
    }

    pub fn directory_name(&self) -> String {
        format!("mipmap-{}", self.name())
    }
}

#[derive(Debug, Clone)]
pub struct AndroidIconSpec<'a> {
    pub density: Density,
    pub icon_size: u32,
    pub foreground_size: u32,
    pub foreground_content_size: u32,
    pub badges: Vec<BadgeDescriptor<'a>>,
}

impl<'a> AndroidIconSpec<'a> {
    pub fn new(density: Density, badges: Vec<BadgeDescriptor<'a>>) -> Self {
        AndroidIconSpec {
            density,
            icon_size: density.icon_size(),
            foreground_size: density.scale(FOREGROUND_SIZE),
            foreground_content_size: density.scale(FOREGROUND_CONTENT_SIZE),
            badges,
        }
    }

    /// Badges resized for the icon content drawn on the foreground layer.
    pub fn foreground_badges(&self) -> Vec<BadgeDescriptor<'a>> {
        self.badges
            .iter()
            .map(|badge| {
                let height = (f64::from(badge.dimensions.height)
                    * f64::from(self.foreground_content_size)
                    / f64::from(self.icon_size))
                .round() as u32;
                badge.with_dimensions(badge.dimensions.with_height(height))
            })
            .collect()
    }

    pub fn foreground_margin(&self) -> u32 {
        (self.foreground_size - self.foreground_content_size) / 2
    }
}

/// Centers the icon content on a transparent foreground canvas.
pub fn foreground_layer(content: &RgbaImage, foreground_size: u32) -> RgbaImage {
    let margin = (foreground_size - content.height()) / 2;
    let mut foreground = RgbaImage::new(foreground_size, foreground_size);
    imageops::replace(&mut foreground, content, i64::from(margin), i64::from(margin));
    foreground
}

pub fn background_layer(color: Rgb<u8>, size: u32) -> RgbImage {
    RgbImage::from_pixel(size, size, color)
}

/// White silhouette of the foreground: light pixels drop out, everything else keeps its alpha.
pub fn monochrome_layer(foreground: &RgbaImage) -> RgbaImage {
    let mut monochrome = foreground.clone();
    for pixel in monochrome.pixels_mut() {
        let Rgba([r, g, b, a]) = *pixel;
        let light = [r, g, b].into_iter().all(|c| c > MONOCHROME_THRESHOLD);
        *pixel = Rgba([255, 255, 255, if light { 0 } else { a }]);
    }
    monochrome
}

/// Parses a `#rrggbb` colour.
pub fn parse_hex_color(s: &str) -> eyre::Result<Rgb<u8>> {
    let hex = s
        .strip_prefix('#')
        .filter(|hex| hex.len() == 6 && hex.is_ascii())
        .ok_or_else(|| eyre!("invalid colour '{}', expected #rrggbb", s))?;
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .wrap_err_with(|| format!("invalid colour '{}'", s))
    };
    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

/// Writes every density bucket under `out_dir`, then mirrors mdpi into the plain `mipmap` directory.
pub fn compose_android_icons(
    sh: &Shell,
    sources: &IconSources,
    status: BuildStatus,
    background_color: Rgb<u8>,
    out_dir: &Path,
) -> eyre::Result<()> {
    let master = sources.master_svg(sh)?;
    let status_badges = sources.status_badges(sh, status)?;

    for density in Density::ALL {
        let mut badges = Vec::new();
        if let Some(status_badges) = &status_badges {
            badges.push(status_badges.for_size(density.icon_size())?);
        }
        let spec = AndroidIconSpec::new(density, badges);
        let dir = out_dir.join(density.directory_name());
        sh.create_dir(&dir)?;

        let icon = compose_icon(&master, spec.icon_size, &spec.badges)?;
        write_png(sh, &dir.join("icon.png"), &icon)?;

        let content = compose_icon(
            &master,
            spec.foreground_content_size,
            &spec.foreground_badges(),
        )?;
        let foreground = foreground_layer(&content, spec.foreground_size);
        write_png(sh, &dir.join("icon_foreground.png"), &foreground)?;

        let background = background_layer(background_color, spec.foreground_size);
        write_png(sh, &dir.join("icon_background.png"), &background)?;

        write_png(
            sh,
            &dir.join("icon_monochrome.png"),
            &monochrome_layer(&foreground),
        )?;
    }

    let mdpi_dir = out_dir.join(Density::Mdpi.directory_name());
    let legacy_dir = sh.create_dir(out_dir.join("mipmap"))?;
    for file in sh.read_dir(&mdpi_dir)? {
        if let Some(name) = file.file_name() {
            sh.copy_file(&file, legacy_dir.join(name))?;
        }
    }

    Ok(())
}
