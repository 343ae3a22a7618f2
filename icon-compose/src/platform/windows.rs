use crate::{
    badge::{BadgeDescriptor, BadgeDimensions, IconSources, UnknownBadgeSize},
    compose::compose_icon,
    platform::write_file,
    BuildStatus,
};
use eyre::WrapErr;
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use std::path::Path;
use xshell::Shell;

/// Sizes embedded in the `.ico`; 512 and 1024 are left out to keep the file small.
pub const SIZES: [u32; 6] = [256, 128, 64, 48, 32, 16];

const CONSOLE_BADGE_DIMENSIONS: &[(u32, BadgeDimensions)] = &[
    (256, BadgeDimensions::new(10, 10, 80).reversed()),
    (128, BadgeDimensions::new(10, 10, 40).reversed()),
    (64, BadgeDimensions::new(0, 0, 24).reversed()),
    (48, BadgeDimensions::new(0, 0, 17).reversed()),
    (32, BadgeDimensions::new(0, 0, 13).reversed()),
    (16, BadgeDimensions::new(0, 0, 8).reversed()),
];

/// Placement of the console badge, anchored to the bottom-right corner.
pub fn console_badge_dimensions(size: u32) -> Result<BadgeDimensions, UnknownBadgeSize> {
    CONSOLE_BADGE_DIMENSIONS
        .iter()
        .find(|(s, _)| *s == size)
        .map(|(_, dimensions)| *dimensions)
        .ok_or(UnknownBadgeSize(size))
}

/// Writes the multi-resolution `.ico` for `status`, optionally marked as the console executable.
pub fn compose_windows_icon(
    sh: &Shell,
    sources: &IconSources,
    status: BuildStatus,
    console: bool,
    out: &Path,
) -> eyre::Result<()> {
    let master = sources.master_svg(sh)?;
    let status_badges = sources.status_badges(sh, status)?;
    let console_badge = if console {
        Some(sources.console_badge(sh)?)
    } else {
        None
    };

    let mut icon_dir = IconDir::new(ResourceType::Icon);
    for size in SIZES {
        let mut badges = Vec::new();
        if let Some(status_badges) = &status_badges {
            badges.push(status_badges.for_size(size)?);
        }
        if let Some(console_badge) = &console_badge {
            badges.push(BadgeDescriptor::new(
                console_badge,
                console_badge_dimensions(size)?,
            ));
        }

        let icon = compose_icon(&master, size, &badges)?;
        let (width, height) = icon.dimensions();
        let entry = IconDirEntry::encode(&IconImage::from_rgba_data(width, height, icon.into_raw()))
            .wrap_err_with(|| format!("failed to encode {}px icon", size))?;
        icon_dir.add_entry(entry);
    }

    let mut ico = Vec::new();
    icon_dir.write(&mut ico)?;
    write_file(sh, out, ico)
}
