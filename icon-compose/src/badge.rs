use crate::BuildStatus;
use eyre::WrapErr;
use std::path::{Path, PathBuf};
use xshell::Shell;

/// Target sizes below this use the "mini" status badge artwork.
pub const MINI_BADGE_THRESHOLD: u32 = 24;

/// Placement of a badge on an icon canvas.
///
/// `x` and `y` are measured from the top-left corner, or from the bottom-right
/// corner if `reverse_origin` is set.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BadgeDimensions {
    pub x: u32,
    pub y: u32,
    pub height: u32,
    pub reverse_origin: bool,
}

impl BadgeDimensions {
    pub const fn new(x: u32, y: u32, height: u32) -> Self {
        BadgeDimensions {
            x,
            y,
            height,
            reverse_origin: false,
        }
    }

    pub const fn reversed(self) -> Self {
        BadgeDimensions {
            reverse_origin: true,
            ..self
        }
    }

    pub const fn with_height(self, height: u32) -> Self {
        BadgeDimensions { height, ..self }
    }

    /// Multiplies offsets and height, e.g. to place a badge on a Retina representation.
    pub const fn scaled(self, factor: u32) -> Self {
        BadgeDimensions {
            x: self.x * factor,
            y: self.y * factor,
            height: self.height * factor,
            ..self
        }
    }
}

/// A badge's vector artwork along with where it goes.
#[derive(Debug, Copy, Clone)]
pub struct BadgeDescriptor<'a> {
    pub svg: &'a [u8],
    pub dimensions: BadgeDimensions,
}

impl<'a> BadgeDescriptor<'a> {
    pub fn new(svg: &'a [u8], dimensions: BadgeDimensions) -> Self {
        BadgeDescriptor { svg, dimensions }
    }

    pub fn with_dimensions(self, dimensions: BadgeDimensions) -> Self {
        BadgeDescriptor { dimensions, ..self }
    }
}

const STATUS_BADGE_DIMENSIONS: &[(u32, BadgeDimensions)] = &[
    (1024, BadgeDimensions::new(0, 10, 186)),
    (512, BadgeDimensions::new(0, 0, 98)),
    (256, BadgeDimensions::new(0, 0, 64)),
    (192, BadgeDimensions::new(0, 0, 48)),
    (144, BadgeDimensions::new(0, 0, 48)),
    (128, BadgeDimensions::new(0, 0, 32)),
    (96, BadgeDimensions::new(0, 0, 24)),
    (72, BadgeDimensions::new(0, 0, 24)),
    (64, BadgeDimensions::new(0, 0, 16)),
    (48, BadgeDimensions::new(0, 0, 12)),
    (32, BadgeDimensions::new(0, 0, 8)),
    (24, BadgeDimensions::new(0, 0, 6)),
    (22, BadgeDimensions::new(0, 0, 8)),
    (16, BadgeDimensions::new(0, 0, 6)),
];

#[derive(Debug, thiserror::Error)]
#[error("no status badge placement for {0}px icons")]
pub struct UnknownBadgeSize(pub u32);

/// Looks up the status badge placement for an icon of the given pixel size.
pub fn status_badge_dimensions(size: u32) -> Result<BadgeDimensions, UnknownBadgeSize> {
    STATUS_BADGE_DIMENSIONS
        .iter()
        .find(|(s, _)| *s == size)
        .map(|(_, dimensions)| *dimensions)
        .ok_or(UnknownBadgeSize(size))
}

/// Where the badge artwork and the macOS template live.
#[derive(Debug, Clone)]
pub struct IconSources {
    pub master_icon: PathBuf,
    pub components_dir: PathBuf,
}

impl IconSources {
    pub fn new(master_icon: impl Into<PathBuf>, components_dir: impl Into<PathBuf>) -> Self {
        IconSources {
            master_icon: master_icon.into(),
            components_dir: components_dir.into(),
        }
    }

    pub fn badges_dir(&self) -> PathBuf {
        self.components_dir.join("icon_badges")
    }

    pub fn macos_template(&self) -> PathBuf {
        self.components_dir.join("macos").join("Blazium.icns")
    }

    pub fn master_svg(&self, sh: &Shell) -> eyre::Result<Vec<u8>> {
        read_svg(sh, &self.master_icon)
    }

    /// Loads the status badge artwork, or nothing for stable builds.
    pub fn status_badges(
        &self,
        sh: &Shell,
        status: BuildStatus,
    ) -> eyre::Result<Option<StatusBadges>> {
        if !status.is_unstable() {
            return Ok(None);
        }
        let dir = self.badges_dir();
        Ok(Some(StatusBadges {
            full: read_svg(sh, dir.join(format!("status_{}.svg", status)))?,
            mini: read_svg(sh, dir.join(format!("status_{}_mini.svg", status)))?,
        }))
    }

    pub fn console_badge(&self, sh: &Shell) -> eyre::Result<Vec<u8>> {
        read_svg(sh, self.badges_dir().join("console.svg"))
    }
}

fn read_svg(sh: &Shell, path: impl AsRef<Path>) -> eyre::Result<Vec<u8>> {
    let path = path.as_ref();
    sh.read_binary_file(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))
}

/// Full and mini artwork of one build status badge.
#[derive(Debug, Clone)]
pub struct StatusBadges {
    pub full: Vec<u8>,
    pub mini: Vec<u8>,
}

impl StatusBadges {
    /// Picks the artwork variant legible at `size` pixels.
    pub fn artwork_for(&self, size: u32) -> &[u8] {
        if size < MINI_BADGE_THRESHOLD {
            &self.mini
        } else {
            &self.full
        }
    }

    /// The status badge for a square icon of `size` pixels, placed per the geometry table.
    pub fn for_size(&self, size: u32) -> Result<BadgeDescriptor<'_>, UnknownBadgeSize> {
        Ok(BadgeDescriptor::new(
            self.artwork_for(size),
            status_badge_dimensions(size)?,
        ))
    }
}
