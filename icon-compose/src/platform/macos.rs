//! Badges the representations of a template `.icns` icon family.
//!
//! The template's artwork follows the macOS icon grid, so it is used instead of the
//! shared master SVG.

use crate::{
    argb,
    badge::{status_badge_dimensions, BadgeDescriptor, IconSources, StatusBadges, UnknownBadgeSize},
    compose::assemble_icon,
    platform::{encode_png, write_file},
    BuildStatus,
};
use eyre::WrapErr;
use icns::IconFamily;
use image::{ImageFormat, RgbaImage};
use std::path::Path;
use xshell::Shell;

const PNG_MAGIC: &[u8; 8] = b"\x89PNG\r\n\x1a\n";
const TABLE_OF_CONTENTS: [u8; 4] = *b"TOC ";
/// Element header: ostype plus big-endian total length.
const ELEMENT_HEADER_LENGTH: usize = 8;

/// An icon representation: its size in points and how many pixels per point it uses.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Representation {
    pub size: u32,
    pub density: u32,
}

impl Representation {
    const fn new(size: u32, density: u32) -> Self {
        Representation { size, density }
    }

    pub fn from_ostype(ostype: &[u8; 4]) -> Option<Representation> {
        let representation = match ostype {
            b"icp4" | b"ic04" => Representation::new(16, 1),
            b"icp5" | b"ic05" => Representation::new(32, 1),
            b"icp6" => Representation::new(64, 1),
            b"ic07" => Representation::new(128, 1),
            b"ic08" => Representation::new(256, 1),
            b"ic09" => Representation::new(512, 1),
            b"icsb" => Representation::new(18, 1),
            b"sb24" => Representation::new(24, 1),
            b"ic11" => Representation::new(16, 2),
            b"ic12" => Representation::new(32, 2),
            b"ic13" => Representation::new(128, 2),
            b"ic14" => Representation::new(256, 2),
            b"ic10" => Representation::new(512, 2),
            b"icsB" => Representation::new(18, 2),
            b"SB24" => Representation::new(24, 2),
            _ => return None,
        };
        Some(representation)
    }

    pub fn pixel_size(&self) -> u32 {
        self.size * self.density
    }

    /// The status badge, placed for the nominal size and scaled up for Retina pixels.
    pub fn status_badge<'a>(
        &self,
        badges: &'a StatusBadges,
    ) -> Result<BadgeDescriptor<'a>, UnknownBadgeSize> {
        Ok(BadgeDescriptor::new(
            badges.artwork_for(self.size),
            status_badge_dimensions(self.size)?.scaled(self.density),
        ))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Encoding {
    Png,
    Argb,
}

impl Encoding {
    fn detect(data: &[u8]) -> Option<Encoding> {
        if data.starts_with(PNG_MAGIC) {
            Some(Encoding::Png)
        } else if argb::is_argb(data) {
            Some(Encoding::Argb)
        } else {
            None
        }
    }

    fn decode(&self, data: &[u8], representation: &Representation) -> eyre::Result<RgbaImage> {
        Ok(match self {
            Encoding::Png => image::load_from_memory_with_format(data, ImageFormat::Png)?.into_rgba8(),
            Encoding::Argb => {
                let size = representation.pixel_size();
                argb::decode(data, size, size)?
            }
        })
    }

    fn encode(&self, image: &RgbaImage) -> eyre::Result<Vec<u8>> {
        match self {
            Encoding::Png => encode_png(image),
            Encoding::Argb => Ok(argb::encode(image)),
        }
    }
}

/// Re-renders every PNG and ARGB representation with the status badge, if any.
///
/// Other elements (JPEG 2000, legacy RLE, ...) are kept as they are. A table of contents
/// is rebuilt afterwards so its lengths match the re-encoded elements.
pub fn badge_icon_family(
    family: &mut IconFamily,
    status_badges: Option<&StatusBadges>,
) -> eyre::Result<()> {
    for element in &mut family.elements {
        let ostype = element.ostype.0;
        let name = String::from_utf8_lossy(&ostype).into_owned();
        let (Some(representation), Some(encoding)) = (
            Representation::from_ostype(&ostype),
            Encoding::detect(&element.data),
        ) else {
            tracing::debug!(element = %name, "keeping unsupported icns element");
            continue;
        };

        let image = encoding
            .decode(&element.data, &representation)
            .wrap_err_with(|| format!("failed to decode icns element {}", name))?;
        let badges = match status_badges {
            Some(status_badges) => vec![representation.status_badge(status_badges)?],
            None => vec![],
        };
        let icon = assemble_icon(&image, &badges)?;
        element.data = encoding.encode(&icon)?;
    }
    rebuild_table_of_contents(family)
}

/// Rewrites the `TOC ` element in place from the lengths of the other elements.
fn rebuild_table_of_contents(family: &mut IconFamily) -> eyre::Result<()> {
    let Some(position) = family
        .elements
        .iter()
        .position(|element| element.ostype.0 == TABLE_OF_CONTENTS)
    else {
        return Ok(());
    };

    let mut entries = Vec::new();
    for element in &family.elements {
        if element.ostype.0 == TABLE_OF_CONTENTS {
            continue;
        }
        let length = u32::try_from(element.data.len() + ELEMENT_HEADER_LENGTH).wrap_err_with(
            || {
                format!(
                    "icns element {} is too large",
                    String::from_utf8_lossy(&element.ostype.0)
                )
            },
        )?;
        entries.extend_from_slice(&element.ostype.0);
        entries.extend_from_slice(&length.to_be_bytes());
    }

    // A template with several tables of contents only keeps the first.
    let mut index = 0;
    family.elements.retain(|element| {
        let keep = element.ostype.0 != TABLE_OF_CONTENTS || index == position;
        index += 1;
        keep
    });
    family.elements[position].data = entries;
    Ok(())
}

/// Writes `Blazium_<status>.icns` into `out_dir`.
pub fn compose_macos_icons(
    sh: &Shell,
    sources: &IconSources,
    status: BuildStatus,
    out_dir: &Path,
) -> eyre::Result<()> {
    let template_path = sources.macos_template();
    let template = sh
        .read_binary_file(&template_path)
        .wrap_err_with(|| format!("failed to read {}", template_path.display()))?;
    let mut family = IconFamily::read(template.as_slice())
        .wrap_err_with(|| format!("invalid icns file {}", template_path.display()))?;

    let status_badges = sources.status_badges(sh, status)?;
    badge_icon_family(&mut family, status_badges.as_ref())?;

    let mut icns = Vec::new();
    family.write(&mut icns)?;
    write_file(sh, &out_dir.join(format!("Blazium_{}.icns", status)), icns)
}
