use blazium_build_scripts::{config::Config, generate_icons};
use icns::{IconElement, IconFamily, OSType};
use icon_compose::{argb, BuildStatus};
use image::{ImageFormat, Rgba, RgbaImage};
use std::{
    io::Cursor,
    path::{Path, PathBuf},
};
use xshell::Shell;

pub const MASTER: Rgba<u8> = Rgba([128, 128, 128, 255]);
pub const TEMPLATE: Rgba<u8> = Rgba([64, 64, 64, 255]);
pub const CONSOLE: Rgba<u8> = Rgba([0, 0, 255, 255]);
pub const TEMPLATE_INFO: &[u8] = b"template info";

pub fn status_color(status: BuildStatus) -> Rgba<u8> {
    match status {
        BuildStatus::Dev => Rgba([255, 0, 0, 255]),
        BuildStatus::Nightly => Rgba([255, 255, 0, 255]),
        BuildStatus::Pr => Rgba([255, 0, 255, 255]),
        BuildStatus::Release => MASTER,
    }
}

pub fn mini_status_color(status: BuildStatus) -> Rgba<u8> {
    match status {
        BuildStatus::Dev => Rgba([0, 255, 0, 255]),
        BuildStatus::Nightly => Rgba([0, 255, 255, 255]),
        BuildStatus::Pr => Rgba([0, 128, 0, 255]),
        BuildStatus::Release => MASTER,
    }
}

/// Expected colour of the top-left pixel of a `size` icon.
pub fn badge_color(status: BuildStatus, size: u32) -> Rgba<u8> {
    if size < 24 {
        mini_status_color(status)
    } else {
        status_color(status)
    }
}

pub fn solid_svg(width: u32, height: u32, color: Rgba<u8>) -> String {
    let Rgba([r, g, b, _]) = color;
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><rect width="{w}" height="{h}" fill="#{r:02x}{g:02x}{b:02x}"/></svg>"##,
        w = width,
        h = height,
        r = r,
        g = g,
        b = b
    )
}

pub fn encode_png(image: &RgbaImage) -> Vec<u8> {
    let mut png = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .unwrap();
    png
}

/// A source tree with a master icon, badge artwork and a macOS template.
pub struct Workdir {
    dir: tempfile::TempDir,
}

impl Workdir {
    pub fn new() -> Self {
        let workdir = Self {
            dir: tempfile::TempDir::new().unwrap(),
        };
        let badges = workdir.path().join("misc/dist/icon_generation/icon_badges");
        std::fs::create_dir_all(&badges).unwrap();
        std::fs::create_dir_all(workdir.path().join("misc/dist/icon_generation/macos")).unwrap();

        workdir.write("icon.svg", solid_svg(16, 16, MASTER));
        for status in [BuildStatus::Dev, BuildStatus::Nightly, BuildStatus::Pr] {
            workdir.write(
                badges.join(format!("status_{}.svg", status)),
                solid_svg(10, 10, status_color(status)),
            );
            workdir.write(
                badges.join(format!("status_{}_mini.svg", status)),
                solid_svg(10, 10, mini_status_color(status)),
            );
        }
        workdir.write(badges.join("console.svg"), solid_svg(10, 10, CONSOLE));
        workdir.write(
            "misc/dist/icon_generation/macos/Blazium.icns",
            template_icns(),
        );
        workdir
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, path: impl AsRef<Path>, contents: impl AsRef<[u8]>) {
        std::fs::write(self.path().join(path), contents).unwrap();
    }

    pub fn remove(&self, path: impl AsRef<Path>) {
        std::fs::remove_file(self.path().join(path)).unwrap();
    }

    pub fn config(&self) -> Config {
        Config::default().resolve(self.path())
    }

    pub fn generate(&self) -> eyre::Result<()> {
        let sh = Shell::new()?;
        generate_icons::run(&sh, &self.config())
    }

    pub fn output(&self, path: impl AsRef<Path>) -> PathBuf {
        self.path().join(path)
    }

    pub fn read_png(&self, path: impl AsRef<Path>) -> RgbaImage {
        image::open(self.output(path)).unwrap().into_rgba8()
    }

    /// Decodes every image of an `.ico`, keyed by width.
    pub fn read_ico(&self, path: impl AsRef<Path>) -> Vec<(u32, RgbaImage)> {
        let file = std::fs::File::open(self.output(path)).unwrap();
        let icon_dir = ico::IconDir::read(file).unwrap();
        icon_dir
            .entries()
            .iter()
            .map(|entry| {
                let image = entry.decode().unwrap();
                let rgba = RgbaImage::from_raw(
                    image.width(),
                    image.height(),
                    image.rgba_data().to_vec(),
                )
                .unwrap();
                (image.width(), rgba)
            })
            .collect()
    }

    pub fn read_icns(&self, path: impl AsRef<Path>) -> IconFamily {
        let file = std::fs::File::open(self.output(path)).unwrap();
        IconFamily::read(file).unwrap()
    }
}

impl Default for Workdir {
    fn default() -> Self {
        Self::new()
    }
}

/// A table of contents, 128px and 256@2x PNG representations, a 16px ARGB one and an
/// opaque `info` element.
fn template_icns() -> Vec<u8> {
    let mut family = IconFamily::new();
    family.elements.push(IconElement::new(
        OSType(*b"ic07"),
        encode_png(&RgbaImage::from_pixel(128, 128, TEMPLATE)),
    ));
    family.elements.push(IconElement::new(
        OSType(*b"ic13"),
        encode_png(&RgbaImage::from_pixel(256, 256, TEMPLATE)),
    ));
    family.elements.push(IconElement::new(
        OSType(*b"ic04"),
        argb::encode(&RgbaImage::from_pixel(16, 16, TEMPLATE)),
    ));
    family
        .elements
        .push(IconElement::new(OSType(*b"info"), TEMPLATE_INFO.to_vec()));
    let toc = family
        .elements
        .iter()
        .flat_map(|element| {
            let length = element.data.len() as u32 + 8;
            element.ostype.0.into_iter().chain(length.to_be_bytes())
        })
        .collect();
    family
        .elements
        .insert(0, IconElement::new(OSType(*b"TOC "), toc));

    let mut icns = Vec::new();
    family.write(&mut icns).unwrap();
    icns
}

pub fn element<'a>(family: &'a IconFamily, ostype: &[u8; 4]) -> &'a IconElement {
    family
        .elements
        .iter()
        .find(|element| &element.ostype.0 == ostype)
        .unwrap()
}

/// `(ostype, element length)` entries of the `TOC ` element.
pub fn table_of_contents(family: &IconFamily) -> Vec<([u8; 4], u32)> {
    element(family, b"TOC ")
        .data
        .chunks(8)
        .map(|entry| {
            (
                entry[..4].try_into().unwrap(),
                u32::from_be_bytes(entry[4..].try_into().unwrap()),
            )
        })
        .collect()
}

/// `(ostype, element length)` of every element except the table of contents.
pub fn element_lengths(family: &IconFamily) -> Vec<([u8; 4], u32)> {
    family
        .elements
        .iter()
        .filter(|element| &element.ostype.0 != b"TOC ")
        .map(|element| (element.ostype.0, element.data.len() as u32 + 8))
        .collect()
}

pub fn decode_png(data: &[u8]) -> RgbaImage {
    image::load_from_memory_with_format(data, ImageFormat::Png)
        .unwrap()
        .into_rgba8()
}
