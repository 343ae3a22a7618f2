use eyre::WrapErr;
use image::{ImageBuffer, ImageFormat, PixelWithColorType};
use std::{io::Cursor, ops::Deref, path::Path};
use xshell::Shell;

pub mod android;
pub mod linux;
pub mod macos;
pub mod main_icon;
pub mod windows;

pub(crate) fn encode_png<P, C>(image: &ImageBuffer<P, C>) -> eyre::Result<Vec<u8>>
where
    P: PixelWithColorType,
    [P::Subpixel]: image::EncodableLayout,
    C: Deref<Target = [P::Subpixel]>,
{
    let mut png = Vec::new();
    image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(png)
}

pub(crate) fn write_png<P, C>(sh: &Shell, path: &Path, image: &ImageBuffer<P, C>) -> eyre::Result<()>
where
    P: PixelWithColorType,
    [P::Subpixel]: image::EncodableLayout,
    C: Deref<Target = [P::Subpixel]>,
{
    write_file(sh, path, encode_png(image)?)
}

pub(crate) fn write_file(sh: &Shell, path: &Path, contents: impl AsRef<[u8]>) -> eyre::Result<()> {
    sh.write_file(path, contents)
        .wrap_err_with(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), "wrote icon");
    Ok(())
}
