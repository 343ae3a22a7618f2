use crate::{badge::IconSources, compose::compose_icon, platform::write_png, BuildStatus};
use std::path::Path;
use xshell::Shell;

pub const SIZE: u32 = 128;

/// Writes the application bundle icon, `app_icon_<status>.png`, into `out_dir`.
pub fn compose_main_icon(
    sh: &Shell,
    sources: &IconSources,
    status: BuildStatus,
    out_dir: &Path,
) -> eyre::Result<()> {
    let master = sources.master_svg(sh)?;
    let status_badges = sources.status_badges(sh, status)?;
    let badges = match &status_badges {
        Some(badges) => vec![badges.for_size(SIZE)?],
        None => vec![],
    };

    let icon = compose_icon(&master, SIZE, &badges)?;
    write_png(
        sh,
        &out_dir.join(format!("app_icon_{}.png", status)),
        &icon,
    )
}
