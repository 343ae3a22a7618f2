use crate::config::Config;
use icon_compose::{
    platform::{android, linux, macos, main_icon, windows},
    BuildStatus, IconSources,
};
use std::path::{Path, PathBuf};
use tracing::info;
use xshell::Shell;

/// Generate the application icons for every build status and platform.
#[derive(argh::FromArgs)]
#[argh(subcommand, name = "generate-icons")]
pub struct Args {
    /// source root the configured paths are relative to
    #[argh(option)]
    pub root: Option<PathBuf>,

    /// TOML file overriding the default locations, relative to the root
    #[argh(option)]
    pub config: Option<PathBuf>,
}

pub fn main(args: Args) -> eyre::Result<()> {
    let sh = Shell::new()?;
    if let Some(root) = &args.root {
        sh.change_dir(root);
    }
    let config = match &args.config {
        Some(path) => Config::parse_file(&sh, path)?,
        None => Config::default(),
    };
    run(&sh, &config.resolve(&sh.current_dir()))
}

/// Output directories below the configured platform and main directories.
#[derive(Debug)]
pub struct OutputDirs {
    pub windows: PathBuf,
    pub android: PathBuf,
    pub macos: PathBuf,
    pub linux: PathBuf,
    pub main: PathBuf,
}

impl OutputDirs {
    pub fn new(platform_dir: &Path, main_dir: &Path) -> Self {
        OutputDirs {
            windows: platform_dir.join("windows").join("icons"),
            android: platform_dir.join("android").join("icons"),
            macos: platform_dir.join("macos").join("icons"),
            linux: platform_dir.join("linuxbsd").join("icons"),
            main: main_dir.join("icons"),
        }
    }

    fn create(&self, sh: &Shell) -> eyre::Result<()> {
        for dir in [
            &self.linux,
            &self.windows,
            &self.android,
            &self.macos,
            &self.main,
        ] {
            sh.create_dir(dir)?;
        }
        Ok(())
    }
}

/// Composes every icon set, status by status, one platform after another.
pub fn run(sh: &Shell, config: &Config) -> eyre::Result<()> {
    let sources = IconSources::new(&config.master_icon, &config.icon_components);
    let background = android::parse_hex_color(&config.android_background)?;
    let out = OutputDirs::new(&config.platform_dir, &config.main_dir);
    out.create(sh)?;

    for status in BuildStatus::ALL {
        info!("composing {} status images", status);

        info!("windows images");
        windows::compose_windows_icon(
            sh,
            &sources,
            status,
            false,
            &out.windows.join(format!("blazium_{}.ico", status)),
        )?;
        info!("windows console images");
        windows::compose_windows_icon(
            sh,
            &sources,
            status,
            true,
            &out.windows.join(format!("blazium_console_{}.ico", status)),
        )?;

        info!("android images");
        android::compose_android_icons(
            sh,
            &sources,
            status,
            background,
            &out.android.join(status.as_str()),
        )?;

        info!("macos images");
        macos::compose_macos_icons(sh, &sources, status, &out.macos)?;

        info!("linux images");
        linux::compose_linux_icons(sh, &sources, status, &out.linux)?;

        info!("main images");
        main_icon::compose_main_icon(sh, &sources, status, &out.main)?;
    }

    info!("done");
    Ok(())
}
