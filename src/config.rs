use serde::Deserialize;
use std::path::{Path, PathBuf};
use xshell::Shell;

/// Locations of the icon sources and outputs, relative to the source root.
#[derive(Debug, PartialEq, Eq, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub master_icon: PathBuf,
    pub icon_components: PathBuf,
    pub platform_dir: PathBuf,
    pub main_dir: PathBuf,
    /// `#rrggbb` fill of the Android adaptive icon background layer
    pub android_background: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            master_icon: "icon.svg".into(),
            icon_components: "misc/dist/icon_generation".into(),
            platform_dir: "platform".into(),
            main_dir: "main".into(),
            android_background: "#220f25".to_owned(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("invalid configuration file {}", .0.display())]
    InvalidConfigFile(PathBuf, #[source] toml::de::Error),
    #[error("i/o error reading configuration file {}", .0.display())]
    IoError(PathBuf, #[source] xshell::Error),
}

impl Config {
    /// Reads `p`, relative to the shell's working directory.
    pub fn parse_file(sh: &Shell, p: &Path) -> Result<Config, ConfigLoadError> {
        let config_string = sh
            .read_file(p)
            .map_err(|e| ConfigLoadError::IoError(p.to_owned(), e))?;
        toml::from_str(&config_string)
            .map_err(|e| ConfigLoadError::InvalidConfigFile(p.to_owned(), e))
    }

    /// Anchors every relative path at `root`.
    pub fn resolve(self, root: &Path) -> Config {
        Config {
            master_icon: root.join(self.master_icon),
            icon_components: root.join(self.icon_components),
            platform_dir: root.join(self.platform_dir),
            main_dir: root.join(self.main_dir),
            ..self
        }
    }
}
