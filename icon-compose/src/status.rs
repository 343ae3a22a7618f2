use std::{fmt, str::FromStr};

/// The release channel an icon set is generated for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BuildStatus {
    Dev,
    Nightly,
    Pr,
    Release,
}

impl BuildStatus {
    /// Every status, in the order the icon sets are generated.
    pub const ALL: [BuildStatus; 4] = [
        BuildStatus::Dev,
        BuildStatus::Nightly,
        BuildStatus::Pr,
        BuildStatus::Release,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildStatus::Dev => "dev",
            BuildStatus::Nightly => "nightly",
            BuildStatus::Pr => "pr",
            BuildStatus::Release => "release",
        }
    }

    /// Unstable builds carry a status badge on every icon.
    pub fn is_unstable(&self) -> bool {
        !matches!(self, BuildStatus::Release)
    }
}

impl fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown build status '{0}'")]
pub struct UnknownBuildStatus(String);

impl FromStr for BuildStatus {
    type Err = UnknownBuildStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuildStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownBuildStatus(s.to_owned()))
    }
}
