use crate::identity::{exe_name, ShimIdentity};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

pub const LAUNCHER_STEM: &str = "launcher";
pub const ORIGINAL_SUFFIX: &str = "_Original";
pub const LAUNCHER_INFO_DIR: [&str; 3] = ["App", "AppInfo", "Launcher"];

/// How the shim derives the delegate (and launcher INI) names from its own name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NamingPolicy {
    /// Delegate is always `launcher.<ext>`.
    FixedRename,
    /// Delegate is `launcher.<ext>`; `<base>.ini` is always copied over `launcher.ini`.
    #[default]
    SelfAwareCopy,
    /// Like `SelfAwareCopy` but never overwrites an existing `launcher.ini`.
    LazyCopy,
    /// Delegate is `<base>_Original.<ext>`, falling back to `launcher.<ext>`.
    SuffixRename,
}

impl NamingPolicy {
    /// Delegate candidates, highest priority first.
    pub fn candidates(self, identity: &ShimIdentity) -> Vec<PathBuf> {
        let launcher = identity.join(exe_name(LAUNCHER_STEM));
        match self {
            Self::FixedRename | Self::SelfAwareCopy | Self::LazyCopy => vec![launcher],
            Self::SuffixRename => {
                let original = identity.join(exe_name(&format!("{}{ORIGINAL_SUFFIX}", identity.base_name)));
                vec![original, launcher]
            }
        }
    }

    /// `(source, target)` of the launcher INI bridge, if this policy bridges one.
    pub fn config_paths(self, identity: &ShimIdentity) -> Option<(PathBuf, PathBuf)> {
        match self {
            Self::SelfAwareCopy | Self::LazyCopy => {
                let dir = LAUNCHER_INFO_DIR.iter().fold(identity.directory.clone(), |p, part| p.join(part));
                let source = dir.join(format!("{}.ini", identity.base_name));
                let target = dir.join(format!("{LAUNCHER_STEM}.ini"));
                Some((source, target))
            }
            Self::FixedRename | Self::SuffixRename => None,
        }
    }

    pub fn overwrites_config(self) -> bool {
        matches!(self, Self::SelfAwareCopy)
    }

    /// Whether `Data/settings/*.temp` joins the lock/pid/tmp sweep by default.
    pub fn sweeps_temp_suffix(self) -> bool {
        matches!(self, Self::SelfAwareCopy)
    }
}

impl fmt::Display for NamingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FixedRename => "fixed-rename",
            Self::SelfAwareCopy => "self-aware-copy",
            Self::LazyCopy => "lazy-copy",
            Self::SuffixRename => "suffix-rename",
        };
        f.write_str(name)
    }
}
