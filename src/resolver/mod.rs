use crate::error::{Result, ShimError};
use crate::identity::ShimIdentity;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

mod policy;

pub use policy::{NamingPolicy, LAUNCHER_STEM, ORIGINAL_SUFFIX};

/// The executable the shim hands off to, plus the INI bridge paths when the policy has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegateTarget {
    pub executable: PathBuf,
    pub config_source: Option<PathBuf>,
    pub config_target: Option<PathBuf>,
}

/// First existing regular file among the policy's candidates wins. The shim's own
/// path is never a match, so a shim named like its delegate cannot start itself.
pub fn resolve(identity: &ShimIdentity, policy: NamingPolicy) -> Result<DelegateTarget> {
    let candidates = policy.candidates(identity);
    let found = candidates.iter().find(|c| !is_self(c, identity) && is_regular_file(c)).cloned();
    let Some(executable) = found else {
        return Err(ShimError::DelegateNotFound { tried: candidates });
    };
    debug!(policy = %policy, delegate = %executable.display(), "resolved delegate");
    let (config_source, config_target) = match policy.config_paths(identity) {
        Some((source, target)) => (Some(source), Some(target)),
        None => (None, None),
    };
    Ok(DelegateTarget { executable, config_source, config_target })
}

fn is_self(candidate: &Path, identity: &ShimIdentity) -> bool {
    if cfg!(windows) {
        candidate.to_string_lossy().eq_ignore_ascii_case(&identity.path.to_string_lossy())
    } else {
        candidate == identity.path
    }
}

pub(crate) fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}
