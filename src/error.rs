use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T, E = ShimError> = std::result::Result<T, E>;

/// Fatal failures of the shim. Everything else (cleanup, config bridging) is swallowed.
#[derive(Debug, Error)]
pub enum ShimError {
    #[error("Failed to get executable path: {0}")]
    IdentityUnavailable(#[source] io::Error),

    #[error(
        "Original launcher not found. Tried:\n{}\n\nRename the original PortableApps launcher to one of the names above and place this wrapper under the original name.",
        list_candidates(.tried)
    )]
    DelegateNotFound { tried: Vec<PathBuf> },

    #[error(
        "Failed to launch the original launcher:\n{}\n\nOS error code: {}",
        .delegate.display(),
        display_code(.os_error_code)
    )]
    Launch {
        delegate: PathBuf,
        os_error_code: Option<i32>,
        #[source]
        source: io::Error,
    },

    #[error("Invalid shim configuration {}: {reason}", .path.display())]
    InvalidConfig { path: PathBuf, reason: String },
}

impl ShimError {
    pub(crate) fn invalid_config(path: &Path, reason: impl ToString) -> Self {
        Self::InvalidConfig { path: path.to_path_buf(), reason: reason.to_string() }
    }
}

fn list_candidates(tried: &[PathBuf]) -> String {
    tried.iter().map(|p| format!("  {}", p.display())).collect::<Vec<_>>().join("\n")
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "unknown".to_string(),
    }
}
