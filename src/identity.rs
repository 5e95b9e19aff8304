use crate::error::{Result, ShimError};
use std::env::consts::EXE_EXTENSION;
use std::path::{Path, PathBuf};

/// Where the running shim lives and what it is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShimIdentity {
    pub path: PathBuf,
    pub directory: PathBuf,
    /// File name without the platform executable extension.
    pub base_name: String,
}

impl ShimIdentity {
    /// Ask the OS for the image path of the running process.
    pub fn resolve() -> Result<Self> {
        let exe = std::env::current_exe().map_err(ShimError::IdentityUnavailable)?;
        Ok(Self::from_image_path(exe))
    }

    /// Accepts any path as-is; a path without a separator yields an empty directory.
    pub fn from_image_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let file_name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => path.to_string_lossy().into_owned(),
        };
        let base_name = strip_exe_extension(&file_name).to_string();
        Self { path, directory, base_name }
    }

    pub fn join(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.directory.join(rel)
    }
}

/// `name` + platform executable extension (`launcher` -> `launcher.exe` on Windows).
pub fn exe_name(stem: &str) -> String {
    if EXE_EXTENSION.is_empty() {
        stem.to_string()
    } else {
        format!("{stem}.{EXE_EXTENSION}")
    }
}

pub fn strip_exe_extension(file_name: &str) -> &str {
    if EXE_EXTENSION.is_empty() {
        return file_name;
    }
    match file_name.rfind('.') {
        Some(dot) if file_name[dot + 1..].eq_ignore_ascii_case(EXE_EXTENSION) => &file_name[..dot],
        _ => file_name,
    }
}
