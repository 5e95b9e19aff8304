use crate::identity::{exe_name, ShimIdentity};
use std::fs;
use std::path::PathBuf;

/// A throwaway portable-app directory; removed on drop.
pub struct AppFixture {
    _temp: tempfile::TempDir,
    pub root: PathBuf,
}

impl AppFixture {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("create test tempdir");
        let root = temp.path().join("NSISPortable");
        fs::create_dir_all(&root).expect("create app dir");
        Self { _temp: temp, root }
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        rel.split('/').fold(self.root.clone(), |p, part| p.join(part))
    }

    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, contents).expect("write fixture file");
        path
    }

    pub fn touch(&self, rel: &str) -> PathBuf {
        self.write(rel, "")
    }

    pub fn mkdir(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(&path).expect("create fixture dir");
        path
    }

    /// Identity of a shim installed in this directory as `<base>.<ext>`.
    pub fn identity(&self, base: &str) -> ShimIdentity {
        ShimIdentity::from_image_path(self.root.join(exe_name(base)))
    }

    pub fn exe(&self, stem: &str) -> PathBuf {
        self.root.join(exe_name(stem))
    }
}
