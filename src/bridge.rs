use crate::resolver::{is_regular_file, DelegateTarget};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Copy the shim-named launcher INI to the name the delegate looks for.
/// Returns whether a copy happened; failures are swallowed.
pub fn bridge(target: &DelegateTarget, overwrite: bool) -> bool {
    let (Some(source), Some(dest)) = (&target.config_source, &target.config_target) else {
        return false;
    };
    if !is_regular_file(source) || same_name(source, dest) {
        return false;
    }
    if !overwrite && dest.exists() {
        debug!(path = %dest.display(), "launcher ini already present, keeping it");
        return false;
    }
    match fs::copy(source, dest) {
        Ok(_) => {
            debug!(from = %source.display(), to = %dest.display(), "bridged launcher ini");
            true
        }
        Err(e) => {
            debug!(from = %source.display(), to = %dest.display(), error = %e, "launcher ini copy failed");
            false
        }
    }
}

fn same_name(a: &Path, b: &Path) -> bool {
    a.parent() == b.parent()
        && a.file_name().map(|n| n.to_string_lossy().to_lowercase())
            == b.file_name().map(|n| n.to_string_lossy().to_lowercase())
}
