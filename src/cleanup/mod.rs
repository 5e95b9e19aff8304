//! Removal of runtime-state leftovers that make the PortableApps.com Launcher
//! report an improper shutdown.
//!
//! Every deletion is best-effort: failures are traced and skipped, never returned.

use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

pub const DATA_DIR: &str = "Data";

const MATCH: MatchOptions =
    MatchOptions { case_sensitive: false, require_literal_separator: true, require_literal_leading_dot: false };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupAction {
    DeleteFile,
    /// Delete as a file, else remove as an empty directory. Never recursive.
    DeleteFileOrEmptyDir,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupRule {
    /// Relative to `Data/`; empty for `Data/` itself.
    pub dir: &'static str,
    pub pattern: &'static str,
    pub action: CleanupAction,
}

impl CleanupRule {
    const fn new(dir: &'static str, pattern: &'static str, action: CleanupAction) -> Self {
        Self { dir, pattern, action }
    }
}

/// Ordered sweep rules applied under `<app>/Data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupPlan {
    pub rules: Vec<CleanupRule>,
}

impl CleanupPlan {
    pub fn new(sweep_temp_suffix: bool) -> Self {
        use CleanupAction::{DeleteFile, DeleteFileOrEmptyDir};
        let mut rules = vec![CleanupRule::new("", "PortableApps.comLauncherRuntimeData-*.ini", DeleteFile)];
        for pattern in ["*.lock", "*.pid", "*.tmp"] {
            rules.push(CleanupRule::new("settings", pattern, DeleteFile));
        }
        if sweep_temp_suffix {
            rules.push(CleanupRule::new("settings", "*.temp", DeleteFile));
        }
        rules.push(CleanupRule::new("", "*.pid", DeleteFile));
        rules.push(CleanupRule::new("Temp", "*", DeleteFileOrEmptyDir));
        Self { rules }
    }
}

impl Default for CleanupPlan {
    fn default() -> Self {
        Self::new(true)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanupReport {
    pub removed: usize,
    pub failed: usize,
}

/// Sweep `<app_dir>/Data` according to `plan`. No-op when `Data` is missing.
pub fn cleanup(app_dir: &Path, plan: &CleanupPlan) -> CleanupReport {
    let data = app_dir.join(DATA_DIR);
    let mut report = CleanupReport::default();
    if !data.is_dir() {
        trace!(path = %data.display(), "no data directory, nothing to clean");
        return report;
    }
    for rule in &plan.rules {
        let dir = if rule.dir.is_empty() { data.clone() } else { data.join(rule.dir) };
        let Ok(pattern) = Pattern::new(rule.pattern) else { continue };
        for path in matching_entries(&dir, &pattern) {
            if remove_entry(&path, rule.action) {
                report.removed += 1;
            } else {
                report.failed += 1;
            }
        }
    }
    debug!(removed = report.removed, failed = report.failed, "runtime state cleanup done");
    report
}

/// Direct children of `dir` whose names match, in name order. A missing `dir` yields nothing.
fn matching_entries(dir: &Path, pattern: &Pattern) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_str().is_some_and(|name| pattern.matches_with(name, MATCH)))
        .map(|e| e.into_path())
        .collect()
}

fn remove_entry(path: &Path, action: CleanupAction) -> bool {
    match fs::remove_file(path) {
        Ok(()) => {
            trace!(path = %path.display(), "deleted");
            return true;
        }
        Err(e) if action == CleanupAction::DeleteFile => {
            debug!(path = %path.display(), error = %e, "could not delete");
            return false;
        }
        Err(_) => {}
    }
    match fs::remove_dir(path) {
        Ok(()) => {
            trace!(path = %path.display(), "removed empty directory");
            true
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "left in place");
            false
        }
    }
}
