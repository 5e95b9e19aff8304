use crate::config::{self, ShimConfig};
use crate::identity::{exe_name, ShimIdentity};
use crate::resolver::{self, NamingPolicy, ORIGINAL_SUFFIX};
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// Entry executable renamed to the delegate name and replaced by the shim.
    Patched,
    /// Delegate already present; only the shim was refreshed.
    Updated,
}

/// `*Portable.<ext>` files that sit next to an `App/AppInfo` directory.
pub fn find_portable_apps(root: &Path) -> Result<Vec<PathBuf>> {
    let suffix = exe_name("portable");
    let mut apps = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walk {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else { continue };
        if !name.to_lowercase().ends_with(&suffix) {
            continue;
        }
        let has_app_info = entry.path().parent().is_some_and(|dir| dir.join("App").join("AppInfo").is_dir());
        if has_app_info {
            info!(path = %entry.path().display(), "found portable app");
            apps.push(entry.into_path());
        }
    }
    Ok(apps)
}

/// Install `shim` in place of the app's entry executable `launcher`.
///
/// An app already patched under another policy keeps its original: the recorded
/// delegate is moved to the new policy's delegate name before the shim is refreshed.
pub fn patch_app(launcher: &Path, shim: &Path, policy: NamingPolicy) -> Result<PatchOutcome> {
    let identity = ShimIdentity::from_image_path(launcher);
    let Some(delegate) = policy.candidates(&identity).into_iter().next() else {
        bail!("policy {policy} names no delegate");
    };

    let outcome = match patched_policy(launcher)? {
        Some(recorded) => {
            let current = resolver::resolve(&identity, recorded)
                .with_context(|| format!("{} is patched ({recorded}) but its original is missing", launcher.display()))?
                .executable;
            if current != delegate {
                if delegate.exists() {
                    bail!("cannot move original to {}: file already exists", delegate.display());
                }
                info!(from = %current.display(), to = %delegate.display(), from_policy = %recorded, to_policy = %policy, "moving original launcher");
                fs::rename(&current, &delegate)
                    .with_context(|| format!("rename {} to {}", current.display(), delegate.display()))?;
            }
            refresh_shim(shim, launcher)?;
            PatchOutcome::Updated
        }
        None if delegate.is_file() => {
            refresh_shim(shim, launcher)?;
            PatchOutcome::Updated
        }
        None => {
            info!(from = %launcher.display(), to = %delegate.display(), "renaming original launcher");
            fs::rename(launcher, &delegate)
                .with_context(|| format!("rename {} to {}", launcher.display(), delegate.display()))?;
            if let Err(e) = fs::copy(shim, launcher) {
                let _ = fs::rename(&delegate, launcher);
                return Err(e).with_context(|| format!("copy shim to {}", launcher.display()));
            }
            PatchOutcome::Patched
        }
    };

    config::write(&ShimConfig::with_policy(policy), &config::sidecar_path(&identity))?;
    Ok(outcome)
}

fn refresh_shim(shim: &Path, launcher: &Path) -> Result<()> {
    info!(path = %launcher.display(), "already patched, refreshing shim");
    fs::copy(shim, launcher).with_context(|| format!("update shim at {}", launcher.display()))?;
    Ok(())
}

/// The policy a patched app was installed with, or `None` for an unpatched app.
pub fn patched_policy(launcher: &Path) -> Result<Option<NamingPolicy>> {
    let identity = ShimIdentity::from_image_path(launcher);
    let sidecar = config::sidecar_path(&identity);
    if sidecar.is_file() {
        return Ok(Some(config::load(&sidecar)?.policy));
    }
    let legacy = identity.join(exe_name(&format!("{}{ORIGINAL_SUFFIX}", identity.base_name)));
    Ok(legacy.is_file().then_some(NamingPolicy::SuffixRename))
}

pub fn find_patched_apps(root: &Path) -> Result<Vec<(PathBuf, NamingPolicy)>> {
    let mut patched = Vec::new();
    for app in find_portable_apps(root)? {
        match patched_policy(&app) {
            Ok(Some(policy)) => patched.push((app, policy)),
            Ok(None) => {}
            Err(e) => warn!(path = %app.display(), error = %e, "skipping app with unreadable shim config"),
        }
    }
    Ok(patched)
}

/// Put the original launcher back under the entry name and drop what the shim left behind.
pub fn restore_app(launcher: &Path, policy: NamingPolicy) -> Result<()> {
    let identity = ShimIdentity::from_image_path(launcher);
    let target = resolver::resolve(&identity, policy)?;

    replace_with_rollback(&target.executable, launcher)?;
    info!(path = %launcher.display(), "original launcher restored");

    let sidecar = config::sidecar_path(&identity);
    if let Err(e) = fs::remove_file(&sidecar) {
        if e.kind() != std::io::ErrorKind::NotFound {
            warn!(path = %sidecar.display(), error = %e, "could not delete shim config; app may still look patched");
        }
    }
    if let (Some(source), Some(bridged)) = (&target.config_source, &target.config_target) {
        if is_bridged_copy(source, bridged) {
            let _ = fs::remove_file(bridged);
            info!(path = %bridged.display(), "removed bridged launcher ini");
        }
    }
    Ok(())
}

/// Move `source` over `dest`. The old `dest` is parked next to it and put back if the
/// move fails, so `dest` never goes missing.
pub(crate) fn replace_with_rollback(source: &Path, dest: &Path) -> Result<()> {
    let mut parked_name = dest.file_name().unwrap_or_default().to_os_string();
    parked_name.push(".pawp-old");
    let parked = dest.with_file_name(parked_name);
    let had_dest = dest.exists();
    if had_dest {
        fs::rename(dest, &parked).with_context(|| format!("move {} aside", dest.display()))?;
    }
    if let Err(e) = fs::rename(source, dest) {
        if had_dest {
            let _ = fs::rename(&parked, dest);
        }
        return Err(e).with_context(|| format!("rename {} to {}", source.display(), dest.display()));
    }
    if had_dest {
        if let Err(e) = fs::remove_file(&parked) {
            warn!(path = %parked.display(), error = %e, "could not delete replaced file");
        }
    }
    Ok(())
}

fn is_bridged_copy(source: &Path, bridged: &Path) -> bool {
    if source == bridged {
        return false;
    }
    match (fs::read(source), fs::read(bridged)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
