use crate::colors::*;
use crate::identity::exe_name;
use crate::patcher::{self, PatchOutcome};
use crate::resolver::NamingPolicy;
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tracing::{error, info};

pub const SHIM_STEM: &str = "pawp-shim";

fn default_shim() -> Result<PathBuf> {
    let exe = std::env::current_exe().with_context(|| "locate pawp executable")?;
    let dir = exe.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));
    Ok(dir.join(exe_name(SHIM_STEM)))
}

pub fn cmd_patch(dir: &Path, shim: Option<PathBuf>, policy: NamingPolicy, log: Option<&Path>) -> Result<()> {
    if !dir.is_dir() {
        bail!("directory '{}' does not exist", dir.display());
    }
    let shim = match shim {
        Some(shim) => shim,
        None => default_shim()?,
    };
    if !shim.is_file() {
        bail!("shim executable not found at '{}'", shim.display());
    }
    info!(dir = %dir.display(), shim = %shim.display(), policy = %policy, log = ?log, "patching portable apps");

    let apps = patcher::find_portable_apps(dir)?;
    if apps.is_empty() {
        println!("{C_GRAY}[pawp]{C_RESET} no portable apps found in {}", dir.display());
        return Ok(());
    }
    println!("{C_GRAY}[pawp]{C_RESET} found {} portable apps", apps.len());

    let mut patched = 0usize;
    let mut updated = 0usize;
    for app in &apps {
        let name = app.file_name().unwrap_or_default().to_string_lossy();
        match patcher::patch_app(app, &shim, policy) {
            Ok(PatchOutcome::Patched) => {
                patched += 1;
                info!(app = %name, "patched");
                println!("{C_GRAY}[pawp]{C_RESET} {C_GREEN}patched{C_RESET} {name}");
            }
            Ok(PatchOutcome::Updated) => {
                updated += 1;
                info!(app = %name, "updated");
                println!("{C_GRAY}[pawp]{C_RESET} {C_GREEN}updated{C_RESET} {name} {C_DIM}(already patched){C_RESET}");
            }
            Err(e) => {
                error!(app = %name, error = %format!("{e:#}"), "patch failed");
                println!("{C_GRAY}[pawp]{C_RESET} {C_RED}failed{C_RESET} {name}: {e:#}");
            }
        }
    }

    println!(
        "{C_GRAY}[pawp]{C_RESET} {patched} patched, {updated} updated, {failed} failed of {total} apps",
        failed = apps.len() - patched - updated,
        total = apps.len()
    );
    Ok(())
}
