use crate::colors::*;
use crate::patcher;
use anyhow::{bail, Result};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{error, info};

fn confirm(count: usize) -> Result<bool> {
    print!("{C_GRAY}[pawp]{C_RESET} restore {count} apps to their original launchers? [y/N] ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}

pub fn cmd_restore(dir: &Path, yes: bool, log: Option<&Path>) -> Result<()> {
    if !dir.is_dir() {
        bail!("directory '{}' does not exist", dir.display());
    }
    info!(dir = %dir.display(), log = ?log, "restoring portable apps");

    let apps = patcher::find_patched_apps(dir)?;
    if apps.is_empty() {
        println!("{C_GRAY}[pawp]{C_RESET} no patched apps found in {}", dir.display());
        return Ok(());
    }
    for (app, policy) in &apps {
        println!("{C_GRAY}[pawp]{C_RESET}  {C_DIM}-{C_RESET} {} ({policy})", app.display());
    }
    if !yes && !confirm(apps.len())? {
        println!("{C_GRAY}[pawp]{C_RESET} cancelled");
        return Ok(());
    }

    let mut restored = 0usize;
    for (app, policy) in &apps {
        let name = app.file_name().unwrap_or_default().to_string_lossy();
        match patcher::restore_app(app, *policy) {
            Ok(()) => {
                restored += 1;
                println!("{C_GRAY}[pawp]{C_RESET} {C_GREEN}restored{C_RESET} {name}");
            }
            Err(e) => {
                error!(app = %name, error = %format!("{e:#}"), "restore failed");
                println!("{C_GRAY}[pawp]{C_RESET} {C_RED}failed{C_RESET} {name}: {e:#}");
            }
        }
    }
    println!("{C_GRAY}[pawp]{C_RESET} {restored} of {} apps restored", apps.len());
    Ok(())
}
