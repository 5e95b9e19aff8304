use crate::cleanup::{self, DATA_DIR};
use crate::colors::*;
use crate::config::ShimConfig;
use crate::resolver::NamingPolicy;
use anyhow::{bail, Result};
use std::path::Path;

pub fn cmd_clean(app_dir: &Path, policy: NamingPolicy) -> Result<()> {
    if !app_dir.is_dir() {
        bail!("directory '{}' does not exist", app_dir.display());
    }
    if !app_dir.join(DATA_DIR).is_dir() {
        println!("{C_GRAY}[pawp]{C_RESET} no {DATA_DIR} directory in {}, nothing to clean", app_dir.display());
        return Ok(());
    }
    let report = cleanup::cleanup(app_dir, &ShimConfig::with_policy(policy).cleanup_plan());
    println!(
        "{gray}[pawp]{reset} {green}cleaned{reset} {removed} entries in {path}",
        gray = C_GRAY,
        green = C_GREEN,
        reset = C_RESET,
        removed = report.removed,
        path = app_dir.display()
    );
    if report.failed > 0 {
        println!("{C_GRAY}[pawp]{C_RESET} {C_YELLOW}note{C_RESET}: {} entries could not be removed", report.failed);
    }
    Ok(())
}
