use crate::colors::*;
use crate::config::ShimConfig;
use crate::identity::ShimIdentity;
use crate::resolver::{self, NamingPolicy};
use anyhow::Result;
use std::path::Path;

pub fn cmd_resolve(launcher: &Path, policy: Option<NamingPolicy>) -> Result<()> {
    let identity = ShimIdentity::from_image_path(launcher);
    let policy = match policy {
        Some(policy) => policy,
        None => ShimConfig::load_for(&identity)?.policy,
    };
    let target = resolver::resolve(&identity, policy)?;
    println!("{C_GRAY}[pawp]{C_RESET} policy: {policy}");
    println!("{C_GRAY}[pawp]{C_RESET} delegate: {}", target.executable.display());
    if let (Some(source), Some(dest)) = (&target.config_source, &target.config_target) {
        println!("{C_GRAY}[pawp]{C_RESET} config: {} {C_DIM}->{C_RESET} {}", source.display(), dest.display());
    }
    Ok(())
}
