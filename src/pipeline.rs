use crate::bridge::bridge;
use crate::cleanup::cleanup;
use crate::config::ShimConfig;
use crate::error::Result;
use crate::identity::ShimIdentity;
use crate::launcher::{launch, LaunchRequest};
use crate::resolver::resolve;
use std::ffi::OsString;
use tracing::debug;

/// Resolve, clean, bridge, launch. Nothing touches the disk until the delegate is found;
/// a launch failure after that leaves the cleanup and bridge results in place.
pub fn run(identity: &ShimIdentity, config: &ShimConfig, args: Vec<OsString>) -> Result<()> {
    let target = resolve(identity, config.policy)?;

    let report = cleanup(&identity.directory, &config.cleanup_plan());
    debug!(removed = report.removed, "pre-launch cleanup");

    if bridge(&target, config.policy.overwrites_config()) {
        debug!("launcher ini bridged");
    }

    launch(LaunchRequest::new(target.executable, args, identity.directory.clone()))
}
