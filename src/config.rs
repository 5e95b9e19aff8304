use crate::cleanup::CleanupPlan;
use crate::error::{Result, ShimError};
use crate::identity::ShimIdentity;
use crate::resolver::NamingPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const SIDECAR_SUFFIX: &str = ".shim.json";

/// Per-application shim settings, read from `<base>.shim.json` next to the shim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShimConfig {
    #[serde(default)]
    pub policy: NamingPolicy,
    /// Overrides the policy's default for sweeping `Data/settings/*.temp`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sweep_temp_suffix: Option<bool>,
}

impl ShimConfig {
    pub fn with_policy(policy: NamingPolicy) -> Self {
        Self { policy, sweep_temp_suffix: None }
    }

    /// Missing sidecar means defaults; an unreadable or malformed one is an error.
    pub fn load_for(identity: &ShimIdentity) -> Result<Self> {
        load(&sidecar_path(identity))
    }

    pub fn cleanup_plan(&self) -> CleanupPlan {
        CleanupPlan::new(self.sweep_temp_suffix.unwrap_or_else(|| self.policy.sweeps_temp_suffix()))
    }
}

pub fn sidecar_path(identity: &ShimIdentity) -> PathBuf {
    identity.join(format!("{}{SIDECAR_SUFFIX}", identity.base_name))
}

pub fn load(path: &Path) -> Result<ShimConfig> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(ShimConfig::default()),
        Err(e) => return Err(ShimError::invalid_config(path, e)),
    };
    serde_json::from_str(&data).map_err(|e| ShimError::invalid_config(path, e))
}

pub fn write(config: &ShimConfig, path: &Path) -> anyhow::Result<()> {
    let data = serde_json::to_string_pretty(config)?;
    fs::write(path, data)?;
    Ok(())
}
