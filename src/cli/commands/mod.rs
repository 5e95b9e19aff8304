mod clean;
mod patch;
mod resolve;
mod restore;

pub(crate) use clean::cmd_clean;
pub(crate) use patch::cmd_patch;
pub(crate) use resolve::cmd_resolve;
pub(crate) use restore::cmd_restore;
