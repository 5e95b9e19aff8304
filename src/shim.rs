#![cfg_attr(windows, windows_subsystem = "windows")]

use pawp::config::ShimConfig;
use pawp::error::ShimError;
use pawp::identity::ShimIdentity;
use pawp::{logging, notify, pipeline};

fn main() {
    logging::init();
    if let Err(e) = real_main() {
        notify::show_error(&e.to_string());
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), ShimError> {
    let identity = ShimIdentity::resolve()?;
    let config = ShimConfig::load_for(&identity)?;
    let args = std::env::args_os().skip(1).collect();
    pipeline::run(&identity, &config, args)
}
