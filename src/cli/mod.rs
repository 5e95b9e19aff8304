use crate::logging;
use crate::resolver::NamingPolicy;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "pawp",
    version,
    about = "Install and manage the PortableApps launcher shim",
    long_about = "pawp replaces PortableApps launchers with a shim that clears stale runtime data, so apps stop reporting they were not closed properly.\n\nExamples:\n  pawp patch D:\\PortableApps\n  pawp patch D:\\PortableApps --policy suffix-rename --log patch.log\n  pawp restore D:\\PortableApps\n  pawp clean D:\\PortableApps\\NSISPortable"
)]
pub struct PawpCli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replace every *Portable launcher under a directory with the shim
    Patch {
        dir: PathBuf,
        /// Shim executable to install (default: pawp-shim next to pawp)
        #[arg(long)]
        shim: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = NamingPolicy::default())]
        policy: NamingPolicy,
        /// Also write a plain-text log to this file
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Undo `patch`: put the original launchers back
    Restore {
        dir: PathBuf,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Delete stale runtime-state files of one app
    Clean {
        app_dir: PathBuf,
        #[arg(long, value_enum, default_value_t = NamingPolicy::default())]
        policy: NamingPolicy,
    },
    /// Show which launcher the shim would start for an entry executable
    Resolve {
        launcher: PathBuf,
        /// Override the policy recorded next to the launcher
        #[arg(long, value_enum)]
        policy: Option<NamingPolicy>,
    },
}

impl PawpCli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn run(&self) -> Result<()> {
        self.init_logging()?;
        match &self.command {
            None => {
                self.print_help();
                Ok(())
            }
            Some(Commands::Patch { dir, shim, policy, log }) => {
                commands::cmd_patch(dir, shim.clone(), *policy, log.as_deref())
            }
            Some(Commands::Restore { dir, yes, log }) => commands::cmd_restore(dir, *yes, log.as_deref()),
            Some(Commands::Clean { app_dir, policy }) => commands::cmd_clean(app_dir, *policy),
            Some(Commands::Resolve { launcher, policy }) => commands::cmd_resolve(launcher, *policy),
        }
    }

    fn init_logging(&self) -> Result<()> {
        let log = match &self.command {
            Some(Commands::Patch { log, .. } | Commands::Restore { log, .. }) => log.as_deref(),
            _ => None,
        };
        match log {
            Some(path) => logging::init_with_file(path)
                .with_context(|| format!("create log file {}", path.display()))?,
            None => logging::init(),
        }
        Ok(())
    }

    fn print_help(&self) {
        println!("pawp - PortableApps launcher shim manager\n");
        println!(
            "Commands:\n  patch <dir> [--shim <exe>] [--policy <policy>] [--log <file>]\n  restore <dir> [--yes] [--log <file>]\n  clean <app-dir> [--policy <policy>]\n  resolve <launcher> [--policy <policy>]"
        );
    }
}
