use crate::error::{Result, ShimError};
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::process::Command;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub delegate: PathBuf,
    /// Forwarded as received from the OS, including non-UTF-8 arguments.
    pub args: Vec<OsString>,
    pub working_dir: PathBuf,
}

impl LaunchRequest {
    pub fn new(delegate: PathBuf, args: Vec<OsString>, working_dir: PathBuf) -> Self {
        Self { delegate, args, working_dir }
    }

    pub fn command_line(&self) -> OsString {
        build_command_line(&self.delegate, &self.args)
    }
}

/// Wrap in double quotes when the argument contains a space. Embedded quotes are passed
/// through untouched.
pub fn quote_arg(arg: impl AsRef<OsStr>) -> OsString {
    let arg = arg.as_ref();
    if !arg.as_encoded_bytes().contains(&b' ') {
        return arg.to_os_string();
    }
    let mut quoted = OsString::with_capacity(arg.len() + 2);
    quoted.push("\"");
    quoted.push(arg);
    quoted.push("\"");
    quoted
}

/// `"<delegate>" arg1 "arg 2" ...`; the delegate path is always quoted.
pub fn build_command_line(delegate: impl AsRef<OsStr>, args: &[OsString]) -> OsString {
    let mut line = OsString::from("\"");
    line.push(delegate);
    line.push("\"");
    for arg in args {
        line.push(" ");
        line.push(quote_arg(arg));
    }
    line
}

/// Spawn the delegate without waiting for it. The child handle is dropped immediately.
pub fn launch(request: LaunchRequest) -> Result<()> {
    let mut cmd = Command::new(&request.delegate);
    cmd.current_dir(&request.working_dir);
    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        for arg in &request.args {
            cmd.raw_arg(quote_arg(arg));
        }
    }
    #[cfg(not(windows))]
    {
        cmd.args(&request.args);
    }
    info!(command_line = %request.command_line().to_string_lossy(), cwd = %request.working_dir.display(), "launching delegate");
    match cmd.spawn() {
        Ok(child) => {
            drop(child);
            Ok(())
        }
        Err(source) => Err(ShimError::Launch {
            delegate: request.delegate,
            os_error_code: source.raw_os_error(),
            source,
        }),
    }
}
