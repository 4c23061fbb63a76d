/*!
buildog performs the driver build step inside the testkit container. It invokes
the external build tool as a child process with the child's standard error
merged into its standard output, blocks until the child exits, and translates
the exit status into success or failure.
*/

#[macro_use]
extern crate log;

use snafu::{ensure, OptionExt, ResultExt};
use std::ffi::OsStr;
use std::io;
use std::os::fd::{AsFd, OwnedFd};
use std::process::{Command, Stdio};

pub mod error;

pub use error::{Error, Result};

/// Runs `command` and blocks until it exits, with the child's stderr merged
/// into the caller's stdout. The first element is the executable, resolved on
/// the search path; the rest are its arguments.
pub fn run<S>(command: &[S]) -> Result<()>
where
    S: AsRef<OsStr>,
{
    let stdout = io::stdout()
        .as_fd()
        .try_clone_to_owned()
        .context(error::CloneOutputSnafu)?;
    run_with_output(command, stdout)
}

/// Same as `run`, but the child's merged output goes to `output` instead of
/// the caller's stdout.
pub fn run_with_output<S>(command: &[S], output: OwnedFd) -> Result<()>
where
    S: AsRef<OsStr>,
{
    let (program, args) = command.split_first().context(error::EmptyCommandSnafu)?;
    let program = program.as_ref().to_string_lossy().into_owned();

    // The child's stdout and stderr share one open file description, so
    // writes from either stream land interleaved in emission order.
    let merged = output.try_clone().context(error::CloneOutputSnafu)?;

    let mut command = Command::new(&program);
    command
        .args(args.iter().map(AsRef::as_ref))
        .stdout(Stdio::from(output))
        .stderr(Stdio::from(merged));

    debug!("Running {:?}", command);
    let status = command
        .status()
        .context(error::ExecutionFailureSnafu { command })?;

    ensure!(status.success(), error::ProcessFailedSnafu { program, status });

    Ok(())
}
