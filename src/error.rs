use snafu::Snafu;
use std::process::{Command, ExitStatus};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to duplicate output stream: {}", source))]
    CloneOutput { source: std::io::Error },

    #[snafu(display("Empty command, nothing to run"))]
    EmptyCommand,

    #[snafu(display("Failed to execute '{:?}': {}", command, source))]
    ExecutionFailure {
        command: Command,
        source: std::io::Error,
    },

    #[snafu(display("Failed to setup logger: {}", source))]
    Logger { source: log::SetLoggerError },

    #[snafu(display("'{}' failed with {}", program, status))]
    ProcessFailed { program: String, status: ExitStatus },
}

impl Error {
    /// Exit code for the calling process: the child's own exit code when the
    /// build tool failed, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ProcessFailed { status, .. } => status.code().unwrap_or(1),
            _ => 1,
        }
    }
}
