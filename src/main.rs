/*!
buildog is executed in the testkit container and is responsible for building
the driver and the testkit backend. It runs a fixed Maven build with tests
skipped (testkit exercises the built artifacts itself afterwards) and passes
the build tool's combined output through to the console as it is emitted.
*/

#[macro_use]
extern crate log;

use argh::FromArgs;
use simplelog::{Config as LogConfig, LevelFilter, SimpleLogger};
use snafu::ResultExt;
use std::process;

use buildog::error::{self, Result};

/// Name of the build tool, resolved on the search path
const MVN_BIN: &str = "mvn";

/// The fixed build step: full build and install, tests skipped
const MVN_BUILD_ARGS: &[&str] = &["clean", "install", "-DskipTests"];

/// Builds the driver and the testkit backend
#[derive(FromArgs, PartialEq, Debug)]
struct Args {
    /// log-level trace|debug|info|warn|error
    #[argh(option)]
    log_level: Option<LevelFilter>,
}

fn setup_logger(args: &Args) -> Result<()> {
    let log_level = args.log_level.unwrap_or(LevelFilter::Info);
    SimpleLogger::init(log_level, LogConfig::default()).context(error::LoggerSnafu)
}

fn run() -> Result<()> {
    let args: Args = argh::from_env();
    setup_logger(&args)?;

    let mut command = vec![MVN_BIN];
    command.extend(MVN_BUILD_ARGS);

    info!("Building driver and testkit backend");
    buildog::run(&command)?;
    info!("Build finished");

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        error!("{}", e);
        process::exit(e.exit_code());
    }
}
