use std::{env, io::ErrorKind};

use diatonic_cli::{CliError, CliResult};

fn main() -> CliResult<()> {
    env_logger::init();

    match diatonic_cli::run_in_shell_env(env::args()) {
        // Ignore a closed stdout, e.g. when piping into `head`.
        Err(CliError::IoError(err)) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
