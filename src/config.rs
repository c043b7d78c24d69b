use crate::cli::Cli;
use std::path::PathBuf;

/// Everything the driver needs from the process environment, captured once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub binary_path: PathBuf,
    pub args: Vec<String>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            binary_path: cli.helm_bin,
            args: cli.args,
        }
    }
}
