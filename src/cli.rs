use clap::Parser;
use std::path::PathBuf;

pub const USAGE: &str = "Converts helm's output to json format.\n\
Works for commands: install, status\n\
\n\
Example usage:\n  \
helm json install stable/rabbitmq\n  \
helm json status my-release-name\n";

#[derive(Parser)]
#[command(name = "helm-json")]
#[command(about = "Converts helm's output to json format")]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Path to the helm binary
    #[arg(long, env = "HELM_BIN", default_value = "helm")]
    pub helm_bin: PathBuf,

    /// Helm subcommand and its arguments, forwarded verbatim
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// A subcommand alone is not enough to run helm; at least a chart or release is needed.
    pub fn wants_usage(&self) -> bool {
        self.args.len() < 2
    }
}
