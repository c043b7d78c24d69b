mod cli;
mod config;
mod helm;
mod parser;
mod types;

use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use tracing::debug;

use cli::{Cli, USAGE};
use config::Config;
use helm::{HelmError, run_helm};
use parser::parse_response;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout carries the JSON document, so logs always go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.wants_usage() {
        print!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    let config = Config::from(cli);
    debug!("Using helm binary at {}", config.binary_path.display());

    match run(&config).await.and_then(|json| write_stdout(&json)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(err),
    }
}

async fn run(config: &Config) -> anyhow::Result<String> {
    let output = run_helm(config).await?;
    render_response(&output)
}

/// Parse helm's report and serialize it as a single compact JSON document.
fn render_response(output: &str) -> anyhow::Result<String> {
    let response = parse_response(output)?;
    serde_json::to_string(&response).context("Failed to serialize response")
}

fn write_stdout(json: &str) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(json.as_bytes())
        .and_then(|_| stdout.flush())
        .context("Failed to write to stdout")
}

/// Helm's own error text is forwarded untouched; everything else gets a one-line message.
fn report(err: anyhow::Error) -> ExitCode {
    let Some(helm_err) = err.downcast_ref::<HelmError>() else {
        eprintln!("Error: {:#}", err);
        return ExitCode::FAILURE;
    };

    match helm_err {
        HelmError::Failed { stderr, .. } => {
            debug!("{}", helm_err);
            eprint!("{}", stderr);
        }
        HelmError::Launch { .. } => eprintln!("Error: {}", helm_err),
    }
    exit_code(helm_err.exit_code())
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
