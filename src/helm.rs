use crate::config::Config;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::{debug, info};

#[derive(thiserror::Error, Debug)]
pub enum HelmError {
    #[error("Failed to launch {}: {source}", .path.display())]
    Launch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("helm exited with {}", describe_status(.code))]
    Failed { code: Option<i32>, stderr: String },
}

impl HelmError {
    /// Exit code to hand back to the caller, mirroring helm's own where there is one.
    pub fn exit_code(&self) -> i32 {
        match self {
            HelmError::Launch { .. } => 1,
            HelmError::Failed { code, .. } => code.filter(|c| *c != 0).unwrap_or(1),
        }
    }
}

fn describe_status(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("code {}", c),
        None => "a signal".to_string(),
    }
}

/// Run helm with the configured arguments and return its buffered stdout.
pub async fn run_helm(config: &Config) -> Result<String, HelmError> {
    info!(
        "Running {} {}",
        config.binary_path.display(),
        config.args.join(" ")
    );

    let output = Command::new(&config.binary_path)
        .args(&config.args)
        .output()
        .await
        .map_err(|source| HelmError::Launch {
            path: config.binary_path.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(HelmError::Failed {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    debug!("helm produced {} bytes of output", output.stdout.len());
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
