//! External command runner.
//!
//! Runs a child process with a hard timeout. Used to fetch API keys from a
//! configured `key_command` and to run the self-upgrade.

use std::process::Stdio;
use std::time::Duration;

use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tokio::time::timeout;

use crate::error::{Error, Result};

/// Timeout for `key_command`.
pub const KEY_COMMAND_TIMEOUT: Duration = Duration::from_secs(30);

/// Output from a finished command.
#[derive(Debug)]
pub struct CliOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CliOutput {
    /// Check if command succeeded (exit code 0).
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Run a program with arguments and a timeout.
///
/// # Errors
///
/// Returns [`Error::Timeout`] when the deadline passes (the child is killed),
/// or [`Error::Io`] if the program cannot be spawned or read.
pub async fn run_command(
    program: &str,
    args: &[&str],
    timeout_duration: Duration,
) -> Result<CliOutput> {
    let mut command = Command::new(program);
    command.args(args);
    run(command, timeout_duration).await
}

/// Run a command line through the platform shell.
///
/// # Errors
///
/// Same as [`run_command`].
pub async fn run_shell(command_line: &str, timeout_duration: Duration) -> Result<CliOutput> {
    let command = if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", command_line]);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command_line]);
        cmd
    };
    run(command, timeout_duration).await
}

async fn run(mut command: Command, timeout_duration: Duration) -> Result<CliOutput> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()?;

    let result = timeout(timeout_duration, async {
        // Drain both pipes together so a chatty child cannot block on a full pipe.
        let stdout_handle = async {
            let mut stdout = String::new();
            if let Some(mut out) = child.stdout.take() {
                out.read_to_string(&mut stdout).await?;
            }
            Ok::<_, std::io::Error>(stdout)
        };

        let stderr_handle = async {
            let mut stderr = String::new();
            if let Some(mut err) = child.stderr.take() {
                err.read_to_string(&mut stderr).await?;
            }
            Ok::<_, std::io::Error>(stderr)
        };

        let (stdout_result, stderr_result) = tokio::join!(stdout_handle, stderr_handle);
        let stdout = stdout_result?;
        let stderr = stderr_result?;

        let status = child.wait().await?;

        Ok::<_, std::io::Error>(CliOutput {
            stdout,
            stderr,
            exit_code: status.code().unwrap_or(-1),
        })
    })
    .await;

    match result {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(e)) => Err(Error::Io(e)),
        Err(_) => {
            let _ = child.kill().await;
            let _ = child.wait().await;
            Err(Error::Timeout(timeout_duration.as_secs()))
        }
    }
}

/// Run `key_command` and return its trimmed stdout as an API key.
///
/// Every failure (spawn error, timeout, non-zero exit, empty output) becomes
/// [`Error::KeyCommand`]. Nothing is retried.
///
/// # Errors
///
/// See above.
pub async fn fetch_key(command_line: &str, timeout_duration: Duration) -> Result<String> {
    tracing::debug!("Running key_command");
    let output = run_shell(command_line, timeout_duration)
        .await
        .map_err(|e| match e {
            Error::Timeout(secs) => Error::KeyCommand(format!("timed out after {secs}s")),
            other => Error::KeyCommand(other.to_string()),
        })?;

    if !output.success() {
        let stderr = output.stderr.trim();
        return Err(Error::KeyCommand(if stderr.is_empty() {
            format!("exit code {}", output.exit_code)
        } else {
            format!("exit code {}: {stderr}", output.exit_code)
        }));
    }

    let key = output.stdout.trim();
    if key.is_empty() {
        return Err(Error::KeyCommand("command produced no output".to_string()));
    }
    Ok(key.to_string())
}
