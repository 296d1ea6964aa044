use async_process::{Command, Stdio};
use log::debug;

use super::error::QueryError;

/// Output of a finished command, stdout followed by stderr
#[derive(Debug, Clone)]
pub struct CombinedOutput {
    pub text: String,
}

/// Render a command line for diagnostics
pub fn command_line(cmd: &str, args: &[String]) -> String {
    std::iter::once(cmd)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Execute a command and return its merged output
///
/// The wait is raced against Ctrl-C. On interrupt the output future is
/// dropped, which kills the child through `kill_on_drop`.
pub async fn execute_command(cmd: &str, args: &[String]) -> Result<CombinedOutput, QueryError> {
    let command = command_line(cmd, args);
    debug!("Running `{}`", command);

    let mut child = Command::new(cmd);
    child.args(args).stdin(Stdio::null()).kill_on_drop(true);
    let output = child.output();

    let output = tokio::select! {
        res = output => res.map_err(|source| QueryError::Spawn {
            command: command.clone(),
            source,
        })?,
        Ok(()) = tokio::signal::ctrl_c() => {
            return Err(QueryError::Interrupted { command });
        }
    };

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));

    if !output.status.success() {
        return Err(QueryError::CommandFailed {
            command,
            status: output.status,
            output: text,
        });
    }

    Ok(CombinedOutput { text })
}
