use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;

use super::command::execute_command;
use super::error::QueryError;
use super::{Status, StatusCode};

static JOB_STATE_RGX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)job_state\s*=\s*(?P<status>[A-Z])").unwrap());

static EXIT_STATUS_RGX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)exit_status\s*=\s*(?P<excode>-?[0-9]+)").unwrap());

#[derive(Debug, Clone)]
pub struct QstatOptions {
    /// Program used as the status command
    pub program: String,
    pub job_id: String,
}

impl QstatOptions {
    pub fn new(program: impl Into<String>, job_id: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            job_id: job_id.into(),
        }
    }

    /// Full listing (`-f`) including finished jobs (`-x`); the job id is
    /// passed as its own argument, never through a shell
    pub fn to_args(&self) -> Vec<String> {
        vec!["-fx".to_string(), self.job_id.clone()]
    }
}

/// Run qstat for one job and reduce its output to a [`Status`]
pub async fn query(options: &QstatOptions) -> Result<Status, QueryError> {
    let args = options.to_args();
    let output = execute_command(&options.program, &args)
        .await
        .inspect_err(|e| warn!("qstat did not complete: {}", e))?;

    parse_qstat_output(&output.text)
}

/// Map qstat output to a status
///
/// Only `job_state` is read for unfinished jobs; `exit_status` is read once
/// the job state is `F` or `X`. Everything else in the output is ignored.
pub fn parse_qstat_output(output: &str) -> Result<Status, QueryError> {
    let letter = JOB_STATE_RGX
        .captures(output)
        .and_then(|caps| caps.name("status"))
        .map(|m| m.as_str())
        .ok_or_else(|| QueryError::MissingJobState {
            output: output.to_string(),
        })?;
    debug!("job_state = {}", letter);

    let code: StatusCode = letter
        .parse()
        .map_err(|_| QueryError::UnknownStatusCode {
            value: letter.to_string(),
            output: output.to_string(),
        })?;

    if !code.is_finished() {
        return Ok(Status::Running);
    }

    let exit_code = EXIT_STATUS_RGX
        .captures(output)
        .and_then(|caps| caps.name("excode"))
        .map(|m| m.as_str())
        .ok_or_else(|| QueryError::MissingExitStatus {
            code: code.to_string(),
            output: output.to_string(),
        })?;
    debug!("exit_status = {}", exit_code);

    if is_zero(exit_code) {
        Ok(Status::Success)
    } else {
        Ok(Status::Failed)
    }
}

// Decided on the digits so values past i64 still count as nonzero
fn is_zero(exit_code: &str) -> bool {
    exit_code
        .trim_start_matches('-')
        .chars()
        .all(|c| c == '0')
}
