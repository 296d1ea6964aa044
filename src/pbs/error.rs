use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// Everything that stops a status query from producing a [`super::Status`]
///
/// None of these are retried. A job that ran and failed is not an error.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Failed to get status with `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to get status with `{command}` ({status})\n{output}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        output: String,
    },
    #[error("Interrupted while waiting for `{command}`")]
    Interrupted { command: String },
    #[error("Could not find job state in qstat output\n{output}")]
    MissingJobState { output: String },
    #[error("'{value}' is not a valid job state\n{output}")]
    UnknownStatusCode { value: String, output: String },
    #[error("Could not find exit code (status) for finished job in state {code}\n{output}")]
    MissingExitStatus { code: String, output: String },
}
