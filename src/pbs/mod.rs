pub mod command;
pub mod error;
pub mod qstat;

use std::fmt;
use std::str::FromStr;

/// Job state letters as reported by `qstat -f` in the `job_state` field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// Job is exiting after having run
    Exiting,
    /// Array job with at least one subjob started
    ArrayJob,
    Finished,
    Held,
    /// Job was moved to another server
    Moved,
    Queued,
    Running,
    Suspended,
    /// Job is being moved to a new location
    MovedToNewLocation,
    /// Job is waiting for its submitter-assigned start time
    Waiting,
    /// Subjob has completed execution or has been deleted
    SubjobComplete,
    /// Cycle-harvesting job suspended due to keyboard activity
    CycleHarvest,
}

impl StatusCode {
    /// Whether the scheduler will report no further transitions for this job
    pub fn is_finished(&self) -> bool {
        matches!(self, StatusCode::Finished | StatusCode::SubjobComplete)
    }

    pub fn letter(&self) -> char {
        match self {
            StatusCode::Exiting => 'E',
            StatusCode::ArrayJob => 'B',
            StatusCode::Finished => 'F',
            StatusCode::Held => 'H',
            StatusCode::Moved => 'M',
            StatusCode::Queued => 'Q',
            StatusCode::Running => 'R',
            StatusCode::Suspended => 'S',
            StatusCode::MovedToNewLocation => 'T',
            StatusCode::Waiting => 'W',
            StatusCode::SubjobComplete => 'X',
            StatusCode::CycleHarvest => 'U',
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for StatusCode {
    type Err = String;

    // Letters are matched case-sensitively, qstat always reports upper case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "E" => Ok(StatusCode::Exiting),
            "B" => Ok(StatusCode::ArrayJob),
            "F" => Ok(StatusCode::Finished),
            "H" => Ok(StatusCode::Held),
            "M" => Ok(StatusCode::Moved),
            "Q" => Ok(StatusCode::Queued),
            "R" => Ok(StatusCode::Running),
            "S" => Ok(StatusCode::Suspended),
            "T" => Ok(StatusCode::MovedToNewLocation),
            "W" => Ok(StatusCode::Waiting),
            "X" => Ok(StatusCode::SubjobComplete),
            "U" => Ok(StatusCode::CycleHarvest),
            _ => Err(format!("'{}' is not a valid job state", s)),
        }
    }
}

/// Normalized status printed for the workflow engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Success,
    Failed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status_str = match self {
            Status::Running => "running",
            Status::Success => "success",
            Status::Failed => "failed",
        };
        write!(f, "{}", status_str)
    }
}
