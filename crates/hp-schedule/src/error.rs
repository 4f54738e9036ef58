use thiserror::Error;

use hp_core::TimeUnit;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("schedule parse error: {0}")]
    Parse(String),

    #[error("schedule invariant violated at slot {slot}: {reason}")]
    Invariant { slot: usize, reason: String },

    #[error("schedule is empty")]
    Empty,

    #[error("schedule ends at {0}, not at the end of the week")]
    Incomplete(TimeUnit),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
