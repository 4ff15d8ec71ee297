//! Timer error types.

use thiserror::Error;

/// Errors that can occur when starting the tick task
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TimerError {
    #[error("Timer needs a running Tokio runtime to schedule ticks")]
    NoRuntime,
}
