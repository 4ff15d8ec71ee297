//! Game error types.

use crate::config::ConfigError;
use crate::timer::TimerError;
use thiserror::Error;

/// Errors that can occur while running a session
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Game is finished; call init_game to start a new session")]
    GameFinished,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Timer failed: {0}")]
    Timer(#[from] TimerError),
}
