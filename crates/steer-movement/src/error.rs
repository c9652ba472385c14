use steer_core::AgentId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MovementError {
    #[error("agent {0} does not exist")]
    AgentNotFound(AgentId),

    #[error("tick delta must be finite and non-negative, got {0}")]
    NonFiniteDelta(f32),
}

pub type MovementResult<T> = Result<T, MovementError>;
