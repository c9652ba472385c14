use steer_behavior::BehaviorError;
use steer_core::AgentId;
use steer_movement::MovementError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("agent {0} does not exist")]
    AgentNotFound(AgentId),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("behavior error: {0}")]
    Behavior(#[from] BehaviorError),

    #[error("movement error: {0}")]
    Movement(#[from] MovementError),
}

pub type SimResult<T> = Result<T, SimError>;
