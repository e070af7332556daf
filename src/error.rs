//! Error types raised by game state implementations

use crate::core::{Action, AgentIndex};
use thiserror::Error;

/// Failures of the state interface. The search never produces these itself;
/// it propagates them unchanged to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StateError {
    #[error("invalid action: {action} is not legal for agent {agent}")]
    InvalidAction { agent: AgentIndex, action: Action },

    #[error("agent index {agent} out of range (state has {num_agents} agents)")]
    AgentOutOfRange {
        agent: AgentIndex,
        num_agents: usize,
    },
}
