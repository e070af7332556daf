//! The contract every search algorithm is written against

use super::action::Action;
use crate::error::StateError;

/// Index of an agent within a state. Agent 0 is the controlled agent and
/// `1..num_agents()` are its adversaries, moving in index order.
pub type AgentIndex = usize;

/// The agent whose action the search selects
pub const CONTROLLED: AgentIndex = 0;

/// One immutable snapshot of a turn-cyclic multi-agent game.
///
/// Implementations never mutate in place: `generate_successor` returns a
/// fresh state. `legal_actions` must be deterministic, since its order fixes
/// both tie-breaking and pruning order.
pub trait GameState: Sized {
    fn is_win(&self) -> bool;

    fn is_lose(&self) -> bool;

    /// Current game score from the controlled agent's point of view
    fn score(&self) -> f64;

    /// Always at least 1
    fn num_agents(&self) -> usize;

    fn legal_actions(&self, agent: AgentIndex) -> Vec<Action>;

    /// Fails with [`StateError::InvalidAction`] when `action` is not in
    /// `legal_actions(agent)`.
    fn generate_successor(&self, agent: AgentIndex, action: Action) -> Result<Self, StateError>;

    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }
}
