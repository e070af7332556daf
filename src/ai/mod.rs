//! Adversarial game-tree search
pub mod alphabeta;
pub mod expectimax;
pub mod minimax;
pub mod reflex;
pub mod search;
pub mod traversal;

pub use reflex::ReflexAgent;
pub use search::{choose_action, search, Algorithm, SearchConfig, SearchResult};
pub use traversal::{next_turn, AdversaryPolicy, NextTurn, Window};
