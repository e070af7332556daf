//! Specter - adversarial game-tree search for grid chase games

pub mod ai;
pub mod core;
pub mod engine;
pub mod error;
pub mod heuristics;
pub mod protocol;
pub mod utils;

// Re-export commonly used items
pub use ai::{search, Algorithm, SearchConfig, SearchResult};
pub use core::{Action, GameState, World};
pub use engine::Engine;
pub use error::StateError;
