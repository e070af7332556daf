mod engine;
mod options;
mod search;

pub use engine::Engine;
pub use options::{AgentType, EngineOptions, HeuristicType};
pub use search::SearchOptions;
