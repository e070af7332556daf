pub mod better;
pub mod reflex;
pub mod score;

mod traits;
pub use traits::*;

pub use better::BetterEvaluator;
pub use reflex::ReflexEvaluator;
pub use score::ScoreEvaluator;
