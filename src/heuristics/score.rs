use crate::core::GameState;

use super::Evaluator;

/// Evaluates a state by its raw game score
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreEvaluator;

impl<S: GameState> Evaluator<S> for ScoreEvaluator {
    fn evaluate(&self, state: &S) -> f64 {
        state.score()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, GameState, World};

    #[test]
    fn test_score_evaluator_returns_score() {
        let world = World::from_layout("%%%%%/%P..%/%%%%%").unwrap();
        assert_eq!(ScoreEvaluator.evaluate(&world), 0.0);

        let next = world.generate_successor(0, Action::East).unwrap();
        assert_eq!(ScoreEvaluator.evaluate(&next), next.score());
        assert_eq!(ScoreEvaluator.evaluate(&next), 9.0);
    }
}
