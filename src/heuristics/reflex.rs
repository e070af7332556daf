use crate::{
    core::{Action, GameState, CONTROLLED},
    error::StateError,
};

use super::{nearest, ActionEvaluator, Features};

/// Value substituted for the adversary distance when one is exactly adjacent
const ADJACENT_PENALTY: f64 = -999.0;
const ADVERSARY_WEIGHT: f64 = 0.25;
const SCORE_WEIGHT: f64 = 10.0;

/// Scores an action by the successor it leads to: keep adversaries at arm's
/// length, weight the score heavily, and close in on the nearest food.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReflexEvaluator;

impl<S: GameState + Features> ActionEvaluator<S> for ReflexEvaluator {
    fn evaluate_action(&self, state: &S, action: Action) -> Result<f64, StateError> {
        let next = state.generate_successor(CONTROLLED, action)?;
        let pos = next.controlled_position();

        let adversary = match nearest(pos, &next.adversary_positions()) {
            Some(1) => ADJACENT_PENALTY,
            Some(d) => d as f64,
            None => 0.0,
        };
        let food = nearest(pos, &next.food_positions()).unwrap_or(0) as f64;

        Ok(ADVERSARY_WEIGHT * adversary + SCORE_WEIGHT * next.score() - food)
    }
}
