//! One-step lookahead agent

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::{
    core::{Action, GameState, CONTROLLED},
    error::StateError,
    heuristics::ActionEvaluator,
};

/// Scores every legal action of the controlled agent and picks uniformly at
/// random among those tied for the best score
pub struct ReflexAgent<A> {
    pub evaluator: A,
}

impl<A> ReflexAgent<A> {
    pub fn new(evaluator: A) -> Self {
        Self { evaluator }
    }

    pub fn choose<S>(&self, state: &S, rng: &mut StdRng) -> Result<Action, StateError>
    where
        S: GameState,
        A: ActionEvaluator<S>,
    {
        let actions = state.legal_actions(CONTROLLED);
        if actions.is_empty() {
            return Ok(Action::Stop);
        }

        let scores = actions
            .iter()
            .map(|&a| self.evaluator.evaluate_action(state, a))
            .collect::<Result<Vec<_>, _>>()?;

        let best = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let best_actions: Vec<Action> = actions
            .iter()
            .zip(&scores)
            .filter(|(_, s)| **s == best)
            .map(|(&a, _)| a)
            .collect();

        if best_actions.is_empty() {
            return Ok(actions[0]);
        }

        let chosen = best_actions[rng.random_range(0..best_actions.len())];
        log::debug!("{:<12}best {:<12}chose {}", "reflex", best, chosen);

        Ok(chosen)
    }
}
