//! Exhaustive minimax against optimally minimizing adversaries

use crate::{
    core::{Action, GameState},
    error::StateError,
    heuristics::Evaluator,
};

use super::{
    search::{SearchConfig, SearchResult},
    traversal::{AdversaryPolicy, Traversal, Window},
};

/// Adversaries pick the successor with the lowest value
pub struct Minimizing;

impl AdversaryPolicy for Minimizing {
    const NAME: &'static str = "minimax";

    fn fold<F>(actions: &[Action], window: Window, mut child: F) -> Result<f64, StateError>
    where
        F: FnMut(Action, Window) -> Result<f64, StateError>,
    {
        let mut best = f64::INFINITY;
        for &action in actions {
            best = best.min(child(action, window)?);
        }
        Ok(best)
    }
}

pub fn minimax<S, E>(state: &S, config: &SearchConfig<E>) -> Result<SearchResult, StateError>
where
    S: GameState,
    E: Evaluator<S>,
{
    Traversal::<S, E, Minimizing>::new(config).run(state)
}
