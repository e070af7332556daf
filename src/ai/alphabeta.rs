//! Minimax with alpha-beta pruning.
//!
//! Cutoffs are strict: a subtree is abandoned only once its value is
//! provably outside the window, never when it merely touches a bound. This
//! keeps both the root value and the earliest-wins tie-break identical to
//! plain minimax.

use crate::{
    core::{Action, GameState},
    error::StateError,
    heuristics::Evaluator,
};

use super::{
    search::{SearchConfig, SearchResult},
    traversal::{AdversaryPolicy, Traversal, Window},
};

/// Minimizing adversaries that stop as soon as they drop below `alpha`
pub struct Pruning;

impl AdversaryPolicy for Pruning {
    const NAME: &'static str = "alphabeta";
    const PRUNES: bool = true;

    fn fold<F>(actions: &[Action], window: Window, mut child: F) -> Result<f64, StateError>
    where
        F: FnMut(Action, Window) -> Result<f64, StateError>,
    {
        let Window { alpha, mut beta } = window;
        let mut best = f64::INFINITY;

        for &action in actions {
            let value = child(action, Window { alpha, beta })?;

            if value < best {
                best = value;

                if best < alpha {
                    return Ok(best);
                }
                beta = beta.min(best);
            }
        }

        Ok(best)
    }
}

pub fn alphabeta<S, E>(state: &S, config: &SearchConfig<E>) -> Result<SearchResult, StateError>
where
    S: GameState,
    E: Evaluator<S>,
{
    Traversal::<S, E, Pruning>::new(config).run(state)
}
