use crate::{
    core::{Action, Loc},
    error::StateError,
};

/// Scores a state that the search will not expand further.
///
/// Any `Fn(&S) -> f64` is an evaluator, so callers can plug in closures or
/// plain functions as well as the named evaluators in this module.
pub trait Evaluator<S> {
    fn evaluate(&self, state: &S) -> f64;
}

impl<S, F> Evaluator<S> for F
where
    F: Fn(&S) -> f64,
{
    fn evaluate(&self, state: &S) -> f64 {
        self(state)
    }
}

/// Scores taking `action` from `state`, for one-step reflex agents
pub trait ActionEvaluator<S> {
    fn evaluate_action(&self, state: &S, action: Action) -> Result<f64, StateError>;
}

/// Geometric facts about a grid state that richer evaluators read
pub trait Features {
    fn controlled_position(&self) -> Loc;
    fn adversary_positions(&self) -> Vec<Loc>;
    fn scared_timers(&self) -> Vec<u32>;
    fn food_positions(&self) -> Vec<Loc>;
    fn capsule_positions(&self) -> Vec<Loc>;
}

/// Manhattan distance from `from` to the closest of `targets`
pub fn nearest(from: Loc, targets: &[Loc]) -> Option<i32> {
    targets.iter().map(|t| from.manhattan(t)).min()
}
