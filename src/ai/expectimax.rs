//! Expectimax: adversaries modelled as choosing uniformly at random

use crate::{
    core::{Action, GameState},
    error::StateError,
    heuristics::Evaluator,
};

use super::{
    search::{SearchConfig, SearchResult},
    traversal::{AdversaryPolicy, Traversal, Window},
};

/// Adversaries average over every successor with equal weight.
/// Every branch contributes, so nothing can be pruned.
pub struct Expecting;

impl AdversaryPolicy for Expecting {
    const NAME: &'static str = "expectimax";

    fn fold<F>(actions: &[Action], window: Window, mut child: F) -> Result<f64, StateError>
    where
        F: FnMut(Action, Window) -> Result<f64, StateError>,
    {
        let p = 1.0 / actions.len() as f64;
        let mut total = 0.0;
        for &action in actions {
            total += child(action, window)?;
        }
        Ok(p * total)
    }
}

pub fn expectimax<S, E>(state: &S, config: &SearchConfig<E>) -> Result<SearchResult, StateError>
where
    S: GameState,
    E: Evaluator<S>,
{
    Traversal::<S, E, Expecting>::new(config).run(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ai::tests::{node_value, Node, TreeState},
        core::Outcome,
    };
    use test_case::test_case;

    #[test]
    fn test_two_adversaries_take_the_average() {
        let root = TreeState::new(
            Node::branch(vec![Node::branch(vec![
                Node::branch(vec![Node::leaf(5.0)]),
                Node::branch(vec![Node::leaf(2.0)]),
            ])]),
            3,
        );

        let result = expectimax(&root, &SearchConfig::new(1, node_value)).unwrap();

        assert_eq!(result.action, Action::North);
        assert!((result.value - 3.5).abs() < 1e-12);
    }

    #[test_case(&[4.0], 4.0)]
    #[test_case(&[1.0, 2.0, 6.0], 3.0)]
    #[test_case(&[-3.0, 3.0, 10.0, 2.0], 3.0)]
    #[test_case(&[0.1, 0.2, 0.3, 0.4, 0.5], 0.3)]
    fn test_uniform_expectation(values: &[f64], expected: f64) {
        let replies = values.iter().map(|&v| Node::leaf(v)).collect();
        let root = TreeState::new(Node::branch(vec![Node::branch(replies)]), 2);

        let result = expectimax(&root, &SearchConfig::new(1, node_value)).unwrap();

        assert!((result.value - expected).abs() < 1e-9);
        assert_eq!(root.generated(), 1 + values.len());
    }

    #[test]
    fn test_prefers_better_average_over_better_worst_case() {
        // North: worst 0, average 50. South: worst 10, average 10.
        let root = TreeState::new(
            Node::branch(vec![
                Node::branch(vec![Node::leaf(0.0), Node::leaf(100.0)]),
                Node::branch(vec![Node::leaf(10.0), Node::leaf(10.0)]),
            ]),
            2,
        );

        let result = expectimax(&root, &SearchConfig::new(1, node_value)).unwrap();

        assert_eq!(result.action, Action::North);
        assert_eq!(result.value, 50.0);
    }

    #[test]
    fn test_terminal_reply_counts_its_score() {
        // the win is scored as-is; only the live reply goes through the evaluator
        let root = TreeState::new(
            Node::branch(vec![Node::branch(vec![
                Node::terminal_with_moves(100.0, Outcome::Win),
                Node::leaf(0.0),
            ])]),
            2,
        );
        let config = SearchConfig::new(1, |s: &TreeState| s.node.value + 1.0);

        let result = expectimax(&root, &config).unwrap();

        assert_eq!(result.value, 50.5);
        assert_eq!(root.generated(), 3);
    }
}
