//! Agent cycling, depth accounting and leaf detection shared by every search.
//!
//! The controlled agent always moves first in a ply, then each adversary in
//! index order. The ply counter advances only when control wraps back to the
//! controlled agent. The three algorithms differ only in how an adversary
//! folds the values of its successors, which is what [`AdversaryPolicy`]
//! captures.

use std::marker::PhantomData;

use crate::{
    core::{Action, AgentIndex, GameState, CONTROLLED},
    error::StateError,
    heuristics::Evaluator,
};

use super::search::{SearchConfig, SearchResult};

/// Who moves after a given agent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextTurn {
    Adversary(AgentIndex),
    /// Control wraps to agent 0 and the ply counter advances
    Controlled,
}

pub fn next_turn(agent: AgentIndex, num_agents: usize) -> NextTurn {
    let next = agent + 1;
    if next < num_agents {
        NextTurn::Adversary(next)
    } else {
        NextTurn::Controlled
    }
}

/// Pruning bounds owned by one recursion frame and copied into its children
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    /// Best value the controlled agent can already guarantee
    pub alpha: f64,
    /// Best value the adversaries can already guarantee
    pub beta: f64,
}

impl Window {
    pub const FULL: Window = Window {
        alpha: f64::NEG_INFINITY,
        beta: f64::INFINITY,
    };
}

impl Default for Window {
    fn default() -> Self {
        Self::FULL
    }
}

/// How an adversary turns the values of its successors into one value
pub trait AdversaryPolicy {
    const NAME: &'static str;

    /// Whether the maximizing step may cut off against `beta`
    const PRUNES: bool = false;

    /// `child(action, window)` computes the value of the successor reached by
    /// `action`; `actions` is never empty.
    fn fold<F>(actions: &[Action], window: Window, child: F) -> Result<f64, StateError>
    where
        F: FnMut(Action, Window) -> Result<f64, StateError>;
}

/// One search over a fixed configuration
pub struct Traversal<'c, S, E, P> {
    config: &'c SearchConfig<E>,
    nodes: u64,
    _marker: PhantomData<fn(&S) -> P>,
}

impl<'c, S, E, P> Traversal<'c, S, E, P>
where
    S: GameState,
    E: Evaluator<S>,
    P: AdversaryPolicy,
{
    pub fn new(config: &'c SearchConfig<E>) -> Self {
        Self {
            config,
            nodes: 0,
            _marker: PhantomData,
        }
    }

    /// Search from `root` and report the best action for the controlled agent
    pub fn run(mut self, root: &S) -> Result<SearchResult, StateError> {
        let (value, action) = self.max_value(root, 0, Window::FULL)?;

        log::debug!(
            "{:<12}depth {:<4}value {:<12}nodes {}",
            P::NAME,
            self.config.depth,
            value,
            self.nodes
        );

        Ok(SearchResult {
            action: action.unwrap_or_default(),
            value,
            nodes_explored: self.nodes,
        })
    }

    /// Controlled agent's step. Returns the value and, unless the state is a
    /// leaf, the earliest action achieving it.
    fn max_value(
        &mut self,
        state: &S,
        ply: u32,
        mut window: Window,
    ) -> Result<(f64, Option<Action>), StateError> {
        if state.is_terminal() {
            return Ok((state.score(), None));
        }
        if ply >= self.config.depth {
            return Ok((self.config.evaluator.evaluate(state), None));
        }

        let actions = state.legal_actions(CONTROLLED);
        if actions.is_empty() {
            return Ok((self.config.evaluator.evaluate(state), None));
        }

        let mut best = f64::NEG_INFINITY;
        let mut best_action = None;

        for action in actions {
            let next = self.successor(state, CONTROLLED, action)?;
            let value = self.successor_value(&next, ply, CONTROLLED, window)?;

            // strict: ties keep the earliest action
            if value > best {
                best = value;
                best_action = Some(action);

                if P::PRUNES {
                    if best > window.beta {
                        return Ok((best, best_action));
                    }
                    window.alpha = window.alpha.max(best);
                }
            }
        }

        Ok((best, best_action))
    }

    fn adversary_value(
        &mut self,
        state: &S,
        ply: u32,
        agent: AgentIndex,
        window: Window,
    ) -> Result<f64, StateError> {
        if state.is_terminal() {
            return Ok(state.score());
        }

        let actions = state.legal_actions(agent);
        if actions.is_empty() {
            return Ok(self.config.evaluator.evaluate(state));
        }

        P::fold(&actions, window, |action, window| {
            let next = self.successor(state, agent, action)?;
            self.successor_value(&next, ply, agent, window)
        })
    }

    /// Value of a state reached by `mover`'s action, dispatched to whoever moves next
    fn successor_value(
        &mut self,
        next: &S,
        ply: u32,
        mover: AgentIndex,
        window: Window,
    ) -> Result<f64, StateError> {
        match next_turn(mover, next.num_agents()) {
            NextTurn::Adversary(agent) => self.adversary_value(next, ply, agent, window),
            NextTurn::Controlled => Ok(self.max_value(next, ply + 1, window)?.0),
        }
    }

    fn successor(&mut self, state: &S, agent: AgentIndex, action: Action) -> Result<S, StateError> {
        self.nodes += 1;
        state.generate_successor(agent, action)
    }
}
