//! Search entry points

use std::{fmt::Display, str::FromStr};

use anyhow::bail;

use crate::{
    core::{Action, GameState},
    error::StateError,
    heuristics::Evaluator,
};

use super::{alphabeta::alphabeta, expectimax::expectimax, minimax::minimax};

/// Fixed for the duration of one search call
#[derive(Debug, Clone)]
pub struct SearchConfig<E> {
    /// Plies to explore; 0 evaluates the root directly
    pub depth: u32,
    pub evaluator: E,
}

impl<E> SearchConfig<E> {
    pub fn new(depth: u32, evaluator: E) -> Self {
        Self { depth, evaluator }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// Best action for the controlled agent, `Stop` when none qualifies
    pub action: Action,
    pub value: f64,
    /// Successor states generated
    pub nodes_explored: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Minimax,
    AlphaBeta,
    Expectimax,
}

impl FromStr for Algorithm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimax" => Ok(Algorithm::Minimax),
            "alphabeta" => Ok(Algorithm::AlphaBeta),
            "expectimax" => Ok(Algorithm::Expectimax),
            _ => bail!("Unknown algorithm: {}", s),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Minimax => write!(f, "minimax"),
            Algorithm::AlphaBeta => write!(f, "alphabeta"),
            Algorithm::Expectimax => write!(f, "expectimax"),
        }
    }
}

/// Run `algorithm` from `state`
pub fn search<S, E>(
    state: &S,
    config: &SearchConfig<E>,
    algorithm: Algorithm,
) -> Result<SearchResult, StateError>
where
    S: GameState,
    E: Evaluator<S>,
{
    match algorithm {
        Algorithm::Minimax => minimax(state, config),
        Algorithm::AlphaBeta => alphabeta(state, config),
        Algorithm::Expectimax => expectimax(state, config),
    }
}

/// Pick the controlled agent's action. Returns `Stop` when it has no legal
/// actions, the state is terminal, or `depth` is 0.
pub fn choose_action<S, E>(
    state: &S,
    depth: u32,
    evaluator: E,
    algorithm: Algorithm,
) -> Result<Action, StateError>
where
    S: GameState,
    E: Evaluator<S>,
{
    let config = SearchConfig::new(depth, evaluator);
    Ok(search(state, &config, algorithm)?.action)
}
