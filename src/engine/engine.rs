use crate::ai::{search, ReflexAgent, SearchConfig, SearchResult};
use crate::core::{Action, AgentIndex, GameState, Outcome, World, CONTROLLED, DEFAULT_LAYOUT};
use crate::heuristics::{ActionEvaluator, BetterEvaluator, ReflexEvaluator, ScoreEvaluator};
use crate::utils::seeded_rng;

use super::options::{AgentType, EngineOptions, HeuristicType};
use super::search::SearchOptions;

use anyhow::{bail, ensure, Result};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Engine owns the current world and picks moves for the controlled agent
pub struct Engine {
    pub world: World,
    pub options: EngineOptions,
    rng: StdRng,
}

impl Engine {
    /// Create a new engine on the default layout with default options
    pub fn new() -> Result<Self> {
        let options = EngineOptions::default();

        Ok(Self {
            world: World::from_layout(DEFAULT_LAYOUT)?,
            rng: seeded_rng(options.seed),
            options,
        })
    }

    /// Replace the current world
    pub fn set_world(&mut self, world: World) {
        self.world = world;
    }

    pub fn reset_world(&mut self) -> Result<()> {
        self.world = World::from_layout(DEFAULT_LAYOUT)?;
        Ok(())
    }

    /// Set engine options. Changing the seed restarts the random stream.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        self.options.set_option(name, value)?;

        if name == "seed" {
            self.rng = seeded_rng(self.options.seed);
        }

        Ok(())
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.world.outcome
    }

    /// Choose the controlled agent's action without playing it
    pub fn go(&mut self, search_options: &SearchOptions) -> Result<SearchResult> {
        let depth = search_options.depth(&self.options);
        let agent = search_options.agent(&self.options);

        let result = match agent {
            AgentType::Reflex => self.reflex()?,
            AgentType::Search(algorithm) => match self.options.heuristic {
                HeuristicType::Score => {
                    search(&self.world, &SearchConfig::new(depth, ScoreEvaluator), algorithm)?
                }
                HeuristicType::Better => search(
                    &self.world,
                    &SearchConfig::new(depth, BetterEvaluator::default()),
                    algorithm,
                )?,
            },
        };

        log::info!(
            "{:<12}{:<12}{:<16}{:<16}{}",
            agent,
            format!("depth {}", depth),
            format!("value {:.1}", result.value),
            format!("nodes {}", result.nodes_explored),
            result.action,
        );

        Ok(result)
    }

    fn reflex(&mut self) -> Result<SearchResult> {
        let agent = ReflexAgent::new(ReflexEvaluator);
        let action = agent.choose(&self.world, &mut self.rng)?;

        let value = if self.world.legal_actions(CONTROLLED).contains(&action) {
            agent.evaluator.evaluate_action(&self.world, action)?
        } else {
            self.world.score()
        };

        Ok(SearchResult {
            action,
            value,
            nodes_explored: self.world.legal_actions(CONTROLLED).len() as u64,
        })
    }

    /// Play a single action for one agent
    pub fn apply(&mut self, agent: AgentIndex, action: Action) -> Result<()> {
        ensure!(!self.world.is_terminal(), "Game is already over");
        self.world = self.world.generate_successor(agent, action)?;
        Ok(())
    }

    /// Play one full round: the engine's choice for the controlled agent,
    /// then a uniformly random legal move for each adversary in turn.
    /// Returns every move made; the round ends early if the game does.
    pub fn step(&mut self, search_options: &SearchOptions) -> Result<Vec<(AgentIndex, Action)>> {
        if self.world.is_terminal() {
            bail!("Game is already over");
        }

        let result = self.go(search_options)?;
        self.apply(CONTROLLED, result.action)?;

        let mut moves = vec![(CONTROLLED, result.action)];

        for agent in 1..self.world.num_agents() {
            if self.world.is_terminal() {
                break;
            }

            let actions = self.world.legal_actions(agent);
            let Some(&action) = actions.choose(&mut self.rng) else {
                continue;
            };

            self.apply(agent, action)?;
            moves.push((agent, action));
        }

        log::debug!("{:<12}{}", "step", self.world.to_layout());

        Ok(moves)
    }

    /// Render the world for a terminal
    pub fn display(&self) -> String {
        self.world.to_string()
    }

    pub fn layout(&self) -> String {
        self.world.to_layout()
    }
}
