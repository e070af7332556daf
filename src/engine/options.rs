/// Configuration options for the engine
use anyhow::{bail, Context, Result};
use std::{fmt::Display, str::FromStr};

use crate::ai::Algorithm;

/// Which evaluator scores search leaves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeuristicType {
    Score,
    Better,
}

impl FromStr for HeuristicType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "score" => Ok(HeuristicType::Score),
            "better" => Ok(HeuristicType::Better),
            _ => bail!("Unknown heuristic type: {}", s),
        }
    }
}

impl Display for HeuristicType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeuristicType::Score => write!(f, "score"),
            HeuristicType::Better => write!(f, "better"),
        }
    }
}

/// How the engine picks the controlled agent's move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentType {
    Reflex,
    Search(Algorithm),
}

impl FromStr for AgentType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reflex" => Ok(AgentType::Reflex),
            _ => Ok(AgentType::Search(
                s.parse().with_context(|| format!("Unknown agent type: {}", s))?,
            )),
        }
    }
}

impl Display for AgentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentType::Reflex => write!(f, "reflex"),
            AgentType::Search(algorithm) => write!(f, "{}", algorithm),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Plies searched per move
    pub depth: u32,
    /// The agent used for the controlled player
    pub agent: AgentType,
    /// The heuristic used at search leaves
    pub heuristic: HeuristicType,
    /// Whether the driver aborts on the first error
    pub strict_mode: bool,
    /// Seed for adversary moves and reflex tie-breaks; `None` uses the build default
    pub seed: Option<u64>,
}

impl EngineOptions {
    /// Set a single option by its protocol name
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "depth" => self.depth = value.parse().context("invalid depth")?,
            "agent" => self.agent = value.parse()?,
            "heuristic" => self.heuristic = value.parse()?,
            "strictmode" => self.strict_mode = value.parse().context("invalid strictmode")?,
            "seed" => {
                self.seed = match value {
                    "none" => None,
                    _ => Some(value.parse().context("invalid seed")?),
                }
            }
            _ => bail!("Unknown option: {}", name),
        }

        Ok(())
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            depth: 2,
            agent: AgentType::Search(Algorithm::AlphaBeta),
            heuristic: HeuristicType::Better,
            strict_mode: true,
            seed: None,
        }
    }
}
