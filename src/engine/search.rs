use anyhow::{bail, Context};
use std::str::FromStr;

use super::options::{AgentType, EngineOptions};

/// Per-move overrides of the engine options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub depth: Option<u32>,
    pub agent: Option<AgentType>,
}

impl SearchOptions {
    pub fn depth(&self, options: &EngineOptions) -> u32 {
        self.depth.unwrap_or(options.depth)
    }

    pub fn agent(&self, options: &EngineOptions) -> AgentType {
        self.agent.unwrap_or(options.agent)
    }
}

impl FromStr for SearchOptions {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut i = 0;
        let mut search_options = SearchOptions::default();

        let parts = s.split_whitespace().collect::<Vec<_>>();

        while i < parts.len() {
            match parts[i] {
                "depth" if i + 1 < parts.len() => {
                    let depth = parts[i + 1].parse().context("invalid depth")?;
                    search_options.depth = Some(depth);
                    i += 1;
                }
                "agent" if i + 1 < parts.len() => {
                    search_options.agent = Some(parts[i + 1].parse()?);
                    i += 1;
                }
                p => bail!("invalid go argument {}", p),
            }
            i += 1;
        }

        Ok(search_options)
    }
}
