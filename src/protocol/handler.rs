//! Command dispatch

use std::io::Write;

use anyhow::{bail, ensure, Context, Result};

use crate::{
    core::{Action, Outcome, World},
    engine::{Engine, SearchOptions},
};

use super::command::remainder;

/// Whether the driver should keep reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Handle one command, writing any response lines to `out`
pub fn handle_command(cmd: &str, engine: &mut Engine, out: &mut impl Write) -> Result<Flow> {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    if parts.is_empty() {
        return Ok(Flow::Continue);
    }

    match parts[0] {
        "hello" => {
            writeln!(out, "id name Specter author Ritam Nag")?;
            writeln!(out, "option name depth type spin default 2")?;
            writeln!(
                out,
                "option name agent type combo default alphabeta var reflex var minimax var alphabeta var expectimax"
            )?;
            writeln!(out, "option name heuristic type combo default better var score var better")?;
            writeln!(out, "option name strictmode type check default true")?;
            writeln!(out, "option name seed type string default none")?;
            writeln!(out, "hellook")?;
        }
        "isready" => {
            writeln!(out, "readyok")?;
        }
        "setoption" => {
            ensure!(
                parts.len() == 5 && parts[1] == "name" && parts[3] == "value",
                "invalid setoption command"
            );

            engine.set_option(parts[2], parts[4])?;
        }
        "position" => {
            ensure!(parts.len() >= 2, "position command requires at least 2 arguments");

            match parts[1] {
                "startpos" => {
                    engine.reset_world()?;
                }
                "layout" if parts.len() >= 3 => {
                    engine.set_world(World::from_layout(remainder(cmd, 2))?);
                }
                "file" if parts.len() >= 3 => {
                    let path = remainder(cmd, 2);
                    let layout = std::fs::read_to_string(path)
                        .with_context(|| format!("could not read layout file {}", path))?;

                    engine.set_world(World::from_layout(&layout)?);
                }
                _ => bail!("invalid position command"),
            }
        }
        "go" => {
            let search_options = remainder(cmd, 1).parse::<SearchOptions>()?;
            let result = engine.go(&search_options)?;

            writeln!(out, "info value {} nodes {}", result.value, result.nodes_explored)?;
            writeln!(out, "bestaction {}", result.action)?;
        }
        "apply" => {
            ensure!(parts.len() == 3, "apply command requires an agent and an action");

            let agent = parts[1].parse().context("invalid agent index")?;
            let action = parts[2].parse::<Action>()?;

            engine.apply(agent, action)?;
            write_outcome(engine, out)?;
        }
        "step" => {
            let search_options = remainder(cmd, 1).parse::<SearchOptions>()?;
            let moves = engine.step(&search_options)?;

            for (agent, action) in moves {
                match agent {
                    0 => writeln!(out, "bestaction {}", action)?,
                    _ => writeln!(out, "info agent {} action {}", agent, action)?,
                }
            }
            write_outcome(engine, out)?;
        }
        "display" => {
            writeln!(out, "{}", engine.display())?;
        }
        "getlayout" => {
            writeln!(out, "{}", engine.layout())?;
        }
        "quit" => {
            return Ok(Flow::Quit);
        }
        cmd => {
            bail!("Unknown command: {}", cmd);
        }
    }

    out.flush()?;
    Ok(Flow::Continue)
}

fn write_outcome(engine: &Engine, out: &mut impl Write) -> Result<()> {
    match engine.outcome() {
        Some(Outcome::Win) => writeln!(out, "info result win")?,
        Some(Outcome::Lose) => writeln!(out, "info result lose")?,
        None => {}
    }
    Ok(())
}
