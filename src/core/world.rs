//! Grid chase game: one controlled agent collecting food while adversaries hunt it

use super::{
    action::Action,
    grid::Grid,
    loc::Loc,
    state::{AgentIndex, GameState, CONTROLLED},
};
use crate::{error::StateError, heuristics::Features};

/// Points lost on every controlled move
pub const TIME_PENALTY: f64 = 1.0;
/// Points for one food pellet
pub const FOOD_REWARD: f64 = 10.0;
/// Bonus for clearing the last pellet
pub const WIN_REWARD: f64 = 500.0;
/// Penalty for touching an unscared adversary
pub const LOSE_PENALTY: f64 = 500.0;
/// Points for catching a scared adversary
pub const CATCH_REWARD: f64 = 200.0;
/// Adversary moves an adversary stays scared after a capsule is eaten
pub const SCARED_TIME: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
}

/// Position and status of one agent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentState {
    pub loc: Loc,
    pub start: Loc,
    /// Last action taken; `Stop` before the first move
    pub direction: Action,
    pub scared_timer: u32,
}

impl AgentState {
    pub fn new(loc: Loc) -> Self {
        Self {
            loc,
            start: loc,
            direction: Action::Stop,
            scared_timer: 0,
        }
    }

    pub fn is_scared(&self) -> bool {
        self.scared_timer > 0
    }
}

/// Full game state. Agent 0 is the controlled agent, the rest are adversaries.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub walls: Grid<bool>,
    pub food: Grid<bool>,
    pub capsules: Vec<Loc>,
    pub agents: Vec<AgentState>,
    pub score: f64,
    pub outcome: Option<Outcome>,
}

impl World {
    pub fn new(
        walls: Grid<bool>,
        food: Grid<bool>,
        capsules: Vec<Loc>,
        controlled: Loc,
        adversaries: &[Loc],
    ) -> Self {
        let agents = std::iter::once(controlled)
            .chain(adversaries.iter().copied())
            .map(AgentState::new)
            .collect();

        Self {
            walls,
            food,
            capsules,
            agents,
            score: 0.0,
            outcome: None,
        }
    }

    pub fn width(&self) -> usize {
        self.walls.width()
    }

    pub fn height(&self) -> usize {
        self.walls.height()
    }

    /// Out-of-bounds cells count as walls
    pub fn is_wall(&self, loc: Loc) -> bool {
        !self.walls.in_bounds(loc) || self.walls.is_set(loc)
    }

    pub fn controlled(&self) -> &AgentState {
        &self.agents[CONTROLLED]
    }

    pub fn adversaries(&self) -> &[AgentState] {
        &self.agents[1..]
    }

    pub fn num_food(&self) -> usize {
        self.food.count()
    }

    /// Directions from `loc` that do not run into a wall
    fn open_directions(&self, loc: Loc) -> Vec<Action> {
        Action::DIRECTIONS
            .into_iter()
            .filter(|&dir| !self.is_wall(loc.step(dir)))
            .collect()
    }

    fn move_controlled(&mut self, action: Action) {
        let agent = &mut self.agents[CONTROLLED];
        agent.loc = agent.loc.step(action);
        agent.direction = action;
        let loc = agent.loc;

        if self.food.is_set(loc) {
            self.food.set(loc, false);
            self.score += FOOD_REWARD;
            if self.num_food() == 0 && self.outcome != Some(Outcome::Lose) {
                self.score += WIN_REWARD;
                self.outcome = Some(Outcome::Win);
            }
        }

        if let Some(i) = self.capsules.iter().position(|&c| c == loc) {
            self.capsules.remove(i);
            for ghost in self.agents.iter_mut().skip(1) {
                ghost.scared_timer = SCARED_TIME;
            }
        }

        self.score -= TIME_PENALTY;
    }

    fn move_adversary(&mut self, agent: AgentIndex, action: Action) {
        let ghost = &mut self.agents[agent];
        ghost.loc = ghost.loc.step(action);
        ghost.direction = action;
        ghost.scared_timer = ghost.scared_timer.saturating_sub(1);
    }

    /// Resolve contact between the controlled agent and the given adversaries
    fn resolve_contacts(&mut self, adversaries: impl IntoIterator<Item = AgentIndex>) {
        let loc = self.agents[CONTROLLED].loc;

        for idx in adversaries {
            if self.agents[idx].loc != loc {
                continue;
            }

            if self.agents[idx].is_scared() {
                self.score += CATCH_REWARD;
                let ghost = &mut self.agents[idx];
                ghost.loc = ghost.start;
                ghost.direction = Action::Stop;
                ghost.scared_timer = 0;
            } else if self.outcome.is_none() {
                self.score -= LOSE_PENALTY;
                self.outcome = Some(Outcome::Lose);
            }
        }
    }
}

impl GameState for World {
    fn is_win(&self) -> bool {
        self.outcome == Some(Outcome::Win)
    }

    fn is_lose(&self) -> bool {
        self.outcome == Some(Outcome::Lose)
    }

    fn score(&self) -> f64 {
        self.score
    }

    fn num_agents(&self) -> usize {
        self.agents.len()
    }

    fn legal_actions(&self, agent: AgentIndex) -> Vec<Action> {
        if self.is_terminal() || agent >= self.agents.len() {
            return Vec::new();
        }

        let state = &self.agents[agent];
        let mut actions = self.open_directions(state.loc);

        if agent == CONTROLLED {
            actions.push(Action::Stop);
        } else if actions.len() > 1 {
            let reverse = state.direction.reverse();
            actions.retain(|&a| a != reverse);
        }

        actions
    }

    fn generate_successor(&self, agent: AgentIndex, action: Action) -> Result<Self, StateError> {
        if agent >= self.agents.len() {
            return Err(StateError::AgentOutOfRange {
                agent,
                num_agents: self.agents.len(),
            });
        }
        if !self.legal_actions(agent).contains(&action) {
            return Err(StateError::InvalidAction { agent, action });
        }

        let mut next = self.clone();
        if agent == CONTROLLED {
            next.move_controlled(action);
            next.resolve_contacts(1..next.agents.len());
        } else {
            next.move_adversary(agent, action);
            next.resolve_contacts([agent]);
        }

        Ok(next)
    }
}

impl Features for World {
    fn controlled_position(&self) -> Loc {
        self.controlled().loc
    }

    fn adversary_positions(&self) -> Vec<Loc> {
        self.adversaries().iter().map(|a| a.loc).collect()
    }

    fn scared_timers(&self) -> Vec<u32> {
        self.adversaries().iter().map(|a| a.scared_timer).collect()
    }

    fn food_positions(&self) -> Vec<Loc> {
        self.food.as_list()
    }

    fn capsule_positions(&self) -> Vec<Loc> {
        self.capsules.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> World {
        // %%%%%%%
        // %P.o G%
        // %%%%%%%
        World::from_layout("%%%%%%%/%P.o_G%/%%%%%%%").unwrap()
    }

    #[test]
    fn test_controlled_legal_actions_include_stop() {
        let world = corridor();
        assert_eq!(world.legal_actions(0), vec![Action::East, Action::Stop]);
    }

    #[test]
    fn test_adversary_never_stops_or_reverses() {
        let world = World::from_layout("%%%%%%%/%P.._G%/%%%%%%%").unwrap();
        assert_eq!(world.legal_actions(1), vec![Action::West]);

        let moved = world.generate_successor(1, Action::West).unwrap();
        // reversing is only allowed when nothing else is open
        assert_eq!(moved.legal_actions(1), vec![Action::West]);
    }

    #[test]
    fn test_dead_end_allows_reversal() {
        let world = World::from_layout("%%%%%%%/%P__G_%/%%%%%%%").unwrap();
        let moved = world.generate_successor(1, Action::East).unwrap();
        assert_eq!(moved.agents[1].direction, Action::East);
        assert_eq!(moved.legal_actions(1), vec![Action::West]);
    }

    #[test]
    fn test_eating_food_scores() {
        let world = corridor();
        let next = world.generate_successor(0, Action::East).unwrap();
        assert_eq!(next.num_food(), 0);
        assert!(next.is_win());
        assert_eq!(next.score(), FOOD_REWARD - TIME_PENALTY + WIN_REWARD);
    }

    #[test]
    fn test_capsule_scares_adversaries() {
        let world = World::from_layout("%%%%%%%%/%Po.._G%/%%%%%%%%").unwrap();
        let next = world.generate_successor(0, Action::East).unwrap();
        assert!(next.capsules.is_empty());
        assert!(next.adversaries().iter().all(|g| g.scared_timer == SCARED_TIME));

        let after_ghost = next.generate_successor(1, Action::West).unwrap();
        assert_eq!(after_ghost.agents[1].scared_timer, SCARED_TIME - 1);
    }

    #[test]
    fn test_touching_unscared_adversary_loses() {
        let world = World::from_layout("%%%%%/%PG.%/%%%%%").unwrap();
        let next = world.generate_successor(0, Action::East).unwrap();
        assert!(next.is_lose());
        assert_eq!(next.score(), -TIME_PENALTY - LOSE_PENALTY);
        assert!(next.legal_actions(0).is_empty());
        assert!(next.legal_actions(1).is_empty());
    }

    #[test]
    fn test_catching_scared_adversary_sends_it_home() {
        let mut world = World::from_layout("%%%%%%/%PG_.%/%%%%%%").unwrap();
        world.agents[1].scared_timer = 5;
        world.agents[1].start = Loc::new(4, 1);

        let next = world.generate_successor(0, Action::East).unwrap();
        assert!(!next.is_terminal());
        assert_eq!(next.score(), CATCH_REWARD - TIME_PENALTY);
        assert_eq!(next.agents[1].loc, Loc::new(4, 1));
        assert_eq!(next.agents[1].scared_timer, 0);
    }

    #[test]
    fn test_illegal_action_is_rejected() {
        let world = corridor();
        assert_eq!(
            world.generate_successor(0, Action::North),
            Err(StateError::InvalidAction {
                agent: 0,
                action: Action::North
            })
        );
        assert_eq!(
            world.generate_successor(7, Action::West),
            Err(StateError::AgentOutOfRange {
                agent: 7,
                num_agents: 2
            })
        );
    }

    #[test]
    fn test_successor_leaves_parent_untouched() {
        let world = corridor();
        let before = world.clone();
        let _ = world.generate_successor(0, Action::East).unwrap();
        assert_eq!(world, before);
    }

    #[test]
    fn test_features() {
        let world = corridor();
        assert_eq!(world.controlled_position(), Loc::new(1, 1));
        assert_eq!(world.adversary_positions(), vec![Loc::new(5, 1)]);
        assert_eq!(world.scared_timers(), vec![0]);
        assert_eq!(world.food_positions(), vec![Loc::new(2, 1)]);
        assert_eq!(world.capsule_positions(), vec![Loc::new(3, 1)]);
    }
}
