//! Agent actions

use anyhow::{anyhow, Result};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};
use std::{fmt::Display, str::FromStr};

/// A single move of one agent. `Stop` doubles as the no-op returned when
/// nothing else qualifies.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum Action {
    North = 0,
    South = 1,
    East = 2,
    West = 3,
    #[default]
    Stop = 4,
}

impl Action {
    /// Every action in canonical generation order
    pub const ALL: [Action; 5] = [
        Action::North,
        Action::South,
        Action::East,
        Action::West,
        Action::Stop,
    ];

    /// The four moving actions
    pub const DIRECTIONS: [Action; 4] = [Action::North, Action::South, Action::East, Action::West];

    /// Inverse of `to_index`; also accepted by `FromStr`
    pub fn from_index(idx: usize) -> Result<Self> {
        FromPrimitive::from_usize(idx).ok_or_else(|| anyhow!("Invalid action index: {}", idx))
    }

    pub fn to_index(&self) -> usize {
        // every variant has an explicit discriminant in range
        ToPrimitive::to_usize(self).unwrap_or(Action::Stop as usize)
    }

    /// Grid displacement `(dx, dy)`, with `y` growing southwards
    pub fn vector(&self) -> (i32, i32) {
        match self {
            Action::North => (0, -1),
            Action::South => (0, 1),
            Action::East => (1, 0),
            Action::West => (-1, 0),
            Action::Stop => (0, 0),
        }
    }

    pub fn reverse(&self) -> Self {
        match self {
            Action::North => Action::South,
            Action::South => Action::North,
            Action::East => Action::West,
            Action::West => Action::East,
            Action::Stop => Action::Stop,
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::North => write!(f, "north"),
            Action::South => write!(f, "south"),
            Action::East => write!(f, "east"),
            Action::West => write!(f, "west"),
            Action::Stop => write!(f, "stop"),
        }
    }
}

impl FromStr for Action {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(idx) = s.parse::<usize>() {
            return Action::from_index(idx);
        }

        match s.to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Action::North),
            "south" | "s" => Ok(Action::South),
            "east" | "e" => Ok(Action::East),
            "west" | "w" => Ok(Action::West),
            "stop" | "x" => Ok(Action::Stop),
            _ => Err(anyhow!("Unknown action: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_index() {
        assert_eq!(Action::from_index(0).unwrap(), Action::North);
        assert_eq!(Action::from_index(4).unwrap(), Action::Stop);
        assert!(Action::from_index(5).is_err());
    }

    #[test]
    fn test_action_to_index() {
        for (i, action) in Action::ALL.iter().enumerate() {
            assert_eq!(action.to_index(), i);
        }
    }

    #[test]
    fn test_action_parse() {
        assert_eq!("north".parse::<Action>().unwrap(), Action::North);
        assert_eq!("West".parse::<Action>().unwrap(), Action::West);
        assert_eq!("x".parse::<Action>().unwrap(), Action::Stop);
        assert_eq!("2".parse::<Action>().unwrap(), Action::East);
        assert!("up".parse::<Action>().is_err());
        assert!("7".parse::<Action>().is_err());
    }

    #[test]
    fn test_reverse_cancels_vector() {
        for action in Action::ALL {
            let (dx, dy) = action.vector();
            let (rx, ry) = action.reverse().vector();
            assert_eq!((dx + rx, dy + ry), (0, 0));
        }
    }

    #[test]
    fn test_default_is_noop() {
        assert_eq!(Action::default(), Action::Stop);
    }
}
