use std::{
    fmt::Display,
    ops::{Add, Sub},
};

use super::action::Action;

/// A cell on the grid; `x` is the column and `y` the row, counted from the top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Loc {
    pub x: i32,
    pub y: i32,
}

impl Loc {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn manhattan(&self, other: &Loc) -> i32 {
        (self - other).length()
    }

    /// The cell reached by taking `action` from here
    pub fn step(&self, action: Action) -> Loc {
        self + &LocDelta::from(action)
    }
}

impl Display for Loc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocDelta {
    pub dx: i32,
    pub dy: i32,
}

impl LocDelta {
    pub fn length(&self) -> i32 {
        self.dx.abs() + self.dy.abs()
    }
}

impl From<Action> for LocDelta {
    fn from(action: Action) -> Self {
        let (dx, dy) = action.vector();
        Self { dx, dy }
    }
}

impl Add<&LocDelta> for &Loc {
    type Output = Loc;

    fn add(self, other: &LocDelta) -> Self::Output {
        Loc {
            x: self.x + other.dx,
            y: self.y + other.dy,
        }
    }
}

impl Sub<&Loc> for &Loc {
    type Output = LocDelta;

    fn sub(self, other: &Loc) -> Self::Output {
        LocDelta {
            dx: self.x - other.x,
            dy: self.y - other.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan() {
        let a = Loc::new(1, 1);
        let b = Loc::new(4, -1);
        assert_eq!(a.manhattan(&b), 5);
        assert_eq!(b.manhattan(&a), 5);
        assert_eq!(a.manhattan(&a), 0);
    }

    #[test]
    fn test_step() {
        let loc = Loc::new(3, 3);
        assert_eq!(loc.step(Action::North), Loc::new(3, 2));
        assert_eq!(loc.step(Action::South), Loc::new(3, 4));
        assert_eq!(loc.step(Action::East), Loc::new(4, 3));
        assert_eq!(loc.step(Action::West), Loc::new(2, 3));
        assert_eq!(loc.step(Action::Stop), loc);
    }

    #[test]
    fn test_display() {
        assert_eq!(Loc::new(2, 5).to_string(), "2,5");
    }
}
