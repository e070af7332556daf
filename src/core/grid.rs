//! Rectangular cell arrays

use super::loc::Loc;

/// Dense row-major array of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a new grid with given dimensions
    pub fn new(width: usize, height: usize, default: T) -> Self {
        Self {
            width,
            height,
            cells: vec![default; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at specified location
    pub fn get(&self, loc: Loc) -> Option<&T> {
        self.index(loc).map(|i| &self.cells[i])
    }

    /// Set cell at specified location
    pub fn set(&mut self, loc: Loc, value: T) -> bool {
        match self.index(loc) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    pub fn in_bounds(&self, loc: Loc) -> bool {
        loc.x >= 0 && loc.x < self.width as i32 && loc.y >= 0 && loc.y < self.height as i32
    }

    /// All locations in row-major order
    pub fn locs(&self) -> impl Iterator<Item = Loc> + '_ {
        (0..self.height as i32).flat_map(move |y| (0..self.width as i32).map(move |x| Loc::new(x, y)))
    }

    fn index(&self, loc: Loc) -> Option<usize> {
        if self.in_bounds(loc) {
            Some((loc.y as usize) * self.width + (loc.x as usize))
        } else {
            None
        }
    }
}

impl Grid<bool> {
    /// Out-of-bounds cells read as `false`
    pub fn is_set(&self, loc: Loc) -> bool {
        self.get(loc).copied().unwrap_or(false)
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Locations of set cells in row-major order
    pub fn as_list(&self) -> Vec<Loc> {
        self.locs().filter(|&loc| self.is_set(loc)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let mut grid = Grid::new(3, 2, false);
        assert!(grid.set(Loc::new(2, 1), true));
        assert!(!grid.set(Loc::new(3, 1), true));
        assert_eq!(grid.get(Loc::new(2, 1)), Some(&true));
        assert_eq!(grid.get(Loc::new(-1, 0)), None);
        assert!(grid.is_set(Loc::new(2, 1)));
        assert!(!grid.is_set(Loc::new(5, 5)));
    }

    #[test]
    fn test_as_list_is_row_major() {
        let mut grid = Grid::new(3, 3, false);
        grid.set(Loc::new(2, 0), true);
        grid.set(Loc::new(0, 2), true);
        grid.set(Loc::new(1, 1), true);
        assert_eq!(grid.count(), 3);
        assert_eq!(
            grid.as_list(),
            vec![Loc::new(2, 0), Loc::new(1, 1), Loc::new(0, 2)]
        );
    }
}
