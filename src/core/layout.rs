//! Text layouts: `%` wall, `.` food, `o` capsule, `P` controlled agent,
//! `G` adversary, space or `_` empty.
//!
//! Rows are separated by newlines in layout files and by `/` on the
//! protocol line.

use anyhow::{bail, ensure, Context, Result};
use indoc::indoc;

use super::{grid::Grid, loc::Loc, world::World};

/// Layout loaded by `position startpos`
pub const DEFAULT_LAYOUT: &str = indoc! {"
    %%%%%%%%%%%%%%%%%%%%
    %......%G  G%......%
    %.%%...%%  %%...%%.%
    %.%o.%........%.o%.%
    %.%%.%.%%%%%%.%.%%.%
    %........P.........%
    %%%%%%%%%%%%%%%%%%%%
"};

impl World {
    /// Parse a layout, one row per line or `/`-separated
    pub fn from_layout(layout: &str) -> Result<Self> {
        let rows: Vec<&str> = if layout.contains('\n') {
            layout.lines().map(|l| l.trim_end_matches('\r')).collect()
        } else {
            layout.trim_matches(|c| c == '\n' || c == '\r').split('/').collect()
        };
        // spaces are empty cells, so only wholly blank rows are dropped
        let rows: Vec<&str> = rows.into_iter().filter(|r| !r.is_empty()).collect();
        ensure!(!rows.is_empty(), "Empty layout");

        let width = rows[0].chars().count();
        let height = rows.len();

        let mut walls = Grid::new(width, height, false);
        let mut food = Grid::new(width, height, false);
        let mut capsules = Vec::new();
        let mut controlled = None;
        let mut adversaries = Vec::new();

        for (y, row) in rows.iter().enumerate() {
            ensure!(
                row.chars().count() == width,
                "Invalid row length in layout row {}: expected {}, got {}",
                y,
                width,
                row.chars().count()
            );

            for (x, c) in row.chars().enumerate() {
                let loc = Loc::new(x as i32, y as i32);
                match c {
                    '%' => {
                        walls.set(loc, true);
                    }
                    '.' => {
                        food.set(loc, true);
                    }
                    'o' => capsules.push(loc),
                    'P' => {
                        ensure!(controlled.is_none(), "Layout has more than one controlled agent");
                        controlled = Some(loc);
                    }
                    'G' => adversaries.push(loc),
                    ' ' | '_' => {}
                    _ => bail!("Invalid layout char '{}' at {}", c, loc),
                }
            }
        }

        let controlled = controlled.context("Layout has no controlled agent")?;

        Ok(World::new(walls, food, capsules, controlled, &adversaries))
    }

    /// Serialize the current positions as a single-line layout
    pub fn to_layout(&self) -> String {
        let mut rows = Vec::with_capacity(self.height());

        for y in 0..self.height() as i32 {
            let row: String = (0..self.width() as i32)
                .map(|x| self.layout_char(Loc::new(x, y)))
                .collect();
            rows.push(row);
        }

        rows.join("/")
    }

    /// Character for one cell; agents shadow whatever is beneath them
    pub(crate) fn layout_char(&self, loc: Loc) -> char {
        if self.controlled().loc == loc {
            'P'
        } else if self.adversaries().iter().any(|a| a.loc == loc) {
            'G'
        } else if self.walls.is_set(loc) {
            '%'
        } else if self.food.is_set(loc) {
            '.'
        } else if self.capsules.contains(&loc) {
            'o'
        } else {
            '_'
        }
    }
}
