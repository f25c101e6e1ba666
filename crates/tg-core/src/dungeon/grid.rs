//! Generation grid
//!
//! Row-major `width × height` array of cells. Coordinates are signed so that
//! jittered or widened corridor cells can be tested against the bounds before
//! they are carved.

use std::collections::{BTreeSet, VecDeque};
use std::fmt;

use super::{CellType, Pos, Rectangle};

/// 4-neighborhood offsets (W, E, N, S)
pub const AXIS_DIRS: [Pos; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// 8-neighborhood offsets
pub const ALL_DIRS: [Pos; 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Dungeon cell grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellType>,
}

impl Grid {
    /// Create a grid with every cell Void
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellType::Void; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if a coordinate is inside the grid
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| y as usize * self.width + x as usize)
    }

    /// Cell at a coordinate, `None` outside the grid
    pub fn get(&self, x: i32, y: i32) -> Option<CellType> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Check a cell's type; out-of-bounds never matches
    pub fn is(&self, x: i32, y: i32, typ: CellType) -> bool {
        self.get(x, y) == Some(typ)
    }

    /// Set a cell, ignoring out-of-bounds coordinates
    ///
    /// Returns whether the coordinate was inside the grid.
    pub fn set(&mut self, x: i32, y: i32, typ: CellType) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = typ;
                true
            }
            None => false,
        }
    }

    /// Number of cells of a given type
    pub fn count(&self, typ: CellType) -> usize {
        self.cells.iter().filter(|&&c| c == typ).count()
    }

    /// Every coordinate, row by row
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height as i32).flat_map(move |y| (0..self.width as i32).map(move |x| (x, y)))
    }

    /// Coordinates of all cells of a given type, row by row
    pub fn positions_of(&self, typ: CellType) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(move |&(x, y)| self.is(x, y, typ))
    }

    /// Check if any 8-neighbor of a cell has the given type
    pub fn any_neighbor(&self, x: i32, y: i32, typ: CellType) -> bool {
        ALL_DIRS.iter().any(|&(dx, dy)| self.is(x + dx, y + dy, typ))
    }

    /// Binary wall mask for output: rows of `width` values, 1 = wall
    pub fn wall_mask(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.width.max(1))
            .map(|row| row.iter().map(CellType::mask_bit).collect())
            .collect()
    }

    /// Rebuild a grid from a wall mask
    ///
    /// Non-wall cells come back as Floor since the mask cannot tell Void from
    /// Floor. Returns `None` for an empty or ragged mask.
    pub fn from_wall_mask(mask: &[Vec<u8>]) -> Option<Self> {
        let height = mask.len();
        let width = mask.first()?.len();
        if width == 0 || mask.iter().any(|row| row.len() != width) {
            return None;
        }
        let cells = mask
            .iter()
            .flat_map(|row| row.iter().map(|&bit| CellType::from_mask_bit(bit)))
            .collect();
        Some(Self {
            width,
            height,
            cells,
        })
    }

    /// Floor cells 4-connected to `start`
    ///
    /// With `within`, the search never leaves that rectangle. Returns an empty
    /// set when `start` is not Floor.
    pub fn floor_region(&self, start: Pos, within: Option<&Rectangle>) -> BTreeSet<Pos> {
        let allowed = |(x, y): Pos| {
            self.is(x, y, CellType::Floor) && within.is_none_or(|r| r.contains(x, y))
        };

        let mut seen = BTreeSet::new();
        if !allowed(start) {
            return seen;
        }

        let mut queue = VecDeque::from([start]);
        seen.insert(start);
        while let Some((x, y)) = queue.pop_front() {
            for (dx, dy) in AXIS_DIRS {
                let next = (x + dx, y + dy);
                if allowed(next) && seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            let line: String = row.iter().map(CellType::glyph).collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
