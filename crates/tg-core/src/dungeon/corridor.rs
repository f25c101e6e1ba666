//! Corridor rasterization and carving
//!
//! A connection between two rooms is an L-shaped path between their centers.
//! The path is turned into grid cells according to a corridor style, then
//! carved into the grid.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::rng::GameRng;

use super::{CellType, Grid, Pos};

/// Corridor shape
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CorridorStyle {
    /// One cell wide
    #[default]
    Normal,
    /// Two cells wide
    Wide,
    /// Jagged, jittered by one cell across the direction of travel
    Cavern,
}

impl CorridorStyle {
    /// Pick a style from one uniform draw
    pub fn roll(rng: &mut GameRng, wide_chance: f64, cavern_chance: f64) -> Self {
        let r = rng.roll();
        if r < cavern_chance {
            CorridorStyle::Cavern
        } else if r < cavern_chance + wide_chance {
            CorridorStyle::Wide
        } else {
            CorridorStyle::Normal
        }
    }
}

/// Which leg of the L comes first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Elbow {
    HorizontalFirst,
    VerticalFirst,
}

impl Elbow {
    /// Fair coin
    pub fn random(rng: &mut GameRng) -> Self {
        if rng.coin() {
            Elbow::HorizontalFirst
        } else {
            Elbow::VerticalFirst
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Leg {
    Horizontal,
    Vertical,
}

/// L-shaped path between two points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LPath {
    pub from: Pos,
    pub to: Pos,
    pub elbow: Elbow,
}

impl LPath {
    pub fn new(from: Pos, to: Pos, elbow: Elbow) -> Self {
        Self { from, to, elbow }
    }

    /// Path with a coin-flipped elbow
    pub fn random(from: Pos, to: Pos, rng: &mut GameRng) -> Self {
        Self::new(from, to, Elbow::random(rng))
    }

    /// Where the two legs meet
    pub fn corner(&self) -> Pos {
        match self.elbow {
            Elbow::HorizontalFirst => (self.to.0, self.from.1),
            Elbow::VerticalFirst => (self.from.0, self.to.1),
        }
    }

    /// Path cells in walk order, each tagged with its leg
    ///
    /// The corner belongs to both legs and is listed twice.
    fn walk(&self) -> Vec<(Pos, Leg)> {
        let corner = self.corner();
        let (first, second) = match self.elbow {
            Elbow::HorizontalFirst => (Leg::Horizontal, Leg::Vertical),
            Elbow::VerticalFirst => (Leg::Vertical, Leg::Horizontal),
        };
        let mut cells: Vec<_> = line(self.from, corner)
            .into_iter()
            .map(|p| (p, first))
            .collect();
        cells.extend(line(corner, self.to).into_iter().map(|p| (p, second)));
        cells
    }

    /// The plain path, each cell once
    pub fn cells(&self) -> Vec<Pos> {
        dedup_in_order(self.walk().into_iter().map(|(p, _)| p))
    }

    /// Cells to carve for a given style
    ///
    /// Duplicates are removed keeping the first occurrence. With `stitch`,
    /// consecutive cavern cells are joined by the cells between them.
    pub fn rasterize(&self, style: CorridorStyle, stitch: bool, rng: &mut GameRng) -> Vec<Pos> {
        let walk = self.walk();
        match style {
            CorridorStyle::Normal => dedup_in_order(walk.into_iter().map(|(p, _)| p)),
            CorridorStyle::Wide => dedup_in_order(walk.into_iter().flat_map(|((x, y), leg)| {
                let side = match leg {
                    Leg::Horizontal => (x, y + 1),
                    Leg::Vertical => (x + 1, y),
                };
                [(x, y), side]
            })),
            CorridorStyle::Cavern => {
                let jagged: Vec<Pos> = walk
                    .into_iter()
                    .map(|((x, y), leg)| match leg {
                        Leg::Horizontal => (x, y + rng.jitter()),
                        Leg::Vertical => (x + rng.jitter(), y),
                    })
                    .collect();
                if stitch {
                    dedup_in_order(stitched(&jagged))
                } else {
                    dedup_in_order(jagged)
                }
            }
        }
    }
}

/// Straight run from `a` to `b` inclusive; the points share an axis
fn line(a: Pos, b: Pos) -> Vec<Pos> {
    let (dx, dy) = ((b.0 - a.0).signum(), (b.1 - a.1).signum());
    let steps = (b.0 - a.0).abs().max((b.1 - a.1).abs());
    (0..=steps).map(|i| (a.0 + dx * i, a.1 + dy * i)).collect()
}

/// Insert the cells needed so each step is a 4-neighbor move
///
/// Steps along x first, then y.
fn stitched(cells: &[Pos]) -> Vec<Pos> {
    let mut out = Vec::with_capacity(cells.len() * 2);
    let Some(&first) = cells.first() else {
        return out;
    };
    out.push(first);
    let mut cur = first;
    for &next in &cells[1..] {
        while cur.0 != next.0 {
            cur.0 += (next.0 - cur.0).signum();
            out.push(cur);
        }
        while cur.1 != next.1 {
            cur.1 += (next.1 - cur.1).signum();
            out.push(cur);
        }
    }
    out
}

fn dedup_in_order(cells: impl IntoIterator<Item = Pos>) -> Vec<Pos> {
    let mut seen = BTreeSet::new();
    cells.into_iter().filter(|p| seen.insert(*p)).collect()
}

/// Carve corridor cells into the grid
///
/// Cells outside the grid are skipped. With `door_chance` set, every cell
/// that is still Wall when reached becomes a door with that probability.
/// Carved cells are added to `path_tiles`. Returns the number of cells carved.
pub fn carve_cells(
    grid: &mut Grid,
    cells: &[Pos],
    door_chance: Option<f64>,
    rng: &mut GameRng,
    path_tiles: &mut BTreeSet<Pos>,
    doors: &mut BTreeSet<Pos>,
) -> usize {
    let mut carved = 0;
    for &(x, y) in cells {
        let Some(cell) = grid.get(x, y) else {
            continue;
        };
        if cell.is_wall()
            && let Some(p) = door_chance
            && rng.chance(p)
        {
            doors.insert((x, y));
        }
        grid.set(x, y, CellType::Floor);
        path_tiles.insert((x, y));
        carved += 1;
    }
    carved
}
