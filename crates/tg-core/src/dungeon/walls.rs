//! Wall inference

use super::{CellType, Grid};

/// Turn every Void cell that touches Floor (8-neighborhood) into Wall
///
/// Only Void cells change, so running it twice is a no-op. Returns the number
/// of cells converted.
pub fn infer_walls(grid: &mut Grid) -> usize {
    let shell: Vec<_> = grid
        .positions_of(CellType::Void)
        .filter(|&(x, y)| grid.any_neighbor(x, y, CellType::Floor))
        .collect();

    for &(x, y) in &shell {
        grid.set(x, y, CellType::Wall);
    }
    shell.len()
}
