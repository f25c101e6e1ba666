//! Room connection graph
//!
//! Decides which pairs of rooms get a corridor. Rooms are referred to by
//! their index in the placement arena.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::{dist_sq, Rectangle};

/// How rooms are linked together
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ConnectionStrategy {
    /// Chain rooms left to right
    Sequential,
    /// Grow a minimum spanning tree from room 0
    #[default]
    Mst,
}

/// Tracks which rooms are connected
///
/// Each room starts in its own equivalence class; joining two rooms folds one
/// class into the other.
#[derive(Debug, Clone)]
pub struct ConnectivityTracker {
    class: Vec<usize>,
}

impl ConnectivityTracker {
    /// Create a new tracker for the given number of rooms
    pub fn new(num_rooms: usize) -> Self {
        Self {
            class: (0..num_rooms).collect(),
        }
    }

    /// Tracker with every connection in `links` applied
    pub fn from_connections(num_rooms: usize, links: &[(usize, usize)]) -> Self {
        let mut tracker = Self::new(num_rooms);
        for &(a, b) in links {
            tracker.merge(a, b);
        }
        tracker
    }

    /// Check if two rooms are in the same class
    pub fn are_connected(&self, a: usize, b: usize) -> bool {
        match (self.class.get(a), self.class.get(b)) {
            (Some(ca), Some(cb)) => ca == cb,
            _ => false,
        }
    }

    /// Merge the classes of two rooms; out-of-range indices are ignored
    pub fn merge(&mut self, a: usize, b: usize) {
        if self.are_connected(a, b) {
            return;
        }
        let (Some(&keep), Some(&old)) = (self.class.get(a), self.class.get(b)) else {
            return;
        };
        for c in &mut self.class {
            if *c == old {
                *c = keep;
            }
        }
    }

    /// Check if all rooms share one class
    pub fn all_connected(&self) -> bool {
        self.class.windows(2).all(|w| w[0] == w[1])
    }
}

/// Pick the room pairs to join
///
/// Returns `(from, to)` index pairs in carving order. With fewer than two
/// rooms there is nothing to connect.
pub fn connect_rooms(rooms: &[Rectangle], strategy: ConnectionStrategy) -> Vec<(usize, usize)> {
    if rooms.len() < 2 {
        return Vec::new();
    }
    match strategy {
        ConnectionStrategy::Sequential => (1..rooms.len()).map(|i| (i - 1, i)).collect(),
        ConnectionStrategy::Mst => spanning_tree(rooms),
    }
}

/// Prim's algorithm over squared center distances
///
/// Connected rooms are scanned in the order they joined, unconnected rooms in
/// index order; the first strict minimum wins.
fn spanning_tree(rooms: &[Rectangle]) -> Vec<(usize, usize)> {
    let centers: Vec<_> = rooms.iter().map(Rectangle::center).collect();
    let mut joined = vec![0];
    let mut pending: Vec<usize> = (1..rooms.len()).collect();
    let mut links = Vec::with_capacity(rooms.len() - 1);

    while !pending.is_empty() {
        let mut best: Option<(i64, usize, usize)> = None;
        for &from in &joined {
            for (slot, &to) in pending.iter().enumerate() {
                let d = dist_sq(centers[from], centers[to]);
                if best.is_none_or(|(bd, _, _)| d < bd) {
                    best = Some((d, from, slot));
                }
            }
        }

        let Some((_, from, slot)) = best else {
            break;
        };
        let to = pending.remove(slot);
        links.push((from, to));
        joined.push(to);
    }
    links
}
