use astra_core::Location;

use crate::cost::PathCost;

/// Minimal map interface — traversability and neighbour enumeration.
pub trait Pather {
    /// Whether a search may enter `loc`.
    fn passable(&self, loc: Location) -> bool;

    /// Append passable neighbours of `loc` into `buf`. The caller clears
    /// `buf` before calling.
    fn neighbors(&self, loc: Location, buf: &mut Vec<Location>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    type Cost: PathCost;

    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Location, to: Location) -> Self::Cost;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Location, to: Location) -> Self::Cost;
}
