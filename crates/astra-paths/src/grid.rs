use astra_core::{GridMap, Location};

use crate::distance::manhattan;
use crate::traits::{AstarPather, Pather, WeightedPather};

// 4-way movement; entering a cell costs that cell's terrain cost.
impl Pather for GridMap {
    #[inline]
    fn passable(&self, loc: Location) -> bool {
        self.is_passable(loc)
    }

    fn neighbors(&self, loc: Location, buf: &mut Vec<Location>) {
        buf.extend(loc.neighbors_4().into_iter().filter(|&n| self.is_passable(n)));
    }
}

impl WeightedPather for GridMap {
    type Cost = u32;

    #[inline]
    fn cost(&self, _from: Location, to: Location) -> u32 {
        self.cost_at(to).unwrap_or(1)
    }
}

impl AstarPather for GridMap {
    #[inline]
    fn estimate(&self, from: Location, to: Location) -> u32 {
        manhattan(from, to) as u32
    }
}
