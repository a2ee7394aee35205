//! The [`GridMap`] type — a rectangular terrain map with per-cell step costs.

use std::fmt;

use crate::geom::{Location, Range};

/// Errors returned when editing or loading a [`GridMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The location lies outside the map bounds.
    OutOfBounds(Location),
    /// Step costs must be strictly positive.
    InvalidCost { loc: Location, cost: u32 },
    /// Map bounds must start at (0, 0).
    InvalidOrigin(Location),
    /// The cell buffer does not match the bounds.
    CellCount { expected: usize, found: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(loc) => write!(f, "grid: location {loc} is out of bounds"),
            Self::InvalidCost { loc, cost } => {
                write!(f, "grid: invalid step cost {cost} at {loc} (must be > 0)")
            }
            Self::InvalidOrigin(min) => write!(f, "grid: bounds start at {min}, not (0, 0)"),
            Self::CellCount { expected, found } => {
                write!(f, "grid: expected {expected} cells, found {found}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A rectangular map whose cells are either passable with a positive step
/// cost, or blocked.
///
/// The map's origin is (0, 0). Searches only ever read it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGridMap"))]
pub struct GridMap {
    bounds: Range,
    // `None` marks a blocked cell.
    cells: Vec<Option<u32>>,
}

/// Unchecked wire form of a [`GridMap`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGridMap {
    bounds: Range,
    cells: Vec<Option<u32>>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGridMap> for GridMap {
    type Error = GridError;

    fn try_from(raw: RawGridMap) -> Result<Self, GridError> {
        if raw.bounds.min != Location::ZERO {
            return Err(GridError::InvalidOrigin(raw.bounds.min));
        }
        if raw.cells.len() != raw.bounds.len() {
            return Err(GridError::CellCount {
                expected: raw.bounds.len(),
                found: raw.cells.len(),
            });
        }
        let map = Self {
            bounds: raw.bounds,
            cells: raw.cells,
        };
        if let Some(loc) = map.bounds.iter().find(|&l| map.cost_at(l) == Some(0)) {
            return Err(GridError::InvalidCost { loc, cost: 0 });
        }
        Ok(map)
    }
}

impl GridMap {
    /// Create a new map of the given dimensions where every cell is passable
    /// with cost 1.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            bounds,
            cells: vec![Some(1); bounds.len()],
        }
    }

    /// The bounding range of the map.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `loc` is inside the map bounds.
    #[inline]
    pub fn contains(&self, loc: Location) -> bool {
        self.bounds.contains(loc)
    }

    #[inline]
    fn index(&self, loc: Location) -> Option<usize> {
        if !self.bounds.contains(loc) {
            return None;
        }
        Some(loc.y as usize * self.bounds.width() as usize + loc.x as usize)
    }

    /// Step cost of entering `loc`, or `None` if it is blocked or outside
    /// the map.
    #[inline]
    pub fn cost_at(&self, loc: Location) -> Option<u32> {
        self.index(loc).and_then(|i| self.cells[i])
    }

    /// Whether `loc` is inside the map and not blocked.
    #[inline]
    pub fn is_passable(&self, loc: Location) -> bool {
        self.cost_at(loc).is_some()
    }

    /// Make `loc` passable with the given step cost.
    pub fn set_cost(&mut self, loc: Location, cost: u32) -> Result<(), GridError> {
        if cost == 0 {
            return Err(GridError::InvalidCost { loc, cost });
        }
        let i = self.index(loc).ok_or(GridError::OutOfBounds(loc))?;
        self.cells[i] = Some(cost);
        Ok(())
    }

    /// Block `loc`.
    pub fn block(&mut self, loc: Location) -> Result<(), GridError> {
        let i = self.index(loc).ok_or(GridError::OutOfBounds(loc))?;
        self.cells[i] = None;
        Ok(())
    }

    /// Number of passable cells.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}
