use astra_core::Location;

use crate::cost::PathCost;

/// A search candidate as seen by the frontier.
///
/// The frontier only reads these three values; how they are computed is up
/// to the search loop.
pub trait Waypoint {
    type Cost: PathCost;

    /// The cell this candidate stands on.
    fn location(&self) -> Location;

    /// Accumulated cost from the search start along the best known path.
    fn previous_cost(&self) -> Self::Cost;

    /// Previous cost plus the heuristic estimate to the goal.
    fn total_cost(&self) -> Self::Cost;
}

/// A waypoint carrying its costs and a link to the location it was reached
/// from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathWaypoint<C> {
    location: Location,
    previous: Option<Location>,
    previous_cost: C,
    total_cost: C,
}

impl<C: PathCost> PathWaypoint<C> {
    /// Create a waypoint with explicit costs and no predecessor.
    pub fn new(location: Location, previous_cost: C, total_cost: C) -> Self {
        Self {
            location,
            previous: None,
            previous_cost,
            total_cost,
        }
    }

    /// The search origin: zero accumulated cost.
    pub fn start(location: Location, estimate: C) -> Self {
        Self::new(location, C::ZERO, estimate)
    }

    /// A candidate reached from `from` by a single step costing `step_cost`.
    ///
    /// Integer costs saturate at their maximum.
    pub fn step(location: Location, from: &PathWaypoint<C>, step_cost: C, estimate: C) -> Self {
        let previous_cost = from.previous_cost.saturating_add(step_cost);
        Self {
            location,
            previous: Some(from.location),
            previous_cost,
            total_cost: previous_cost.saturating_add(estimate),
        }
    }

    /// Set the predecessor link.
    pub fn with_previous(mut self, previous: Location) -> Self {
        self.previous = Some(previous);
        self
    }

    /// The location this waypoint was reached from, if any.
    #[inline]
    pub fn previous(&self) -> Option<Location> {
        self.previous
    }
}

impl<C: PathCost> Waypoint for PathWaypoint<C> {
    type Cost = C;

    #[inline]
    fn location(&self) -> Location {
        self.location
    }

    #[inline]
    fn previous_cost(&self) -> C {
        self.previous_cost
    }

    #[inline]
    fn total_cost(&self) -> C {
        self.total_cost
    }
}
