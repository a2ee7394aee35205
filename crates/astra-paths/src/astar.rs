use astra_core::Location;

use crate::config::FrontierConfig;
use crate::cost::PathCost;
use crate::frontier::AStarState;
use crate::traits::AstarPather;
use crate::waypoint::{PathWaypoint, Waypoint};

/// A path found by [`astar_path`].
#[derive(Debug, Clone, PartialEq)]
pub struct Path<C> {
    locations: Vec<Location>,
    cost: C,
    expanded: usize,
}

impl<C: PathCost> Path<C> {
    /// Every location from start to goal, both included.
    #[inline]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Accumulated cost of the path.
    #[inline]
    pub fn cost(&self) -> C {
        self.cost
    }

    /// Number of locations on the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the path has no locations. Paths returned by a search always
    /// hold at least the start.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Number of waypoints the search closed before reaching the goal.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }
}

/// Compute the shortest path from `from` to `to` using A*.
///
/// Returns `None` if either endpoint is impassable or the goal cannot be
/// reached.
pub fn astar_path<P: AstarPather>(
    pather: &P,
    from: Location,
    to: Location,
) -> Option<Path<P::Cost>> {
    astar_path_with(pather, from, to, FrontierConfig::default())
}

/// [`astar_path`] with explicit frontier settings.
pub fn astar_path_with<P: AstarPather>(
    pather: &P,
    from: Location,
    to: Location,
    config: FrontierConfig,
) -> Option<Path<P::Cost>> {
    if !pather.passable(from) || !pather.passable(to) {
        log::debug!("astar: endpoint {from} or {to} is impassable");
        return None;
    }
    log::debug!("astar: search {from} -> {to}");

    let mut state = AStarState::with_config(pather, config);
    state.add_open_waypoint(PathWaypoint::start(from, pather.estimate(from, to)));

    let mut nbuf = Vec::with_capacity(8);

    let goal = loop {
        let Some(current) = state.min_open_waypoint().copied() else {
            log::debug!(
                "astar: frontier exhausted after {} expansions",
                state.num_closed_waypoints()
            );
            return None;
        };
        let cl = current.location();
        state.close_waypoint(cl);

        if cl == to {
            break current;
        }

        nbuf.clear();
        pather.neighbors(cl, &mut nbuf);

        for &n in nbuf.iter() {
            if state.is_location_closed(n) {
                continue;
            }
            let candidate =
                PathWaypoint::step(n, &current, pather.cost(cl, n), pather.estimate(n, to));
            state.add_open_waypoint(candidate);
        }
    };

    // Reconstruct path through the predecessors of closed waypoints.
    let mut locations = vec![goal.location()];
    let mut prev = goal.previous();
    while let Some(loc) = prev {
        locations.push(loc);
        prev = state.closed_waypoint(loc).and_then(|w| w.previous());
    }
    locations.reverse();

    let expanded = state.num_closed_waypoints();
    log::debug!(
        "astar: reached {to} cost={:?} len={} expanded={expanded}",
        goal.previous_cost(),
        locations.len()
    );
    Some(Path {
        locations,
        cost: goal.previous_cost(),
        expanded,
    })
}
