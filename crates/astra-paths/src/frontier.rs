use std::cmp::Ordering;
use std::collections::HashMap;

use astra_core::Location;

use crate::config::FrontierConfig;
use crate::cost::PathCost;
use crate::error::FrontierError;
use crate::waypoint::Waypoint;

/// Outcome of offering a candidate to [`AStarState::add_open_waypoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The candidate was inserted, or replaced a costlier open entry.
    Admitted,
    /// The frontier was left unchanged.
    Rejected,
}

impl Admission {
    /// Whether the candidate ended up stored in the open set.
    #[inline]
    pub fn is_admitted(self) -> bool {
        self == Self::Admitted
    }
}

// ---------------------------------------------------------------------------
// Arena entry
// ---------------------------------------------------------------------------

struct Entry<W> {
    waypoint: W,
    // Position in `AStarState::heap`; `None` once the entry is closed.
    heap_pos: Option<usize>,
}

// ---------------------------------------------------------------------------
// AStarState
// ---------------------------------------------------------------------------

/// Open/closed frontier of a single A* search over a map.
///
/// Waypoints live in a dense arena; each location owns exactly one arena
/// slot for the lifetime of the state. Open slots are ranked by an indexed
/// binary min-heap whose back-links make relaxation and promotion
/// `O(log n)`.
///
/// Invariants:
/// - a location is open, closed, or unknown, never both open and closed;
/// - once closed, a location stays closed;
/// - an open entry is only replaced by a candidate with a strictly lower
///   previous cost.
///
/// [`min_open_waypoint`](Self::min_open_waypoint) ranks by total cost, then
/// previous cost, then location (lexicographic on `(x, y)`), so selection
/// never depends on insertion order.
pub struct AStarState<'m, M: ?Sized, W> {
    map: &'m M,
    entries: Vec<Entry<W>>,
    index: HashMap<Location, usize>,
    // Arena indices of open entries, heap-ordered.
    heap: Vec<usize>,
}

impl<'m, M: ?Sized, W: Waypoint> AStarState<'m, M, W> {
    /// Create an empty frontier bound to `map`.
    pub fn new(map: &'m M) -> Self {
        Self::with_config(map, FrontierConfig::default())
    }

    /// Create an empty frontier bound to `map`, failing if there is none.
    pub fn try_new(map: Option<&'m M>) -> Result<Self, FrontierError> {
        let map = map.ok_or(FrontierError::MissingMap)?;
        Ok(Self::new(map))
    }

    /// Create an empty frontier bound to `map` with the given settings.
    pub fn with_config(map: &'m M, config: FrontierConfig) -> Self {
        let cap = config.initial_capacity;
        Self {
            map,
            entries: Vec::with_capacity(cap),
            index: HashMap::with_capacity(cap),
            heap: Vec::with_capacity(cap),
        }
    }

    /// The map this search runs over.
    #[inline]
    pub fn map(&self) -> &'m M {
        self.map
    }

    /// The open waypoint with the smallest total cost, or `None` if the open
    /// set is empty.
    #[inline]
    pub fn min_open_waypoint(&self) -> Option<&W> {
        self.heap.first().map(|&i| &self.entries[i].waypoint)
    }

    /// Offer a candidate to the open set.
    ///
    /// The candidate is admitted if its location is unknown, or if it is open
    /// and the candidate's previous cost is strictly lower than the stored
    /// one (relaxation). Equal or costlier candidates, and candidates for
    /// closed locations, are rejected.
    pub fn add_open_waypoint(&mut self, candidate: W) -> Admission {
        let loc = candidate.location();

        let Some(idx) = self.index.get(&loc).copied() else {
            log::trace!(
                "frontier: open {loc} g={:?} f={:?}",
                candidate.previous_cost(),
                candidate.total_cost()
            );
            let idx = self.entries.len();
            let pos = self.heap.len();
            self.entries.push(Entry {
                waypoint: candidate,
                heap_pos: Some(pos),
            });
            self.heap.push(idx);
            self.index.insert(loc, idx);
            self.sift_up(pos);
            return Admission::Admitted;
        };

        let entry = &mut self.entries[idx];
        let Some(pos) = entry.heap_pos else {
            log::trace!("frontier: reject {loc}, already closed");
            return Admission::Rejected;
        };
        let stored = entry.waypoint.previous_cost();
        if !candidate.previous_cost().strictly_less(&stored) {
            log::trace!(
                "frontier: reject {loc} g={:?}, stored g={stored:?}",
                candidate.previous_cost()
            );
            return Admission::Rejected;
        }

        log::trace!(
            "frontier: relax {loc} g={stored:?} -> {:?}",
            candidate.previous_cost()
        );
        entry.waypoint = candidate;
        let pos = self.sift_up(pos);
        self.sift_down(pos);
        Admission::Admitted
    }

    /// Number of open waypoints.
    #[inline]
    pub fn num_open_waypoints(&self) -> usize {
        self.heap.len()
    }

    /// Number of closed waypoints.
    #[inline]
    pub fn num_closed_waypoints(&self) -> usize {
        self.entries.len() - self.heap.len()
    }

    /// Move the waypoint at `loc` from the open set to the closed set.
    ///
    /// Does nothing if `loc` is not open.
    pub fn close_waypoint(&mut self, loc: Location) {
        let Some(&idx) = self.index.get(&loc) else {
            return;
        };
        let Some(pos) = self.entries[idx].heap_pos else {
            return;
        };
        self.remove_heap_at(pos);
        self.entries[idx].heap_pos = None;
        log::trace!("frontier: close {loc}");
    }

    /// Whether `loc` has been closed.
    #[inline]
    pub fn is_location_closed(&self, loc: Location) -> bool {
        self.closed_waypoint(loc).is_some()
    }

    /// Whether `loc` is currently open.
    #[inline]
    pub fn is_location_open(&self, loc: Location) -> bool {
        self.open_waypoint(loc).is_some()
    }

    /// The open waypoint at `loc`, if any.
    pub fn open_waypoint(&self, loc: Location) -> Option<&W> {
        let e = &self.entries[*self.index.get(&loc)?];
        e.heap_pos.is_some().then_some(&e.waypoint)
    }

    /// The closed waypoint at `loc`, if any.
    pub fn closed_waypoint(&self, loc: Location) -> Option<&W> {
        let e = &self.entries[*self.index.get(&loc)?];
        e.heap_pos.is_none().then_some(&e.waypoint)
    }

    // -----------------------------------------------------------------------
    // Heap maintenance
    // -----------------------------------------------------------------------

    /// Whether the entry at heap position `a` must be selected before the one
    /// at `b`.
    fn precedes(&self, a: usize, b: usize) -> bool {
        let wa = &self.entries[self.heap[a]].waypoint;
        let wb = &self.entries[self.heap[b]].waypoint;
        let ord = wa
            .total_cost()
            .cmp_cost(&wb.total_cost())
            .then_with(|| wa.previous_cost().cmp_cost(&wb.previous_cost()))
            .then_with(|| wa.location().cmp(&wb.location()));
        ord == Ordering::Less
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.entries[self.heap[a]].heap_pos = Some(a);
        self.entries[self.heap[b]].heap_pos = Some(b);
    }

    /// Returns the final position.
    fn sift_up(&mut self, mut pos: usize) -> usize {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.precedes(pos, parent) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
        pos
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.precedes(right, left) {
                right
            } else {
                left
            };
            if !self.precedes(child, pos) {
                break;
            }
            self.swap(pos, child);
            pos = child;
        }
    }

    fn remove_heap_at(&mut self, pos: usize) {
        let last = self.heap.len() - 1;
        if pos != last {
            self.swap(pos, last);
        }
        self.heap.pop();
        if pos < self.heap.len() {
            let pos = self.sift_up(pos);
            self.sift_down(pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use astra_core::GridMap;
    use rand::{RngExt, SeedableRng};

    use super::*;
    use crate::waypoint::PathWaypoint;

    type Wp = PathWaypoint<i32>;

    fn wp(x: i32, y: i32, g: i32, f: i32) -> Wp {
        PathWaypoint::new(Location::new(x, y), g, f)
    }

    fn loc(x: i32, y: i32) -> Location {
        Location::new(x, y)
    }

    #[test]
    fn new_frontier_is_empty() {
        let map = GridMap::new(4, 4);
        let st: AStarState<'_, _, Wp> = AStarState::new(&map);
        assert_eq!(st.num_open_waypoints(), 0);
        assert_eq!(st.num_closed_waypoints(), 0);
        assert!(st.min_open_waypoint().is_none());
        assert!(!st.is_location_closed(loc(0, 0)));
        assert!(std::ptr::eq(st.map(), &map));
    }

    #[test]
    fn try_new_requires_a_map() {
        let map = GridMap::new(2, 2);
        let err = AStarState::<GridMap, Wp>::try_new(None).err();
        assert_eq!(err, Some(FrontierError::MissingMap));
        assert_eq!(
            FrontierError::MissingMap.to_string(),
            "frontier: map cannot be absent"
        );

        let st = AStarState::<GridMap, Wp>::try_new(Some(&map)).unwrap();
        assert!(std::ptr::eq(st.map(), &map));
        assert_eq!(st.num_open_waypoints(), 0);
    }

    #[test]
    fn first_admission() {
        let map = GridMap::new(4, 4);
        let mut st = AStarState::new(&map);
        let w = wp(1, 1, 2, 6);
        assert_eq!(st.add_open_waypoint(w), Admission::Admitted);
        assert_eq!(st.num_open_waypoints(), 1);
        assert_eq!(st.min_open_waypoint(), Some(&w));
        assert!(st.is_location_open(loc(1, 1)));
    }

    #[test]
    fn cheaper_candidate_relaxes_entry() {
        let map = GridMap::new(4, 4);
        let mut st = AStarState::new(&map);
        st.add_open_waypoint(wp(2, 2, 10, 14));
        assert!(st.add_open_waypoint(wp(2, 2, 4, 8)).is_admitted());
        assert_eq!(st.num_open_waypoints(), 1);
        let min = st.min_open_waypoint().unwrap();
        assert_eq!(min.previous_cost(), 4);
        assert_eq!(min.total_cost(), 8);

        assert_eq!(st.add_open_waypoint(wp(2, 2, 9, 13)), Admission::Rejected);
        assert_eq!(st.open_waypoint(loc(2, 2)).unwrap().previous_cost(), 4);
    }

    #[test]
    fn relaxation_to_higher_total_sinks_entry() {
        // Lower previous cost with a larger estimate, as an inconsistent
        // heuristic can produce.
        let map = GridMap::new(8, 8);
        let mut st = AStarState::new(&map);
        st.add_open_waypoint(wp(0, 0, 5, 6));
        st.add_open_waypoint(wp(1, 0, 3, 8));
        st.add_open_waypoint(wp(2, 0, 2, 10));
        st.add_open_waypoint(wp(3, 0, 4, 7));
        assert_eq!(st.min_open_waypoint().unwrap().location(), loc(0, 0));

        assert!(st.add_open_waypoint(wp(0, 0, 1, 9)).is_admitted());
        assert_eq!(st.num_open_waypoints(), 4);

        let mut order = Vec::new();
        while let Some(w) = st.min_open_waypoint().copied() {
            order.push((w.location(), w.total_cost()));
            st.close_waypoint(w.location());
        }
        assert_eq!(
            order,
            vec![
                (loc(3, 0), 7),
                (loc(1, 0), 8),
                (loc(0, 0), 9),
                (loc(2, 0), 10),
            ]
        );
    }

    #[test]
    fn equal_cost_candidate_is_rejected() {
        let map = GridMap::new(4, 4);
        let mut st = AStarState::new(&map);
        let first = wp(0, 0, 5, 9).with_previous(loc(1, 0));
        st.add_open_waypoint(first);
        let second = wp(0, 0, 5, 9).with_previous(loc(0, 1));
        assert_eq!(st.add_open_waypoint(second), Admission::Rejected);
        assert_eq!(st.open_waypoint(loc(0, 0)), Some(&first));
    }

    #[test]
    fn selects_cheapest_then_close() {
        let map = GridMap::new(4, 4);
        let mut st = AStarState::new(&map);
        st.add_open_waypoint(wp(0, 0, 0, 5));
        st.add_open_waypoint(wp(1, 0, 0, 3));
        st.add_open_waypoint(wp(0, 1, 0, 7));

        let min = *st.min_open_waypoint().unwrap();
        assert_eq!(min.location(), loc(1, 0));
        assert_eq!(min.total_cost(), 3);

        st.close_waypoint(loc(1, 0));
        assert_eq!(st.num_open_waypoints(), 2);
        assert!(st.is_location_closed(loc(1, 0)));
        assert!(!st.is_location_open(loc(1, 0)));
        assert_eq!(st.closed_waypoint(loc(1, 0)), Some(&min));
        assert_eq!(st.min_open_waypoint().unwrap().location(), loc(0, 0));
    }

    #[test]
    fn relaxation_reorders_selection() {
        let map = GridMap::new(8, 8);
        let mut st = AStarState::new(&map);
        st.add_open_waypoint(wp(0, 0, 3, 6));
        st.add_open_waypoint(wp(5, 5, 9, 12));
        st.add_open_waypoint(wp(3, 1, 4, 9));
        assert_eq!(st.min_open_waypoint().unwrap().location(), loc(0, 0));

        st.add_open_waypoint(wp(5, 5, 1, 4));
        assert_eq!(st.min_open_waypoint().unwrap().location(), loc(5, 5));
        assert_eq!(st.min_open_waypoint().unwrap().total_cost(), 4);
    }

    #[test]
    fn close_is_idempotent() {
        let map = GridMap::new(4, 4);
        let mut st = AStarState::new(&map);
        st.add_open_waypoint(wp(1, 1, 1, 1));
        st.add_open_waypoint(wp(2, 1, 1, 2));

        st.close_waypoint(loc(1, 1));
        assert_eq!(st.num_open_waypoints(), 1);
        assert_eq!(st.num_closed_waypoints(), 1);

        st.close_waypoint(loc(1, 1));
        assert_eq!(st.num_open_waypoints(), 1);
        assert_eq!(st.num_closed_waypoints(), 1);
        assert!(st.is_location_closed(loc(1, 1)));
    }

    #[test]
    fn closing_unknown_location_is_noop() {
        let map = GridMap::new(4, 4);
        let mut st = AStarState::new(&map);
        st.add_open_waypoint(wp(1, 1, 1, 1));
        st.close_waypoint(loc(3, 3));
        assert_eq!(st.num_open_waypoints(), 1);
        assert_eq!(st.num_closed_waypoints(), 0);
        assert!(!st.is_location_closed(loc(3, 3)));
    }

    #[test]
    fn closed_location_is_never_reopened() {
        let map = GridMap::new(4, 4);
        let mut st = AStarState::new(&map);
        st.add_open_waypoint(wp(1, 1, 5, 5));
        st.close_waypoint(loc(1, 1));

        assert_eq!(st.add_open_waypoint(wp(1, 1, 0, 0)), Admission::Rejected);
        assert!(st.is_location_closed(loc(1, 1)));
        assert!(!st.is_location_open(loc(1, 1)));
        assert_eq!(st.num_open_waypoints(), 0);
        assert_eq!(st.closed_waypoint(loc(1, 1)).unwrap().previous_cost(), 5);
    }

    #[test]
    fn ties_prefer_lower_previous_cost_then_location() {
        let map = GridMap::new(8, 8);
        let mut st = AStarState::new(&map);
        st.add_open_waypoint(wp(4, 0, 3, 10));
        st.add_open_waypoint(wp(2, 5, 2, 10));
        st.add_open_waypoint(wp(2, 1, 2, 10));
        st.add_open_waypoint(wp(0, 7, 6, 10));

        let mut order = Vec::new();
        while let Some(w) = st.min_open_waypoint().copied() {
            order.push(w.location());
            st.close_waypoint(w.location());
        }
        assert_eq!(order, vec![loc(2, 1), loc(2, 5), loc(4, 0), loc(0, 7)]);
    }

    #[test]
    fn float_costs() {
        let map = GridMap::new(4, 4);
        let mut st = AStarState::new(&map);
        st.add_open_waypoint(PathWaypoint::new(loc(0, 0), 1.5f64, 2.9));
        st.add_open_waypoint(PathWaypoint::new(loc(1, 0), 0.5f64, 2.8));
        assert_eq!(st.min_open_waypoint().unwrap().location(), loc(1, 0));
        assert!(
            st.add_open_waypoint(PathWaypoint::new(loc(0, 0), 1.0f64, 2.4))
                .is_admitted()
        );
        assert_eq!(st.min_open_waypoint().unwrap().location(), loc(0, 0));
    }

    /// Linear-scan reference frontier with the same tie-break.
    #[derive(Default)]
    struct Model {
        open: HashMap<Location, Wp>,
        closed: HashMap<Location, Wp>,
    }

    impl Model {
        fn add(&mut self, w: Wp) -> Admission {
            let l = w.location();
            if self.closed.contains_key(&l) {
                return Admission::Rejected;
            }
            match self.open.get(&l) {
                Some(old) if w.previous_cost() >= old.previous_cost() => Admission::Rejected,
                _ => {
                    self.open.insert(l, w);
                    Admission::Admitted
                }
            }
        }

        fn min(&self) -> Option<&Wp> {
            self.open.values().min_by(|a, b| {
                a.total_cost()
                    .cmp(&b.total_cost())
                    .then(a.previous_cost().cmp(&b.previous_cost()))
                    .then(a.location().cmp(&b.location()))
            })
        }

        fn close(&mut self, l: Location) {
            if let Some(w) = self.open.remove(&l) {
                self.closed.insert(l, w);
            }
        }
    }

    #[test]
    fn matches_linear_scan_model() {
        let map = GridMap::new(6, 6);
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let mut st = AStarState::new(&map);
        let mut model = Model::default();

        for _ in 0..4000 {
            let l = loc(rng.random_range(0..6), rng.random_range(0..6));
            match rng.random_range(0..10u32) {
                0..=5 => {
                    let g = rng.random_range(0..50);
                    let w = PathWaypoint::new(l, g, g + rng.random_range(0..20));
                    assert_eq!(st.add_open_waypoint(w), model.add(w));
                }
                6..=7 => {
                    st.close_waypoint(l);
                    model.close(l);
                }
                _ => {
                    if let Some(w) = model.min().copied() {
                        st.close_waypoint(w.location());
                        model.close(w.location());
                    }
                }
            }

            assert_eq!(st.min_open_waypoint(), model.min());
            assert_eq!(st.num_open_waypoints(), model.open.len());
            assert_eq!(st.num_closed_waypoints(), model.closed.len());
            assert_eq!(st.is_location_closed(l), model.closed.contains_key(&l));
            assert!(!(st.is_location_open(l) && st.is_location_closed(l)));
        }
    }
}
