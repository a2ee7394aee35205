//! A* frontier management and grid pathfinding.
//!
//! The heart of this crate is [`AStarState`], the open/closed frontier of an
//! A* search keyed by [`Location`](astra_core::Location). It exposes the
//! primitives a search loop needs:
//!
//! - select the cheapest open candidate ([`AStarState::min_open_waypoint`])
//! - admit or relax a candidate ([`AStarState::add_open_waypoint`])
//! - promote a candidate to closed ([`AStarState::close_waypoint`])
//! - query closed membership ([`AStarState::is_location_closed`])
//!
//! Selection is backed by an indexed binary heap, so every operation is
//! `O(log n)` or better in the frontier size.
//!
//! [`astar_path`] is a complete search loop built on those primitives.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`WeightedPather`] : [`Pather`] | step costs |
//! | [`AstarPather`] : [`WeightedPather`] | [`astar_path`] |

mod astar;
mod config;
mod cost;
mod distance;
mod error;
mod frontier;
mod grid;
mod traits;
mod waypoint;

pub use astar::{Path, astar_path, astar_path_with};
pub use config::FrontierConfig;
pub use cost::PathCost;
pub use distance::{chebyshev, manhattan, octile};
pub use error::FrontierError;
pub use frontier::{AStarState, Admission};
pub use traits::{AstarPather, Pather, WeightedPather};
pub use waypoint::{PathWaypoint, Waypoint};
