//! **astra-core** — core types for grid pathfinding.
//!
//! This crate provides the leaf types shared by the *astra* crates: the
//! [`Location`] key identifying a map cell, the [`Range`] bounds rectangle,
//! and [`GridMap`], a rectangular terrain map with per-cell step costs.

pub mod geom;
pub mod grid;

pub use geom::{Location, Range};
pub use grid::{GridError, GridMap};
