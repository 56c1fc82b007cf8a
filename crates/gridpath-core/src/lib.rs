//! Core data model for grid-based pathfinding.
//!
//! This crate provides the two types every search algorithm and maze
//! generator operates on:
//!
//! - [`Coord`] — a (row, col) cell identity.
//! - [`Grid`] — the topology: dimensions, wall set, and the start/finish
//!   endpoints.
//!
//! The grid deliberately holds **no** search scratch state (distances,
//! predecessors, visited flags). That state belongs to the search layer,
//! which keys it by coordinate and invalidates it per run, so a grid can
//! be reused across any number of runs without stale-data hazards.

mod coord;
mod grid;

pub use coord::Coord;
pub use grid::{Grid, GridError};
