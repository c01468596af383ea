//! Core types for the grid-search visualization engine.
//!
//! Provides the geometry primitive [`Point`] and the bounded obstacle map
//! [`Grid`] with its designated start and goal cells. Everything else in the
//! workspace (maze generation, the search algorithms) builds on these types.

mod geom;
mod grid;

pub use geom::Point;
pub use grid::{Grid, GridError};
