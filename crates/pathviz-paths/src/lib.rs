//! Search algorithms for the grid-search visualization engine.
//!
//! Four classical variants — breadth-first, depth-first, Dijkstra and A* —
//! run behind one shared traversal skeleton, [`Search`], which exposes the
//! algorithm's progress as a pull-based iterator of [`Step`] events:
//!
//! - [`Step::Explore`] — a cell was popped and finalized,
//! - [`Step::Frontier`] — a cell was discovered and queued,
//! - [`Step::Path`] — the final route, emitted start-to-goal once the goal
//!   is reached.
//!
//! Steps are never emitted for the start or goal cells; a renderer redraws
//! those markers itself.
//!
//! ```
//! use pathviz_core::{Grid, Point};
//! use pathviz_paths::{Algorithm, Search, Step};
//!
//! let grid = Grid::new(8, 8, Point::new(1, 1), Point::new(6, 6)).unwrap();
//! let mut search = Search::new(Algorithm::AStar, &grid, grid.start(), grid.goal()).unwrap();
//! for step in search.by_ref() {
//!     match step {
//!         Step::Explore(_p) => { /* paint _p in the "explored" color */ }
//!         Step::Frontier(_p) => { /* paint _p in the "frontier" color */ }
//!         Step::Path(_p) => { /* paint _p in the "path" color */ }
//!     }
//! }
//! assert!(search.did_reach_goal());
//! ```

mod distance;
mod frontier;
mod search;
mod step;

pub use distance::manhattan;
pub use search::{Algorithm, Search, SearchError, SearchState};
pub use step::Step;
