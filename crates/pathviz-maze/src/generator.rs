//! Obstacle scattering with a connectivity guarantee.

use std::fmt;

use pathviz_core::{Grid, Point};
use rand::{Rng, RngExt};

/// Whole-generation retries before falling back to an obstacle-free grid.
const MAX_ATTEMPTS: usize = 100;

/// Errors rejected before any generation attempt is made. Exhausting all
/// attempts is *not* an error; the generator falls back to a known-good grid.
#[derive(Debug, Clone, PartialEq)]
pub enum MazeError {
    /// Width or height below the 2x2 minimum.
    InvalidDimensions { width: i32, height: i32 },
    /// Obstacle density outside `[0, 1]`.
    InvalidDensity(f64),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "maze must be at least 2x2, got {width}x{height}")
            }
            Self::InvalidDensity(d) => {
                write!(f, "obstacle density must be within [0, 1], got {d}")
            }
        }
    }
}

impl std::error::Error for MazeError {}

/// Maze generator with an explicit randomness source.
///
/// Passing the `Rng` in makes generation reproducible: two generators seeded
/// identically produce identical grids.
pub struct MazeGenerator<R: Rng> {
    rng: R,
}

impl<R: Rng> MazeGenerator<R> {
    /// Create a generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a grid with randomly scattered obstacles and a guaranteed
    /// path from start to goal.
    ///
    /// The start lands in the top-left 3x3 quadrant and the goal in the
    /// bottom-right one (clamped for tiny grids). `round(w*h*density)`
    /// obstacles are scattered on the remaining cells, then reachability is
    /// verified with a breadth-first sweep; an unsolvable layout discards the
    /// whole attempt. After [`MAX_ATTEMPTS`] failures the generator falls
    /// back to an obstacle-free grid with corner endpoints, which is always
    /// solvable, so this never fails past input validation.
    pub fn generate(
        &mut self,
        width: i32,
        height: i32,
        obstacle_density: f64,
    ) -> Result<Grid, MazeError> {
        if width < 2 || height < 2 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        if !(0.0..=1.0).contains(&obstacle_density) {
            return Err(MazeError::InvalidDensity(obstacle_density));
        }

        for attempt in 0..MAX_ATTEMPTS {
            let (start, goal) = self.pick_endpoints(width, height);
            let Ok(mut grid) = Grid::new(width, height, start, goal) else {
                continue;
            };
            self.scatter_obstacles(&mut grid, obstacle_density);

            if reachable(&grid) {
                return Ok(grid);
            }
            log::debug!("maze attempt {attempt} discarded: goal unreachable from start");
        }

        log::warn!("maze generation exhausted {MAX_ATTEMPTS} attempts, using obstacle-free fallback");
        Grid::new(
            width,
            height,
            Point::new(0, 0),
            Point::new(width - 1, height - 1),
        )
        // Dimensions were validated above, so corner endpoints are in
        // bounds and distinct.
        .map_err(|_| MazeError::InvalidDimensions { width, height })
    }

    /// Pick the start uniformly in the top-left quadrant and the goal in the
    /// bottom-right one, re-picking while they coincide (possible on tiny
    /// grids where the quadrants overlap).
    fn pick_endpoints(&mut self, width: i32, height: i32) -> (Point, Point) {
        let qw = width.min(3);
        let qh = height.min(3);
        loop {
            let start = Point::new(
                self.rng.random_range(0..qw),
                self.rng.random_range(0..qh),
            );
            let goal = Point::new(
                self.rng.random_range(width - qw..width),
                self.rng.random_range(height - qh..height),
            );
            if start != goal {
                return (start, goal);
            }
        }
    }

    /// Scatter `round(w*h*density)` obstacles uniformly, skipping the
    /// endpoints and already-blocked cells so none is counted twice.
    fn scatter_obstacles(&mut self, grid: &mut Grid, density: f64) {
        let total = grid.len();
        // Leave room for the two endpoint cells.
        let target = ((total as f64 * density).round() as usize).min(total - 2);

        let mut placed = 0;
        while placed < target {
            let p = Point::new(
                self.rng.random_range(0..grid.width()),
                self.rng.random_range(0..grid.height()),
            );
            if grid.blocked(p) {
                continue;
            }
            if grid.set_blocked(p, true).is_ok() {
                placed += 1;
            }
        }
    }
}

/// Breadth-first reachability sweep over unblocked cells.
///
/// This deliberately does not reuse the search crate: validating a candidate
/// maze is a leaf concern of generation, and keeping it here avoids a
/// dependency cycle with the visualized algorithms.
fn reachable(grid: &Grid) -> bool {
    let Some(start_idx) = grid.idx(grid.start()) else {
        return false;
    };

    let mut visited = vec![false; grid.len()];
    let mut queue = std::collections::VecDeque::new();
    let mut nbuf = Vec::with_capacity(4);

    visited[start_idx] = true;
    queue.push_back(start_idx);

    while let Some(ci) = queue.pop_front() {
        let current = grid.point(ci);
        if current == grid.goal() {
            return true;
        }

        nbuf.clear();
        grid.neighbors(current, &mut nbuf);
        for &np in nbuf.iter() {
            let Some(ni) = grid.idx(np) else {
                continue;
            };
            if !visited[ni] {
                visited[ni] = true;
                queue.push_back(ni);
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded(seed: u64) -> MazeGenerator<StdRng> {
        MazeGenerator::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn rejects_invalid_inputs() {
        let mut generator = seeded(0);
        assert_eq!(
            generator.generate(1, 8, 0.2),
            Err(MazeError::InvalidDimensions {
                width: 1,
                height: 8
            })
        );
        assert_eq!(
            generator.generate(8, 8, -0.1),
            Err(MazeError::InvalidDensity(-0.1))
        );
        assert_eq!(
            generator.generate(8, 8, 1.5),
            Err(MazeError::InvalidDensity(1.5))
        );
    }

    #[test]
    fn generated_mazes_are_always_reachable() {
        for seed in 0..50 {
            let mut generator = seeded(seed);
            let grid = generator.generate(8, 8, 0.3).unwrap();
            assert!(reachable(&grid), "seed {seed} produced an unsolvable maze");
        }
    }

    #[test]
    fn endpoints_land_in_their_quadrants() {
        // The fallback grid also satisfies these bounds, so the assertions
        // hold regardless of which branch produced the grid.
        for seed in 0..20 {
            let grid = seeded(seed).generate(8, 8, 0.2).unwrap();
            let (s, g) = (grid.start(), grid.goal());
            assert!(s.x < 3 && s.y < 3, "start {s} outside top-left quadrant");
            assert!(g.x >= 5 && g.y >= 5, "goal {g} outside bottom-right quadrant");
            assert_ne!(s, g);
        }
    }

    #[test]
    fn obstacle_count_matches_density() {
        let grid = seeded(7).generate(8, 8, 0.2).unwrap();
        // round(64 * 0.2) = 13 when generation succeeded; the fallback grid
        // has none.
        let blocked = grid.blocked_count();
        assert!(blocked == 13 || blocked == 0, "unexpected count {blocked}");
        assert!(!grid.blocked(grid.start()));
        assert!(!grid.blocked(grid.goal()));
    }

    #[test]
    fn same_seed_reproduces_the_same_maze() {
        let a = seeded(42).generate(8, 8, 0.25).unwrap();
        let b = seeded(42).generate(8, 8, 0.25).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn full_density_falls_back_to_open_grid() {
        // Density 1.0 leaves only the two endpoints free, and the quadrants
        // keep them non-adjacent on an 8x8 grid, so every attempt fails
        // connectivity and the fallback must kick in.
        let grid = seeded(3).generate(8, 8, 1.0).unwrap();
        assert_eq!(grid.start(), Point::new(0, 0));
        assert_eq!(grid.goal(), Point::new(7, 7));
        assert_eq!(grid.blocked_count(), 0);
        assert!(reachable(&grid));
    }

    #[test]
    fn tiny_grid_generation_succeeds() {
        let grid = seeded(1).generate(2, 2, 0.4).unwrap();
        assert!(reachable(&grid));
        assert_ne!(grid.start(), grid.goal());
    }

    #[test]
    fn zero_density_scatters_nothing() {
        let grid = seeded(9).generate(8, 8, 0.0).unwrap();
        assert_eq!(grid.blocked_count(), 0);
    }
}
