//! The bounded obstacle map searched by the algorithms.

use std::fmt;

use crate::geom::Point;

/// Errors rejected at [`Grid`] construction or mutation. The grid never
/// silently clamps bad input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height below the 2x2 minimum.
    TooSmall { width: i32, height: i32 },
    /// A position outside the grid bounds.
    OutOfBounds(Point),
    /// Start and goal refer to the same cell.
    StartEqualsGoal(Point),
    /// An obstacle would cover the start or goal cell.
    BlockedEndpoint(Point),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall { width, height } => {
                write!(f, "grid must be at least 2x2, got {width}x{height}")
            }
            Self::OutOfBounds(p) => write!(f, "position {p} is out of bounds"),
            Self::StartEqualsGoal(p) => write!(f, "start and goal are both {p}"),
            Self::BlockedEndpoint(p) => write!(f, "cannot block endpoint cell {p}"),
        }
    }
}

impl std::error::Error for GridError {}

/// A rectangular map of passable/blocked cells with a designated start and
/// goal.
///
/// Construction validates every invariant up front: dimensions of at least
/// 2x2, both endpoints in bounds and distinct. Obstacles are added with
/// [`set_blocked`](Self::set_blocked) while the grid is being built; a search
/// run then borrows the grid immutably, so the map cannot change mid-run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: i32,
    height: i32,
    /// Row-major blocked flags, `true` = obstacle.
    blocked: Vec<bool>,
    start: Point,
    goal: Point,
}

impl Grid {
    /// Create an obstacle-free grid with the given endpoints.
    pub fn new(width: i32, height: i32, start: Point, goal: Point) -> Result<Self, GridError> {
        if width < 2 || height < 2 {
            return Err(GridError::TooSmall { width, height });
        }
        let grid = Self {
            width,
            height,
            blocked: vec![false; (width * height) as usize],
            start,
            goal,
        };
        if !grid.contains(start) {
            return Err(GridError::OutOfBounds(start));
        }
        if !grid.contains(goal) {
            return Err(GridError::OutOfBounds(goal));
        }
        if start == goal {
            return Err(GridError::StartEqualsGoal(start));
        }
        Ok(grid)
    }

    /// Grid width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        (self.width * self.height) as usize
    }

    /// Whether the grid has no cells. Construction rejects this, so it is
    /// always `false`; provided for iterator-style completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The start cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The goal cell.
    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Whether `p` lies within the grid bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Whether `p` carries an obstacle. Out-of-bounds positions report `false`.
    #[inline]
    pub fn blocked(&self, p: Point) -> bool {
        match self.idx(p) {
            Some(i) => self.blocked[i],
            None => false,
        }
    }

    /// Whether `p` is in bounds and free of obstacles.
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| !self.blocked[i])
    }

    /// Place or remove an obstacle at `p`.
    ///
    /// Rejects out-of-bounds positions and the start/goal cells, which must
    /// stay passable.
    pub fn set_blocked(&mut self, p: Point, blocked: bool) -> Result<(), GridError> {
        let Some(i) = self.idx(p) else {
            return Err(GridError::OutOfBounds(p));
        };
        if blocked && (p == self.start || p == self.goal) {
            return Err(GridError::BlockedEndpoint(p));
        }
        self.blocked[i] = blocked;
        Ok(())
    }

    /// Number of obstacle cells.
    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    /// Convert a `Point` to a flat row-major index. Returns `None` if out of
    /// bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        Point::new(idx as i32 % self.width, idx as i32 / self.width)
    }

    /// Append the in-bounds, unblocked cardinal neighbors of `p` into `buf`,
    /// in canonical order (down, right, up, left). The caller clears `buf`
    /// before calling.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.passable(n) {
                buf.push(n);
            }
        }
    }
}
