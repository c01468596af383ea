//! The shared search skeleton behind all four algorithm variants.

use std::collections::VecDeque;
use std::fmt;

use pathviz_core::{Grid, Point};

use crate::distance::manhattan;
use crate::frontier::Frontier;
use crate::step::Step;

/// Sentinel cost meaning "not yet reached" in the cost-aware variants.
const UNREACHABLE: i32 = i32::MAX;

/// Sentinel predecessor meaning "no parent recorded".
const NO_PARENT: usize = usize::MAX;

/// The four search variants. They share one traversal skeleton and differ
/// only in frontier ordering and cost handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Level-order exploration over a FIFO queue.
    BreadthFirst,
    /// Deep-first exploration over a LIFO stack.
    DepthFirst,
    /// Uniform-cost search over a min-priority queue.
    Dijkstra,
    /// Best-first search scored by cost plus Manhattan heuristic.
    AStar,
}

impl Algorithm {
    /// All variants, in the order a driver cycles through them.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ];

    /// Whether the variant tracks accumulated cost and relaxes entries.
    #[inline]
    pub fn uses_cost(self) -> bool {
        matches!(self, Self::Dijkstra | Self::AStar)
    }

    fn frontier(self) -> Frontier {
        match self {
            Self::BreadthFirst => Frontier::fifo(),
            Self::DepthFirst => Frontier::lifo(),
            Self::Dijkstra | Self::AStar => Frontier::min_heap(),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BreadthFirst => "BFS",
            Self::DepthFirst => "DFS",
            Self::Dijkstra => "Dijkstra",
            Self::AStar => "A*",
        };
        f.write_str(name)
    }
}

/// Errors rejected when constructing a [`Search`]. A run never fails after
/// construction; an unsolvable grid ends in [`SearchState::Exhausted`]
/// instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// An endpoint lies outside the grid.
    OutOfBounds(Point),
    /// An endpoint sits on an obstacle.
    Blocked(Point),
    /// Start and goal are the same cell.
    StartEqualsGoal(Point),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "endpoint {p} is out of bounds"),
            Self::Blocked(p) => write!(f, "endpoint {p} is blocked"),
            Self::StartEqualsGoal(p) => write!(f, "start and goal are both {p}"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Terminal and non-terminal states of a search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// The frontier still holds candidates.
    Exploring,
    /// The goal was popped and the path emitted. Terminal.
    PathFound,
    /// The frontier drained without reaching the goal. Terminal.
    ///
    /// Only reachable with a caller-supplied unsolvable grid (or the maze
    /// generator's obstacle-free fallback grid, which is always solvable, so
    /// in practice: caller-supplied). Kept as a defensive terminal state.
    Exhausted,
}

/// A single pull-based search run over one grid.
///
/// `Search` implements `Iterator<Item = Step>`: each call to `next` advances
/// the traversal as far as needed to produce the next visualization event, in
/// exactly the order the algorithm's internal exploration generates them. The
/// sequence is finite and not restartable; a fresh run needs a fresh
/// `Search`.
pub struct Search<'g> {
    grid: &'g Grid,
    algorithm: Algorithm,
    start: Point,
    goal: Point,
    goal_idx: usize,
    state: SearchState,
    frontier: Frontier,
    /// Finalized flags. For BFS/DFS, set when a cell is pushed; for the
    /// cost-aware variants, set when a cell is popped.
    visited: Vec<bool>,
    /// Predecessor tree rooted at `start`, `NO_PARENT` where unset.
    came_from: Vec<usize>,
    /// Accumulated cost per cell, cost-aware variants only.
    cost: Vec<i32>,
    /// Steps produced by the last advancement, drained one per `next` call.
    pending: VecDeque<Step>,
    /// Full start-to-goal path once found (endpoints included).
    path: Option<Vec<Point>>,
    /// Neighbor scratch buffer.
    nbuf: Vec<Point>,
}

impl<'g> Search<'g> {
    /// Start a run of `algorithm` from `start` to `goal` on `grid`.
    ///
    /// Fails fast on out-of-bounds or blocked endpoints and on
    /// `start == goal`; these are caller bugs, not "no path" outcomes.
    pub fn new(
        algorithm: Algorithm,
        grid: &'g Grid,
        start: Point,
        goal: Point,
    ) -> Result<Self, SearchError> {
        for p in [start, goal] {
            if !grid.contains(p) {
                return Err(SearchError::OutOfBounds(p));
            }
            if grid.blocked(p) {
                return Err(SearchError::Blocked(p));
            }
        }
        if start == goal {
            return Err(SearchError::StartEqualsGoal(start));
        }

        let len = grid.len();
        let mut search = Self {
            grid,
            algorithm,
            start,
            goal,
            // Both endpoints were bounds-checked above.
            goal_idx: grid.idx(goal).unwrap_or(NO_PARENT),
            state: SearchState::Exploring,
            frontier: algorithm.frontier(),
            visited: vec![false; len],
            came_from: vec![NO_PARENT; len],
            cost: if algorithm.uses_cost() {
                vec![UNREACHABLE; len]
            } else {
                Vec::new()
            },
            pending: VecDeque::new(),
            path: None,
            nbuf: Vec::with_capacity(4),
        };

        if let Some(si) = grid.idx(start) {
            search.frontier.push(si, 0);
            if algorithm.uses_cost() {
                search.cost[si] = 0;
            } else {
                search.visited[si] = true;
            }
        }
        Ok(search)
    }

    /// Shorthand for a breadth-first run.
    pub fn breadth_first(grid: &'g Grid, start: Point, goal: Point) -> Result<Self, SearchError> {
        Self::new(Algorithm::BreadthFirst, grid, start, goal)
    }

    /// Shorthand for a depth-first run.
    pub fn depth_first(grid: &'g Grid, start: Point, goal: Point) -> Result<Self, SearchError> {
        Self::new(Algorithm::DepthFirst, grid, start, goal)
    }

    /// Shorthand for a Dijkstra (uniform-cost) run.
    pub fn dijkstra(grid: &'g Grid, start: Point, goal: Point) -> Result<Self, SearchError> {
        Self::new(Algorithm::Dijkstra, grid, start, goal)
    }

    /// Shorthand for an A* run.
    pub fn astar(grid: &'g Grid, start: Point, goal: Point) -> Result<Self, SearchError> {
        Self::new(Algorithm::AStar, grid, start, goal)
    }

    /// The variant driving this run.
    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Current state of the run's state machine.
    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Whether the run has reached the goal.
    ///
    /// Distinguishes a successful run from one that exhausted its frontier
    /// without a path, which otherwise just ends the step sequence silently.
    #[inline]
    pub fn did_reach_goal(&self) -> bool {
        self.state == SearchState::PathFound
    }

    /// The full reconstructed path including both endpoints, available once
    /// the goal has been reached.
    pub fn path(&self) -> Option<&[Point]> {
        self.path.as_deref()
    }

    /// Pop one frontier entry and process it, queueing any resulting steps
    /// into `pending`. An advancement may legitimately produce no steps
    /// (a stale entry, or the start cell with nothing new to discover).
    fn advance(&mut self) {
        let Some(ci) = self.frontier.pop() else {
            self.state = SearchState::Exhausted;
            return;
        };

        // Cost-aware variants can hold duplicate frontier entries; a stale
        // pop of an already-finalized cell is discarded without a step.
        if self.algorithm.uses_cost() && self.visited[ci] {
            return;
        }
        self.visited[ci] = true;

        let current = self.grid.point(ci);
        if current != self.start && current != self.goal {
            self.pending.push_back(Step::Explore(current));
        }

        if ci == self.goal_idx {
            self.reconstruct();
            self.state = SearchState::PathFound;
            return;
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.grid.neighbors(current, &mut nbuf);
        // Reversing before the stack push restores canonical pop order.
        if self.algorithm == Algorithm::DepthFirst {
            nbuf.reverse();
        }

        if self.algorithm.uses_cost() {
            self.relax_neighbors(ci, &nbuf);
        } else {
            self.discover_neighbors(ci, &nbuf);
        }
        self.nbuf = nbuf;
    }

    /// BFS/DFS expansion: every unvisited neighbor is finalized for
    /// discovery purposes the moment it is pushed.
    fn discover_neighbors(&mut self, ci: usize, neighbors: &[Point]) {
        for &np in neighbors {
            let Some(ni) = self.grid.idx(np) else {
                continue;
            };
            if self.visited[ni] {
                continue;
            }
            self.visited[ni] = true;
            self.came_from[ni] = ci;
            self.frontier.push(ni, 0);
            if np != self.goal {
                self.pending.push_back(Step::Frontier(np));
            }
        }
    }

    /// Dijkstra/A* expansion: relax on strictly lower accumulated cost and
    /// re-push, leaving any stale entries in the heap.
    fn relax_neighbors(&mut self, ci: usize, neighbors: &[Point]) {
        let new_cost = self.cost[ci] + 1;
        for &np in neighbors {
            let Some(ni) = self.grid.idx(np) else {
                continue;
            };
            if new_cost >= self.cost[ni] {
                continue;
            }
            self.cost[ni] = new_cost;
            self.came_from[ni] = ci;
            let score = match self.algorithm {
                Algorithm::AStar => new_cost + manhattan(np, self.goal),
                _ => new_cost,
            };
            self.frontier.push(ni, score);
            if np != self.goal && !self.visited[ni] {
                self.pending.push_back(Step::Frontier(np));
            }
        }
    }

    /// Walk predecessors from the goal back to the start, then emit one
    /// `Path` step per intermediate cell in start-to-goal order.
    fn reconstruct(&mut self) {
        let mut path = vec![self.goal];
        let mut ci = self.came_from[self.goal_idx];
        while ci != NO_PARENT {
            path.push(self.grid.point(ci));
            ci = self.came_from[ci];
        }
        path.reverse();

        for &p in &path[1..path.len() - 1] {
            self.pending.push_back(Step::Path(p));
        }
        self.path = Some(path);
    }
}

impl Iterator for Search<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            if let Some(step) = self.pending.pop_front() {
                return Some(step);
            }
            if self.state != SearchState::Exploring {
                return None;
            }
            self.advance();
        }
    }
}

impl fmt::Debug for Search<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Search")
            .field("algorithm", &self.algorithm)
            .field("start", &self.start)
            .field("goal", &self.goal)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
