use pathviz_core::Point;

/// A single visualization event produced by a search run.
///
/// A renderer maps each variant to a color and redraws the start/goal
/// markers itself; no step is ever emitted for those two cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    /// The search finalized this cell (popped it from the frontier).
    Explore(Point),
    /// The cell was discovered and queued for later exploration.
    Frontier(Point),
    /// The cell belongs to the reconstructed route, emitted in start-to-goal
    /// order once the goal has been reached.
    Path(Point),
}

impl Step {
    /// The cell this event refers to.
    #[inline]
    pub fn pos(self) -> Point {
        match self {
            Self::Explore(p) | Self::Frontier(p) | Self::Path(p) => p,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_extracts_point() {
        let p = Point::new(2, 5);
        assert_eq!(Step::Explore(p).pos(), p);
        assert_eq!(Step::Frontier(p).pos(), p);
        assert_eq!(Step::Path(p).pos(), p);
    }
}
