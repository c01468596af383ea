use pathviz_core::Point;

/// Manhattan (L1) distance between two points.
///
/// On a 4-connected unit-cost grid this never overestimates the true
/// remaining cost (admissible) and satisfies the triangle inequality
/// (consistent), so A* runs with it find optimal paths.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
