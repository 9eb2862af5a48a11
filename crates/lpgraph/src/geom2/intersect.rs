use super::types::{Line2, Point2};

/// Unique intersection of two lines `a·x + b·y = c` by Cramer's rule.
///
/// Returns `None` only when the determinant is exactly zero (parallel or
/// coincident lines). Nearly parallel lines yield far-away points.
#[inline]
pub fn intersect(l1: &Line2, l2: &Line2) -> Option<Point2> {
    let (a1, b1, c1) = (l1.a(), l1.b(), l1.c);
    let (a2, b2, c2) = (l2.a(), l2.b(), l2.c);
    let det = a1 * b2 - a2 * b1;
    if det == 0.0 {
        return None;
    }
    let x = (c1 * b2 - c2 * b1) / det;
    let y = (a1 * c2 - a2 * c1) / det;
    Some(Point2::new(x, y))
}
