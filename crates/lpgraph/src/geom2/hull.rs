use std::cmp::Ordering;

use super::types::Point2;

/// z-component of `(a − o) × (b − o)`; positive for a strict left turn.
#[inline]
pub fn cross(o: &Point2, a: &Point2, b: &Point2) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Andrew’s monotone chain convex hull (returns hull in CCW order).
///
/// Duplicates and collinear boundary points are squeezed out by the chain
/// itself (`cross <= 0` pops). Degenerate input (≤ 2 distinct points or all
/// collinear) yields fewer than 3 points; the result is never an error.
pub fn convex_hull(points: &[Point2]) -> Vec<Point2> {
    let mut pts: Vec<Point2> = points.to_vec();
    // Stable sort; -0.0 and 0.0 compare equal so the tie-break on y applies.
    pts.sort_by(|a, b| match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    });
    let lower = half_chain(pts.iter());
    let upper = half_chain(pts.iter().rev());
    let mut hull = Vec::with_capacity(lower.len() + upper.len());
    hull.extend_from_slice(&lower[..lower.len().saturating_sub(1)]);
    hull.extend_from_slice(&upper[..upper.len().saturating_sub(1)]);
    hull
}

fn half_chain<'a>(sorted: impl Iterator<Item = &'a Point2>) -> Vec<Point2> {
    let mut chain: Vec<Point2> = Vec::new();
    for p in sorted {
        while let [.., o, a] = chain.as_slice() {
            if cross(o, a, p) > 0.0 {
                break;
            }
            chain.pop();
        }
        chain.push(*p);
    }
    chain
}
