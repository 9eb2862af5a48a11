//! Feasible region of a small constraint set (vertex enumeration + hull).
//!
//! Model
//! - Every unordered pair of constraint boundaries is intersected.
//! - A candidate survives only if it satisfies the full constraint list
//!   (with `GeomCfg::eps_feas` slack), not just the pair that produced it.
//! - Survivors are ordered by the monotone-chain hull.
//!
//! Cost is O(n³) in the constraint count; inputs are a handful of constraints.
//! Unbounded regions only report the corners that exist as pairwise
//! intersections.

use super::hull::convex_hull;
use super::intersect::intersect;
use super::types::{Constraint, GeomCfg, Point2};

/// Ordered hull of the feasible vertices.
///
/// May hold 0–2 points when no bounded polygon was found; deciding whether
/// that is drawable is up to the consumer (`is_renderable`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeasibleRegion {
    pub vertices: Vec<Point2>,
}

impl FeasibleRegion {
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    /// At least a triangle.
    #[inline]
    pub fn is_renderable(&self) -> bool {
        self.vertices.len() >= 3
    }
    /// Absolute shoelace area (0 for fewer than 3 vertices).
    pub fn area(&self) -> f64 {
        let m = self.vertices.len();
        if m < 3 {
            return 0.0;
        }
        let mut twice = 0.0;
        for k in 0..m {
            let p = self.vertices[k];
            let q = self.vertices[(k + 1) % m];
            twice += p.x * q.y - q.x * p.y;
        }
        0.5 * twice.abs()
    }
    #[inline]
    pub fn into_vertices(self) -> Vec<Point2> {
        self.vertices
    }
}

/// True iff `p` satisfies every constraint within `eps`.
#[inline]
pub fn satisfies_all(p: &Point2, constraints: &[Constraint], eps: f64) -> bool {
    constraints.iter().all(|h| h.satisfies_eps(p, eps))
}

/// Pairwise boundary intersections that satisfy the whole constraint list.
///
/// Parallel pairs contribute nothing. Order follows the `(i, j)` pair order;
/// duplicates are kept.
pub fn candidate_vertices(constraints: &[Constraint], cfg: GeomCfg) -> Vec<Point2> {
    let mut out = Vec::new();
    for (i, hi) in constraints.iter().enumerate() {
        for hj in &constraints[i + 1..] {
            let Some(p) = intersect(&hi.boundary(), &hj.boundary()) else {
                continue;
            };
            if satisfies_all(&p, constraints, cfg.eps_feas) {
                out.push(p);
            }
        }
    }
    out
}

/// Feasible polygon with explicit tolerances.
pub fn compute_feasible_region_with(constraints: &[Constraint], cfg: GeomCfg) -> FeasibleRegion {
    let candidates = candidate_vertices(constraints, cfg);
    FeasibleRegion {
        vertices: convex_hull(&candidates),
    }
}

/// Feasible polygon with `GeomCfg::default()`.
#[inline]
pub fn compute_feasible_region(constraints: &[Constraint]) -> FeasibleRegion {
    compute_feasible_region_with(constraints, GeomCfg::default())
}
