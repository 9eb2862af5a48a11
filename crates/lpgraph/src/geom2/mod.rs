//! 2D linear constraints and their feasible region.
//!
//! Purpose
//! - Turn a short list of linear inequalities in `(x, y)` into the convex
//!   polygon bounding the feasible set: pairwise intersection, feasibility
//!   filtering, monotone-chain ordering.
//! - Stay pure and allocation-light; no logging, no I/O, no error paths.
//!   Parallel pairs, infeasible candidates, and degenerate hulls are data
//!   outcomes, not failures.
//!
//! Code cross-refs: `FeasibleRegion`, `Constraint`, `Line2`, `GeomCfg`

mod hull;
mod intersect;
mod region;
mod types;

pub use hull::{convex_hull, cross};
pub use intersect::intersect;
pub use region::{
    candidate_vertices, compute_feasible_region, compute_feasible_region_with, satisfies_all,
    FeasibleRegion,
};
pub use types::{Constraint, GeomCfg, Line2, ParseSignError, Point2, Sign, FEAS_EPS};

#[cfg(test)]
mod tests;
