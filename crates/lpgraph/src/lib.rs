//! Feasible regions of two-variable linear programs, plus the example
//! problems and an SVG renderer that consume them.
//!
//! Layout
//! - `geom2`: constraints, pairwise intersection, feasibility filter, hull.
//! - `catalog`: read-only registry of example problems and objectives.
//! - `plot`: plane → canvas mapping and SVG output.
//! - `api`: curated re-exports for the CLI and benches.

pub mod api;
pub mod catalog;
pub mod geom2;
pub mod plot;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{compute_feasible_region, Constraint, FeasibleRegion, Point2, Sign};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::catalog::{Catalog, Objective, OptimizationMode, Problem};
    pub use crate::geom2::{
        compute_feasible_region, compute_feasible_region_with, Constraint, FeasibleRegion,
        GeomCfg, Line2, Point2, Sign,
    };
    pub use crate::plot::{Figure, Viewport};
}
