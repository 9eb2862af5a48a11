//! Curated surface used by the CLI and benches.
//!
//! Prefer these re-exports over reaching into submodules so callers keep a
//! single import path when internals move.

// Geometry core
pub use crate::geom2::{
    candidate_vertices, compute_feasible_region, compute_feasible_region_with, convex_hull,
    intersect, satisfies_all, Constraint, FeasibleRegion, GeomCfg, Line2, ParseSignError, Point2,
    Sign, FEAS_EPS,
};
// Problems
pub use crate::catalog::{Catalog, CatalogError, Objective, OptimizationMode, Problem};
// Rendering
pub use crate::plot::{
    line_segment, region_outline, ticks, Figure, PixelPoint, PlotError, Tick, Viewport,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_maps_every_vertex() {
        let cat = Catalog::builtin();
        let d = cat.get("D").unwrap();
        let region = compute_feasible_region(&d.constraints);
        let vp = Viewport::default();
        let outline = region_outline(&region, &vp).unwrap();
        assert_eq!(outline.len(), region.len());
        assert!(outline
            .iter()
            .any(|px| (px.x - 300.0).abs() < 1e-9 && (px.y - 300.0).abs() < 1e-9));
    }

    #[test]
    fn outline_absent_for_short_region() {
        let region = FeasibleRegion {
            vertices: vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)],
        };
        assert!(region_outline(&region, &Viewport::default()).is_none());
    }
}
