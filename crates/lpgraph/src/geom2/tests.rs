use super::*;
use proptest::prelude::*;

fn close(p: &Point2, x: f64, y: f64) -> bool {
    (p.x - x).abs() < 1e-12 && (p.y - y).abs() < 1e-12
}

fn problem_a() -> Vec<Constraint> {
    vec![
        Constraint::le(1.0, 2.0, 8.0),
        Constraint::le(1.0, 1.0, 6.0),
        Constraint::ge(1.0, 3.0, 3.0),
        Constraint::ge(1.0, 0.0, 0.0),
        Constraint::ge(0.0, 1.0, 0.0),
    ]
}

fn unit_box() -> Vec<Constraint> {
    vec![
        Constraint::le(1.0, 0.0, 1.0),
        Constraint::ge(1.0, 0.0, 0.0),
        Constraint::le(0.0, 1.0, 1.0),
        Constraint::ge(0.0, 1.0, 0.0),
    ]
}

#[test]
fn intersect_cramer_and_parallel() {
    let p = intersect(&Line2::new(1.0, 2.0, 8.0), &Line2::new(1.0, 1.0, 6.0)).unwrap();
    assert!(close(&p, 4.0, 2.0));
    // x + 3y = 3 and x + 3y = 6 never meet
    assert!(intersect(&Line2::new(1.0, 3.0, 3.0), &Line2::new(1.0, 3.0, 6.0)).is_none());
    // coincident lines have no unique point either
    assert!(intersect(&Line2::new(1.0, 1.0, 2.0), &Line2::new(2.0, 2.0, 4.0)).is_none());
    // swapping the pair gives the identical point
    let l1 = Line2::new(0.3, -1.7, 2.2);
    let l2 = Line2::new(-4.1, 0.9, 0.05);
    assert_eq!(intersect(&l1, &l2), intersect(&l2, &l1));
}

#[test]
fn nearly_parallel_lines_still_intersect() {
    // only an exact zero determinant is rejected
    let p = intersect(&Line2::new(1.0, 1.0, 1.0), &Line2::new(1.0, 1.0 + 1e-12, 2.0)).unwrap();
    assert!(p.y.abs() > 1e11);
}

#[test]
fn tolerance_boundary_le_and_ge() {
    let le = Constraint::le(1.0, 0.0, 1.0);
    assert!(le.satisfies_eps(&Point2::new(1.0 + 0.9e-6, 5.0), FEAS_EPS));
    assert!(!le.satisfies_eps(&Point2::new(1.0 + 1.1e-6, 5.0), FEAS_EPS));
    let ge = Constraint::ge(0.0, 1.0, 0.0);
    assert!(ge.satisfies_eps(&Point2::new(3.0, -0.9e-6), FEAS_EPS));
    assert!(!ge.satisfies_eps(&Point2::new(3.0, -1.1e-6), FEAS_EPS));
}

#[test]
fn satisfies_all_is_conjunction() {
    let cs = unit_box();
    assert!(satisfies_all(&Point2::new(0.5, 0.5), &cs, FEAS_EPS));
    assert!(satisfies_all(&Point2::new(1.0, 0.0), &cs, FEAS_EPS));
    assert!(!satisfies_all(&Point2::new(0.5, 1.5), &cs, FEAS_EPS));
    // empty set accepts everything
    assert!(satisfies_all(&Point2::new(-9.0, 9.0), &[], FEAS_EPS));
}

#[test]
fn problem_a_region_vertices_in_hull_order() {
    let region = compute_feasible_region(&problem_a());
    let expected = [(0.0, 1.0), (3.0, 0.0), (6.0, 0.0), (4.0, 2.0), (0.0, 4.0)];
    assert_eq!(region.len(), expected.len());
    for (p, &(x, y)) in region.vertices.iter().zip(expected.iter()) {
        assert!(close(p, x, y), "got {p:?}, expected ({x}, {y})");
    }
    assert!(region.is_renderable());
    assert!((region.area() - 12.5).abs() < 1e-12);
}

#[test]
fn infeasible_pair_intersections_are_dropped() {
    let cands = candidate_vertices(&problem_a(), GeomCfg::default());
    // x + 2y = 8 meets x + 3y = 3 at (18, -5), which violates y >= 0
    assert!(!cands.iter().any(|p| close(p, 18.0, -5.0)));
    // x >= 0 and y >= 0 meet at the origin, which violates x + 3y >= 3
    assert!(!cands.iter().any(|p| close(p, 0.0, 0.0)));
    assert_eq!(cands.len(), 5);
}

#[test]
fn degenerate_inputs_yield_short_results() {
    assert!(compute_feasible_region(&[]).is_empty());
    assert!(compute_feasible_region(&[Constraint::le(1.0, 1.0, 1.0)]).is_empty());
    let parallel = [Constraint::le(1.0, 3.0, 6.0), Constraint::ge(1.0, 3.0, 3.0)];
    assert!(compute_feasible_region(&parallel).is_empty());
    // a single corner is not a polygon
    let wedge = [Constraint::ge(1.0, 0.0, 0.0), Constraint::ge(0.0, 1.0, 0.0)];
    let region = compute_feasible_region(&wedge);
    assert!(region.len() < 3);
    assert!(!region.is_renderable());
    assert_eq!(region.area(), 0.0);
}

#[test]
fn infeasible_system_is_empty() {
    let cs = [
        Constraint::le(1.0, 0.0, 0.0),
        Constraint::ge(1.0, 0.0, 1.0),
        Constraint::ge(0.0, 1.0, 0.0),
        Constraint::le(0.0, 1.0, 1.0),
    ];
    assert!(compute_feasible_region(&cs).is_empty());
}

#[test]
fn collinear_points_squeeze_to_extremes() {
    let line = [
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 1.0),
        Point2::new(2.0, 2.0),
    ];
    let hull = convex_hull(&line);
    assert_eq!(hull.len(), 2);
    assert!(close(&hull[0], 0.0, 0.0));
    assert!(close(&hull[1], 2.0, 2.0));

    // midpoint on the bottom edge of a square disappears
    let square = [
        Point2::new(0.0, 0.0),
        Point2::new(0.5, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(1.0, 1.0),
        Point2::new(0.0, 1.0),
    ];
    let hull = convex_hull(&square);
    assert_eq!(hull.len(), 4);
    assert!(!hull.iter().any(|p| close(p, 0.5, 0.0)));
}

#[test]
fn duplicates_are_squeezed_not_prededuplicated() {
    let pts = [
        Point2::new(0.0, 0.0),
        Point2::new(0.0, 0.0),
        Point2::new(2.0, 0.0),
        Point2::new(0.0, 2.0),
        Point2::new(2.0, 0.0),
    ];
    let hull = convex_hull(&pts);
    assert_eq!(hull.len(), 3);
    assert!(close(&hull[0], 0.0, 0.0));
    assert!(close(&hull[1], 2.0, 0.0));
    assert!(close(&hull[2], 0.0, 2.0));
    // three boundaries through one corner of the unit box
    let mut cs = unit_box();
    cs.push(Constraint::le(1.0, 1.0, 2.0));
    let region = compute_feasible_region(&cs);
    assert_eq!(region.len(), 4);
    assert!((region.area() - 1.0).abs() < 1e-12);
}

#[test]
fn negative_zero_coordinates_sort_with_zero() {
    // x + 2y = 8 and x = 0 meet at (-0.0, 4)
    let p = intersect(&Line2::new(1.0, 2.0, 8.0), &Line2::new(1.0, 0.0, 0.0)).unwrap();
    assert_eq!(p.x, 0.0);
    let hull = convex_hull(&[
        Point2::new(-0.0, 4.0),
        Point2::new(0.0, 1.0),
        Point2::new(3.0, 0.0),
    ]);
    assert!(close(&hull[0], 0.0, 1.0));
}

#[test]
fn sign_parse_and_display() {
    assert_eq!("<=".parse::<Sign>().unwrap(), Sign::Le);
    assert_eq!(" GE ".parse::<Sign>().unwrap(), Sign::Ge);
    assert!("=".parse::<Sign>().is_err());
    assert_eq!(Constraint::le(1.0, 2.0, 8.0).to_string(), "1x + 2y <= 8");
    assert_eq!(Constraint::ge(-5.0, -3.0, 1.5).to_string(), "-5x - 3y >= 1.5");
    assert!(Constraint::le(0.0, 0.0, 1.0).is_degenerate());
}

/// Half-planes tangent to circles around the origin, clipped by a box so the
/// region is bounded and contains the origin. Roughly half use the `>=` form.
fn tangent_constraints(params: &[(f64, f64, bool)]) -> Vec<Constraint> {
    let mut cs: Vec<Constraint> = params
        .iter()
        .map(|&(theta, r, flip)| {
            let (a, b) = (theta.cos(), theta.sin());
            if flip {
                Constraint::ge(-a, -b, -r)
            } else {
                Constraint::le(a, b, r)
            }
        })
        .collect();
    cs.extend([
        Constraint::le(1.0, 0.0, 2.0),
        Constraint::ge(1.0, 0.0, -2.0),
        Constraint::le(0.0, 1.0, 2.0),
        Constraint::ge(0.0, 1.0, -2.0),
    ]);
    cs
}

fn params_strategy() -> impl Strategy<Value = Vec<(f64, f64, bool)>> {
    prop::collection::vec(
        (0.0..std::f64::consts::TAU, 0.5..1.5f64, any::<bool>()),
        0..7,
    )
}

proptest! {
    #[test]
    fn region_is_deterministic(params in params_strategy()) {
        let cs = tangent_constraints(&params);
        let r1 = compute_feasible_region(&cs);
        let r2 = compute_feasible_region(&cs);
        prop_assert_eq!(r1, r2);
    }

    #[test]
    fn region_vertex_set_ignores_constraint_order(
        (cs, shuffled) in params_strategy()
            .prop_map(|p| tangent_constraints(&p))
            .prop_flat_map(|cs| (Just(cs.clone()), Just(cs).prop_shuffle()))
    ) {
        let r1 = compute_feasible_region(&cs);
        let r2 = compute_feasible_region(&shuffled);
        prop_assert_eq!(r1.len(), r2.len());
        for p in &r1.vertices {
            prop_assert!(r2.vertices.iter().any(|q| (p - q).norm() < 1e-9));
        }
    }

    #[test]
    fn region_is_convex_and_contained(params in params_strategy()) {
        let cs = tangent_constraints(&params);
        let region = compute_feasible_region(&cs);
        // the origin is strictly inside, so a polygon always exists
        prop_assert!(region.is_renderable());
        let m = region.len();
        for k in 0..m {
            let o = &region.vertices[k];
            let a = &region.vertices[(k + 1) % m];
            let b = &region.vertices[(k + 2) % m];
            prop_assert!(cross(o, a, b) >= -1e-9);
        }
        for p in &region.vertices {
            prop_assert!(satisfies_all(p, &cs, FEAS_EPS));
        }
        prop_assert!(region.area() > 0.0);
    }
}
