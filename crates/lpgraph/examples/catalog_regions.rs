//! Print the feasible region of every built-in problem.
//!
//! Usage:
//!   cargo run -p lpgraph --example catalog_regions
//!   cargo run -p lpgraph --example catalog_regions -- C

use lpgraph::prelude::*;

fn main() {
    let catalog = Catalog::builtin();
    let only = std::env::args().nth(1);
    for problem in catalog.problems() {
        if let Some(id) = &only {
            if !problem.id.eq_ignore_ascii_case(id) {
                continue;
            }
        }
        let region = compute_feasible_region(&problem.constraints);
        println!("problem {}: {}", problem.id, problem.objective.label());
        for c in &problem.constraints {
            println!("  {c}");
        }
        if !region.is_renderable() {
            println!("  no bounded region ({} points)", region.len());
            continue;
        }
        println!("  area = {:.3}", region.area());
        for p in &region.vertices {
            println!("  ({:.3}, {:.3})", p.x, p.y);
        }
    }
}
