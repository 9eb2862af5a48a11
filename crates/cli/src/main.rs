use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use lpgraph::api::{
    compute_feasible_region, Catalog, FeasibleRegion, Figure, Objective, OptimizationMode,
    Problem, Viewport,
};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod table;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Feasible regions of two-variable linear programs")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// List the built-in problems
    List,
    /// Compute the feasible region and print it as JSON
    Region {
        #[command(flatten)]
        source: Source,
        /// Also write the vertex table (CSV, or Parquet for a .parquet path)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Render axes, region, constraints and the objective line to SVG
    Figure {
        #[command(flatten)]
        source: Source,
        #[arg(long)]
        out: PathBuf,
        /// Objective level drawn as the red line, in [-50, 50]
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        level: f64,
        /// Pixels per unit, in [5, 100]
        #[arg(long, default_value_t = 20.0)]
        scale: f64,
        #[arg(long, default_value_t = 600.0)]
        width: f64,
        #[arg(long, default_value_t = 600.0)]
        height: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Where the constraints come from: a built-in problem or a CSV table.
#[derive(Args, Debug)]
struct Source {
    /// Built-in problem id (see `list`); defaults to the first one
    #[arg(long, conflicts_with = "input")]
    problem: Option<String>,
    /// CSV with columns a,b,c,sign
    #[arg(long)]
    input: Option<PathBuf>,
    /// Objective coefficients `a,b` for a CSV problem
    #[arg(long, requires = "input", value_parser = parse_pair, allow_hyphen_values = true)]
    objective: Option<(f64, f64)>,
    /// Optimization direction for a CSV problem
    #[arg(long, value_enum, default_value_t = Mode::Max)]
    mode: Mode,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    Max,
    Min,
}

impl From<Mode> for OptimizationMode {
    fn from(m: Mode) -> Self {
        match m {
            Mode::Max => OptimizationMode::Max,
            Mode::Min => OptimizationMode::Min,
        }
    }
}

fn parse_pair(s: &str) -> Result<(f64, f64), String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `a,b`, got {s:?}"))?;
    let parse = |t: &str| {
        t.trim()
            .parse::<f64>()
            .map_err(|e| format!("bad coefficient {t:?}: {e}"))
    };
    Ok((parse(a)?, parse(b)?))
}

impl Source {
    fn resolve(&self, catalog: &Catalog) -> Result<Problem> {
        if let Some(path) = &self.input {
            let constraints = table::read_constraints(path)?;
            let (a, b) = self.objective.unwrap_or((1.0, 1.0));
            let id = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "custom".to_string());
            let objective = Objective::new(a, b, self.mode.into());
            return Problem::from_constraints(id, constraints, objective)
                .with_context(|| format!("invalid constraint table {}", path.display()));
        }
        let problem = match &self.problem {
            Some(id) => catalog.get(id).with_context(|| {
                let known: Vec<&str> = catalog.ids().collect();
                format!("unknown problem {id:?} (known: {})", known.join(", "))
            })?,
            None => catalog.default_problem().context("catalog is empty")?,
        };
        Ok(problem.clone())
    }
}

#[derive(Serialize)]
struct RegionReport {
    problem: String,
    objective: String,
    task: &'static str,
    constraints: Vec<String>,
    vertices: Vec<[f64; 2]>,
    renderable: bool,
    area: f64,
}

impl RegionReport {
    fn new(problem: &Problem, region: &FeasibleRegion) -> Self {
        Self {
            problem: problem.id.clone(),
            objective: problem.objective.label(),
            task: problem.objective.task(),
            constraints: problem.constraints.iter().map(|c| c.to_string()).collect(),
            vertices: region.vertices.iter().map(|p| [p.x, p.y]).collect(),
            renderable: region.is_renderable(),
            area: region.area(),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let catalog = Catalog::builtin();
    match cmd.action {
        Action::List => list(&catalog),
        Action::Region { source, out } => region(&catalog, &source, out.as_deref()),
        Action::Figure {
            source,
            out,
            level,
            scale,
            width,
            height,
        } => {
            let viewport = Viewport::new(width, height, scale)?;
            figure(&catalog, &source, &out, level, viewport)
        }
        Action::Report => report(),
    }
}

fn list(catalog: &Catalog) -> Result<()> {
    for p in catalog.problems() {
        println!(
            "{}: {} ({}), {} constraints",
            p.id,
            p.objective.label(),
            p.objective.task(),
            p.constraints.len()
        );
    }
    Ok(())
}

fn region(catalog: &Catalog, source: &Source, out: Option<&Path>) -> Result<()> {
    let problem = source.resolve(catalog)?;
    let region = compute_feasible_region(&problem.constraints);
    tracing::info!(
        problem = %problem.id,
        constraints = problem.constraints.len(),
        vertices = region.len(),
        renderable = region.is_renderable(),
        "region"
    );
    let report = RegionReport::new(&problem, &region);
    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(out) = out {
        ensure_parent(out)?;
        table::write_vertices(out, &region)?;
        let payload = Payload::new(json!({
            "input": source.input.as_ref().map(|p| p.display().to_string()),
            "vertices": region.len(),
            "area": region.area()
        }))
        .with_problem(&problem.id);
        write_sidecar(out, payload)?;
        tracing::info!(out = %out.display(), "vertex_table_written");
    }
    Ok(())
}

fn figure(
    catalog: &Catalog,
    source: &Source,
    out: &Path,
    level: f64,
    viewport: Viewport,
) -> Result<()> {
    let problem = source.resolve(catalog)?;
    let fig = Figure::for_problem(&problem, level, viewport)?;
    tracing::info!(
        problem = %problem.id,
        level,
        scale = viewport.scale,
        filled = fig.region.is_renderable(),
        out = %out.display(),
        "figure"
    );
    ensure_parent(out)?;
    fig.write_to_file(out)
        .with_context(|| format!("writing {}", out.display()))?;
    let payload = Payload::new(json!({
        "input": source.input.as_ref().map(|p| p.display().to_string()),
        "level": level,
        "scale": viewport.scale,
        "width": viewport.width,
        "height": viewport.height
    }))
    .with_problem(&problem.id);
    write_sidecar(out, payload)?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "lib_version": lpgraph::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn ensure_parent(out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}
