//! Read-only registry of example problems (constraints + objective).
//!
//! The registry is built once by the caller (`Catalog::builtin`) and passed by
//! reference; there is no process-wide problem table.

use std::fmt;

use nalgebra::Vector2;

use crate::geom2::{Constraint, Line2, Point2};

/// Whether the objective is to be maximized or minimized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptimizationMode {
    Max,
    Min,
}

/// Linear objective `z = a·x + b·y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Objective {
    pub n: Vector2<f64>,
    pub mode: OptimizationMode,
}

impl Objective {
    #[inline]
    pub fn new(a: f64, b: f64, mode: OptimizationMode) -> Self {
        Self {
            n: Vector2::new(a, b),
            mode,
        }
    }
    #[inline]
    pub fn eval(&self, p: &Point2) -> f64 {
        self.n.x * p.x + self.n.y * p.y
    }
    /// Level set `a·x + b·y = level`, drawn as the objective line.
    #[inline]
    pub fn level_line(&self, level: f64) -> Line2 {
        Line2 { n: self.n, c: level }
    }
    /// `z = 2.0x + 5.0y` (one decimal; the y-term sign is split out).
    pub fn label(&self) -> String {
        let (a, b) = (self.n.x, self.n.y);
        let op = if b >= 0.0 { '+' } else { '-' };
        format!("z = {a:.1}x {op} {:.1}y", b.abs())
    }
    pub fn task(&self) -> &'static str {
        match self.mode {
            OptimizationMode::Max => "find the maximum",
            OptimizationMode::Min => "find the minimum",
        }
    }
}

/// Errors raised while assembling a problem.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    DegenerateConstraint { index: usize },
    EmptyId,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateConstraint { index } => {
                write!(f, "constraint #{index} has a = b = 0 and describes no line")
            }
            Self::EmptyId => write!(f, "problem id must not be empty"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// One named problem instance.
#[derive(Clone, Debug, PartialEq)]
pub struct Problem {
    pub id: String,
    pub constraints: Vec<Constraint>,
    pub objective: Objective,
}

impl Problem {
    /// Checked constructor for problems that do not come from the built-in table.
    pub fn from_constraints(
        id: impl Into<String>,
        constraints: Vec<Constraint>,
        objective: Objective,
    ) -> Result<Self, CatalogError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CatalogError::EmptyId);
        }
        if let Some(index) = constraints.iter().position(Constraint::is_degenerate) {
            return Err(CatalogError::DegenerateConstraint { index });
        }
        Ok(Self {
            id,
            constraints,
            objective,
        })
    }

    /// Two-line caption: task, then the objective.
    pub fn caption(&self) -> String {
        format!(
            "Task: {}\nFunction: {}",
            self.objective.task(),
            self.objective.label()
        )
    }
}

/// Immutable problem registry, in display order.
#[derive(Clone, Debug)]
pub struct Catalog {
    problems: Vec<Problem>,
}

impl Catalog {
    /// Problems A–D.
    pub fn builtin() -> Self {
        use Constraint as C;
        use OptimizationMode::{Max, Min};
        let p = |id: &str, constraints: Vec<Constraint>, objective: Objective| Problem {
            id: id.to_string(),
            constraints,
            objective,
        };
        Self {
            problems: vec![
                p(
                    "A",
                    vec![
                        C::le(1.0, 2.0, 8.0),
                        C::le(1.0, 1.0, 6.0),
                        C::ge(1.0, 3.0, 3.0),
                        C::ge(1.0, 0.0, 0.0),
                        C::ge(0.0, 1.0, 0.0),
                    ],
                    Objective::new(2.0, 5.0, Max),
                ),
                p(
                    "B",
                    vec![
                        C::le(1.0, 1.0, 8.0),
                        C::le(1.0, 3.0, 6.0),
                        C::ge(1.0, 3.0, 3.0),
                        C::ge(1.0, 0.0, 0.0),
                        C::ge(0.0, 1.0, 0.0),
                    ],
                    Objective::new(1.0, 3.0, Min),
                ),
                p(
                    "C",
                    vec![
                        C::ge(1.0, 2.0, 9.0),
                        C::ge(1.0, 4.0, 8.0),
                        C::ge(2.0, 1.0, 3.0),
                        C::ge(1.0, 0.0, 0.0),
                        C::ge(0.0, 1.0, 0.0),
                        C::le(1.0, 0.0, 100.0),
                        C::le(0.0, 1.0, 100.0),
                    ],
                    Objective::new(1.0, 3.0, Max),
                ),
                p(
                    "D",
                    vec![
                        C::le(1.0, 2.0, 10.0),
                        C::le(3.0, 1.0, 6.0),
                        C::le(1.0, 1.0, 16.0),
                        C::ge(1.0, 0.0, 0.0),
                        C::ge(0.0, 1.0, 0.0),
                    ],
                    Objective::new(-5.0, 3.0, Min),
                ),
            ],
        }
    }

    /// Case-insensitive lookup.
    pub fn get(&self, id: &str) -> Option<&Problem> {
        let id = id.trim();
        self.problems.iter().find(|p| p.id.eq_ignore_ascii_case(id))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.problems.iter().map(|p| p.id.as_str())
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    /// Initial selection (first entry, problem A for the built-in table).
    pub fn default_problem(&self) -> Option<&Problem> {
        self.problems.first()
    }
}
