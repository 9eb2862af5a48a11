//! Basic 2D types and tolerances for linear constraints.
//!
//! - `GeomCfg`: centralizes the feasibility epsilon.
//! - `Line2`: linear form `n·p = c` (a constraint boundary or an objective level line).
//! - `Constraint`: closed half-plane `n·p <= c` or `n·p >= c`.
//!
//! Code cross-refs: `intersect::intersect`, `region::compute_feasible_region`

use std::fmt;
use std::str::FromStr;

use nalgebra::{Point2 as NaPoint2, Vector2};

/// A point of the plane the constraints live in (not a pixel position).
pub type Point2 = NaPoint2<f64>;

/// Absolute slack used when testing a candidate vertex against a constraint.
pub const FEAS_EPS: f64 = 1e-6;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps_feas: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_feas: FEAS_EPS }
    }
}

/// Linear form `n · p = c`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line2 {
    pub n: Vector2<f64>,
    pub c: f64,
}

impl Line2 {
    #[inline]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self {
            n: Vector2::new(a, b),
            c,
        }
    }
    #[inline]
    pub fn a(&self) -> f64 {
        self.n.x
    }
    #[inline]
    pub fn b(&self) -> f64 {
        self.n.y
    }
    /// Left-hand side `a·x + b·y`.
    #[inline]
    pub fn eval(&self, p: &Point2) -> f64 {
        self.n.x * p.x + self.n.y * p.y
    }
}

/// Direction of a constraint inequality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Le,
    Ge,
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Le => f.write_str("<="),
            Sign::Ge => f.write_str(">="),
        }
    }
}

/// Unrecognized inequality token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseSignError {
    pub token: String,
}

impl fmt::Display for ParseSignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown inequality sign {:?} (expected <=, >=, le or ge)", self.token)
    }
}

impl std::error::Error for ParseSignError {}

impl FromStr for Sign {
    type Err = ParseSignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "<=" | "le" => Ok(Sign::Le),
            ">=" | "ge" => Ok(Sign::Ge),
            _ => Err(ParseSignError {
                token: s.to_string(),
            }),
        }
    }
}

/// Closed half-plane `a·x + b·y <= c` or `a·x + b·y >= c`.
///
/// Callers are expected to supply `(a, b) != (0, 0)`; see `is_degenerate`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraint {
    pub n: Vector2<f64>,
    pub c: f64,
    pub sign: Sign,
}

impl Constraint {
    #[inline]
    pub fn new(a: f64, b: f64, c: f64, sign: Sign) -> Self {
        Self {
            n: Vector2::new(a, b),
            c,
            sign,
        }
    }
    #[inline]
    pub fn le(a: f64, b: f64, c: f64) -> Self {
        Self::new(a, b, c, Sign::Le)
    }
    #[inline]
    pub fn ge(a: f64, b: f64, c: f64) -> Self {
        Self::new(a, b, c, Sign::Ge)
    }
    #[inline]
    pub fn a(&self) -> f64 {
        self.n.x
    }
    #[inline]
    pub fn b(&self) -> f64 {
        self.n.y
    }
    /// Boundary line `a·x + b·y = c`.
    #[inline]
    pub fn boundary(&self) -> Line2 {
        Line2 { n: self.n, c: self.c }
    }
    #[inline]
    pub fn lhs(&self, p: &Point2) -> f64 {
        self.n.x * p.x + self.n.y * p.y
    }
    /// Membership with absolute slack `eps` in the permissive direction.
    #[inline]
    pub fn satisfies_eps(&self, p: &Point2, eps: f64) -> bool {
        let lhs = self.lhs(p);
        match self.sign {
            Sign::Le => lhs <= self.c + eps,
            Sign::Ge => lhs >= self.c - eps,
        }
    }
    /// Both coefficients zero: the constraint carries no line.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.n.x == 0.0 && self.n.y == 0.0
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.b();
        let op = if b < 0.0 { '-' } else { '+' };
        write!(
            f,
            "{}x {} {}y {} {}",
            self.a(),
            op,
            b.abs(),
            self.sign,
            self.c
        )
    }
}
