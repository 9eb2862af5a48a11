//! SVG rendering of a problem: axes, ticks, feasible region, constraint lines
//! and the objective at a chosen level.
//!
//! Plane coordinates (`Point2`) and canvas coordinates (`PixelPoint`) are
//! separate types; `Viewport::to_pixel` is the only bridge between them.

use std::fmt;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::catalog::Problem;
use crate::geom2::{compute_feasible_region, Constraint, FeasibleRegion, Line2, Point2};

/// Accepted zoom range (pixels per plane unit).
pub const SCALE_RANGE: (f64, f64) = (5.0, 100.0);
/// Accepted objective level range.
pub const LEVEL_RANGE: (f64, f64) = (-50.0, 50.0);
/// Half-length (plane units) of the drawn portion of each line.
pub const LINE_SPAN: f64 = 100.0;
/// Integer ticks drawn on each axis: `-TICK_COUNT..=TICK_COUNT`.
pub const TICK_COUNT: i32 = 10;

const REGION_FILL: &str = "blue";
const CONSTRAINT_STROKE: &str = "blue";
const OBJECTIVE_STROKE: &str = "red";
const AXIS_STROKE: &str = "gray";

/// Invalid view parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum PlotError {
    ScaleOutOfRange { value: f64 },
    LevelOutOfRange { value: f64 },
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScaleOutOfRange { value } => write!(
                f,
                "scale {value} outside [{}, {}]",
                SCALE_RANGE.0, SCALE_RANGE.1
            ),
            Self::LevelOutOfRange { value } => write!(
                f,
                "objective level {value} outside [{}, {}]",
                LEVEL_RANGE.0, LEVEL_RANGE.1
            ),
            Self::InvalidSize { width, height } => {
                write!(f, "canvas size {width}x{height} must be positive and finite")
            }
        }
    }
}

impl std::error::Error for PlotError {}

/// Canvas position in pixels, y pointing down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

/// Canvas size plus zoom; the plane origin sits at the canvas center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
            scale: 20.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64, scale: f64) -> Result<Self, PlotError> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(PlotError::InvalidSize { width, height });
        }
        if !(SCALE_RANGE.0..=SCALE_RANGE.1).contains(&scale) {
            return Err(PlotError::ScaleOutOfRange { value: scale });
        }
        Ok(Self {
            width,
            height,
            scale,
        })
    }

    #[inline]
    pub fn to_pixel(&self, p: &Point2) -> PixelPoint {
        PixelPoint {
            x: p.x * self.scale + self.width / 2.0,
            y: self.height / 2.0 - p.y * self.scale,
        }
    }

    #[inline]
    fn center(&self) -> PixelPoint {
        PixelPoint {
            x: self.width / 2.0,
            y: self.height / 2.0,
        }
    }
}

/// Two plane points spanning the drawn part of `line`.
///
/// Non-vertical lines are evaluated at `x = ±span`; vertical ones (`b = 0`)
/// at `y = ±span`. `None` when both coefficients are zero.
pub fn line_segment(line: &Line2, span: f64) -> Option<(Point2, Point2)> {
    let (a, b, c) = (line.a(), line.b(), line.c);
    if b != 0.0 {
        let y_at = |x: f64| (c - a * x) / b;
        Some((Point2::new(-span, y_at(-span)), Point2::new(span, y_at(span))))
    } else if a != 0.0 {
        let x = c / a;
        Some((Point2::new(x, -span), Point2::new(x, span)))
    } else {
        None
    }
}

/// Canvas vertices of the feasible region, or `None` when there is nothing to fill.
pub fn region_outline(region: &FeasibleRegion, vp: &Viewport) -> Option<Vec<PixelPoint>> {
    if !region.is_renderable() {
        return None;
    }
    Some(region.vertices.iter().map(|p| vp.to_pixel(p)).collect())
}

/// Axis tick at an integer plane coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub value: i32,
    pub pos: PixelPoint,
}

impl Tick {
    /// The origin is left unlabeled.
    #[inline]
    pub fn has_label(&self) -> bool {
        self.value != 0
    }
}

/// Ticks on the x axis and on the y axis that fall inside the canvas.
pub fn ticks(vp: &Viewport) -> (Vec<Tick>, Vec<Tick>) {
    let mid = vp.center();
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for i in -TICK_COUNT..=TICK_COUNT {
        let off = f64::from(i) * vp.scale;
        let x = mid.x + off;
        let y = mid.y - off;
        if (0.0..=vp.width).contains(&x) {
            xs.push(Tick {
                value: i,
                pos: PixelPoint { x, y: mid.y },
            });
        }
        if (0.0..=vp.height).contains(&y) {
            ys.push(Tick {
                value: i,
                pos: PixelPoint { x: mid.x, y },
            });
        }
    }
    (xs, ys)
}

/// One rendered frame.
#[derive(Clone, Debug)]
pub struct Figure {
    pub viewport: Viewport,
    pub constraints: Vec<Constraint>,
    pub region: FeasibleRegion,
    pub objective_line: Option<Line2>,
    pub caption: Option<String>,
}

impl Figure {
    /// Frame for `problem` with the objective drawn at `level`.
    pub fn for_problem(
        problem: &Problem,
        level: f64,
        viewport: Viewport,
    ) -> Result<Self, PlotError> {
        if !(LEVEL_RANGE.0..=LEVEL_RANGE.1).contains(&level) {
            return Err(PlotError::LevelOutOfRange { value: level });
        }
        Ok(Self {
            viewport,
            constraints: problem.constraints.clone(),
            region: compute_feasible_region(&problem.constraints),
            objective_line: Some(problem.objective.level_line(level)),
            caption: Some(problem.caption()),
        })
    }

    pub fn to_svg(&self) -> String {
        let vp = &self.viewport;
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = vp.width,
            h = vp.height
        );
        svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");
        self.push_axes(&mut svg);
        self.push_ticks(&mut svg);
        self.push_region(&mut svg);
        for c in &self.constraints {
            push_line(&mut svg, vp, &c.boundary(), CONSTRAINT_STROKE);
        }
        if let Some(line) = &self.objective_line {
            push_line(&mut svg, vp, line, OBJECTIVE_STROKE);
        }
        if let Some(caption) = &self.caption {
            for (k, text) in caption.lines().enumerate() {
                let _ = writeln!(
                    svg,
                    r#"<text x="8" y="{:.1}" font-size="14" font-weight="bold">{}</text>"#,
                    18.0 + 18.0 * k as f64,
                    escape(text)
                );
            }
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub fn write_to_file(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        fs::write(path, self.to_svg())
    }

    fn push_axes(&self, svg: &mut String) {
        let vp = &self.viewport;
        let mid = vp.center();
        let _ = writeln!(
            svg,
            r#"<line x1="0" y1="{my:.1}" x2="{w:.1}" y2="{my:.1}" stroke="{AXIS_STROKE}" stroke-width="1"/>"#,
            my = mid.y,
            w = vp.width
        );
        let _ = writeln!(
            svg,
            r#"<line x1="{mx:.1}" y1="0" x2="{mx:.1}" y2="{h:.1}" stroke="{AXIS_STROKE}" stroke-width="1"/>"#,
            mx = mid.x,
            h = vp.height
        );
    }

    fn push_ticks(&self, svg: &mut String) {
        let (xs, ys) = ticks(&self.viewport);
        for t in &xs {
            let PixelPoint { x, y } = t.pos;
            let _ = writeln!(
                svg,
                r#"<line x1="{x:.1}" y1="{:.1}" x2="{x:.1}" y2="{:.1}" stroke="black"/>"#,
                y - 3.0,
                y + 3.0
            );
            if t.has_label() {
                let _ = writeln!(
                    svg,
                    r#"<text x="{x:.1}" y="{:.1}" font-size="10" text-anchor="middle" dominant-baseline="hanging">{}</text>"#,
                    y + 12.0,
                    t.value
                );
            }
        }
        for t in &ys {
            let PixelPoint { x, y } = t.pos;
            let _ = writeln!(
                svg,
                r#"<line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="black"/>"#,
                x - 3.0,
                x + 3.0
            );
            if t.has_label() {
                let _ = writeln!(
                    svg,
                    r#"<text x="{:.1}" y="{y:.1}" font-size="10" text-anchor="end" dominant-baseline="middle">{}</text>"#,
                    x - 6.0,
                    t.value
                );
            }
        }
    }

    fn push_region(&self, svg: &mut String) {
        let Some(outline) = region_outline(&self.region, &self.viewport) else {
            return;
        };
        let points: Vec<String> = outline
            .iter()
            .map(|px| format!("{:.2},{:.2}", px.x, px.y))
            .collect();
        let _ = writeln!(
            svg,
            r#"<polygon points="{}" fill="{REGION_FILL}" fill-opacity="0.2"/>"#,
            points.join(" ")
        );
    }
}

fn push_line(svg: &mut String, vp: &Viewport, line: &Line2, stroke: &str) {
    let Some((p, q)) = line_segment(line, LINE_SPAN) else {
        return;
    };
    let (p, q) = (vp.to_pixel(&p), vp.to_pixel(&q));
    let _ = writeln!(
        svg,
        r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{stroke}" stroke-width="1.5"/>"#,
        p.x, p.y, q.x, q.y
    );
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
