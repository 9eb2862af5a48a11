//! Tabular I/O through polars: constraint tables in, vertex tables out.
//!
//! Constraint CSV layout: one row per inequality, columns `a,b,c,sign` meaning
//! `a·x + b·y sign c` with `sign` one of `<=`, `>=`, `le`, `ge`.

use anyhow::{Context, Result};
use lpgraph::api::{Constraint, FeasibleRegion, ParseSignError, Sign};
use polars::prelude::*;
use std::fmt;
use std::fs::File;
use std::path::Path;

/// A row that cannot be turned into a constraint.
#[derive(Debug)]
pub enum InputError {
    MissingValue { row: usize, column: &'static str },
    BadSign { row: usize, source: ParseSignError },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue { row, column } => {
                write!(f, "row {row}: column {column:?} is empty")
            }
            Self::BadSign { row, source } => write!(f, "row {row}: {source}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::BadSign { source, .. } => Some(source),
            Self::MissingValue { .. } => None,
        }
    }
}

/// Read constraints from a CSV file.
pub fn read_constraints(path: &Path) -> Result<Vec<Constraint>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading constraint table {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "constraint_table_shape");
    constraints_from_frame(&df)
}

fn f64_values(df: &DataFrame, name: &'static str) -> Result<Vec<Option<f64>>> {
    let series = df
        .column(name)
        .with_context(|| format!("constraint table needs a {name:?} column"))?
        .cast(&DataType::Float64)?;
    let values = series.f64()?.into_iter().collect();
    Ok(values)
}

fn constraints_from_frame(df: &DataFrame) -> Result<Vec<Constraint>> {
    let a = f64_values(df, "a")?;
    let b = f64_values(df, "b")?;
    let c = f64_values(df, "c")?;
    let signs = df
        .column("sign")
        .context("constraint table needs a \"sign\" column")?
        .str()?;
    let mut out = Vec::with_capacity(df.height());
    for (row, sign) in signs.into_iter().enumerate() {
        let value = |col: &[Option<f64>], column: &'static str| {
            col[row].ok_or(InputError::MissingValue { row, column })
        };
        let sign: Sign = sign
            .ok_or(InputError::MissingValue {
                row,
                column: "sign",
            })?
            .parse()
            .map_err(|source| InputError::BadSign { row, source })?;
        out.push(Constraint::new(
            value(&a, "a")?,
            value(&b, "b")?,
            value(&c, "c")?,
            sign,
        ));
    }
    Ok(out)
}

/// Write the region's vertices (`x,y` columns, hull order). Parquet when the
/// extension says so, CSV otherwise.
pub fn write_vertices(path: &Path, region: &FeasibleRegion) -> Result<()> {
    let xs: Vec<f64> = region.vertices.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = region.vertices.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("parquet") => {
            ParquetWriter::new(&mut file).finish(&mut df)?;
        }
        _ => {
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(&mut df)?;
        }
    }
    Ok(())
}
