//! The tabular artifacts at the pipeline boundary.
//!
//! Input: one row per site, `(X, Y, src_vocab, src_unit)`, filtered to a
//! single vocabulary size before the pipeline runs. Output: one row per unit
//! id with the ordered, comma-joined X and Y coordinates of its clipped
//! boundary loop, the artifact the rendering layer consumes.

use std::num::ParseFloatError;

use polars::prelude::*;

use crate::error::Result;
use crate::pipeline::UnitArea;

/// Reads the site artifact and returns the flat `[x, y, ...]` coordinates of
/// the sites belonging to one vocabulary size, in row order.
pub fn read_sites(path: &str, vocab: u32) -> Result<Vec<f64>> {
    let lf = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?;
    let df = lf
        .filter(col("src_vocab").cast(DataType::Int64).eq(lit(vocab as i64)))
        .select([
            col("X").cast(DataType::Float64),
            col("Y").cast(DataType::Float64),
        ])
        .collect()?;

    let xs = df.column("X")?.f64()?;
    let ys = df.column("Y")?.f64()?;

    let mut sites = Vec::with_capacity(df.height() * 2);
    for (x, y) in xs.into_no_null_iter().zip(ys.into_no_null_iter()) {
        sites.push(x);
        sites.push(y);
    }

    tracing::debug!(path, vocab, sites = df.height(), "read site artifact");
    Ok(sites)
}

/// The persisted unit-area table: one row per unit id, ascending, with the
/// closed boundary loop (first vertex repeated last) joined by commas.
#[derive(Clone, Debug, Default)]
pub struct AreaTable {
    units: Vec<i64>,
    xs: Vec<String>,
    ys: Vec<String>,
}

impl AreaTable {
    /// Builds the table from computed areas, which arrive sorted by unit id.
    /// Units are the row keys: when several areas carry the same unit id, the
    /// last one wins and the row is overwritten.
    pub fn from_areas(areas: &[UnitArea]) -> AreaTable {
        let mut table = AreaTable::default();
        for area in areas {
            let loop_vertices = area.polygon.closed_loop();
            let n = loop_vertices.len() / 2;
            let xs: Vec<String> = (0..n).map(|i| loop_vertices[i * 2].to_string()).collect();
            let ys: Vec<String> = (0..n).map(|i| loop_vertices[i * 2 + 1].to_string()).collect();

            let unit = area.unit as i64;
            if table.units.last() == Some(&unit) {
                let row = table.units.len() - 1;
                table.xs[row] = xs.join(",");
                table.ys[row] = ys.join(",");
            } else {
                table.units.push(unit);
                table.xs.push(xs.join(","));
                table.ys.push(ys.join(","));
            }
        }
        table
    }

    pub fn count_rows(&self) -> usize {
        self.units.len()
    }

    pub fn units(&self) -> &[i64] {
        &self.units
    }

    /// Parsed X loop for one row.
    pub fn x_loop(&self, row: usize) -> std::result::Result<Vec<f64>, ParseFloatError> {
        parse_loop(&self.xs[row])
    }

    /// Parsed Y loop for one row.
    pub fn y_loop(&self, row: usize) -> std::result::Result<Vec<f64>, ParseFloatError> {
        parse_loop(&self.ys[row])
    }

    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let df = df!(
            "unit" => &self.units,
            "X" => &self.xs,
            "Y" => &self.ys
        )?;
        Ok(df)
    }

    pub fn write_csv(&self, path: &str) -> Result<()> {
        let mut df = self.to_dataframe()?;
        let mut file = std::fs::File::create(path)?;
        CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
        tracing::info!(path, rows = self.count_rows(), "wrote unit area table");
        Ok(())
    }

    pub fn read_csv(path: &str) -> Result<AreaTable> {
        let df = LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()?
            .collect()?;

        let units = df.column("unit")?.i64()?.into_no_null_iter().collect();
        let xs = df
            .column("X")?
            .str()?
            .into_no_null_iter()
            .map(|s| s.to_string())
            .collect();
        let ys = df
            .column("Y")?
            .str()?
            .into_no_null_iter()
            .map(|s| s.to_string())
            .collect();

        Ok(AreaTable { units, xs, ys })
    }
}

/// Parses a comma-joined coordinate list back into numbers.
pub fn parse_loop(joined: &str) -> std::result::Result<Vec<f64>, ParseFloatError> {
    joined.split(',').map(str::parse::<f64>).collect()
}
