use nalgebra::Point3;
use serde::Deserialize;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoordinateLoadError {
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
}

#[derive(Debug, Deserialize)]
struct CoordinateRow {
    x: f64,
    y: f64,
    z: f64,
}

fn reader_builder(has_headers: bool) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(has_headers).trim(csv::Trim::All);
    builder
}

fn collect_rows<R: io::Read>(
    mut reader: csv::Reader<R>,
    origin: &str,
) -> Result<Vec<Point3<f64>>, CoordinateLoadError> {
    let mut positions = Vec::new();
    for row in reader.deserialize::<CoordinateRow>() {
        let row = row.map_err(|e| CoordinateLoadError::Csv {
            path: origin.to_string(),
            source: e,
        })?;
        positions.push(Point3::new(row.x, row.y, row.z));
    }
    Ok(positions)
}

/// Reads `x,y,z` rows from a CSV stream.
///
/// With `has_headers` the first row names the columns (`x`, `y`, `z`); otherwise
/// columns are taken in order.
pub fn read_coordinates<R: io::Read>(
    reader: R,
    has_headers: bool,
) -> Result<Vec<Point3<f64>>, CoordinateLoadError> {
    collect_rows(reader_builder(has_headers).from_reader(reader), "<stream>")
}

pub fn load_coordinates(
    path: &Path,
    has_headers: bool,
) -> Result<Vec<Point3<f64>>, CoordinateLoadError> {
    let origin = path.to_string_lossy().to_string();
    let reader = reader_builder(has_headers)
        .from_path(path)
        .map_err(|e| CoordinateLoadError::Csv {
            path: origin.clone(),
            source: e,
        })?;
    collect_rows(reader, &origin)
}
