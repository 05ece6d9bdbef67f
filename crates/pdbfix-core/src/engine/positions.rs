use super::error::EngineError;
use crate::core::models::record::Record;
use nalgebra::Point3;
use tracing::debug;

/// Overwrites the coordinates of the records in `start..end` (`end` defaults to the
/// sequence length).
///
/// `coordinates[i]` belongs to record `start + i`, so the number of triples must equal
/// the range length. Non-atom records inside the range consume their triple without
/// being modified; records outside the range are copied through.
pub fn write_positions(
    records: &[Record],
    coordinates: &[Point3<f64>],
    start: usize,
    end: Option<usize>,
) -> Result<Vec<Record>, EngineError> {
    let end = end.unwrap_or(records.len());
    if start > end || end > records.len() {
        return Err(EngineError::InvalidRange {
            start,
            end,
            len: records.len(),
        });
    }
    if coordinates.len() != end - start {
        return Err(EngineError::ShapeMismatch {
            expected: end - start,
            actual: coordinates.len(),
        });
    }

    let mut output = records.to_vec();
    let mut updated = 0;
    for (record, position) in output[start..end].iter_mut().zip(coordinates) {
        if let Some(atom) = record.as_atom_mut() {
            atom.set_position(position)?;
            updated += 1;
        }
    }

    debug!(
        "Wrote {} atom positions in records {}..{}",
        updated, start, end
    );
    Ok(output)
}
