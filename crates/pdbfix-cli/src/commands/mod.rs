pub mod build;
pub mod fix;
pub mod positions;

use crate::error::{CliError, Result};
use pdbfix::core::io::pdb::PdbFile;
use pdbfix::core::io::traits::RecordFile;
use pdbfix::core::models::record::Record;
use std::path::Path;
use tracing::info;

pub(crate) fn load_records(path: &Path) -> Result<Vec<Record>> {
    info!("Loading input structure from {:?}", path);
    PdbFile::read_from_path(path).map_err(|e| CliError::file(path, e))
}

pub(crate) fn save_records(records: &[Record], path: &Path) -> Result<()> {
    info!("Writing {} records to {:?}", records.len(), path);
    PdbFile::write_to_path(records, path).map_err(|e| CliError::file(path, e))?;
    println!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
