use crate::core::models::record::Record;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for loading and saving a line-oriented record file.
///
/// Implementors turn a text stream into an ordered sequence of [`Record`]s and back.
/// The whole sequence is held in memory; nothing is written until every record
/// has been encoded successfully.
pub trait RecordFile {
    /// The error type for I/O and encoding failures.
    type Error: Error + From<io::Error>;

    /// Reads every line of `reader` into a record sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the underlying stream fails.
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Record>, Self::Error>;

    /// Encodes `records` into the full text of a file.
    ///
    /// # Errors
    ///
    /// Returns an error if any record fails to encode.
    fn render(records: &[Record]) -> Result<String, Self::Error>;

    /// Reads a record sequence from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Record>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a record sequence to a file path, creating or truncating it.
    ///
    /// # Errors
    ///
    /// Returns an error if any record fails to encode, in which case the file is
    /// left untouched, or if the file cannot be created or written.
    fn write_to_path<P: AsRef<Path>>(records: &[Record], path: P) -> Result<(), Self::Error> {
        let text = Self::render(records)?;
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
