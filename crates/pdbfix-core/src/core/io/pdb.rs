use crate::core::io::codec;
use crate::core::io::traits::RecordFile;
use crate::core::models::record::{CodecError, Record};
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Cannot encode record {index}: {source}")]
    Encode {
        index: usize,
        #[source]
        source: CodecError,
    },
}

/// PDB atomic-coordinate files, one [`Record`] per line.
pub struct PdbFile;

impl RecordFile for PdbFile {
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Record>, Self::Error> {
        let mut records = Vec::new();
        for line in reader.lines() {
            records.push(codec::decode(&line?));
        }
        debug!(
            "Read {} records ({} atoms)",
            records.len(),
            records.iter().filter(|r| r.is_atom()).count()
        );
        Ok(records)
    }

    fn render(records: &[Record]) -> Result<String, Self::Error> {
        let mut text = String::new();
        for (index, record) in records.iter().enumerate() {
            let line = codec::encode(record).map_err(|source| PdbError::Encode { index, source })?;
            text.push_str(&line);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::record::Field;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    const INPUT: &str = "\
REMARK   1 TWO GLYCINES
ATOM      1  N   GLY A   1      -1.195   0.000   0.000  1.00  0.00           N
ATOM      2  CA  GLY A   1       0.000   0.000   0.000  1.00  0.00           C
TER       3      GLY A   1
ATOM      4  N   GLY B   2       2.100   1.000   0.000  1.00  0.00           N
END
";

    #[test]
    fn read_from_decodes_every_line() {
        let records = PdbFile::read_from(&mut Cursor::new(INPUT)).unwrap();
        assert_eq!(records.len(), 6);
        assert!(matches!(&records[0], Record::Other(text) if text.starts_with("REMARK")));
        assert!(records[1].is_atom());
        assert!(records[3].is_terminator());
        assert!(matches!(&records[5], Record::Other(text) if text == "END"));
    }

    #[test]
    fn render_round_trips_apart_from_terminator_canonicalization() {
        let records = PdbFile::read_from(&mut Cursor::new(INPUT)).unwrap();
        let text = PdbFile::render(&records).unwrap();

        let expected = INPUT.replace("TER       3      GLY A   1", "TER ");
        let rendered_lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        let expected_lines: Vec<&str> = expected.lines().map(str::trim_end).collect();
        assert_eq!(rendered_lines, expected_lines);
        assert!(
            text.lines()
                .filter(|line| line.starts_with("ATOM"))
                .all(|line| line.len() == 79)
        );
        assert!(text.contains("\nTER \n"));
    }

    #[test]
    fn write_to_path_and_read_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.pdb");

        let records = PdbFile::read_from(&mut Cursor::new(INPUT)).unwrap();
        PdbFile::write_to_path(&records, &path).unwrap();

        let reloaded = PdbFile::read_from_path(&path).unwrap();
        assert_eq!(reloaded, records);
    }

    #[test]
    fn failed_encode_leaves_existing_file_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keep.pdb");
        fs::write(&path, "ORIGINAL\n").unwrap();

        let mut atom = crate::core::models::record::AtomRecord::default();
        atom.capture(Field::AtomId, "1234567".to_string());
        let records = vec![Record::Other("HEADER".into()), Record::Atom(atom)];

        let err = PdbFile::write_to_path(&records, &path).unwrap_err();
        assert!(matches!(err, PdbError::Encode { index: 1, .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "ORIGINAL\n");
    }

    #[test]
    fn read_from_missing_path_is_io_error() {
        let dir = tempdir().unwrap();
        let result = PdbFile::read_from_path(dir.path().join("missing.pdb"));
        assert!(matches!(result, Err(PdbError::Io(_))));
    }
}
