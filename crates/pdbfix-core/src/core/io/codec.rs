use crate::core::models::record::{
    AtomRecord, CodecError, Field, LINE_WIDTH, Record, TER_MARKER, justify,
};

const ATOM_RECORD_TYPES: [&str; 2] = ["ATOM", "HETATM"];

fn strip_terminator(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

/// Whether the record name columns hold `ATOM` or `HETATM`.
pub fn is_atom_line(line: &str) -> bool {
    let record_name: String = line.chars().take(Field::RecordType.width()).collect();
    ATOM_RECORD_TYPES.contains(&record_name.trim())
}

/// Decodes one line of text into a [`Record`].
///
/// Atom lines are padded with spaces or truncated to [`LINE_WIDTH`] columns and every
/// field's column range is captured verbatim. Lines starting with `TER` collapse into
/// a bare terminator; anything else is kept as opaque text.
pub fn decode(line: &str) -> Record {
    let content = strip_terminator(line);
    if is_atom_line(content) {
        let columns: Vec<char> = content
            .chars()
            .chain(std::iter::repeat(' '))
            .take(LINE_WIDTH)
            .collect();
        let mut atom = AtomRecord::default();
        for field in Field::ALL {
            let text: String = columns[field.columns()].iter().collect();
            atom.capture(field, text);
        }
        Record::Atom(atom)
    } else if content.starts_with("TER") {
        Record::Terminator
    } else {
        Record::Other(line.to_string())
    }
}

/// Encodes a [`Record`] into a line of text including its terminator.
pub fn encode(record: &Record) -> Result<String, CodecError> {
    match record {
        Record::Atom(atom) => encode_atom(atom),
        Record::Terminator => Ok(format!("{}\n", TER_MARKER)),
        Record::Other(text) if text.ends_with('\n') => Ok(text.clone()),
        Record::Other(text) => Ok(format!("{}\n", text)),
    }
}

fn encode_atom(atom: &AtomRecord) -> Result<String, CodecError> {
    let mut columns = [' '; LINE_WIDTH];
    for field in Field::ALL {
        if let Some(value) = atom.raw(field) {
            let padded = justify(field, value)?;
            for (slot, ch) in columns[field.columns()].iter_mut().zip(padded.chars()) {
                *slot = ch;
            }
        }
    }
    let mut line: String = columns.iter().collect();
    line.push('\n');
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    const ALA_N: &str =
        "ATOM      1  N   ALA A   1      11.104   6.134  -6.504  1.00  0.00      PROT N ";
    const HOH_O: &str =
        "HETATM  512  O   HOH W  93      -2.310  14.012   7.700  0.50 21.37      WAT  O ";

    #[test]
    fn decode_then_encode_reproduces_atom_columns() {
        for line in [ALA_N, HOH_O] {
            assert_eq!(line.len(), LINE_WIDTH);
            let record = decode(line);
            assert!(record.is_atom());
            assert_eq!(encode(&record).unwrap(), format!("{}\n", line));
        }
    }

    #[test]
    fn decode_captures_field_columns() {
        let record = decode(ALA_N);
        let atom = record.as_atom().unwrap();
        assert_eq!(atom.record_type(), "ATOM");
        assert_eq!(atom.atom_id(), Some(1));
        assert_eq!(atom.atom_name(), "N");
        assert_eq!(atom.res_name(), "ALA");
        assert_eq!(atom.chain_id(), "A");
        assert_eq!(atom.res_id(), "1");
        assert_eq!(atom.value(Field::SegmentId), "PROT");
        assert_eq!(atom.value(Field::Element), "N");
        assert_eq!(atom.position(), Some(Point3::new(11.104, 6.134, -6.504)));
    }

    #[test]
    fn decode_pads_short_atom_lines() {
        let record = decode("ATOM      7  CA  GLY B  12\n");
        let atom = record.as_atom().unwrap();
        assert_eq!(atom.raw(Field::X), Some("        "));
        let encoded = encode(&record).unwrap();
        assert_eq!(encoded.len(), LINE_WIDTH + 1);
        assert!(encoded.starts_with("ATOM      7  CA  GLY B  12"));
    }

    #[test]
    fn decode_truncates_long_atom_lines() {
        let long = format!("{}  EXTRA COLUMNS", ALA_N);
        let encoded = encode(&decode(&long)).unwrap();
        assert_eq!(encoded, format!("{}\n", ALA_N));
    }

    #[test]
    fn decode_strips_crlf_before_slicing() {
        let record = decode(&format!("{}\r\n", ALA_N));
        assert_eq!(encode(&record).unwrap(), format!("{}\n", ALA_N));
    }

    #[test]
    fn terminator_lines_are_canonicalized() {
        let record = decode("TER     163      ALA A  20\n");
        assert_eq!(record, Record::Terminator);
        assert_eq!(encode(&record).unwrap(), "TER \n");
        assert_eq!(decode("TER"), Record::Terminator);
    }

    #[test]
    fn other_lines_pass_through_unchanged() {
        let header = "HEADER    DE NOVO PROTEIN                         01-JAN-24   XXXX\n";
        assert_eq!(encode(&decode(header)).unwrap(), header);
        assert_eq!(encode(&decode("END")).unwrap(), "END\n");
        assert!(!decode("").is_atom());
    }

    #[test]
    fn encode_writes_assigned_values_with_justification() {
        let mut record = decode(ALA_N);
        let atom = record.as_atom_mut().unwrap();
        atom.set_int(Field::AtomId, 42).unwrap();
        atom.set_int(Field::ResId, 7).unwrap();
        atom.set_text(Field::ChainId, "C").unwrap();
        let encoded = encode(&record).unwrap();
        assert_eq!(&encoded[6..11], "   42");
        assert_eq!(&encoded[21..22], "C");
        assert_eq!(&encoded[22..26], "   7");
        assert_eq!(&encoded[26..], &format!("{}\n", ALA_N)[26..]);
    }

    #[test]
    fn encode_builds_record_from_scratch() {
        let mut atom = AtomRecord::new("ATOM").unwrap();
        atom.set_int(Field::AtomId, 3).unwrap();
        atom.set_text(Field::AtomName, "CA").unwrap();
        atom.set_text(Field::ResName, "GLY").unwrap();
        atom.set_text(Field::ChainId, "A").unwrap();
        atom.set_int(Field::ResId, 1).unwrap();
        atom.set_position(&Point3::new(1.5, -2.25, 10.0)).unwrap();
        atom.set_text(Field::Element, "C").unwrap();

        let encoded = encode(&Record::Atom(atom)).unwrap();
        assert_eq!(
            encoded,
            "ATOM      3 CA   GLY A   1       1.500  -2.250  10.000                       C \n"
        );
    }
}
