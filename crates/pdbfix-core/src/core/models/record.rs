use nalgebra::Point3;
use std::fmt;
use std::ops::Range;
use thiserror::Error;

/// Width of an encoded ATOM/HETATM line, excluding the line terminator.
pub const LINE_WIDTH: usize = 79;

/// Canonical chain terminator written in place of any `TER` line.
pub const TER_MARKER: &str = "TER ";

/// How a value is padded into its column range when it is shorter than the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Justify {
    Left,
    Right,
}

/// Every column-addressed field of an ATOM/HETATM record.
///
/// The discriminant doubles as the index into [`FIELD_LAYOUT`] and into the
/// value slots of an [`AtomRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    RecordType = 0,
    AtomId,
    AtomName,
    AltLoc,
    ResName,
    ChainId,
    ResId,
    InsertionCode,
    X,
    Y,
    Z,
    Occupancy,
    TempFactor,
    SegmentId,
    Element,
}

/// Column placement of one field within a record line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    pub field: Field,
    pub name: &'static str,
    /// 0-based, end-exclusive.
    pub start: usize,
    pub end: usize,
    pub justify: Justify,
    /// Decimal places for fixed-point fields.
    pub precision: Option<usize>,
}

const fn layout(
    field: Field,
    name: &'static str,
    start: usize,
    end: usize,
    justify: Justify,
    precision: Option<usize>,
) -> FieldLayout {
    FieldLayout {
        field,
        name,
        start,
        end,
        justify,
        precision,
    }
}

#[rustfmt::skip]
pub static FIELD_LAYOUT: [FieldLayout; Field::COUNT] = [
    layout(Field::RecordType,    "type",      0,  6,  Justify::Left,  None),
    layout(Field::AtomId,        "atomid",    6,  11, Justify::Right, None),
    layout(Field::AtomName,      "atomname",  12, 16, Justify::Left,  None),
    layout(Field::AltLoc,        "altlocid",  16, 17, Justify::Left,  None),
    layout(Field::ResName,       "resname",   17, 20, Justify::Right, None),
    layout(Field::ChainId,       "chainid",   21, 22, Justify::Left,  None),
    layout(Field::ResId,         "resid",     22, 26, Justify::Right, None),
    layout(Field::InsertionCode, "code",      26, 27, Justify::Left,  None),
    layout(Field::X,             "posx",      30, 38, Justify::Right, Some(3)),
    layout(Field::Y,             "posy",      38, 46, Justify::Right, Some(3)),
    layout(Field::Z,             "posz",      46, 54, Justify::Right, Some(3)),
    layout(Field::Occupancy,     "occupancy", 54, 60, Justify::Right, Some(2)),
    layout(Field::TempFactor,    "tempfact",  60, 66, Justify::Right, Some(2)),
    layout(Field::SegmentId,     "segid",     72, 76, Justify::Left,  None),
    layout(Field::Element,       "element",   76, 78, Justify::Right, None),
];

impl Field {
    pub const COUNT: usize = 15;

    pub const ALL: [Field; Field::COUNT] = [
        Field::RecordType,
        Field::AtomId,
        Field::AtomName,
        Field::AltLoc,
        Field::ResName,
        Field::ChainId,
        Field::ResId,
        Field::InsertionCode,
        Field::X,
        Field::Y,
        Field::Z,
        Field::Occupancy,
        Field::TempFactor,
        Field::SegmentId,
        Field::Element,
    ];

    pub fn layout(self) -> &'static FieldLayout {
        &FIELD_LAYOUT[self as usize]
    }

    pub fn columns(self) -> Range<usize> {
        let layout = self.layout();
        layout.start..layout.end
    }

    pub fn width(self) -> usize {
        let layout = self.layout();
        layout.end - layout.start
    }

    pub fn name(self) -> &'static str {
        self.layout().name
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("Value '{value}' for field '{field}' exceeds its column width of {max_width}")]
    FieldOverflow {
        field: Field,
        value: String,
        max_width: usize,
    },
}

/// Pads `value` into the column width of `field`, failing if it does not fit.
pub fn justify(field: Field, value: &str) -> Result<String, CodecError> {
    let width = field.width();
    if value.chars().count() > width {
        return Err(CodecError::FieldOverflow {
            field,
            value: value.to_string(),
            max_width: width,
        });
    }
    Ok(match field.layout().justify {
        Justify::Left => format!("{:<width$}", value),
        Justify::Right => format!("{:>width$}", value),
    })
}

/// The field set of an ATOM/HETATM line.
///
/// Each slot holds the text captured at decode time or the text representation of
/// the last value assigned to it. Unset slots encode as blanks. Assignments are
/// width-checked immediately, so an overflowing value never enters a record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AtomRecord {
    slots: [Option<String>; Field::COUNT],
}

impl AtomRecord {
    /// Creates an empty record of the given type (`ATOM` or `HETATM`).
    pub fn new(record_type: &str) -> Result<Self, CodecError> {
        let mut record = Self::default();
        record.set_text(Field::RecordType, record_type)?;
        Ok(record)
    }

    /// Raw text stored for `field`, exactly as captured or assigned.
    pub fn raw(&self, field: Field) -> Option<&str> {
        self.slots[field as usize].as_deref()
    }

    /// Trimmed text of `field`; empty when the field is unset or blank.
    pub fn value(&self, field: Field) -> &str {
        self.raw(field).map(str::trim).unwrap_or("")
    }

    pub fn is_set(&self, field: Field) -> bool {
        self.slots[field as usize].is_some()
    }

    pub fn set_text(&mut self, field: Field, value: impl Into<String>) -> Result<(), CodecError> {
        let value = value.into();
        justify(field, &value)?;
        self.slots[field as usize] = Some(value);
        Ok(())
    }

    pub fn set_int(&mut self, field: Field, value: i64) -> Result<(), CodecError> {
        self.set_text(field, value.to_string())
    }

    /// Writes a real number rounded to the field's fixed-point precision.
    pub fn set_real(&mut self, field: Field, value: f64) -> Result<(), CodecError> {
        let text = match field.layout().precision {
            Some(precision) => format!("{:.precision$}", value),
            None => value.to_string(),
        };
        self.set_text(field, text)
    }

    /// Stores text captured from an input line without re-validating it.
    pub(crate) fn capture(&mut self, field: Field, value: String) {
        self.slots[field as usize] = Some(value);
    }

    pub fn record_type(&self) -> &str {
        self.value(Field::RecordType)
    }

    pub fn atom_name(&self) -> &str {
        self.value(Field::AtomName)
    }

    pub fn res_name(&self) -> &str {
        self.value(Field::ResName)
    }

    pub fn res_id(&self) -> &str {
        self.value(Field::ResId)
    }

    pub fn chain_id(&self) -> &str {
        self.value(Field::ChainId)
    }

    pub fn atom_id(&self) -> Option<i64> {
        self.value(Field::AtomId).parse().ok()
    }

    pub fn position(&self) -> Option<Point3<f64>> {
        let x = self.value(Field::X).parse().ok()?;
        let y = self.value(Field::Y).parse().ok()?;
        let z = self.value(Field::Z).parse().ok()?;
        Some(Point3::new(x, y, z))
    }

    /// Writes all three coordinates, leaving the record unchanged if any of them overflows.
    pub fn set_position(&mut self, position: &Point3<f64>) -> Result<(), CodecError> {
        let mut updated = self.clone();
        updated.set_real(Field::X, position.x)?;
        updated.set_real(Field::Y, position.y)?;
        updated.set_real(Field::Z, position.z)?;
        *self = updated;
        Ok(())
    }
}

/// One line of a structure file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Atom(AtomRecord),
    /// A chain break, always encoded as [`TER_MARKER`].
    Terminator,
    /// Any other line, carried verbatim.
    Other(String),
}

impl Record {
    pub fn is_atom(&self) -> bool {
        matches!(self, Record::Atom(_))
    }

    pub fn is_terminator(&self) -> bool {
        matches!(self, Record::Terminator)
    }

    pub fn as_atom(&self) -> Option<&AtomRecord> {
        match self {
            Record::Atom(atom) => Some(atom),
            _ => None,
        }
    }

    pub fn as_atom_mut(&mut self) -> Option<&mut AtomRecord> {
        match self {
            Record::Atom(atom) => Some(atom),
            _ => None,
        }
    }
}

impl From<AtomRecord> for Record {
    fn from(atom: AtomRecord) -> Self {
        Record::Atom(atom)
    }
}
