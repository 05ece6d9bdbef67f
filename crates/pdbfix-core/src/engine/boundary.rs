use crate::core::models::record::{AtomRecord, Record};
use serde::Deserialize;

/// Detects where a new chain starts in a record stream.
///
/// Records must be fed strictly in sequence order. Non-atom records never fire and
/// leave the state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainBoundary {
    report_first: bool,
    current: Option<String>,
    seen_atom: bool,
}

impl ChainBoundary {
    /// `report_first` decides whether the very first atom counts as a boundary.
    pub fn new(report_first: bool) -> Self {
        Self {
            report_first,
            current: None,
            seen_atom: false,
        }
    }

    pub fn advance(&mut self, record: &Record) -> bool {
        match record {
            Record::Atom(atom) => self.advance_atom(atom),
            _ => false,
        }
    }

    pub fn advance_atom(&mut self, atom: &AtomRecord) -> bool {
        let first = !self.seen_atom;
        self.seen_atom = true;
        if self.current.as_deref() == Some(atom.chain_id()) {
            return false;
        }
        self.current = Some(atom.chain_id().to_string());
        if first { self.report_first } else { true }
    }

    /// Returns the detector to its freshly constructed state.
    pub fn reset(&mut self) {
        self.current = None;
        self.seen_atom = false;
    }
}

/// Which residue fields must change for a new residue to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResidueRule {
    /// Only a change of residue name starts a residue; consecutive residues of the
    /// same type merge.
    Name,
    /// Only a change of residue number starts a residue.
    Number,
    /// A change of either name or number starts a residue.
    #[default]
    NameOrNumber,
}

impl ResidueRule {
    fn differs(self, held: &(String, String), atom: &AtomRecord) -> bool {
        let name_changed = held.0 != atom.res_name();
        let number_changed = held.1 != atom.res_id();
        match self {
            ResidueRule::Name => name_changed,
            ResidueRule::Number => number_changed,
            ResidueRule::NameOrNumber => name_changed || number_changed,
        }
    }
}

impl std::str::FromStr for ResidueRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(ResidueRule::Name),
            "number" => Ok(ResidueRule::Number),
            "name-or-number" | "either" => Ok(ResidueRule::NameOrNumber),
            other => Err(format!(
                "unknown residue rule '{}', expected name, number or name-or-number",
                other
            )),
        }
    }
}

/// Detects where a new residue starts in a record stream.
///
/// The first atom is always a boundary. Non-atom records never fire and leave the
/// state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResidueBoundary {
    rule: ResidueRule,
    current: Option<(String, String)>,
}

impl ResidueBoundary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(rule: ResidueRule) -> Self {
        Self {
            rule,
            current: None,
        }
    }

    pub fn advance(&mut self, record: &Record) -> bool {
        match record {
            Record::Atom(atom) => self.advance_atom(atom),
            _ => false,
        }
    }

    pub fn advance_atom(&mut self, atom: &AtomRecord) -> bool {
        let changed = match &self.current {
            Some(held) => self.rule.differs(held, atom),
            None => true,
        };
        if changed {
            self.current = Some((atom.res_name().to_string(), atom.res_id().to_string()));
        }
        changed
    }

    pub fn reset(&mut self) {
        self.current = None;
    }
}
