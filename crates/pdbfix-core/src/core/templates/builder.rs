use super::library::{ResidueTemplate, TemplateLibrary};
use crate::core::models::record::{AtomRecord, CodecError, Field, Record};
use nalgebra::Point3;
use thiserror::Error;

const N_TERMINAL_HYDROGEN: (&str, &str) = ("H3", "H");
const C_TERMINAL_OXYGENS: [(&str, &str); 2] = [("OC1", "O"), ("OC2", "O")];
/// The extra N-terminal hydrogen follows this many template atoms.
const N_TERMINAL_INSERT_AFTER: usize = 3;

#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("No template for residue '{0}'")]
    UnknownResidue(String),
    #[error("Expected {expected} positions, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Where a residue sits within its peptide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Terminus {
    pub n_terminal: bool,
    pub c_terminal: bool,
}

/// Identifiers stamped onto the records of one synthesized residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResiduePlacement {
    pub res_id: isize,
    pub first_atom_id: usize,
    pub chain_id: char,
    pub terminus: Terminus,
}

impl ResidueTemplate {
    /// Atom names and elements actually emitted once terminal rules are applied.
    pub fn expand(&self, terminus: Terminus) -> Vec<(&str, &str)> {
        let mut atoms: Vec<(&str, &str)> = Vec::with_capacity(self.atoms.len() + 2);
        for (index, atom) in self.atoms.iter().enumerate() {
            atoms.push((atom.name.as_str(), atom.element.as_str()));
            if terminus.n_terminal && index + 1 == N_TERMINAL_INSERT_AFTER {
                atoms.push(N_TERMINAL_HYDROGEN);
            }
        }
        if terminus.c_terminal {
            atoms.pop();
            atoms.extend(C_TERMINAL_OXYGENS);
        }
        atoms
    }

    pub fn atom_count(&self, terminus: Terminus) -> usize {
        self.expand(terminus).len()
    }

    /// Synthesizes one ATOM/HETATM record per emitted atom, consuming one position each.
    pub fn build(
        &self,
        placement: &ResiduePlacement,
        positions: &[Point3<f64>],
    ) -> Result<Vec<Record>, BuildError> {
        let atoms = self.expand(placement.terminus);
        if atoms.len() != positions.len() {
            return Err(BuildError::ShapeMismatch {
                expected: atoms.len(),
                actual: positions.len(),
            });
        }

        let mut records = Vec::with_capacity(atoms.len());
        for (offset, ((name, element), position)) in atoms.iter().zip(positions).enumerate() {
            let mut atom = AtomRecord::new(&self.record_type)?;
            atom.set_int(Field::AtomId, (placement.first_atom_id + offset) as i64)?;
            atom.set_text(Field::AtomName, *name)?;
            atom.set_text(Field::ResName, self.name.as_str())?;
            atom.set_text(Field::ChainId, placement.chain_id.to_string())?;
            atom.set_int(Field::ResId, placement.res_id as i64)?;
            atom.set_position(position)?;
            atom.set_text(Field::Element, *element)?;
            records.push(Record::Atom(atom));
        }
        Ok(records)
    }
}

/// Builds a single-chain peptide from residue names, ending it with a terminator.
///
/// Atom ids start at 1 and residue ids at `first_res_id`; the first residue is built
/// N-terminal and the last C-terminal. `positions` supplies one point per emitted
/// atom across the whole chain.
pub fn build_peptide<S: AsRef<str>>(
    library: &TemplateLibrary,
    sequence: &[S],
    positions: &[Point3<f64>],
    chain_id: char,
    first_res_id: isize,
) -> Result<Vec<Record>, BuildError> {
    let mut templates = Vec::with_capacity(sequence.len());
    for name in sequence {
        let name = name.as_ref();
        templates.push(
            library
                .get(name)
                .ok_or_else(|| BuildError::UnknownResidue(name.to_string()))?,
        );
    }

    let last = templates.len().saturating_sub(1);
    let termini: Vec<Terminus> = (0..templates.len())
        .map(|index| Terminus {
            n_terminal: index == 0,
            c_terminal: index == last,
        })
        .collect();

    let expected: usize = templates
        .iter()
        .zip(&termini)
        .map(|(template, terminus)| template.atom_count(*terminus))
        .sum();
    if expected != positions.len() {
        return Err(BuildError::ShapeMismatch {
            expected,
            actual: positions.len(),
        });
    }

    let mut records = Vec::with_capacity(expected + 1);
    let mut consumed = 0;
    for (index, (template, terminus)) in templates.iter().zip(termini).enumerate() {
        let count = template.atom_count(terminus);
        let placement = ResiduePlacement {
            res_id: first_res_id + index as isize,
            first_atom_id: consumed + 1,
            chain_id,
            terminus,
        };
        records.extend(template.build(&placement, &positions[consumed..consumed + count])?);
        consumed += count;
    }
    if !records.is_empty() {
        records.push(Record::Terminator);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::codec;

    fn positions(count: usize) -> Vec<Point3<f64>> {
        (0..count)
            .map(|i| Point3::new(i as f64, 0.5 * i as f64, -1.0))
            .collect()
    }

    fn names(records: &[Record]) -> Vec<&str> {
        records
            .iter()
            .filter_map(Record::as_atom)
            .map(AtomRecord::atom_name)
            .collect()
    }

    #[test]
    fn interior_residue_uses_template_as_is() {
        let library = TemplateLibrary::builtin();
        let gly = library.get("GLY").unwrap();
        let placement = ResiduePlacement {
            res_id: 5,
            first_atom_id: 40,
            chain_id: 'B',
            terminus: Terminus::default(),
        };

        let records = gly.build(&placement, &positions(7)).unwrap();
        assert_eq!(names(&records), vec!["N", "H", "CA", "HA1", "HA2", "C", "O"]);

        let first = records[0].as_atom().unwrap();
        assert_eq!(first.atom_id(), Some(40));
        assert_eq!(first.res_id(), "5");
        assert_eq!(first.chain_id(), "B");
        assert_eq!(first.res_name(), "GLY");
        assert_eq!(first.value(Field::Element), "N");
        assert_eq!(records[6].as_atom().unwrap().atom_id(), Some(46));
    }

    #[test]
    fn n_terminal_residue_gains_extra_hydrogen_after_third_atom() {
        let library = TemplateLibrary::builtin();
        let gly = library.get("GLY").unwrap();
        let terminus = Terminus {
            n_terminal: true,
            c_terminal: false,
        };
        let expanded = gly.expand(terminus);
        assert_eq!(expanded.len(), 8);
        assert_eq!(expanded[3], ("H3", "H"));
    }

    #[test]
    fn c_terminal_residue_replaces_carbonyl_oxygen() {
        let library = TemplateLibrary::builtin();
        let ala = library.get("ALA").unwrap();
        let terminus = Terminus {
            n_terminal: false,
            c_terminal: true,
        };
        let expanded = ala.expand(terminus);
        assert_eq!(expanded.len(), 11);
        assert_eq!(&expanded[8..], &[("C", "C"), ("OC1", "O"), ("OC2", "O")]);
    }

    #[test]
    fn build_rejects_wrong_position_count() {
        let library = TemplateLibrary::builtin();
        let placement = ResiduePlacement {
            res_id: 1,
            first_atom_id: 1,
            chain_id: 'A',
            terminus: Terminus::default(),
        };
        let err = library
            .get("SER")
            .unwrap()
            .build(&placement, &positions(3))
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::ShapeMismatch {
                expected: 11,
                actual: 3
            }
        );
    }

    #[test]
    fn build_peptide_numbers_atoms_and_residues_consecutively() {
        let library = TemplateLibrary::builtin();
        // GLY (7 + H3) + ALA (10) + SER (11 - O + OC1 + OC2)
        let records = build_peptide(&library, &["GLY", "ALA", "SER"], &positions(30), 'A', 1)
            .unwrap();

        assert_eq!(records.len(), 31);
        assert!(records.last().unwrap().is_terminator());

        let atoms: Vec<&AtomRecord> = records.iter().filter_map(Record::as_atom).collect();
        for (index, atom) in atoms.iter().enumerate() {
            assert_eq!(atom.atom_id(), Some(index as i64 + 1));
        }
        assert_eq!(atoms[0].res_id(), "1");
        assert_eq!(atoms[8].res_name(), "ALA");
        assert_eq!(atoms[8].res_id(), "2");
        assert_eq!(atoms[29].atom_name(), "OC2");
        assert_eq!(atoms[29].res_id(), "3");
        assert_eq!(atoms[29].position(), Some(Point3::new(29.0, 14.5, -1.0)));

        for record in &records {
            let line = codec::encode(record).unwrap();
            if record.is_atom() {
                assert_eq!(line.len(), 80);
            }
        }
    }

    #[test]
    fn single_residue_peptide_is_both_terminal() {
        let library = TemplateLibrary::builtin();
        // GLY: 7 + H3 - O + OC1 + OC2
        let records = build_peptide(&library, &["GLY"], &positions(9), 'A', 1).unwrap();
        assert_eq!(
            names(&records),
            vec!["N", "H", "CA", "H3", "HA1", "HA2", "C", "OC1", "OC2"]
        );
    }

    #[test]
    fn build_peptide_rejects_unknown_residue() {
        let library = TemplateLibrary::builtin();
        let err = build_peptide(&library, &["GLY", "XYZ"], &positions(0), 'A', 1).unwrap_err();
        assert_eq!(err, BuildError::UnknownResidue("XYZ".to_string()));
    }

    #[test]
    fn build_peptide_checks_total_position_count() {
        let library = TemplateLibrary::builtin();
        let err = build_peptide(&library, &["GLY", "GLY"], &positions(10), 'A', 1).unwrap_err();
        assert_eq!(
            err,
            BuildError::ShapeMismatch {
                expected: 16,
                actual: 10
            }
        );
    }

    #[test]
    fn empty_sequence_builds_nothing() {
        let library = TemplateLibrary::builtin();
        let empty: [&str; 0] = [];
        assert!(
            build_peptide(&library, &empty, &[], 'A', 1)
                .unwrap()
                .is_empty()
        );
    }
}
