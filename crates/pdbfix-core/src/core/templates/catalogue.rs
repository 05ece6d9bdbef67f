use phf::{Map, phf_map};

/// `(atom name, element)` pairs in output order.
pub type TemplateAtoms = &'static [(&'static str, &'static str)];

#[rustfmt::skip]
pub static BUILTIN_TEMPLATES: Map<&'static str, TemplateAtoms> = phf_map! {
    // --- Caps ---
    "ACE" => &[
        ("1HH3", "H"), ("CH3", "C"), ("2HH3", "H"), ("3HH3", "H"), ("C", "C"), ("O", "O"),
    ],
    "NME" => &[
        ("N", "N"), ("H", "H"), ("CH3", "C"), ("1HH3", "H"), ("2HH3", "H"), ("3HH3", "H"),
    ],

    // --- Canonical amino acids ---
    "ALA" => &[
        ("N", "N"), ("H", "H"), ("CA", "C"), ("HA", "H"),
        ("CB", "C"), ("1HB", "H"), ("2HB", "H"), ("3HB", "H"),
        ("C", "C"), ("O", "O"),
    ],
    "ASN" => &[
        ("N", "N"), ("H", "H"), ("CA", "C"), ("HA", "H"),
        ("CB", "C"), ("HB1", "H"), ("HB2", "H"),
        ("CG", "C"), ("OD1", "O"), ("ND2", "N"), ("HD21", "H"), ("HD22", "H"),
        ("C", "C"), ("O", "O"),
    ],
    "PHE" => &[
        ("N", "N"), ("H", "H"), ("CA", "C"), ("HA", "H"),
        ("CB", "C"), ("HB1", "H"), ("HB2", "H"),
        ("CG", "C"), ("CD1", "C"), ("HD1", "H"), ("CE1", "C"), ("HE1", "H"),
        ("CZ", "C"), ("HZ", "H"), ("CE2", "C"), ("HE2", "H"), ("CD2", "C"), ("HD2", "H"),
        ("C", "C"), ("O", "O"),
    ],
    "GLY" => &[
        ("N", "N"), ("H", "H"), ("CA", "C"), ("HA1", "H"), ("HA2", "H"),
        ("C", "C"), ("O", "O"),
    ],
    "ILE" => &[
        ("N", "N"), ("H", "H"), ("CA", "C"), ("HA", "H"),
        ("CB", "C"), ("HB", "H"),
        ("CG2", "C"), ("HG21", "H"), ("HG22", "H"), ("HG23", "H"),
        ("CG1", "C"), ("HG11", "H"), ("HG12", "H"),
        ("CD", "C"), ("HD1", "H"), ("HD2", "H"), ("HD3", "H"),
        ("C", "C"), ("O", "O"),
    ],
    "SER" => &[
        ("N", "N"), ("H", "H"), ("CA", "C"), ("HA", "H"),
        ("CB", "C"), ("HB1", "H"), ("HB2", "H"),
        ("OG", "O"), ("HG", "H"),
        ("C", "C"), ("O", "O"),
    ],
    "LEU" => &[
        ("N", "N"), ("H", "H"), ("CA", "C"), ("HA", "H"),
        ("CB", "C"), ("HB1", "H"), ("HB2", "H"),
        ("CG", "C"), ("HG", "H"),
        ("CD1", "C"), ("HD11", "H"), ("HD12", "H"), ("HD13", "H"),
        ("CD2", "C"), ("HD21", "H"), ("HD22", "H"), ("HD23", "H"),
        ("C", "C"), ("O", "O"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_template_fits_the_record_columns() {
        for (name, atoms) in BUILTIN_TEMPLATES.entries() {
            assert!(name.len() <= 3, "{}", name);
            for (atom_name, element) in atoms.iter() {
                assert!(atom_name.len() <= 4, "{} {}", name, atom_name);
                assert!(element.len() <= 2, "{} {}", name, element);
            }
        }
    }

    #[test]
    fn amino_acid_templates_end_with_carbonyl() {
        for name in ["ALA", "ASN", "PHE", "GLY", "ILE", "SER", "LEU"] {
            let atoms = BUILTIN_TEMPLATES.get(name).unwrap();
            assert_eq!(atoms[0], ("N", "N"), "{}", name);
            assert_eq!(atoms[atoms.len() - 2], ("C", "C"), "{}", name);
            assert_eq!(atoms[atoms.len() - 1], ("O", "O"), "{}", name);
        }
    }

    #[test]
    fn element_symbols_match_leading_letter_of_heavy_atoms() {
        for (name, atoms) in BUILTIN_TEMPLATES.entries() {
            for (atom_name, element) in atoms.iter() {
                let first_letter = atom_name.trim_start_matches(|c: char| c.is_ascii_digit());
                assert!(
                    first_letter.starts_with(element),
                    "{}: atom {} has element {}",
                    name,
                    atom_name,
                    element
                );
            }
        }
    }
}
