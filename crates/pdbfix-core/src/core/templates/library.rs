use super::catalogue::BUILTIN_TEMPLATES;
use crate::core::models::record::Field;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateAtom {
    pub name: String,
    pub element: String,
}

/// Atom names and elements of one residue type, in output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidueTemplate {
    pub name: String,
    /// `ATOM` or `HETATM`.
    pub record_type: String,
    pub atoms: Vec<TemplateAtom>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct TemplateEntry {
    #[serde(default = "default_record_type")]
    record_type: String,
    atoms: Vec<(String, String)>,
}

fn default_record_type() -> String {
    "ATOM".to_string()
}

#[derive(Debug, Error)]
pub enum TemplateLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid template '{residue}': {reason}")]
    Invalid { residue: String, reason: String },
}

/// Residue templates available to the peptide builder.
///
/// Starts from the built-in catalogue; templates loaded from a TOML file are added
/// on top and replace built-ins of the same name.
#[derive(Debug, Clone)]
pub struct TemplateLibrary {
    templates: HashMap<String, ResidueTemplate>,
}

impl Default for TemplateLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateLibrary {
    pub fn builtin() -> Self {
        let templates = BUILTIN_TEMPLATES
            .entries()
            .map(|(name, atoms)| {
                let template = ResidueTemplate {
                    name: name.to_string(),
                    record_type: default_record_type(),
                    atoms: atoms
                        .iter()
                        .map(|(atom_name, element)| TemplateAtom {
                            name: atom_name.to_string(),
                            element: element.to_string(),
                        })
                        .collect(),
                };
                (name.to_string(), template)
            })
            .collect();
        Self { templates }
    }

    /// Built-in templates extended with those in the TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self, TemplateLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| TemplateLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let mut library = Self::builtin();
        library
            .extend_from_toml(&content)
            .map_err(|e| match e {
                TemplateLoadError::Toml { source, .. } => TemplateLoadError::Toml {
                    path: path.to_string_lossy().to_string(),
                    source,
                },
                other => other,
            })?;
        Ok(library)
    }

    pub fn extend_from_toml(&mut self, content: &str) -> Result<(), TemplateLoadError> {
        let entries: HashMap<String, TemplateEntry> =
            toml::from_str(content).map_err(|e| TemplateLoadError::Toml {
                path: "<string>".to_string(),
                source: e,
            })?;
        for (name, entry) in entries {
            let template = validate(name, entry)?;
            self.templates.insert(template.name.clone(), template);
        }
        Ok(())
    }

    pub fn get(&self, residue_name: &str) -> Option<&ResidueTemplate> {
        self.templates.get(residue_name)
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn validate(name: String, entry: TemplateEntry) -> Result<ResidueTemplate, TemplateLoadError> {
    let invalid = |reason: String| TemplateLoadError::Invalid {
        residue: name.clone(),
        reason,
    };
    if name.is_empty() || name.len() > Field::ResName.width() {
        return Err(invalid(format!(
            "residue names must be 1 to {} characters",
            Field::ResName.width()
        )));
    }
    if !matches!(entry.record_type.as_str(), "ATOM" | "HETATM") {
        return Err(invalid(format!(
            "record type must be ATOM or HETATM, got '{}'",
            entry.record_type
        )));
    }
    if entry.atoms.is_empty() {
        return Err(invalid("template has no atoms".to_string()));
    }
    let mut atoms = Vec::with_capacity(entry.atoms.len());
    for (atom_name, element) in entry.atoms {
        if atom_name.len() > Field::AtomName.width() || element.len() > Field::Element.width() {
            return Err(invalid(format!(
                "atom '{}' ({}) does not fit the record columns",
                atom_name, element
            )));
        }
        atoms.push(TemplateAtom {
            name: atom_name,
            element,
        });
    }
    Ok(ResidueTemplate {
        name: name.clone(),
        record_type: entry.record_type,
        atoms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn builtin_library_contains_catalogue() {
        let library = TemplateLibrary::builtin();
        assert_eq!(
            library.names(),
            vec!["ACE", "ALA", "ASN", "GLY", "ILE", "LEU", "NME", "PHE", "SER"]
        );
        let gly = library.get("GLY").unwrap();
        assert_eq!(gly.record_type, "ATOM");
        assert_eq!(gly.atoms.len(), 7);
        assert_eq!(gly.atoms[2].name, "CA");
        assert_eq!(gly.atoms[2].element, "C");
    }

    #[test]
    fn load_adds_and_overrides_templates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("templates.toml");
        let mut file = File::create(&path).unwrap();
        writeln!(
            file,
            r#"
            [HOH]
            record-type = "HETATM"
            atoms = [["O", "O"], ["H1", "H"], ["H2", "H"]]

            [GLY]
            atoms = [["N", "N"], ["CA", "C"], ["C", "C"], ["O", "O"]]
            "#
        )
        .unwrap();

        let library = TemplateLibrary::load(&path).unwrap();
        let water = library.get("HOH").unwrap();
        assert_eq!(water.record_type, "HETATM");
        assert_eq!(water.atoms.len(), 3);
        assert_eq!(library.get("GLY").unwrap().atoms.len(), 4);
        assert!(library.get("ALA").is_some());
    }

    #[test]
    fn load_reports_toml_errors_with_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[TYR\natoms = 1").unwrap();

        let err = TemplateLibrary::load(&path).unwrap_err();
        match err {
            TemplateLoadError::Toml { path: reported, .. } => {
                assert!(reported.ends_with("broken.toml"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn extend_rejects_oversized_atom_names() {
        let mut library = TemplateLibrary::builtin();
        let err = library
            .extend_from_toml(r#"LIG = { atoms = [["CARBON", "C"]] }"#)
            .unwrap_err();
        assert!(matches!(err, TemplateLoadError::Invalid { residue, .. } if residue == "LIG"));
    }

    #[test]
    fn extend_rejects_unknown_record_type() {
        let mut library = TemplateLibrary::builtin();
        let err = library
            .extend_from_toml(r#"LIG = { record-type = "ANISOU", atoms = [["C1", "C"]] }"#)
            .unwrap_err();
        assert!(matches!(err, TemplateLoadError::Invalid { .. }));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = TemplateLibrary::load(&dir.path().join("none.toml")).unwrap_err();
        assert!(matches!(err, TemplateLoadError::Io { .. }));
    }
}
