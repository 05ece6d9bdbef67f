use super::boundary::ResidueRule;
use super::sectioning::{ChainNames, PartitionSpec};
use nalgebra::Point3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("No transformation step was configured")]
    NoSteps,
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomNumbering {
    pub origin: usize,
    pub restart_per_chain: bool,
}

impl Default for AtomNumbering {
    fn default() -> Self {
        Self {
            origin: 1,
            restart_per_chain: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResidueNumbering {
    pub origin: isize,
    pub restart_per_chain: bool,
    pub rule: ResidueRule,
}

impl Default for ResidueNumbering {
    fn default() -> Self {
        Self {
            origin: 1,
            restart_per_chain: false,
            rule: ResidueRule::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectioningConfig {
    pub partition: PartitionSpec,
    pub names: ChainNames,
    /// Residue detection used when counting and assigning residues to chains.
    pub rule: ResidueRule,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionUpdate {
    pub coordinates: Vec<Point3<f64>>,
    pub start: usize,
    pub end: Option<usize>,
}

/// The steps of one normalization run. Steps run in field order; absent steps are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeConfig {
    pub atoms: Option<AtomNumbering>,
    pub residues: Option<ResidueNumbering>,
    pub chains: Option<SectioningConfig>,
    pub positions: Option<PositionUpdate>,
}

#[derive(Default)]
pub struct NormalizeConfigBuilder {
    atoms: Option<AtomNumbering>,
    residues: Option<ResidueNumbering>,
    chains: Option<SectioningConfig>,
    positions: Option<PositionUpdate>,
}

impl NormalizeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn renumber_atoms(mut self, numbering: AtomNumbering) -> Self {
        self.atoms = Some(numbering);
        self
    }
    pub fn renumber_residues(mut self, numbering: ResidueNumbering) -> Self {
        self.residues = Some(numbering);
        self
    }
    pub fn section_chains(mut self, sectioning: SectioningConfig) -> Self {
        self.chains = Some(sectioning);
        self
    }
    pub fn write_positions(mut self, update: PositionUpdate) -> Self {
        self.positions = Some(update);
        self
    }

    pub fn build(self) -> Result<NormalizeConfig, ConfigError> {
        if self.atoms.is_none()
            && self.residues.is_none()
            && self.chains.is_none()
            && self.positions.is_none()
        {
            return Err(ConfigError::NoSteps);
        }
        if let Some(update) = &self.positions {
            if let Some(end) = update.end {
                if end < update.start {
                    return Err(ConfigError::InvalidParameter {
                        name: "positions.end",
                        reason: format!("end {} is before start {}", end, update.start),
                    });
                }
            }
        }
        if let Some(sectioning) = &self.chains {
            if sectioning.names.is_empty() {
                return Err(ConfigError::InvalidParameter {
                    name: "chains.names",
                    reason: "at least one chain name is required".to_string(),
                });
            }
        }
        Ok(NormalizeConfig {
            atoms: self.atoms,
            residues: self.residues,
            chains: self.chains,
            positions: self.positions,
        })
    }
}
