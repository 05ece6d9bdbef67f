use super::boundary::ResidueBoundary;
use super::error::EngineError;
use crate::core::models::record::{Field, Record};
use std::str::FromStr;
use tracing::{debug, warn};

/// How residues are to be divided among chains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionSpec {
    /// Every chain holds this many residues.
    Uniform(usize),
    /// Chain `i` holds `sizes[i]` residues.
    Explicit(Vec<usize>),
    /// Split all residues evenly into this many chains.
    ChainCount(usize),
}

impl PartitionSpec {
    /// Picks the single partition given among the optional forms.
    pub fn from_parts(
        uniform: Option<usize>,
        explicit: Option<Vec<usize>>,
        chain_count: Option<usize>,
    ) -> Result<Self, EngineError> {
        match (uniform, explicit, chain_count) {
            (Some(size), None, None) => Ok(PartitionSpec::Uniform(size)),
            (None, Some(sizes), None) => Ok(PartitionSpec::Explicit(sizes)),
            (None, None, Some(count)) => Ok(PartitionSpec::ChainCount(count)),
            (None, None, None) => Err(EngineError::InvalidPartitionSpec(
                "one of a uniform chain size, a list of chain sizes or a chain count is required"
                    .to_string(),
            )),
            _ => Err(EngineError::InvalidPartitionSpec(
                "only one of a uniform chain size, a list of chain sizes or a chain count may be given"
                    .to_string(),
            )),
        }
    }

    /// Parses a comma-separated list of chain sizes such as `"10,12,10"`.
    pub fn parse_sizes(text: &str) -> Result<Vec<usize>, EngineError> {
        text.split(',')
            .map(|part| {
                part.trim().parse::<usize>().map_err(|_| {
                    EngineError::InvalidPartitionSpec(format!(
                        "'{}' is not a valid chain size in '{}'",
                        part.trim(),
                        text
                    ))
                })
            })
            .collect()
    }

    /// Resolves the partition into per-chain residue counts for `total_residues`.
    pub fn chain_sizes(&self, total_residues: usize) -> Result<Vec<usize>, EngineError> {
        match self {
            PartitionSpec::Uniform(size) => {
                if *size == 0 {
                    return Err(EngineError::InvalidPartitionSpec(
                        "chain size must be positive".to_string(),
                    ));
                }
                check_divisible(total_residues, *size)?;
                Ok(vec![*size; total_residues / size])
            }
            PartitionSpec::ChainCount(count) => {
                if *count == 0 {
                    return Err(EngineError::InvalidPartitionSpec(
                        "chain count must be positive".to_string(),
                    ));
                }
                check_divisible(total_residues, *count)?;
                Ok(vec![total_residues / count; *count])
            }
            PartitionSpec::Explicit(sizes) => {
                if sizes.is_empty() || sizes.contains(&0) {
                    return Err(EngineError::InvalidPartitionSpec(format!(
                        "chain sizes must be a non-empty list of positive counts, got {:?}",
                        sizes
                    )));
                }
                let sum = sizes
                    .iter()
                    .try_fold(0usize, |acc, size| acc.checked_add(*size))
                    .ok_or_else(|| {
                        EngineError::InvalidPartitionSpec(format!(
                            "chain sizes {:?} overflow the residue count",
                            sizes
                        ))
                    })?;
                if sum != total_residues {
                    return Err(EngineError::InvalidPartitionSpec(format!(
                        "chain sizes sum to {} but the structure has {} residues",
                        sum, total_residues
                    )));
                }
                Ok(sizes.clone())
            }
        }
    }
}

fn check_divisible(total_residues: usize, divisor: usize) -> Result<(), EngineError> {
    let remainder = total_residues % divisor;
    if remainder != 0 {
        return Err(EngineError::NotDivisible {
            total_residues,
            divisor,
            remainder,
        });
    }
    Ok(())
}

/// Ordered pool of single-character chain identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainNames(Vec<char>);

impl Default for ChainNames {
    fn default() -> Self {
        Self(('A'..='Z').collect())
    }
}

impl ChainNames {
    pub fn new(names: Vec<char>) -> Self {
        Self(names)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.0.get(index).copied()
    }
}

impl FromStr for ChainNames {
    type Err = EngineError;

    /// Every non-whitespace character is one chain name, e.g. `"ABCXYZ"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let names: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if names.is_empty() {
            return Err(EngineError::InvalidPartitionSpec(
                "chain name pool is empty".to_string(),
            ));
        }
        Ok(Self(names))
    }
}

/// Counts residues among the atom records, skipping everything else.
pub fn count_residues(records: &[Record], boundary: &mut ResidueBoundary) -> usize {
    records.iter().filter(|r| boundary.advance(r)).count()
}

/// Repartitions residues into chains, reassigning chain ids and placing terminators.
///
/// The residue total is counted first so the partition can be validated before any
/// record is touched. A `TER ` record is inserted in front of the first atom of every
/// chain after the first unless one already precedes it. Existing terminators and
/// other non-atom records are passed through unchanged.
pub fn section_chains(
    records: &[Record],
    partition: &PartitionSpec,
    names: &ChainNames,
    boundary: ResidueBoundary,
) -> Result<Vec<Record>, EngineError> {
    let mut counter = boundary.clone();
    counter.reset();
    let total_residues = count_residues(records, &mut counter);

    let sizes = partition.chain_sizes(total_residues)?;
    if sizes.len() > names.len() {
        return Err(EngineError::InsufficientChainNames {
            required: sizes.len(),
            available: names.len(),
        });
    }
    if total_residues == 0 {
        warn!("No residues found; chain sectioning leaves the records unchanged.");
        return Ok(records.to_vec());
    }
    debug!(
        "Sectioning {} residues into {} chains: {:?}",
        total_residues,
        sizes.len(),
        sizes
    );

    let cumulative: Vec<usize> = sizes
        .iter()
        .scan(0, |acc, size| {
            *acc += size;
            Some(*acc)
        })
        .collect();

    let mut residue_boundary = boundary;
    residue_boundary.reset();
    let mut residue_count = 0;
    let mut chain_index = 0;
    let mut output: Vec<Record> = Vec::with_capacity(records.len() + sizes.len());

    for record in records {
        let Record::Atom(atom) = record else {
            output.push(record.clone());
            continue;
        };
        if residue_boundary.advance_atom(atom) {
            residue_count += 1;
        }
        if chain_index + 1 < cumulative.len() && residue_count > cumulative[chain_index] {
            chain_index += 1;
            let previous = output.iter().rev().find(|r| !matches!(r, Record::Other(_)));
            if !previous.is_some_and(Record::is_terminator) {
                output.push(Record::Terminator);
            }
        }
        let name = names.get(chain_index).ok_or(EngineError::InsufficientChainNames {
            required: chain_index + 1,
            available: names.len(),
        })?;
        let mut atom = atom.clone();
        atom.set_text(Field::ChainId, name.to_string())?;
        output.push(Record::Atom(atom));
    }

    Ok(output)
}
