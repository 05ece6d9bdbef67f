use crate::core::models::record::Record;
use crate::engine::boundary::ResidueBoundary;
use crate::engine::config::NormalizeConfig;
use crate::engine::error::EngineError;
use crate::engine::{positions, renumber, sectioning};
use tracing::{info, instrument};

/// Applies every configured step to `records`: atom renumbering, residue renumbering,
/// chain sectioning, then position replacement.
///
/// The input is left untouched; on failure no partial result is returned.
#[instrument(skip_all, name = "normalize_workflow")]
pub fn run(records: &[Record], config: &NormalizeConfig) -> Result<Vec<Record>, EngineError> {
    let atom_count = records.iter().filter(|r| r.is_atom()).count();
    info!(
        "Normalizing {} records ({} atoms).",
        records.len(),
        atom_count
    );

    let mut current = records.to_vec();

    if let Some(numbering) = &config.atoms {
        info!("Renumbering atoms from {}.", numbering.origin);
        current = renumber::renumber_atoms(&current, numbering)?;
    }

    if let Some(numbering) = &config.residues {
        info!("Renumbering residues from {}.", numbering.origin);
        current = renumber::renumber_residues(&current, numbering)?;
    }

    if let Some(sectioning) = &config.chains {
        info!("Sectioning chains ({:?}).", sectioning.partition);
        current = sectioning::section_chains(
            &current,
            &sectioning.partition,
            &sectioning.names,
            ResidueBoundary::with_rule(sectioning.rule),
        )?;
    }

    if let Some(update) = &config.positions {
        info!(
            "Writing {} positions starting at record {}.",
            update.coordinates.len(),
            update.start
        );
        current = positions::write_positions(&current, &update.coordinates, update.start, update.end)?;
    }

    info!("Normalization finished with {} records.", current.len());
    Ok(current)
}
