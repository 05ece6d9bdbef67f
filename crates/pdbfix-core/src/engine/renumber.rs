use super::boundary::{ChainBoundary, ResidueBoundary};
use super::config::{AtomNumbering, ResidueNumbering};
use super::error::EngineError;
use crate::core::models::record::{CodecError, Field, Record};
use tracing::debug;

fn atom_id_overflow(id: usize) -> CodecError {
    CodecError::FieldOverflow {
        field: Field::AtomId,
        value: id.to_string(),
        max_width: Field::AtomId.width(),
    }
}

/// Assigns sequential atom ids to every atom record.
///
/// Numbering starts at `options.origin` and, with `restart_per_chain`, returns to the
/// origin at each chain change. Non-atom records are copied through and not counted.
pub fn renumber_atoms(
    records: &[Record],
    options: &AtomNumbering,
) -> Result<Vec<Record>, EngineError> {
    let mut chains = ChainBoundary::new(false);
    let mut next_id = options.origin;
    let mut output = Vec::with_capacity(records.len());

    for record in records {
        let Record::Atom(atom) = record else {
            output.push(record.clone());
            continue;
        };
        if chains.advance_atom(atom) && options.restart_per_chain {
            next_id = options.origin;
        }
        let id = i64::try_from(next_id).map_err(|_| atom_id_overflow(next_id))?;
        let mut atom = atom.clone();
        atom.set_int(Field::AtomId, id)?;
        output.push(Record::Atom(atom));
        next_id = next_id.saturating_add(1);
    }

    debug!(
        "Renumbered atoms starting at {} (restart per chain: {})",
        options.origin, options.restart_per_chain
    );
    Ok(output)
}

/// Assigns sequential residue ids, one per detected residue.
///
/// A new residue starts where `options.rule` says it does; with `restart_per_chain` a
/// chain change also starts a new residue and resets numbering to `options.origin`.
/// Non-atom records are copied through and not counted.
pub fn renumber_residues(
    records: &[Record],
    options: &ResidueNumbering,
) -> Result<Vec<Record>, EngineError> {
    let mut residues = ResidueBoundary::with_rule(options.rule);
    let mut chains = ChainBoundary::new(false);
    let mut current_id: Option<isize> = None;
    let mut residue_count = 0usize;
    let mut output = Vec::with_capacity(records.len());

    for record in records {
        let Record::Atom(atom) = record else {
            output.push(record.clone());
            continue;
        };
        let new_chain = chains.advance_atom(atom) && options.restart_per_chain;
        let new_residue = residues.advance_atom(atom);
        if new_residue || new_chain {
            residue_count += 1;
            current_id = Some(match current_id {
                Some(id) if !new_chain => id + 1,
                _ => options.origin,
            });
        }
        let res_id = current_id.unwrap_or(options.origin);
        let mut atom = atom.clone();
        atom.set_int(Field::ResId, res_id as i64)?;
        output.push(Record::Atom(atom));
    }

    debug!(
        "Renumbered {} residues starting at {} ({:?} rule, restart per chain: {})",
        residue_count, options.origin, options.rule, options.restart_per_chain
    );
    Ok(output)
}
