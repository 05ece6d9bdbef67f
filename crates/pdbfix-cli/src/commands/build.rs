use super::save_records;
use crate::cli::BuildArgs;
use crate::error::{CliError, Result};
use pdbfix::core::io::coordinates;
use pdbfix::core::templates::builder;
use pdbfix::core::templates::library::TemplateLibrary;
use tracing::info;

fn parse_sequence(text: &str) -> Result<Vec<String>> {
    let sequence: Vec<String> = text
        .split(',')
        .map(|name| name.trim().to_uppercase())
        .filter(|name| !name.is_empty())
        .collect();
    if sequence.is_empty() {
        return Err(CliError::Argument(format!(
            "Residue sequence '{}' names no residues.",
            text
        )));
    }
    Ok(sequence)
}

pub fn run(args: BuildArgs) -> Result<()> {
    let sequence = parse_sequence(&args.sequence)?;

    let library = match &args.templates {
        Some(path) => TemplateLibrary::load(path).map_err(|e| CliError::file(path, e))?,
        None => TemplateLibrary::builtin(),
    };
    let positions = coordinates::load_coordinates(&args.coordinates, args.header)
        .map_err(|e| CliError::file(&args.coordinates, e))?;

    info!(
        "Building {} residues on chain {} from {} positions.",
        sequence.len(),
        args.chain_id,
        positions.len()
    );
    let records = builder::build_peptide(
        &library,
        &sequence,
        &positions,
        args.chain_id,
        args.first_residue,
    )?;

    save_records(&records, &args.output)
}
