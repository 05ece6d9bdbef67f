use super::{load_records, save_records};
use crate::cli::PositionsArgs;
use crate::error::{CliError, Result};
use crate::prompt;
use pdbfix::core::io::coordinates;
use pdbfix::engine::config::{NormalizeConfigBuilder, PositionUpdate};
use pdbfix::workflows;
use tracing::info;

pub fn run(args: PositionsArgs) -> Result<()> {
    let coordinates = coordinates::load_coordinates(&args.coordinates, args.header)
        .map_err(|e| CliError::file(&args.coordinates, e))?;
    info!(
        "Loaded {} coordinate rows from {:?}",
        coordinates.len(),
        &args.coordinates
    );

    let config = NormalizeConfigBuilder::new()
        .write_positions(PositionUpdate {
            coordinates,
            start: args.start,
            end: args.end,
        })
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let records = load_records(&args.input)?;
    let updated = workflows::normalize::run(&records, &config)?;

    let output = prompt::resolve_output(&args.input, &args.target)?;
    save_records(&updated, &output)
}
