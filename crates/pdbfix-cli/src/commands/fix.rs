use super::{load_records, save_records};
use crate::cli::FixArgs;
use crate::config::PartialFixConfig;
use crate::error::Result;
use crate::prompt;
use pdbfix::workflows;
use tracing::info;

pub fn run(args: FixArgs) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialFixConfig::from_file(path)?,
        None => PartialFixConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;

    let records = load_records(&args.input)?;
    let fixed = workflows::normalize::run(&records, &config)?;

    let output = prompt::resolve_output(&args.input, &args.target)?;
    save_records(&fixed, &output)
}
