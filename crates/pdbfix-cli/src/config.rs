use crate::cli::FixArgs;
use crate::error::{CliError, Result};
use pdbfix::engine::boundary::ResidueRule;
use pdbfix::engine::config as core_config;
use pdbfix::engine::sectioning::{ChainNames, PartitionSpec};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct PartialAtomConfig {
    origin: Option<usize>,
    #[serde(rename = "restart-per-chain")]
    restart_per_chain: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct PartialResidueConfig {
    origin: Option<isize>,
    #[serde(rename = "restart-per-chain")]
    restart_per_chain: Option<bool>,
    rule: Option<ResidueRule>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct PartialChainConfig {
    size: Option<usize>,
    sizes: Option<Vec<usize>>,
    count: Option<usize>,
    names: Option<String>,
}

/// The `fix` settings read from a TOML file. A table being present enables its step.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialFixConfig {
    atoms: Option<PartialAtomConfig>,
    residues: Option<PartialResidueConfig>,
    chains: Option<PartialChainConfig>,
}

impl PartialFixConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::file(path, e))
    }

    /// Combines file settings with command-line flags; flags win where both are given.
    pub fn merge_with_cli(self, args: &FixArgs) -> Result<core_config::NormalizeConfig> {
        let file_rule = self.residues.as_ref().and_then(|r| r.rule);
        let rule = args.residue_rule.or(file_rule).unwrap_or_default();

        let mut builder = core_config::NormalizeConfigBuilder::new();

        if args.atoms || self.atoms.is_some() {
            let file = self.atoms.unwrap_or_default();
            builder = builder.renumber_atoms(core_config::AtomNumbering {
                origin: args.atom_origin.or(file.origin).unwrap_or(1),
                restart_per_chain: args.restart_per_chain
                    || file.restart_per_chain.unwrap_or(false),
            });
        }

        if args.residues || self.residues.is_some() {
            let file = self.residues.unwrap_or_default();
            builder = builder.renumber_residues(core_config::ResidueNumbering {
                origin: args.residue_origin.or(file.origin).unwrap_or(1),
                restart_per_chain: args.restart_per_chain
                    || file.restart_per_chain.unwrap_or(false),
                rule,
            });
        }

        if let Some(sectioning) = Self::merge_chains(args, self.chains, rule)? {
            builder = builder.section_chains(sectioning);
        }

        builder.build().map_err(|e| match e {
            core_config::ConfigError::NoSteps => CliError::Config(
                "Nothing to do: pass --atoms, --residues or a chain partition, or enable them in the config file."
                    .to_string(),
            ),
            other => CliError::Config(other.to_string()),
        })
    }

    fn merge_chains(
        args: &FixArgs,
        file: Option<PartialChainConfig>,
        rule: ResidueRule,
    ) -> Result<Option<core_config::SectioningConfig>> {
        let file = file.unwrap_or_default();

        let partition = if args.partition.is_set() {
            let sizes = args
                .partition
                .chain_sizes
                .as_deref()
                .map(PartitionSpec::parse_sizes)
                .transpose()?;
            PartitionSpec::from_parts(args.partition.chain_size, sizes, args.partition.chains)?
        } else if file.size.is_some() || file.sizes.is_some() || file.count.is_some() {
            PartitionSpec::from_parts(file.size, file.sizes, file.count)?
        } else {
            if args.chain_names.is_some() || file.names.is_some() {
                return Err(CliError::Config(
                    "Chain names were given without a chain partition.".to_string(),
                ));
            }
            return Ok(None);
        };

        let names = match args.chain_names.as_deref().or(file.names.as_deref()) {
            Some(text) => text.parse::<ChainNames>()?,
            None => ChainNames::default(),
        };

        Ok(Some(core_config::SectioningConfig {
            partition,
            names,
            rule,
        }))
    }
}
