use clap::{Args, Parser, Subcommand};
use pdbfix::engine::boundary::ResidueRule;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "pdbfix - Renumber, re-chain and re-position records of PDB coordinate files.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Renumber atoms and residues and split residues into chains.
    Fix(FixArgs),
    /// Overwrite atom coordinates from a CSV file of x,y,z rows.
    Positions(PositionsArgs),
    /// Build a peptide from a residue sequence and a CSV file of positions.
    Build(BuildArgs),
}

/// Where the transformed file is written.
///
/// With neither flag the user is asked for a file name at the terminal.
#[derive(Args, Debug, Clone, Default)]
#[group(required = false, multiple = false)]
pub struct OutputTarget {
    /// Path for the output PDB file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Overwrite the input file.
    #[arg(long)]
    pub in_place: bool,
}

/// Arguments for the `fix` subcommand.
#[derive(Args, Debug)]
pub struct FixArgs {
    /// Path to the input PDB file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    #[command(flatten)]
    pub target: OutputTarget,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Renumbering ---
    /// Renumber atoms sequentially.
    #[arg(long)]
    pub atoms: bool,

    /// First atom number (defaults to 1).
    #[arg(long, value_name = "INT")]
    pub atom_origin: Option<usize>,

    /// Renumber residues sequentially.
    #[arg(long)]
    pub residues: bool,

    /// First residue number (defaults to 1).
    #[arg(long, value_name = "INT", allow_negative_numbers = true)]
    pub residue_origin: Option<isize>,

    /// Restart atom and residue numbering at every chain.
    #[arg(long)]
    pub restart_per_chain: bool,

    /// Which fields mark a new residue: name, number or name-or-number.
    #[arg(long, value_name = "RULE")]
    pub residue_rule: Option<ResidueRule>,

    // --- Chain sectioning ---
    #[command(flatten)]
    pub partition: PartitionArgs,

    /// Chain identifiers to assign in order, e.g. "ABCD".
    #[arg(long, value_name = "CHARS")]
    pub chain_names: Option<String>,
}

/// Mutually exclusive ways of dividing residues into chains.
#[derive(Args, Debug, Clone, Default)]
#[group(required = false, multiple = false)]
pub struct PartitionArgs {
    /// Put this many residues in every chain.
    #[arg(long, value_name = "INT")]
    pub chain_size: Option<usize>,

    /// Comma-separated residue counts, one per chain.
    #[arg(long, value_name = "LIST")]
    pub chain_sizes: Option<String>,

    /// Split residues evenly into this many chains.
    #[arg(long, value_name = "INT")]
    pub chains: Option<usize>,
}

impl PartitionArgs {
    pub fn is_set(&self) -> bool {
        self.chain_size.is_some() || self.chain_sizes.is_some() || self.chains.is_some()
    }
}

/// Arguments for the `positions` subcommand.
#[derive(Args, Debug)]
pub struct PositionsArgs {
    /// Path to the input PDB file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// CSV file with one x,y,z row per record in the range.
    #[arg(short = 'x', long, required = true, value_name = "PATH")]
    pub coordinates: PathBuf,

    /// The coordinate file starts with a header row.
    #[arg(long)]
    pub header: bool,

    /// Index of the first record to update.
    #[arg(long, default_value_t = 0, value_name = "INT")]
    pub start: usize,

    /// Index one past the last record to update (defaults to the end of the file).
    #[arg(long, value_name = "INT")]
    pub end: Option<usize>,

    #[command(flatten)]
    pub target: OutputTarget,
}

/// Arguments for the `build` subcommand.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Comma-separated residue names, e.g. "GLY,ALA,SER".
    #[arg(short, long, required = true, value_name = "LIST")]
    pub sequence: String,

    /// CSV file with one x,y,z row per synthesized atom.
    #[arg(short = 'x', long, required = true, value_name = "PATH")]
    pub coordinates: PathBuf,

    /// The coordinate file starts with a header row.
    #[arg(long)]
    pub header: bool,

    /// Path for the output PDB file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// TOML file with residue templates in addition to the built-in ones.
    #[arg(short, long, value_name = "PATH")]
    pub templates: Option<PathBuf>,

    /// Chain identifier of the peptide.
    #[arg(long, default_value_t = 'A', value_name = "CHAR")]
    pub chain_id: char,

    /// Residue number of the first residue.
    #[arg(
        long,
        default_value_t = 1,
        value_name = "INT",
        allow_negative_numbers = true
    )]
    pub first_residue: isize,
}
