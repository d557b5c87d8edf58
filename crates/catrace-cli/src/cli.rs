use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "catrace CLI - Loads two PDB structures as alpha-carbon traces, side by side, ready for coarse structural comparison.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the first PDB structure file.
    #[arg(value_name = "PDB_FILE1")]
    pub first: PathBuf,

    /// Path to the second PDB structure file.
    #[arg(value_name = "PDB_FILE2")]
    pub second: PathBuf,

    /// Print the diagnostic traversal of both structures to standard output.
    #[arg(long)]
    pub dump: bool,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
