mod cli;
mod error;
mod logging;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use catrace::core::io::pdb::PdbFile;
use catrace::core::io::traits::StructureFile;
use catrace::core::models::structure::Structure;
use clap::Parser;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

fn main() {
    let begin = Instant::now();

    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet);

    if let Err(e) = run_app(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    eprintln!(
        "catrace executed in {:.3} seconds",
        begin.elapsed().as_secs_f64()
    );
}

fn run_app(cli: &Cli) -> Result<()> {
    debug!("Full CLI arguments parsed: {:?}", cli);

    let first = load_structure(&cli.first)?;
    let second = load_structure(&cli.second)?;

    if cli.dump {
        print!("{}", first);
        print!("{}", second);
    }

    Ok(())
}

fn load_structure(path: &Path) -> Result<Structure> {
    let structure = PdbFile::read_from_path(path).map_err(|source| CliError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    let residues: usize = structure
        .models()
        .flat_map(|m| m.chains())
        .map(|c| c.len())
        .sum();
    info!(
        "Loaded '{}': {} model(s), {} residue(s) on the alpha-carbon trace.",
        path.display(),
        structure.model_count(),
        residues
    );

    Ok(structure)
}
