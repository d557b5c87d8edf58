//! Fixed-column PDB reading.
//!
//! A PDB file carries one record per line, tagged by a six-character prefix
//! at column 0. Only four record types matter to the alpha-carbon trace:
//! `ATOM`, `MODEL`, `ENDMDL` and `TER`. Everything else - headers, remarks,
//! heteroatoms, anisotropic factors - is dropped silently. The reader makes
//! a single sequential pass and commits accumulated chains and models into
//! the structure at their delimiting records.

mod reader;
mod records;

pub use reader::PdbFile;
pub use records::{
    ALPHA_CARBON, AtomFields, RecordKind, classify, extract_atom, extract_model_serial,
};

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Line is too short for an ATOM record (coordinates end at column 54)")]
    LineTooShort,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}
