//! Provides input functionality for structure file formats.
//!
//! This module contains the fixed-column PDB reader that produces the
//! alpha-carbon trace hierarchy, behind a unified trait-based interface
//! so further formats can slot in beside it.

pub mod pdb;
pub mod traits;
