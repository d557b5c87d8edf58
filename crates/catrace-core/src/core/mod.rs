//! # Core Module
//!
//! The computational core of catrace: the hierarchical structure model and
//! the PDB file I/O that populates it.
//!
//! ## Overview
//!
//! The core module is organized into two submodules:
//!
//! - **Structure Representation** ([`models`]) - Data structures for atoms,
//!   residues, chains, models and whole structures, plus the builder that
//!   assembles them from a record stream
//! - **File I/O** ([`io`]) - Fixed-column PDB reading with alpha-carbon
//!   filtering
//!
//! ## Key Capabilities
//!
//! - **Hierarchical structure model** with deterministic traversal order
//! - **Single-pass PDB parsing** with strict field validation
//! - **Alpha-carbon reduction** to one representative point per residue

pub mod io;
pub mod models;
