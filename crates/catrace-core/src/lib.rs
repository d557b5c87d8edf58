//! # catrace Core Library
//!
//! A library for loading PDB structure files into an in-memory hierarchical
//! model reduced to the alpha-carbon trace, one representative atom per
//! residue. The resulting [`core::models::structure::Structure`] is the
//! foundation a coarse structural-comparison tool consumes: two structures
//! loaded side by side, each a tree of models, chains, residues and atoms.
//!
//! ## Architecture
//!
//! - **[`core::models`]** - The data hierarchy (`Atom`, `Residue`, `Chain`,
//!   `Model`, `Structure`) together with the stateful [`core::models::builder`]
//!   that folds a stream of classified records into a `Structure`.
//! - **[`core::io`]** - The fixed-column PDB record classifier and field
//!   extractor, behind a small trait-based file interface.
//!
//! Parsing is a single sequential pass; the whole file is consumed before
//! any query on the structure is legal. Separate parses share no state and
//! may run concurrently.

pub mod core;
