//! # Structure Models Module
//!
//! This module defines the hierarchical data model produced by parsing a PDB
//! file: a [`structure::Structure`] owns [`model::Model`]s keyed by serial,
//! each model owns [`chain::Chain`]s keyed by identifier, each chain owns an
//! ordered sequence of [`residue::Residue`]s, and each residue maps atom
//! names to [`atom::Atom`]s.
//!
//! ## Key Components
//!
//! - [`atom`] - Leaf value entity: a named 3D coordinate
//! - [`residue`] - Residue identity plus backbone/sidechain atom maps
//! - [`chain`] - Ordered residue sequence under a one-character identifier
//! - [`model`] - Chain mapping under an integer serial
//! - [`structure`] - Parse root and read-only query surface
//! - [`builder`] - Stateful single-pass assembly of a `Structure`
//!
//! Atoms and residues are created once per qualifying input line and never
//! mutated afterwards. Chains and models first exist as mutable accumulators
//! owned by the builder and only become reachable through the public
//! `Structure` once committed at their record boundary.

pub mod atom;
pub mod builder;
pub mod chain;
pub mod model;
pub mod residue;
pub mod structure;
