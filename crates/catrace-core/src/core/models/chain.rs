use super::residue::Residue;

/// The identifier a chain accumulator starts with before any atom names one.
/// A blank chain identifier is valid PDB, so an empty chain committed by a
/// bare TER record ends up keyed by a space.
pub(crate) const BLANK_CHAIN_ID: char = ' ';

#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    pub id: char,                     // Chain identifier (e.g., 'A', 'B')
    pub(crate) residues: Vec<Residue>, // Residues in source-file order
}

impl Chain {
    pub(crate) fn new(id: char) -> Self {
        Self {
            id,
            residues: Vec::new(),
        }
    }

    /// Residues in insertion order.
    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}
