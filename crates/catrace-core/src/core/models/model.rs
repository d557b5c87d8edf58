use super::chain::Chain;
use std::collections::BTreeMap;

/// The serial of a model before any MODEL record names one. A structure
/// parsed from a file with no MODEL record holds its sole model under this
/// key.
pub const UNSET_SERIAL: i32 = -1;

/// Represents one model of a structure: a mapping from chain identifier to
/// [`Chain`].
///
/// Multi-model files (typically NMR ensembles) delimit each model with
/// MODEL/ENDMDL records; single-model files have no such records and yield
/// one model with the sentinel serial [`UNSET_SERIAL`]. A model may hold
/// zero chains.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    serial: i32,
    chains: BTreeMap<char, Chain>,
}

impl Model {
    pub(crate) fn new(serial: i32) -> Self {
        Self {
            serial,
            chains: BTreeMap::new(),
        }
    }

    /// Inserts a chain keyed by its identifier. A later chain with the same
    /// identifier replaces the earlier one.
    pub(crate) fn insert_chain(&mut self, chain: Chain) {
        self.chains.insert(chain.id, chain);
    }

    pub fn serial(&self) -> i32 {
        self.serial
    }

    /// Looks up a chain by its one-character identifier.
    pub fn chain(&self, id: char) -> Option<&Chain> {
        self.chains.get(&id)
    }

    /// Iterates over chains in ascending identifier order.
    pub fn chains(&self) -> impl Iterator<Item = &Chain> {
        self.chains.values()
    }

    pub fn chain_count(&self) -> usize {
        self.chains.len()
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(UNSET_SERIAL)
    }
}
