use super::atom::Atom;
use super::chain::{BLANK_CHAIN_ID, Chain};
use super::model::{Model, UNSET_SERIAL};
use super::residue::Residue;
use super::structure::Structure;

/// Assembles a [`Structure`] from a stream of classified records.
///
/// The builder owns the two in-progress accumulators the single parse pass
/// needs: the current chain and the current model. Both are plain local
/// state, so independent parses never share anything. Accumulated content
/// only becomes reachable through the `Structure` when it is committed at
/// its record boundary: a chain on TER, a model on ENDMDL.
pub struct StructureBuilder {
    structure: Structure,

    // --- Accumulators, owned by this parse pass only ---
    chain: Chain,
    model: Model,
}

impl Default for StructureBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StructureBuilder {
    pub fn new() -> Self {
        Self {
            structure: Structure::new(),
            chain: Chain::new(BLANK_CHAIN_ID),
            model: Model::new(UNSET_SERIAL),
        }
    }

    /// Folds one retained atom record into the chain accumulator.
    ///
    /// A fresh residue is created per record and the atom is placed in its
    /// backbone map. When the record's chain identifier differs from the
    /// accumulator's, the identifier is updated in place; residues already
    /// accumulated are NOT split into a separate chain.
    pub fn add_alpha_carbon(&mut self, chain_id: char, index: &str, res_name: &str, atom: Atom) {
        if self.chain.id != chain_id {
            self.chain.id = chain_id;
        }
        let mut residue = Residue::new(index, res_name);
        residue.add_backbone_atom(atom);
        self.chain.residues.push(residue);
    }

    /// Handles a MODEL record: any not-yet-terminated chain content is
    /// discarded and the model accumulator restarts empty under the new
    /// serial.
    pub fn start_model(&mut self, serial: i32) {
        self.chain = Chain::new(BLANK_CHAIN_ID);
        self.model = Model::new(serial);
    }

    /// Handles a TER record: the chain accumulator is committed into the
    /// model accumulator keyed by its identifier (replacing any earlier
    /// chain under the same key) and reset. A TER with no atoms since the
    /// last reset commits an empty chain.
    pub fn terminate_chain(&mut self) {
        let chain = std::mem::replace(&mut self.chain, Chain::new(BLANK_CHAIN_ID));
        self.model.insert_chain(chain);
    }

    /// Handles an ENDMDL record: the model accumulator is committed into
    /// the structure keyed by its serial (replacing any earlier model under
    /// the same key). The chain accumulator is deliberately NOT reset here;
    /// a chain still being accumulated survives the model boundary and is
    /// captured by the next TER.
    pub fn end_model(&mut self) {
        self.structure.insert_model(self.model.clone());
    }

    /// Consumes the builder at end of input.
    ///
    /// If no MODEL record was ever seen the model accumulator still carries
    /// the sentinel serial and is committed as the sole model. Otherwise a
    /// model that was started but never closed by ENDMDL is dropped.
    pub fn finish(self) -> Structure {
        let mut structure = self.structure;
        if self.model.serial() == UNSET_SERIAL {
            structure.insert_model(self.model);
        }
        structure
    }
}
