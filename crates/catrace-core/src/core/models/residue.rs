use super::atom::Atom;
use std::collections::BTreeMap;

/// Represents a residue with its identity and named atom maps.
///
/// The `index` is the verbatim sequence-number-plus-insertion-code token
/// from the source file (e.g., `"   1 "` or `"  52A"`). It is kept as text,
/// never parsed numerically, so insertion codes survive intact.
///
/// The sidechain map exists for data-model completeness; the parser only
/// ever populates the backbone map with the alpha carbon.
#[derive(Debug, Clone, PartialEq)]
pub struct Residue {
    pub index: String,
    pub name: String,
    backbone: BTreeMap<String, Atom>,
    sidechain: BTreeMap<String, Atom>,
}

impl Residue {
    pub(crate) fn new(index: &str, name: &str) -> Self {
        Self {
            index: index.to_string(),
            name: name.to_string(),
            backbone: BTreeMap::new(),
            sidechain: BTreeMap::new(),
        }
    }

    /// Inserts an atom into the backbone map keyed by its name.
    /// A later atom with the same name replaces the earlier one.
    pub(crate) fn add_backbone_atom(&mut self, atom: Atom) {
        self.backbone.insert(atom.name.clone(), atom);
    }

    /// Looks up a backbone atom by its verbatim name token.
    pub fn backbone_atom(&self, name: &str) -> Option<&Atom> {
        self.backbone.get(name)
    }

    /// Looks up a sidechain atom by its verbatim name token.
    pub fn sidechain_atom(&self, name: &str) -> Option<&Atom> {
        self.sidechain.get(name)
    }

    /// Iterates over backbone atoms in name order.
    pub fn backbone(&self) -> impl Iterator<Item = &Atom> {
        self.backbone.values()
    }

    /// Iterates over sidechain atoms in name order.
    pub fn sidechain(&self) -> impl Iterator<Item = &Atom> {
        self.sidechain.values()
    }
}
