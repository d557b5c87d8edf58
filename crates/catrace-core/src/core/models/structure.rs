use super::model::Model;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// The root of the hierarchy: a parsed structure and its models.
///
/// A `Structure` is mutable only while the parser's single pass runs; every
/// external consumer treats it as read-only. Models are keyed by serial and
/// a later commit under the same serial replaces the earlier one outright,
/// no merging.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    source: Option<PathBuf>,
    models: BTreeMap<i32, Model>,
}

impl Structure {
    pub fn new() -> Self {
        Self::default()
    }

    /// The path this structure was read from, if it came from a file.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub(crate) fn set_source(&mut self, path: PathBuf) {
        self.source = Some(path);
    }

    /// Commits a model keyed by its serial, replacing any earlier model
    /// with the same serial.
    pub(crate) fn insert_model(&mut self, model: Model) {
        self.models.insert(model.serial(), model);
    }

    /// Looks up a model by serial.
    pub fn model(&self, serial: i32) -> Option<&Model> {
        self.models.get(&serial)
    }

    /// Iterates over models in ascending serial order.
    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }
}

/// Diagnostic dump: models in ascending serial order, chains in ascending
/// identifier order, residues in insertion order, atoms in name order.
impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for model in self.models() {
            for chain in model.chains() {
                for residue in chain.residues() {
                    for atom in residue.backbone() {
                        writeln!(
                            f,
                            "{}\t{}\t{}\t{}\t{}\t{}",
                            residue.name,
                            residue.index,
                            atom.name,
                            atom.position.x,
                            atom.position.y,
                            atom.position.z
                        )?;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::chain::Chain;
    use crate::core::models::residue::Residue;
    use nalgebra::Point3;

    fn one_residue_structure() -> Structure {
        let mut residue = Residue::new("   1 ", "ALA");
        residue.add_backbone_atom(Atom::new(" CA ", Point3::new(11.104, 13.207, 2.317)));
        let mut chain = Chain::new('A');
        chain.residues.push(residue);
        let mut model = Model::new(1);
        model.insert_chain(chain);
        let mut structure = Structure::new();
        structure.insert_model(model);
        structure
    }

    #[test]
    fn new_structure_has_no_models_and_no_source() {
        let structure = Structure::new();
        assert_eq!(structure.model_count(), 0);
        assert!(structure.source().is_none());
        assert!(structure.model(1).is_none());
    }

    #[test]
    fn insert_model_replaces_on_serial_collision() {
        let mut structure = Structure::new();
        let mut first = Model::new(3);
        first.insert_chain(Chain::new('A'));
        structure.insert_model(first);
        structure.insert_model(Model::new(3));
        assert_eq!(structure.model_count(), 1);
        assert_eq!(structure.model(3).unwrap().chain_count(), 0);
    }

    #[test]
    fn models_iterate_in_ascending_serial_order() {
        let mut structure = Structure::new();
        structure.insert_model(Model::new(5));
        structure.insert_model(Model::new(-1));
        structure.insert_model(Model::new(2));
        let serials: Vec<i32> = structure.models().map(|m| m.serial()).collect();
        assert_eq!(serials, vec![-1, 2, 5]);
    }

    #[test]
    fn display_dumps_traversal_lines() {
        let structure = one_residue_structure();
        let dump = structure.to_string();
        assert_eq!(dump, "ALA\t   1 \t CA \t11.104\t13.207\t2.317\n");
    }

    #[test]
    fn structures_with_identical_content_compare_equal() {
        assert_eq!(one_residue_structure(), one_residue_structure());
    }
}
