use nalgebra::Point3;

/// Represents a single atom as a named point in space.
///
/// This is the leaf of the structure hierarchy. The parser retains exactly
/// one atom per residue (the alpha carbon), so an `Atom` carries only the
/// information the downstream coarse comparison needs: its name token and
/// its coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The raw four-character atom name token from the source file
    /// (e.g., `" CA "`), kept verbatim including padding.
    pub name: String,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates a new `Atom` from a name token and a position.
    ///
    /// # Arguments
    ///
    /// * `name` - The atom name token, stored verbatim.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(name: &str, position: Point3<f64>) -> Self {
        Self {
            name: name.to_string(),
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn new_atom_stores_name_verbatim() {
        let atom = Atom::new(" CA ", Point3::new(1.0, 2.0, 3.0));
        assert_eq!(atom.name, " CA ");
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn coordinates_are_independent() {
        let atom = Atom::new(" CA ", Point3::new(11.104, 13.207, 2.317));
        assert_eq!(atom.position.x, 11.104);
        assert_eq!(atom.position.y, 13.207);
        assert_eq!(atom.position.z, 2.317);
    }

    #[test]
    fn atom_equality_and_clone_works() {
        let atom1 = Atom::new(" N  ", Point3::new(0.0, 0.0, 0.0));
        let atom2 = atom1.clone();
        assert_eq!(atom1, atom2);
    }
}
