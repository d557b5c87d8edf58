use crate::core::models::structure::Structure;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading structure file formats.
///
/// This trait provides a common API for loading a [`Structure`] from a
/// record stream. Implementors handle format-specific classification and
/// field extraction; a whole file is consumed before the structure is
/// returned, so a failed parse never yields a partial result.
pub trait StructureFile {
    /// The error type for I/O and parse failures.
    type Error: Error + From<io::Error>;

    /// Reads a structure from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    ///
    /// # Return
    ///
    /// Returns the fully parsed structure.
    ///
    /// # Errors
    ///
    /// Returns an error if a field fails to parse or I/O operations
    /// encounter issues.
    fn read_from(reader: &mut impl BufRead) -> Result<Structure, Self::Error>;

    /// Reads a structure from a file path, recording the path as the
    /// structure's source.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the file to read.
    ///
    /// # Return
    ///
    /// Returns the fully parsed structure.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Structure, Self::Error> {
        let file = File::open(path.as_ref())?;
        let mut reader = BufReader::new(file);
        let mut structure = Self::read_from(&mut reader)?;
        structure.set_source(path.as_ref().to_path_buf());
        Ok(structure)
    }
}
