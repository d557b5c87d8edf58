use super::records::{self, RecordKind};
use super::PdbError;
use crate::core::io::traits::StructureFile;
use crate::core::models::atom::Atom;
use crate::core::models::builder::StructureBuilder;
use crate::core::models::structure::Structure;
use std::io::BufRead;
use tracing::trace;

/// Reader for the PDB flat-file format, reduced to the alpha-carbon trace.
///
/// One line is classified, extracted and folded into the builder's
/// accumulator state before the next line is read. The accumulators live
/// inside the builder owned by this call, so concurrent parses of
/// independent inputs are safe by construction.
pub struct PdbFile;

impl StructureFile for PdbFile {
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<Structure, Self::Error> {
        let mut builder = StructureBuilder::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            match records::classify(&line) {
                RecordKind::Atom => {
                    if let Some(fields) = records::extract_atom(&line, line_num)? {
                        let atom = Atom::new(&fields.name, fields.position);
                        builder.add_alpha_carbon(
                            fields.chain_id,
                            &fields.residue_index,
                            &fields.residue_name,
                            atom,
                        );
                    }
                }
                RecordKind::ModelStart => {
                    let serial = records::extract_model_serial(&line, line_num)?;
                    builder.start_model(serial);
                }
                RecordKind::ChainTerminator => builder.terminate_chain(),
                RecordKind::ModelEnd => builder.end_model(),
                RecordKind::Ignore => {
                    trace!(line = line_num, "skipping unrecognized record");
                }
            }
        }

        Ok(builder.finish())
    }
}
