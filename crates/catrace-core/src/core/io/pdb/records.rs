use super::{PdbError, PdbParseErrorKind, slice_and_trim};
use nalgebra::Point3;

/// The atom name token that survives the per-residue reduction. Only atoms
/// carrying exactly this token are retained; the comparison runs on one
/// representative point per residue.
pub const ALPHA_CARBON: &str = " CA ";

const ATOM_TAG: &str = "ATOM  ";
const MODEL_TAG: &str = "MODEL ";
const ENDMDL_TAG: &str = "ENDMDL";
const TER_TAG: &str = "TER   ";

// Byte length an ATOM line needs to carry all three coordinate fields.
const ATOM_MIN_LEN: usize = 54;

/// The kind of a PDB record, decided by the six-character tag at column 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Atom,
    ModelStart,
    ModelEnd,
    ChainTerminator,
    Ignore,
}

/// Classifies one line by exact match of its first six columns.
///
/// Lines shorter than six columns are treated as right-padded with spaces,
/// so a bare `TER` line still classifies as a chain terminator. Any line
/// matching none of the four known tags classifies as [`RecordKind::Ignore`].
pub fn classify(line: &str) -> RecordKind {
    if tag_matches(line, ATOM_TAG) {
        RecordKind::Atom
    } else if tag_matches(line, MODEL_TAG) {
        RecordKind::ModelStart
    } else if tag_matches(line, ENDMDL_TAG) {
        RecordKind::ModelEnd
    } else if tag_matches(line, TER_TAG) {
        RecordKind::ChainTerminator
    } else {
        RecordKind::Ignore
    }
}

fn tag_matches(line: &str, tag: &str) -> bool {
    let mut columns = line.chars();
    for expected in tag.chars() {
        match columns.next() {
            Some(c) if c == expected => {}
            None if expected == ' ' => {}
            _ => return false,
        }
    }
    true
}

/// The typed fields of a retained ATOM record.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomFields {
    /// Atom name token at columns \[12,16), verbatim.
    pub name: String,
    /// Residue name at columns \[17,20).
    pub residue_name: String,
    /// Chain identifier at column 21; a space when blank.
    pub chain_id: char,
    /// Residue sequence-number + insertion-code token at columns \[22,27),
    /// verbatim - never parsed numerically.
    pub residue_index: String,
    /// Coordinates from columns \[30,38), \[38,46), \[46,54).
    pub position: Point3<f64>,
}

/// Extracts the typed fields of an ATOM record, applying the alpha-carbon
/// filter.
///
/// Returns `Ok(None)` for atoms other than the alpha carbon; those records
/// are discarded without further validation. For a retained atom every
/// coordinate must parse as a float - malformed text is a hard error, never
/// a silent zero.
pub fn extract_atom(line: &str, line_num: usize) -> Result<Option<AtomFields>, PdbError> {
    let name = line.get(12..16).unwrap_or("");
    if name != ALPHA_CARBON {
        return Ok(None);
    }
    if line.len() < ATOM_MIN_LEN {
        return Err(PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::LineTooShort,
        });
    }

    let residue_name = line.get(17..20).unwrap_or("");
    let chain_id = line.get(21..22).and_then(|s| s.chars().next()).unwrap_or(' ');
    let residue_index = line.get(22..27).unwrap_or("");
    let x = parse_coordinate(line, line_num, 30, 38, "31-38")?;
    let y = parse_coordinate(line, line_num, 38, 46, "39-46")?;
    let z = parse_coordinate(line, line_num, 46, 54, "47-54")?;

    Ok(Some(AtomFields {
        name: name.to_string(),
        residue_name: residue_name.to_string(),
        chain_id,
        residue_index: residue_index.to_string(),
        position: Point3::new(x, y, z),
    }))
}

/// Extracts the model serial integer at columns \[10,14) of a MODEL record.
pub fn extract_model_serial(line: &str, line_num: usize) -> Result<i32, PdbError> {
    let serial_str = slice_and_trim(line, 10, 14);
    serial_str.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidInt {
            columns: "11-14".into(),
            value: serial_str.into(),
        },
    })
}

fn parse_coordinate(
    line: &str,
    line_num: usize,
    start: usize,
    end: usize,
    columns: &str,
) -> Result<f64, PdbError> {
    let value = slice_and_trim(line, start, end);
    value.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidFloat {
            columns: columns.into(),
            value: value.into(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALA_CA: &str = "ATOM      1  CA  ALA A   1      11.104  13.207   2.317  1.00  0.00";
    const ALA_N: &str = "ATOM      1  N   ALA A   1      11.000  13.000   2.000  1.00  0.00";

    #[test]
    fn classify_recognizes_the_four_tags() {
        assert_eq!(classify(ALA_CA), RecordKind::Atom);
        assert_eq!(classify("MODEL        1"), RecordKind::ModelStart);
        assert_eq!(classify("ENDMDL"), RecordKind::ModelEnd);
        assert_eq!(classify("TER    1234      ALA A 120"), RecordKind::ChainTerminator);
    }

    #[test]
    fn classify_pads_short_lines_with_spaces() {
        assert_eq!(classify("TER"), RecordKind::ChainTerminator);
        assert_eq!(classify("TER  "), RecordKind::ChainTerminator);
        assert_eq!(classify("MODEL"), RecordKind::ModelStart);
    }

    #[test]
    fn classify_requires_exact_six_column_match() {
        assert_eq!(classify("ATOMIC    1"), RecordKind::Ignore);
        assert_eq!(classify("TERMINAL"), RecordKind::Ignore);
        assert_eq!(classify("ENDMD"), RecordKind::Ignore);
        assert_eq!(classify("MODELS"), RecordKind::Ignore);
    }

    #[test]
    fn classify_ignores_other_record_types() {
        assert_eq!(classify("HEADER    HYDROLASE"), RecordKind::Ignore);
        assert_eq!(classify("REMARK 350"), RecordKind::Ignore);
        assert_eq!(
            classify("HETATM 1234  O   HOH A 201      10.000  10.000  10.000"),
            RecordKind::Ignore
        );
        assert_eq!(classify("ANISOU    1  CA  ALA A   1"), RecordKind::Ignore);
        assert_eq!(classify(""), RecordKind::Ignore);
        assert_eq!(classify("END"), RecordKind::Ignore);
    }

    #[test]
    fn extract_atom_reads_all_fields_independently() {
        let fields = extract_atom(ALA_CA, 1).unwrap().unwrap();
        assert_eq!(fields.name, " CA ");
        assert_eq!(fields.residue_name, "ALA");
        assert_eq!(fields.chain_id, 'A');
        assert_eq!(fields.residue_index, "   1 ");
        assert_eq!(fields.position.x, 11.104);
        assert_eq!(fields.position.y, 13.207);
        assert_eq!(fields.position.z, 2.317);
    }

    #[test]
    fn extract_atom_discards_non_alpha_carbon() {
        assert_eq!(extract_atom(ALA_N, 1).unwrap(), None);
        let cb = "ATOM      5  CB  ALA A   1      12.000  14.000   3.000  1.00  0.00";
        assert_eq!(extract_atom(cb, 1).unwrap(), None);
    }

    #[test]
    fn extract_atom_keeps_insertion_code_in_index_token() {
        let line = "ATOM     10  CA  SER A  52A     -1.500   0.250  99.000  1.00  0.00";
        let fields = extract_atom(line, 1).unwrap().unwrap();
        assert_eq!(fields.residue_index, "  52A");
    }

    #[test]
    fn extract_atom_rejects_malformed_coordinate() {
        let line = "ATOM      1  CA  ALA A   1      xx.xxx  13.207   2.317  1.00  0.00";
        let err = extract_atom(line, 7).unwrap_err();
        match err {
            PdbError::Parse {
                line: 7,
                kind: PdbParseErrorKind::InvalidFloat { columns, value },
            } => {
                assert_eq!(columns, "31-38");
                assert_eq!(value, "xx.xxx");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn extract_atom_rejects_truncated_alpha_carbon_line() {
        let line = "ATOM      1  CA  ALA A   1      11.104";
        let err = extract_atom(line, 3).unwrap_err();
        assert!(matches!(
            err,
            PdbError::Parse {
                line: 3,
                kind: PdbParseErrorKind::LineTooShort,
            }
        ));
    }

    #[test]
    fn extract_atom_defaults_blank_chain_id_to_space() {
        let line = "ATOM      1  CA  GLY     3       1.000   2.000   3.000  1.00  0.00";
        let fields = extract_atom(line, 1).unwrap().unwrap();
        assert_eq!(fields.chain_id, ' ');
    }

    #[test]
    fn extract_model_serial_parses_fixed_columns() {
        assert_eq!(extract_model_serial("MODEL        1", 1).unwrap(), 1);
        assert_eq!(extract_model_serial("MODEL       42", 1).unwrap(), 42);
    }

    #[test]
    fn extract_model_serial_rejects_non_numeric_text() {
        let err = extract_model_serial("MODEL       ab", 2).unwrap_err();
        assert!(matches!(
            err,
            PdbError::Parse {
                line: 2,
                kind: PdbParseErrorKind::InvalidInt { .. },
            }
        ));
    }

    #[test]
    fn extract_model_serial_rejects_missing_field() {
        let err = extract_model_serial("MODEL", 5).unwrap_err();
        assert!(matches!(
            err,
            PdbError::Parse {
                line: 5,
                kind: PdbParseErrorKind::InvalidInt { .. },
            }
        ));
    }
}
