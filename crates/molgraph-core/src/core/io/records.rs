use nalgebra::Point3;
use serde::Deserialize;

/// Line decoding strategy.
///
/// Both strategies yield the same record shapes. A single parse must use
/// exactly one of them; the choice is made explicitly per input source and
/// never auto-detected, since whitespace splitting silently misaligns on
/// files with embedded spaces in name fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParseMode {
    /// Decode fields from the format's fixed column ranges.
    #[default]
    FixedColumn,
    /// Split the line on runs of whitespace and read fixed token positions.
    Whitespace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtomKind {
    /// An `ATOM` record, part of the polymer and of the chain hierarchy.
    Polymer,
    /// A `HETATM` record; bypasses the hierarchy, joins the flat atom table.
    Hetero,
}

/// Decoded atom coordinate record.
///
/// Numeric fields hold `None` when their substring failed to decode; callers
/// must check before use instead of assuming a silent zero.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    pub kind: AtomKind,
    pub serial: Option<usize>,
    pub name: String,
    pub residue_name: String,
    pub chain_id: char,
    pub residue_seq: Option<isize>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl AtomRecord {
    /// The position, if all three coordinates decoded.
    pub fn position(&self) -> Option<Point3<f64>> {
        Some(Point3::new(self.x?, self.y?, self.z?))
    }
}

/// Decoded explicit bond record. Destination slots that were blank or
/// unparseable are dropped; at most four survive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BondRecord {
    pub source: Option<usize>,
    pub destinations: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StructureRecord {
    Atom(AtomRecord),
    Bonds(BondRecord),
}

/// Decoded dictionary bond record: one source atom name and the destination
/// names it bonds to within the current residue-type context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateBondRecord {
    pub source: String,
    pub destinations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryRecord {
    /// Declares the residue type that subsequent bond records apply to.
    ResidueContext(String),
    Bonds(TemplateBondRecord),
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

/// Classifies one coordinate-file line and decodes its fields.
///
/// Unrecognized leading tokens yield `None`; they are ignored, not errors.
pub fn parse_structure_record(line: &str, mode: ParseMode) -> Option<StructureRecord> {
    match mode {
        ParseMode::FixedColumn => parse_structure_fixed(line),
        ParseMode::Whitespace => parse_structure_tokens(line),
    }
}

fn parse_structure_fixed(line: &str) -> Option<StructureRecord> {
    let record_type = slice_and_trim(line, 0, 6);
    match record_type {
        "ATOM" | "HETATM" => {
            let kind = if record_type == "ATOM" {
                AtomKind::Polymer
            } else {
                AtomKind::Hetero
            };
            Some(StructureRecord::Atom(AtomRecord {
                kind,
                serial: slice_and_trim(line, 6, 11).parse().ok(),
                name: slice_and_trim(line, 12, 16).to_string(),
                residue_name: slice_and_trim(line, 17, 20).to_string(),
                chain_id: slice_and_trim(line, 21, 22).chars().next().unwrap_or(' '),
                residue_seq: slice_and_trim(line, 22, 26).parse().ok(),
                x: slice_and_trim(line, 30, 38).parse().ok(),
                y: slice_and_trim(line, 38, 46).parse().ok(),
                z: slice_and_trim(line, 46, 54).parse().ok(),
            }))
        }
        "CONECT" => {
            const DEST_COLUMNS: [(usize, usize); 4] = [(11, 16), (16, 21), (21, 26), (26, 31)];
            let destinations = DEST_COLUMNS
                .iter()
                .filter_map(|&(start, end)| slice_and_trim(line, start, end).parse().ok())
                .collect();
            Some(StructureRecord::Bonds(BondRecord {
                source: slice_and_trim(line, 6, 11).parse().ok(),
                destinations,
            }))
        }
        _ => None,
    }
}

fn parse_structure_tokens(line: &str) -> Option<StructureRecord> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let token = |idx: usize| tokens.get(idx).copied().unwrap_or("");
    match tokens.first().copied() {
        Some("ATOM") | Some("HETATM") => {
            let kind = if tokens[0] == "ATOM" {
                AtomKind::Polymer
            } else {
                AtomKind::Hetero
            };
            Some(StructureRecord::Atom(AtomRecord {
                kind,
                serial: token(1).parse().ok(),
                name: token(2).to_string(),
                residue_name: token(3).to_string(),
                chain_id: token(4).chars().next().unwrap_or(' '),
                residue_seq: token(5).parse().ok(),
                x: token(6).parse().ok(),
                y: token(7).parse().ok(),
                z: token(8).parse().ok(),
            }))
        }
        Some("CONECT") => Some(StructureRecord::Bonds(BondRecord {
            source: token(1).parse().ok(),
            destinations: tokens
                .iter()
                .skip(2)
                .take(4)
                .filter_map(|t| t.parse().ok())
                .collect(),
        })),
        _ => None,
    }
}

/// Classifies one dictionary-file line and decodes its fields.
///
/// The dictionary reuses the `CONECT` token with its own layout, which is why
/// dictionary lines have their own entry point.
pub fn parse_dictionary_record(line: &str, mode: ParseMode) -> Option<DictionaryRecord> {
    match mode {
        ParseMode::FixedColumn => parse_dictionary_fixed(line),
        ParseMode::Whitespace => parse_dictionary_tokens(line),
    }
}

fn parse_dictionary_fixed(line: &str) -> Option<DictionaryRecord> {
    match slice_and_trim(line, 0, 7) {
        "RESIDUE" => {
            let name = slice_and_trim(line, 10, 14);
            if name.is_empty() {
                return None;
            }
            Some(DictionaryRecord::ResidueContext(name.to_string()))
        }
        "CONECT" => Some(DictionaryRecord::Bonds(TemplateBondRecord {
            source: slice_and_trim(line, 12, 17).to_string(),
            destinations: line
                .get(21..)
                .unwrap_or("")
                .split_whitespace()
                .map(str::to_string)
                .collect(),
        })),
        _ => None,
    }
}

fn parse_dictionary_tokens(line: &str) -> Option<DictionaryRecord> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.first().copied() {
        Some("RESIDUE") => tokens
            .get(1)
            .map(|name| DictionaryRecord::ResidueContext(name.to_string())),
        Some("CONECT") => Some(DictionaryRecord::Bonds(TemplateBondRecord {
            source: tokens.get(1).copied().unwrap_or("").to_string(),
            // Token 2 is the format's bond-count column, not an atom name.
            destinations: tokens.iter().skip(3).map(|t| t.to_string()).collect(),
        })),
        _ => None,
    }
}
