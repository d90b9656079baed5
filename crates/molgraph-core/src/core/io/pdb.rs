use crate::core::io::records::{self, AtomKind, BondRecord, ParseMode, StructureRecord};
use crate::core::models::atom::Atom;
use crate::core::models::molecule::Molecule;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// The outcome of one coordinate-file pass: the assembled hierarchy plus the
/// explicit bond records, kept aside for the bond-resolution stage.
#[derive(Debug, Clone, Default)]
pub struct ParsedStructure {
    pub molecule: Molecule,
    pub bond_records: Vec<BondRecord>,
}

/// Parses already-materialized text. Structural defects never fail the pass;
/// defective records are skipped with a diagnostic.
pub fn parse_str(text: &str, mode: ParseMode) -> ParsedStructure {
    let mut structure = ParsedStructure::default();
    for line in text.lines() {
        consume_line(&mut structure, line, mode);
    }
    structure
}

pub fn read_from(reader: &mut impl BufRead, mode: ParseMode) -> Result<ParsedStructure, PdbError> {
    let mut structure = ParsedStructure::default();
    for line_res in reader.lines() {
        let line = line_res?;
        consume_line(&mut structure, &line, mode);
    }
    Ok(structure)
}

pub fn read_from_path<P: AsRef<Path>>(path: P, mode: ParseMode) -> Result<ParsedStructure, PdbError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    read_from(&mut reader, mode)
}

fn consume_line(structure: &mut ParsedStructure, line: &str, mode: ParseMode) {
    match records::parse_structure_record(line, mode) {
        Some(StructureRecord::Atom(record)) => {
            let Some(serial) = record.serial else {
                warn!("atom record with undecodable serial, skipping: '{}'", line.trim_end());
                return;
            };
            let Some(position) = record.position() else {
                warn!("atom record {} with undecodable coordinates, skipping", serial);
                return;
            };
            // Later duplicate serials win.
            structure.molecule.insert_atom(serial, Atom::new(position));

            if record.kind != AtomKind::Polymer {
                return;
            }
            let Some(seq) = record.residue_seq else {
                warn!(
                    "polymer atom record {} with undecodable residue sequence, kept out of the hierarchy",
                    serial
                );
                return;
            };
            let residue = structure.molecule.chain_entry(record.chain_id).residue_entry(seq);
            residue.name = record.residue_name;
            residue.add_atom(&record.name, serial);
        }
        Some(StructureRecord::Bonds(record)) => structure.bond_records.push(record),
        None => {}
    }
}
