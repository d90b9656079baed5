use super::dictionary::ResidueDictionary;
use crate::core::io::records::BondRecord;
use crate::core::models::molecule::Molecule;
use serde::Deserialize;
use tracing::warn;

/// Atom names used to join consecutive residues of a chain.
///
/// The predecessor residue contributes `source` (a carbonyl-carbon analogue)
/// and the successor contributes `destination` (an amide-nitrogen analogue).
/// Junctions are inferred from sequence numbers only; the pairing is not
/// validated against actual chemistry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LinkAtoms {
    pub source: String,
    pub destination: String,
}

impl Default for LinkAtoms {
    fn default() -> Self {
        Self {
            source: "C".to_string(),
            destination: "N".to_string(),
        }
    }
}

/// Merges the three bond sources into the per-atom bond lists.
///
/// Each pass only appends, so the passes are order-insensitive with respect
/// to the final bond multiset. No deduplication is performed beyond what the
/// dictionary's set semantics already provide.
pub struct BondResolver<'a> {
    dictionary: &'a ResidueDictionary,
    link: &'a LinkAtoms,
}

impl<'a> BondResolver<'a> {
    pub fn new(dictionary: &'a ResidueDictionary, link: &'a LinkAtoms) -> Self {
        Self { dictionary, link }
    }

    /// Runs all three passes over the molecule.
    pub fn resolve(&self, molecule: &mut Molecule, explicit: &[BondRecord]) {
        self.apply_explicit_bonds(molecule, explicit);
        self.apply_template_bonds(molecule);
        self.apply_link_bonds(molecule);
    }

    /// Appends each decoded destination of every explicit bond record to its
    /// source atom. An unknown or undecodable source skips the whole record
    /// with a diagnostic; destinations are not checked against the atom
    /// table, so bond lists may reference absent identities.
    pub fn apply_explicit_bonds(&self, molecule: &mut Molecule, records: &[BondRecord]) {
        for record in records {
            let Some(source) = record.source else {
                warn!("explicit bond record with undecodable source serial, skipping");
                continue;
            };
            let Some(atom) = molecule.atom_mut(source) else {
                warn!("explicit bond source serial {} not in atom table, skipping record", source);
                continue;
            };
            atom.bonds.extend(record.destinations.iter().copied());
        }
    }

    /// Resolves each residue's template bonds through its atom-name map.
    /// Residues without a template, and names that do not resolve, are
    /// skipped with a diagnostic; a missing destination never aborts the
    /// rest of its residue.
    pub fn apply_template_bonds(&self, molecule: &mut Molecule) {
        let mut pending: Vec<(usize, usize)> = Vec::new();

        for chain in molecule.chains() {
            for residue in chain.residues() {
                let Some(template) = self.dictionary.lookup(&residue.name) else {
                    warn!(
                        "unknown residue type '{}' (chain {} seq {}), skipping template bonds",
                        residue.name, chain.id, residue.seq
                    );
                    continue;
                };
                for (source_name, destinations) in template.bonds() {
                    let Some(source) = residue.atom_id(source_name) else {
                        warn!(
                            "template source atom '{}' absent from {} {} in chain {}, skipping",
                            source_name, residue.name, residue.seq, chain.id
                        );
                        continue;
                    };
                    for destination_name in destinations {
                        match residue.atom_id(destination_name) {
                            Some(destination) => pending.push((source, destination)),
                            None => warn!(
                                "template destination atom '{}' absent from {} {} in chain {}, skipping",
                                destination_name, residue.name, residue.seq, chain.id
                            ),
                        }
                    }
                }
            }
        }

        for (source, destination) in pending {
            if let Some(atom) = molecule.atom_mut(source) {
                atom.bonds.push(destination);
            }
        }
    }

    /// Joins residue N−1 to residue N within each chain through the
    /// configured link atoms. The predecessor is found by an explicit
    /// sequence-number lookup, never by iteration order, so gaps in the
    /// numbering simply produce no junction. Missing link atoms skip the
    /// junction silently.
    pub fn apply_link_bonds(&self, molecule: &mut Molecule) {
        let mut pending: Vec<(usize, usize)> = Vec::new();

        for chain in molecule.chains() {
            for residue in chain.residues() {
                let Some(previous) = chain.residue_by_seq(residue.seq - 1) else {
                    continue;
                };
                let (Some(source), Some(destination)) = (
                    previous.atom_id(&self.link.source),
                    residue.atom_id(&self.link.destination),
                ) else {
                    continue;
                };
                pending.push((source, destination));
            }
        }

        for (source, destination) in pending {
            if let Some(atom) = molecule.atom_mut(source) {
                atom.bonds.push(destination);
            }
        }
    }
}
