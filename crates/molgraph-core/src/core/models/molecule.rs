use super::atom::Atom;
use super::chain::Chain;
use crate::core::utils::geometry;
use std::collections::HashMap;

/// Represents a complete molecular graph: atoms, residues, chains, and bonds.
///
/// Two views coexist over the same atoms. The chain hierarchy groups polymer
/// atoms into residues addressed by chain id and sequence number, and a flat
/// identity table maps every atom's serial number (polymer or not) to its
/// stored data. Bond resolution and bounding-box computation work on the flat
/// table; name resolution works through the hierarchy.
#[derive(Debug, Clone, Default)]
pub struct Molecule {
    /// Flat identity table over every atom, keyed by serial number.
    atoms: HashMap<usize, Atom>,
    /// Chains in insertion order.
    chains: Vec<Chain>,
    /// Lookup map from chain identifier to index into `chains`.
    chain_index: HashMap<char, usize>,
}

impl Molecule {
    /// Creates a new, empty molecule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the chain with identifier `id`, creating it on first reference.
    ///
    /// This accessor is idempotent; repeated calls with the same identifier
    /// address the same chain.
    pub fn chain_entry(&mut self, id: char) -> &mut Chain {
        let idx = *self.chain_index.entry(id).or_insert_with(|| {
            let index = self.chains.len();
            self.chains.push(Chain::new(id));
            index
        });
        &mut self.chains[idx]
    }

    /// Looks up a chain by its identifier, without creating it.
    pub fn chain_by_id(&self, id: char) -> Option<&Chain> {
        self.chain_index.get(&id).map(|&idx| &self.chains[idx])
    }

    /// Returns all chains in insertion order.
    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    /// Stores an atom under its serial number.
    ///
    /// A duplicate serial replaces the previously stored atom wholesale,
    /// including its bond list. The later record wins.
    pub fn insert_atom(&mut self, serial: usize, atom: Atom) {
        self.atoms.insert(serial, atom);
    }

    /// Retrieves an immutable reference to an atom by its serial number.
    pub fn atom(&self, serial: usize) -> Option<&Atom> {
        self.atoms.get(&serial)
    }

    /// Retrieves a mutable reference to an atom by its serial number.
    pub fn atom_mut(&mut self, serial: usize) -> Option<&mut Atom> {
        self.atoms.get_mut(&serial)
    }

    /// Returns an iterator over `(serial, &Atom)` pairs in the flat table.
    pub fn atoms_iter(&self) -> impl Iterator<Item = (usize, &Atom)> {
        self.atoms.iter().map(|(&serial, atom)| (serial, atom))
    }

    /// Returns a mutable iterator over `(serial, &mut Atom)` pairs.
    pub fn atoms_iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut Atom)> {
        self.atoms.iter_mut().map(|(&serial, atom)| (serial, atom))
    }

    /// Number of atoms in the flat identity table.
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Translates every atom so the bounding-box midpoint lands on the origin
    /// and returns the box diagonal length as a framing extent.
    ///
    /// An empty molecule is left untouched and reports a zero extent.
    pub fn center_at_origin(&mut self) -> f64 {
        let Some(bbox) = geometry::bounding_box(self.atoms.values().map(|atom| &atom.position))
        else {
            return 0.0;
        };
        let midpoint = bbox.center().coords;
        for atom in self.atoms.values_mut() {
            atom.position -= midpoint;
        }
        bbox.diagonal()
    }
}
