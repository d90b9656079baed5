use super::residue::Residue;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub id: char,                         // Chain identifier (e.g., 'A', 'B')
    residues: Vec<Residue>,               // Residues in insertion order
    residue_index: HashMap<isize, usize>, // Map from sequence number to index into `residues`
}

impl Chain {
    pub(crate) fn new(id: char) -> Self {
        Self {
            id,
            residues: Vec::new(),
            residue_index: HashMap::new(),
        }
    }

    /// Returns the residue at `seq`, creating an empty one on first reference.
    ///
    /// Repeated calls with the same sequence number address the same entry.
    pub fn residue_entry(&mut self, seq: isize) -> &mut Residue {
        let idx = *self.residue_index.entry(seq).or_insert_with(|| {
            let index = self.residues.len();
            self.residues.push(Residue::new(seq));
            index
        });
        &mut self.residues[idx]
    }

    /// Looks up a residue by its sequence number, without creating it.
    pub fn residue_by_seq(&self, seq: isize) -> Option<&Residue> {
        self.residue_index.get(&seq).map(|&idx| &self.residues[idx])
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residue_entry_creates_on_first_reference() {
        let mut chain = Chain::new('A');
        assert!(chain.residue_by_seq(1).is_none());

        chain.residue_entry(1).name = "GLY".to_string();
        assert_eq!(chain.residue_by_seq(1).unwrap().name, "GLY");
        assert_eq!(chain.residues().len(), 1);
    }

    #[test]
    fn residue_entry_is_idempotent() {
        let mut chain = Chain::new('A');
        chain.residue_entry(3).add_atom("CA", 17);
        chain.residue_entry(3).name = "ALA".to_string();

        assert_eq!(chain.residues().len(), 1);
        let residue = chain.residue_by_seq(3).unwrap();
        assert_eq!(residue.name, "ALA");
        assert_eq!(residue.atom_id("CA"), Some(17));
    }

    #[test]
    fn residues_preserve_insertion_order() {
        let mut chain = Chain::new('B');
        chain.residue_entry(5);
        chain.residue_entry(2);
        chain.residue_entry(9);

        let seqs: Vec<isize> = chain.residues().iter().map(|r| r.seq).collect();
        assert_eq!(seqs, vec![5, 2, 9]);
    }

    #[test]
    fn residue_by_seq_uses_sequence_numbers_not_positions() {
        let mut chain = Chain::new('C');
        chain.residue_entry(100);
        chain.residue_entry(1);

        assert_eq!(chain.residue_by_seq(100).unwrap().seq, 100);
        assert_eq!(chain.residue_by_seq(1).unwrap().seq, 1);
        assert!(chain.residue_by_seq(0).is_none());
    }
}
