//! Connectivity knowledge and bond resolution.
//!
//! The dictionary holds reusable, molecule-independent bond templates keyed
//! by residue type. The resolver merges three independent bond sources into
//! the per-atom bond lists: explicit records from the coordinate file,
//! template bonds resolved through each residue's atom-name map, and
//! sequence-inferred junctions between consecutive residues of a chain.

pub mod dictionary;
pub mod resolver;
