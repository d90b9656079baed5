use super::config::BuildConfig;
use crate::core::io::pdb::{self, ParsedStructure, PdbError};
use crate::core::models::molecule::Molecule;
use crate::core::topology::dictionary::ResidueDictionary;
use crate::core::topology::resolver::BondResolver;
use std::path::Path;
use tracing::debug;

/// The finished hand-off to a rendering collaborator: a fully bonded,
/// origin-centered molecule plus the bounding-box diagonal for camera
/// framing. Consumers draw one primitive per atom and one per bond and
/// receive no further updates until the next full rebuild.
#[derive(Debug, Clone, Default)]
pub struct MolecularGraph {
    pub molecule: Molecule,
    pub extent: f64,
}

/// Builds a complete molecular graph from coordinate text in one pass:
/// parse, resolve bonds from all three sources, and normalize. Structural
/// defects in the text degrade the graph, never the call.
pub fn build_graph(
    text: &str,
    dictionary: &ResidueDictionary,
    config: &BuildConfig,
) -> MolecularGraph {
    finish(pdb::parse_str(text, config.parse_mode), dictionary, config)
}

/// Like [`build_graph`], reading the coordinate file from disk. The only
/// failure is an unreadable stream.
pub fn build_graph_from_path(
    path: impl AsRef<Path>,
    dictionary: &ResidueDictionary,
    config: &BuildConfig,
) -> Result<MolecularGraph, PdbError> {
    let parsed = pdb::read_from_path(path, config.parse_mode)?;
    Ok(finish(parsed, dictionary, config))
}

fn finish(
    parsed: ParsedStructure,
    dictionary: &ResidueDictionary,
    config: &BuildConfig,
) -> MolecularGraph {
    let ParsedStructure {
        mut molecule,
        bond_records,
    } = parsed;

    let resolver = BondResolver::new(dictionary, &config.link);
    resolver.resolve(&mut molecule, &bond_records);

    let extent = molecule.center_at_origin();
    debug!(
        "built molecular graph: {} atoms in {} chains, extent {:.3}",
        molecule.atom_count(),
        molecule.chains().len(),
        extent
    );
    MolecularGraph { molecule, extent }
}

/// Owns the long-lived build inputs and the current graph.
///
/// Each update constructs a complete new graph and replaces the previous one
/// wholesale; a graph under construction is never observable. Updates are
/// serialized by `&mut self` exclusivity.
#[derive(Debug, Default)]
pub struct GraphSession {
    dictionary: ResidueDictionary,
    config: BuildConfig,
    current: Option<MolecularGraph>,
}

impl GraphSession {
    pub fn new(dictionary: ResidueDictionary, config: BuildConfig) -> Self {
        Self {
            dictionary,
            config,
            current: None,
        }
    }

    pub fn dictionary(&self) -> &ResidueDictionary {
        &self.dictionary
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Rebuilds from `text` and replaces the current graph.
    pub fn update(&mut self, text: &str) -> &MolecularGraph {
        let graph = build_graph(text, &self.dictionary, &self.config);
        self.current.insert(graph)
    }

    pub fn current(&self) -> Option<&MolecularGraph> {
        self.current.as_ref()
    }
}
