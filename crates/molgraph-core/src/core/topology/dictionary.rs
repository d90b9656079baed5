use crate::core::io::records::{self, DictionaryRecord, ParseMode};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Known intra-residue bonds for one residue type, independent of any
/// molecule instance. Destinations are a set, so duplicate pairs collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BondTemplate {
    bonds: HashMap<String, BTreeSet<String>>,
}

impl BondTemplate {
    pub fn add(&mut self, source: &str, destination: &str) {
        self.bonds
            .entry(source.to_string())
            .or_default()
            .insert(destination.to_string());
    }

    pub fn destinations(&self, source: &str) -> Option<&BTreeSet<String>> {
        self.bonds.get(source)
    }

    pub fn bonds(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.bonds.iter().map(|(source, dests)| (source.as_str(), dests))
    }

    pub fn is_empty(&self) -> bool {
        self.bonds.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum DictionaryLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Connectivity templates keyed by residue type name, parsed from a
/// line-oriented dictionary where residue-context records scope the bond
/// records that follow them.
#[derive(Debug, Clone, Default)]
pub struct ResidueDictionary {
    templates: HashMap<String, BondTemplate>,
}

impl ResidueDictionary {
    /// Parses dictionary text. Defective lines are skipped with a
    /// diagnostic; parsing itself never fails.
    pub fn parse(text: &str, mode: ParseMode) -> Self {
        let mut dictionary = Self::default();
        let mut context: Option<String> = None;

        for line in text.lines() {
            match records::parse_dictionary_record(line, mode) {
                Some(DictionaryRecord::ResidueContext(name)) => {
                    // Declared types get a template even if no bonds follow.
                    dictionary.templates.entry(name.clone()).or_default();
                    context = Some(name);
                }
                Some(DictionaryRecord::Bonds(record)) => {
                    let Some(residue_type) = context.as_deref() else {
                        warn!(
                            "dictionary bond record before any residue context, skipping: '{}'",
                            line.trim_end()
                        );
                        continue;
                    };
                    dictionary.add_bonds(
                        residue_type,
                        &record.source,
                        record.destinations.iter().map(String::as_str),
                    );
                }
                None => {}
            }
        }
        dictionary
    }

    pub fn load(path: &Path, mode: ParseMode) -> Result<Self, DictionaryLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| DictionaryLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Ok(Self::parse(&content, mode))
    }

    /// Records each (source, destination) pair for `residue_type`,
    /// discarding empty destination tokens.
    pub fn add_bonds<'a>(
        &mut self,
        residue_type: &str,
        source: &str,
        destinations: impl IntoIterator<Item = &'a str>,
    ) {
        if source.is_empty() {
            warn!("dictionary bond record for '{}' with empty source atom name, skipping", residue_type);
            return;
        }
        let template = self.templates.entry(residue_type.to_string()).or_default();
        for destination in destinations {
            let destination = destination.trim();
            if destination.is_empty() {
                continue;
            }
            template.add(source, destination);
        }
    }

    /// Returns the template for `residue_type`, if one was declared.
    pub fn lookup(&self, residue_type: &str) -> Option<&BondTemplate> {
        self.templates.get(residue_type)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DICT: &str = "\
RESIDUE   ALA     13
CONECT      N      3 CA   H    H2
CONECT      CA     4 N    C    CB   HA
RESIDUE   GLY      7
CONECT      N      2 CA   H
";

    #[test]
    fn bond_records_attach_to_the_current_context() {
        let dictionary = ResidueDictionary::parse(DICT, ParseMode::FixedColumn);
        assert_eq!(dictionary.len(), 2);

        let ala = dictionary.lookup("ALA").unwrap();
        let ca_dests = ala.destinations("CA").unwrap();
        assert!(ca_dests.contains("CB"));
        assert!(ca_dests.contains("N"));

        let gly = dictionary.lookup("GLY").unwrap();
        assert!(gly.destinations("CA").is_none());
        assert!(gly.destinations("N").unwrap().contains("CA"));
    }

    #[test]
    fn lookup_of_undeclared_type_is_none() {
        let dictionary = ResidueDictionary::parse(DICT, ParseMode::FixedColumn);
        assert!(dictionary.lookup("TRP").is_none());
    }

    #[test]
    fn duplicate_pairs_collapse() {
        let mut dictionary = ResidueDictionary::default();
        dictionary.add_bonds("ALA", "CA", ["CB", "CB", "N"]);
        dictionary.add_bonds("ALA", "CA", ["CB"]);

        let dests = dictionary.lookup("ALA").unwrap().destinations("CA").unwrap();
        assert_eq!(dests.len(), 2);
    }

    #[test]
    fn empty_destination_tokens_are_discarded() {
        let mut dictionary = ResidueDictionary::default();
        dictionary.add_bonds("ALA", "CA", ["", "  ", "CB"]);

        let dests = dictionary.lookup("ALA").unwrap().destinations("CA").unwrap();
        assert_eq!(dests.len(), 1);
        assert!(dests.contains("CB"));
    }

    #[test]
    fn bond_record_before_any_context_is_skipped() {
        let text = "CONECT      CA     1 CB\n";
        let dictionary = ResidueDictionary::parse(text, ParseMode::FixedColumn);
        assert!(dictionary.is_empty());
    }

    #[test]
    fn declared_type_without_bonds_has_an_empty_template() {
        let text = "RESIDUE   HOH      1\n";
        let dictionary = ResidueDictionary::parse(text, ParseMode::FixedColumn);
        assert!(dictionary.lookup("HOH").unwrap().is_empty());
    }

    #[test]
    fn load_reads_a_dictionary_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DICT.as_bytes()).unwrap();

        let dictionary = ResidueDictionary::load(file.path(), ParseMode::FixedColumn).unwrap();
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn load_reports_missing_files_with_path_context() {
        let err =
            ResidueDictionary::load(Path::new("/nonexistent/dict.txt"), ParseMode::FixedColumn)
                .unwrap_err();
        let DictionaryLoadError::Io { path, .. } = err;
        assert!(path.contains("nonexistent"));
    }
}
