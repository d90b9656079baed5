use crate::core::io::records::ParseMode;
use crate::core::topology::resolver::LinkAtoms;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Options for one graph build: which decoding strategy the coordinate and
/// dictionary files use, and which atom names join consecutive residues.
///
/// The defaults are fixed-column decoding and the peptide backbone connector
/// names. Loading from a TOML file follows the same shape:
///
/// ```toml
/// parse_mode = "fixed-column"
///
/// [link]
/// source = "C"
/// destination = "N"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct BuildConfig {
    pub parse_mode: ParseMode,
    pub link: LinkAtoms,
}

impl BuildConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let config = toml::from_str(&content).map_err(|e| ConfigLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Ok(config)
    }
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}
