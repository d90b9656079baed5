//! # Core Module
//!
//! The stateless foundation of the library: data models for the molecular
//! graph, record-level input decoding, connectivity templates with bond
//! resolution, and the geometric utilities behind normalization.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Atoms, residues, chains,
//!   and the owning molecule arena
//! - **File Decoding** ([`io`]) - Fixed-column and whitespace-tokenized
//!   record parsing for coordinate and dictionary files
//! - **Connectivity** ([`topology`]) - Residue bond templates and the
//!   three-source bond resolver
//! - **Geometry** ([`utils`]) - Bounding boxes and framing extents
//!
//! ## Error Philosophy
//!
//! Per-record and per-bond defects are local: they are skipped with a
//! diagnostic and never abort a build. Only an unreadable input stream or
//! an undecodable configuration file surfaces as an error.

pub mod io;
pub mod models;
pub mod topology;
pub mod utils;
