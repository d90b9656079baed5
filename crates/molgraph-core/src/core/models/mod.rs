//! # Core Models Module
//!
//! This module contains the fundamental data structures used to represent a
//! molecular graph, providing the foundation for parsing, bond resolution,
//! and normalization.
//!
//! ## Overview
//!
//! Two complementary views cover the same set of atoms:
//!
//! - **The chain hierarchy** - chains hold residues addressed by sequence
//!   number, and residues map trimmed atom names to atom identities. Only
//!   polymer atoms live here.
//! - **The flat identity table** - every atom, polymer or not, is stored
//!   under its serial number with its position and bond list.
//!
//! Hierarchy construction goes exclusively through the idempotent
//! get-or-create accessors, so the same keys always address the same
//! entries within a build pass. Duplicate serials and duplicate atom names
//! overwrite earlier state by design; the later record wins.
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom with coordinates and outgoing bond list
//! - [`residue`] - Named residue with its atom-name lookup table
//! - [`chain`] - Residue collection addressed by sequence number
//! - [`molecule`] - The owning arena tying both views together

pub mod atom;
pub mod chain;
pub mod molecule;
pub mod residue;
